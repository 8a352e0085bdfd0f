use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::accounts::Metadata;
use anchor_spl::token::spl_token::state::{Account as SplTokenAccount, Mint as SplMint};
use intersolar_type_mapper::{create_type_mapper_address, IntersolarTypeMapper};

use crate::errors::IntersolarError;

// =============================================================================
// CROSS-ACCOUNT CHECKS
// =============================================================================
//
// Each check reads state that another program owns (the type mapper, the SPL
// token program, the token metadata program) and is evaluated fresh inside
// the instruction that depends on it. Nothing here is cached on our records.
// =============================================================================

/// The fields of a token metadata account the registry cares about.
#[derive(Clone, Copy, Debug)]
pub struct MetadataRef<'a> {
    pub mint: &'a Pubkey,
    pub update_authority: &'a Pubkey,
    pub symbol: &'a str,
}

impl<'a> From<&'a Metadata> for MetadataRef<'a> {
    fn from(metadata: &'a Metadata) -> Self {
        Self {
            mint: &metadata.mint,
            update_authority: &metadata.update_authority,
            symbol: &metadata.symbol,
        }
    }
}

/// The supplied type mapper must live at the address derived from
/// `(symbol, authority)` and must record that same symbol and authority.
pub fn assert_type_mapper(
    type_mapper_key: &Pubkey,
    type_mapper: &IntersolarTypeMapper,
    symbol: &str,
    authority: &Pubkey,
) -> Result<()> {
    let expected = create_type_mapper_address(symbol, authority, type_mapper.bump)
        .ok_or(IntersolarError::TypeMapperMismatch)?;

    require_keys_eq!(*type_mapper_key, expected, IntersolarError::TypeMapperMismatch);
    require!(
        type_mapper.symbol == symbol && type_mapper.authority == *authority,
        IntersolarError::TypeMapperMismatch
    );

    Ok(())
}

/// Only single-supply, zero-decimal mints get a record.
pub fn assert_nft(mint: &SplMint) -> Result<()> {
    require!(mint.decimals == 0 && mint.supply == 1, IntersolarError::NotNft);
    Ok(())
}

pub fn assert_metadata(
    metadata: MetadataRef,
    mint: &Pubkey,
    authority: &Pubkey,
    symbol: &str,
) -> Result<()> {
    require_keys_eq!(*metadata.mint, *mint, IntersolarError::MintMismatch);
    require_keys_eq!(
        *metadata.update_authority,
        *authority,
        IntersolarError::UpdateAuthorityMismatch
    );

    // Metadata strings are stored NUL-padded to their maximum length
    let metadata_symbol = metadata.symbol.trim_end_matches(char::from(0));
    require!(metadata_symbol == symbol, IntersolarError::MetadataSymbolMismatch);

    Ok(())
}

/// Everything `initialize` reads besides its own record.
#[derive(Clone, Copy)]
pub struct InitializeAccounts<'a> {
    pub type_mapper_key: &'a Pubkey,
    pub type_mapper: &'a IntersolarTypeMapper,
    pub authority: &'a Pubkey,
    pub holder: &'a Pubkey,
    pub mint_key: &'a Pubkey,
    pub mint: &'a SplMint,
    pub holder_token_account: &'a SplTokenAccount,
    pub metadata: MetadataRef<'a>,
}

/// Run every `initialize` check in order and return the classification the
/// new record inherits from the type mapper.
pub fn check_initialize(accounts: &InitializeAccounts, symbol: &str) -> Result<u8> {
    assert_type_mapper(
        accounts.type_mapper_key,
        accounts.type_mapper,
        symbol,
        accounts.authority,
    )?;
    assert_nft(accounts.mint)?;
    assert_metadata(accounts.metadata, accounts.mint_key, accounts.authority, symbol)?;
    assert_holder(accounts.holder_token_account, accounts.holder, accounts.mint_key)?;

    Ok(accounts.type_mapper.classification)
}

/// `holder` proves ownership of `mint` through a token account it owns that
/// carries a non-zero balance. Read at execution time, so the capability
/// follows the NFT across transfers.
pub fn assert_holder(token_account: &SplTokenAccount, holder: &Pubkey, mint: &Pubkey) -> Result<()> {
    require_keys_eq!(token_account.mint, *mint, IntersolarError::MintMismatch);
    require_keys_eq!(token_account.owner, *holder, IntersolarError::Unauthorized);
    require!(token_account.amount > 0, IntersolarError::Unauthorized);
    Ok(())
}
