use anchor_lang::prelude::*;
use anchor_spl::metadata::MetadataAccount;
use anchor_spl::token::{Mint, TokenAccount};
use intersolar_type_mapper::program::IntersolarTypeMapper as IntersolarTypeMapperProgram;
use intersolar_type_mapper::IntersolarTypeMapper;

use crate::state::{Intersolar, INTERSOLAR_SEED};
use crate::utils::{InitializeAccounts, MetadataRef};

// =============================================================================
// INITIALIZE
// =============================================================================
//
// Two signers: the authority that owns both the type mapper entry and the
// NFT's metadata, and the holder that owns the NFT itself and pays rent.
// The record starts unnamed; the holder names it with `rename`.
// =============================================================================

#[derive(Accounts)]
#[instruction(bump: u8, symbol: String)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = holder,
        space = Intersolar::SIZE,
        seeds = [INTERSOLAR_SEED, mint.key().as_ref()],
        bump = bump,
    )]
    pub intersolar: Account<'info, Intersolar>,

    /// Must be the record derived from `(symbol, authority)`; checked in handler
    pub type_mapper: Account<'info, IntersolarTypeMapper>,

    /// Update authority of the metadata and owner of the type mapper entry
    pub authority: Signer<'info>,

    #[account(mut)]
    pub holder: Signer<'info>,

    pub mint: Account<'info, Mint>,

    pub holder_token_account: Account<'info, TokenAccount>,

    pub metadata: Account<'info, MetadataAccount>,

    pub type_mapper_program: Program<'info, IntersolarTypeMapperProgram>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, bump: u8, symbol: String) -> Result<()> {
    let accounts = ctx.accounts;
    let type_mapper_key = accounts.type_mapper.key();
    let authority = accounts.authority.key();
    let holder = accounts.holder.key();
    let mint = accounts.mint.key();

    let checked = InitializeAccounts {
        type_mapper_key: &type_mapper_key,
        type_mapper: &accounts.type_mapper,
        authority: &authority,
        holder: &holder,
        mint_key: &mint,
        mint: &accounts.mint,
        holder_token_account: &accounts.holder_token_account,
        metadata: MetadataRef::from(&**accounts.metadata),
    };

    let intersolar = &mut accounts.intersolar;
    intersolar.initialize(&checked, &symbol, bump)?;

    msg!(
        "Initialized intersolar {} for mint {} (symbol: {}, classification: {}, holder: {})",
        intersolar.key(),
        mint,
        symbol,
        intersolar.classification,
        holder
    );

    Ok(())
}
