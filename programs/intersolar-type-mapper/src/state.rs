use anchor_lang::prelude::*;
use crate::errors::TypeMapperError;

// =============================================================================
// TYPE MAPPER STATE
// =============================================================================
//
// One record per (symbol, authority). The authority decides which numeric
// category its symbol belongs to (e.g. 7 for "PLANET"); other programs look
// the record up by re-deriving its address rather than trusting a stored key.
// =============================================================================

/// Seed prefix shared by every type mapper address
pub const TYPE_MAPPER_SEED: &[u8] = b"intersolar-type-mapper";

/// Upper bound on symbol bytes, matching the token metadata symbol limit
pub const MAX_SYMBOL_LENGTH: usize = 10;

#[account]
pub struct IntersolarTypeMapper {
    /// Symbol this record classifies (1-10 bytes)
    pub symbol: String,
    /// Category assigned by the authority
    pub classification: u8,
    /// Authority that created the record
    pub authority: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

impl IntersolarTypeMapper {
    pub const SIZE: usize = 8 +     // discriminator
        4 + MAX_SYMBOL_LENGTH +      // symbol (borsh u32 length + bytes)
        1 +                          // classification
        32 +                         // authority
        1;                           // bump
    // Total: 56 bytes

    /// Populate a freshly allocated record.
    pub fn initialize(
        &mut self,
        symbol: &str,
        classification: u8,
        authority: Pubkey,
        bump: u8,
    ) -> Result<()> {
        validate_symbol(symbol)?;

        self.symbol = symbol.to_owned();
        self.classification = classification;
        self.authority = authority;
        self.bump = bump;

        Ok(())
    }
}

pub fn validate_symbol(symbol: &str) -> Result<()> {
    require!(!symbol.is_empty(), TypeMapperError::EmptySymbol);
    require!(
        symbol.len() <= MAX_SYMBOL_LENGTH,
        TypeMapperError::SymbolTooLong
    );
    Ok(())
}

/// Canonical type mapper address and bump for `(symbol, authority)`.
///
/// Returns `None` when the symbol cannot be used as a seed (over 32 bytes).
pub fn find_type_mapper_address(symbol: &str, authority: &Pubkey) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[TYPE_MAPPER_SEED, symbol.as_bytes(), authority.as_ref()],
        &crate::ID,
    )
}

/// Re-derive a type mapper address from a known bump, skipping the search.
///
/// Returns `None` when the seeds and bump land on the curve, i.e. when no
/// type mapper can exist for this combination.
pub fn create_type_mapper_address(symbol: &str, authority: &Pubkey, bump: u8) -> Option<Pubkey> {
    Pubkey::create_program_address(
        &[TYPE_MAPPER_SEED, symbol.as_bytes(), authority.as_ref(), &[bump]],
        &crate::ID,
    )
    .ok()
}
