use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

pub use state::*;

declare_id!("FkXU39AJNQLiEdMBvHWkbzEraEW9Jry8ftgT56dY3mG8");

#[program]
pub mod intersolar {
    use super::*;

    // === Registration ===

    /// Create the name record for an NFT mint.
    ///
    /// The declared symbol must resolve, together with the signing authority,
    /// to an existing type mapper record, and must match the symbol stored in
    /// the mint's token metadata. The signing holder must own the NFT.
    pub fn initialize(ctx: Context<Initialize>, bump: u8, symbol: String) -> Result<()> {
        instructions::initialize::handler(ctx, bump, symbol)
    }

    // === Naming ===

    /// Rename the record. Whoever currently holds the NFT may call this.
    pub fn rename(ctx: Context<Rename>, name: String) -> Result<()> {
        instructions::rename::handler(ctx, name)
    }
}
