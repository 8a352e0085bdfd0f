use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

pub use state::*;

declare_id!("AFHZsWfmh3Sniboau828Gaf3xdCmB4Vk6djeu41dRwsy");

#[program]
pub mod intersolar_type_mapper {
    use super::*;

    /// Bind `symbol` to `classification` under the signing authority.
    ///
    /// The record lives at `[TYPE_MAPPER_SEED, symbol, authority]` and can be
    /// written exactly once; there is no update or close instruction.
    pub fn initialize(
        ctx: Context<Initialize>,
        bump: u8,
        symbol: String,
        classification: u8,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, bump, symbol, classification)
    }
}
