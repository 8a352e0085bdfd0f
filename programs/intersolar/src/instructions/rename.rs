use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::state::{Intersolar, INTERSOLAR_SEED};

#[derive(Accounts)]
pub struct Rename<'info> {
    #[account(
        mut,
        seeds = [INTERSOLAR_SEED, mint.key().as_ref()],
        bump = intersolar.bump,
    )]
    pub intersolar: Account<'info, Intersolar>,

    /// Current holder of the NFT; need not be the holder that initialized
    pub holder: Signer<'info>,

    pub mint: Account<'info, Mint>,

    pub holder_token_account: Account<'info, TokenAccount>,
}

pub fn handler(ctx: Context<Rename>, name: String) -> Result<()> {
    let accounts = ctx.accounts;
    let holder = accounts.holder.key();

    let intersolar = &mut accounts.intersolar;
    intersolar.rename(&accounts.holder_token_account, holder, name)?;

    msg!(
        "Renamed intersolar {} to '{}' (holder: {})",
        intersolar.key(),
        intersolar.name,
        holder
    );

    Ok(())
}
