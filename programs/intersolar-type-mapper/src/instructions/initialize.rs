use anchor_lang::prelude::*;
use crate::state::{IntersolarTypeMapper, TYPE_MAPPER_SEED};

#[derive(Accounts)]
#[instruction(bump: u8, symbol: String)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = IntersolarTypeMapper::SIZE,
        seeds = [TYPE_MAPPER_SEED, symbol.as_bytes(), authority.key().as_ref()],
        bump = bump,
    )]
    pub type_mapper: Account<'info, IntersolarTypeMapper>,

    /// Owner of the classification; pays for the record
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    bump: u8,
    symbol: String,
    classification: u8,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let type_mapper = &mut ctx.accounts.type_mapper;

    type_mapper.initialize(&symbol, classification, authority, bump)?;

    msg!(
        "Mapped symbol '{}' to classification {} for authority {} at {}",
        symbol,
        classification,
        authority,
        type_mapper.key()
    );

    Ok(())
}
