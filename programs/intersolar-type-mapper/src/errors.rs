use anchor_lang::prelude::*;

#[error_code]
pub enum TypeMapperError {
    #[msg("Symbol must not be empty")]
    EmptySymbol,

    #[msg("Symbol is too long: must be at most 10 bytes")]
    SymbolTooLong,
}
