use anchor_lang::prelude::*;

#[error_code]
pub enum IntersolarError {
    #[msg("Type mapper mismatch: account is not derived from the given symbol and authority")]
    TypeMapperMismatch,

    #[msg("Symbol does not match the token metadata symbol")]
    MetadataSymbolMismatch,

    #[msg("Name is too long: must be at most 32 bytes")]
    NameTooLong,

    #[msg("Unauthorized: signer does not hold the NFT")]
    Unauthorized,

    #[msg("Mint mismatch")]
    MintMismatch,

    #[msg("Update authority mismatch: signer is not the metadata update authority")]
    UpdateAuthorityMismatch,

    #[msg("The given mint is not an NFT")]
    NotNft,
}
