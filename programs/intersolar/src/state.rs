use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::state::Account as SplTokenAccount;

use crate::errors::IntersolarError;
use crate::utils::{assert_holder, check_initialize, InitializeAccounts};

/// Seed prefix for intersolar record addresses
pub const INTERSOLAR_SEED: &[u8] = b"intersolar";

/// Maximum name length in bytes
pub const MAX_NAME_LENGTH: usize = 32;

/// Mutable name attached to an NFT mint.
///
/// The name is stored as a borsh string (u32 length prefix followed by the
/// bytes), and the account reserves room for exactly `MAX_NAME_LENGTH` bytes.
#[account]
pub struct Intersolar {
    /// The NFT mint this record belongs to
    pub mint: Pubkey,
    /// Category copied from the type mapper at creation (e.g. 7 for "PLANET")
    pub classification: u8,
    /// Current name, empty until the first rename
    pub name: String,
    /// Holder that last initialized or renamed the record
    pub holder: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

impl Intersolar {
    pub const SIZE: usize = 8 +     // discriminator
        32 +                         // mint
        1 +                          // classification
        4 + MAX_NAME_LENGTH +        // name
        32 +                         // holder
        1;                           // bump
    // Total: 110 bytes

    /// Check the accounts `initialize` was given and populate the record.
    /// Nothing is written unless every check passes.
    pub fn initialize(
        &mut self,
        accounts: &InitializeAccounts,
        symbol: &str,
        bump: u8,
    ) -> Result<()> {
        let classification = check_initialize(accounts, symbol)?;
        self.write(*accounts.mint_key, classification, *accounts.holder, bump);
        Ok(())
    }

    /// Overwrite the name on behalf of whoever holds the mint right now.
    pub fn rename(
        &mut self,
        holder_token_account: &SplTokenAccount,
        holder: Pubkey,
        name: String,
    ) -> Result<()> {
        assert_holder(holder_token_account, &holder, &self.mint)?;
        require!(name.len() <= MAX_NAME_LENGTH, IntersolarError::NameTooLong);

        self.name = name;
        self.holder = holder;

        Ok(())
    }

    fn write(&mut self, mint: Pubkey, classification: u8, holder: Pubkey, bump: u8) {
        self.mint = mint;
        self.classification = classification;
        self.name = String::new();
        self.holder = holder;
        self.bump = bump;
    }
}

/// Canonical intersolar address and bump for `mint`.
pub fn find_intersolar_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[INTERSOLAR_SEED, mint.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use anchor_lang::solana_program::program_error::ProgramError;
    use anchor_spl::token::spl_token::state::AccountState;

    fn assert_err(result: Result<()>, expected: IntersolarError) {
        assert_eq!(
            ProgramError::from(result.unwrap_err()),
            ProgramError::from(Error::from(expected)),
        );
    }

    fn initialized() -> Intersolar {
        let mut record = Intersolar {
            mint: Pubkey::default(),
            classification: 0,
            name: String::new(),
            holder: Pubkey::default(),
            bump: 0,
        };
        record.write(Pubkey::new_unique(), 7, Pubkey::new_unique(), 253);
        record
    }

    fn holding(record: &Intersolar, owner: Pubkey, amount: u64) -> SplTokenAccount {
        SplTokenAccount {
            mint: record.mint,
            owner,
            amount,
            state: AccountState::Initialized,
            ..Default::default()
        }
    }

    #[test]
    fn rename_accepts_up_to_32_bytes() {
        let mut record = initialized();
        let holder = Pubkey::new_unique();
        let account = holding(&record, holder, 1);

        for len in [0, 1, 31, MAX_NAME_LENGTH] {
            let name = "x".repeat(len);
            record.rename(&account, holder, name.clone()).unwrap();
            assert_eq!(record.name, name);
            assert_eq!(record.holder, holder);
        }
    }

    #[test]
    fn rename_rejects_33_bytes() {
        let mut record = initialized();
        let holder = record.holder;
        let account = holding(&record, holder, 1);
        record.rename(&account, holder, "Alice".to_string()).unwrap();

        assert_err(
            record.rename(&account, holder, "y".repeat(MAX_NAME_LENGTH + 1)),
            IntersolarError::NameTooLong,
        );
        assert_eq!(record.name, "Alice");
        assert_eq!(record.holder, holder);
    }

    #[test]
    fn rename_requires_a_balance_of_the_record_mint() {
        let mut record = initialized();
        let holder = record.holder;

        assert_err(
            record.rename(&holding(&record, holder, 0), holder, "Alice".to_string()),
            IntersolarError::Unauthorized,
        );
        assert_err(
            record.rename(
                &holding(&record, Pubkey::new_unique(), 1),
                holder,
                "Alice".to_string(),
            ),
            IntersolarError::Unauthorized,
        );

        let mut other_mint = holding(&record, holder, 1);
        other_mint.mint = Pubkey::new_unique();
        assert_err(
            record.rename(&other_mint, holder, "Alice".to_string()),
            IntersolarError::MintMismatch,
        );
        assert_eq!(record.name, "");
    }

    #[test]
    fn name_limit_counts_bytes_not_chars() {
        let mut record = initialized();
        let holder = record.holder;
        let account = holding(&record, holder, 1);
        // 11 three-byte characters: 11 chars, 33 bytes
        let name = "\u{2600}".repeat(11);
        assert_eq!(name.len(), 33);
        assert!(record.rename(&account, holder, name).is_err());

        let name = "\u{2600}".repeat(10);
        assert!(record.rename(&account, holder, name).is_ok());
    }

    #[test]
    fn renaming_to_same_name_is_allowed() {
        let mut record = initialized();
        let holder = record.holder;
        let account = holding(&record, holder, 1);
        record.rename(&account, holder, "Europa".to_string()).unwrap();
        record.rename(&account, holder, "Europa".to_string()).unwrap();
        assert_eq!(record.name, "Europa");
    }

    #[test]
    fn size_covers_longest_name() {
        let mut record = initialized();
        let holder = record.holder;
        let account = holding(&record, holder, 1);
        record
            .rename(&account, holder, "z".repeat(MAX_NAME_LENGTH))
            .unwrap();

        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Intersolar::SIZE);
    }

    #[test]
    fn address_is_one_per_mint() {
        let mint = Pubkey::new_unique();
        assert_eq!(find_intersolar_address(&mint), find_intersolar_address(&mint));
        assert_ne!(
            find_intersolar_address(&mint).0,
            find_intersolar_address(&Pubkey::new_unique()).0
        );
    }
}
