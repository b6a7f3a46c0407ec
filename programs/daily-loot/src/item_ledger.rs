use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Mint};

use crate::errors::LootError;
use crate::state::item_mint_address;

/// Locate the (item_mint, recipient_item_account) pair for an item
/// `keys` are the remaining account keys laid out as consecutive pairs.
/// Returns the index of the item mint; the token account follows it.
pub fn select_item_accounts(keys: &[Pubkey], recipient: &Pubkey, item_id: u64) -> Result<usize> {
    require!(keys.len() % 2 == 0, LootError::ItemAccountsMissing);

    let expected_mint = item_mint_address(item_id);
    let pair = keys
        .chunks(2)
        .position(|pair| pair[0] == expected_mint)
        .ok_or(LootError::ItemAccountsMissing)?;
    let mint_index = pair * 2;

    require_keys_eq!(
        keys[mint_index + 1],
        get_associated_token_address(recipient, &expected_mint),
        LootError::InvalidItemAccount
    );
    Ok(mint_index)
}

/// Require a live item mint for every id before it is written into the config
/// Each mint is looked up by its PDA among `accounts`.
pub fn verify_registered_items(
    accounts: &[AccountInfo],
    item_ids: &[u64],
    loot_config: &Pubkey,
) -> Result<()> {
    for &item_id in item_ids {
        let expected_mint = item_mint_address(item_id);
        let Some(info) = accounts.iter().find(|info| *info.key == expected_mint) else {
            msg!("Item {} mint {} not provided", item_id, expected_mint);
            return err!(LootError::ItemNotRegistered);
        };
        if !is_item_mint(info, loot_config) {
            msg!("Item {} has no mint under the loot config", item_id);
            return err!(LootError::ItemNotRegistered);
        }
    }
    Ok(())
}

/// Initialized SPL mint whose mint authority is the loot config
fn is_item_mint(info: &AccountInfo, loot_config: &Pubkey) -> bool {
    if *info.owner != token::ID {
        return false;
    }
    let Ok(data) = info.try_borrow_data() else {
        return false;
    };
    match Mint::try_deserialize(&mut &data[..]) {
        Ok(mint) => mint.mint_authority == COption::Some(*loot_config),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINT_LEN: usize = 82;

    fn loot_error(error: LootError) -> anchor_lang::error::Error {
        anchor_lang::error::Error::from(error)
    }

    /// Packed SPL mint: authority option, supply, decimals, initialized flag, freeze option
    fn mint_data(authority: Option<Pubkey>, initialized: bool) -> Vec<u8> {
        let mut data = vec![0u8; MINT_LEN];
        if let Some(authority) = authority {
            data[0..4].copy_from_slice(&1u32.to_le_bytes());
            data[4..36].copy_from_slice(authority.as_ref());
        }
        data[44] = 0;
        data[45] = initialized as u8;
        data
    }

    fn recipient() -> Pubkey {
        Pubkey::new_from_array([7; 32])
    }

    fn pair_for(item_id: u64) -> [Pubkey; 2] {
        let mint = item_mint_address(item_id);
        [mint, get_associated_token_address(&recipient(), &mint)]
    }

    #[test]
    fn test_select_finds_later_pair() {
        let keys = [pair_for(3), pair_for(5), pair_for(9)].concat();
        assert_eq!(select_item_accounts(&keys, &recipient(), 5).unwrap(), 2);
        assert_eq!(select_item_accounts(&keys, &recipient(), 9).unwrap(), 4);
        assert_eq!(select_item_accounts(&keys, &recipient(), 3).unwrap(), 0);
    }

    #[test]
    fn test_select_missing_pair() {
        let keys = [pair_for(3), pair_for(5)].concat();
        assert_eq!(
            select_item_accounts(&keys, &recipient(), 4).unwrap_err(),
            loot_error(LootError::ItemAccountsMissing)
        );
        assert_eq!(
            select_item_accounts(&[], &recipient(), 4).unwrap_err(),
            loot_error(LootError::ItemAccountsMissing)
        );
    }

    #[test]
    fn test_select_odd_length() {
        let mut keys = pair_for(3).to_vec();
        keys.push(item_mint_address(5));
        assert_eq!(
            select_item_accounts(&keys, &recipient(), 3).unwrap_err(),
            loot_error(LootError::ItemAccountsMissing)
        );
    }

    #[test]
    fn test_select_rejects_foreign_token_account() {
        let mint = item_mint_address(3);
        let someone_else = Pubkey::new_from_array([8; 32]);
        let keys = [mint, get_associated_token_address(&someone_else, &mint)];
        assert_eq!(
            select_item_accounts(&keys, &recipient(), 3).unwrap_err(),
            loot_error(LootError::InvalidItemAccount)
        );
    }

    #[test]
    fn test_verify_registered_items() {
        let config = Pubkey::new_from_array([2; 32]);
        let stranger = Pubkey::new_from_array([6; 32]);
        let token_program = token::ID;
        let system_program = anchor_lang::system_program::ID;

        let key_1 = item_mint_address(1);
        let key_2 = item_mint_address(2);
        let key_3 = item_mint_address(3);
        let key_4 = item_mint_address(4);
        let (mut lamports_1, mut lamports_2, mut lamports_3, mut lamports_4) = (1, 1, 1, 1);
        let mut data_1 = mint_data(Some(config), true);
        let mut data_2 = mint_data(Some(stranger), true);
        let mut data_3 = mint_data(Some(config), false);
        let mut data_4: Vec<u8> = Vec::new();

        let accounts = vec![
            AccountInfo::new(&key_1, false, false, &mut lamports_1, &mut data_1, &token_program, false, 0),
            AccountInfo::new(&key_2, false, false, &mut lamports_2, &mut data_2, &token_program, false, 0),
            AccountInfo::new(&key_3, false, false, &mut lamports_3, &mut data_3, &token_program, false, 0),
            AccountInfo::new(&key_4, false, false, &mut lamports_4, &mut data_4, &system_program, false, 0),
        ];

        assert!(verify_registered_items(&accounts, &[1], &config).is_ok());
        assert!(verify_registered_items(&accounts, &[1, 1], &config).is_ok());
        assert!(verify_registered_items(&accounts, &[], &config).is_ok());

        // Mint authority is someone else
        assert_eq!(
            verify_registered_items(&accounts, &[1, 2], &config).unwrap_err(),
            loot_error(LootError::ItemNotRegistered)
        );
        // Uninitialized mint
        assert_eq!(
            verify_registered_items(&accounts, &[3], &config).unwrap_err(),
            loot_error(LootError::ItemNotRegistered)
        );
        // PDA exists but was never created as a mint
        assert_eq!(
            verify_registered_items(&accounts, &[4], &config).unwrap_err(),
            loot_error(LootError::ItemNotRegistered)
        );
        // Mint account not passed at all
        assert_eq!(
            verify_registered_items(&accounts, &[999], &config).unwrap_err(),
            loot_error(LootError::ItemNotRegistered)
        );
    }
}
