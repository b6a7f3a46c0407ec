use anchor_lang::prelude::*;

use crate::errors::LootError;
use super::rarity::{Rarity, RarityRolls, DEFAULT_RARITY_ROLLS};
use super::reward::{RewardDescriptor, RewardKind, RewardTable};

pub const LOOT_CONFIG_SEED: &[u8] = b"loot_config";
pub const ITEM_MINT_SEED: &[u8] = b"item_mint";

/// Maximum number of accounts holding the admin role
pub const MAX_ADMINS: usize = 8;

/// Item paid for a Legendary roll when no Legendary item pool is configured
pub const LEGENDARY_BOX_ITEM_ID: u64 = 1;

/// Units minted per item reward
pub const ITEM_REWARD_COUNT: u64 = 1;

/// Global loot configuration
/// PDA seeds: ["loot_config"]
/// Also the mint authority of the currency mint and every item mint
#[account]
#[derive(InitSpace)]
pub struct LootConfig {
    /// Default admin: manages roles and top-level settings
    pub authority: Pubkey,
    /// Accounts allowed to edit rarity rolls, rewards and items
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,
    /// SPL mint of the game currency
    pub currency_mint: Pubkey,
    /// Fallback item for Legendary rolls
    pub legendary_box_item_id: u64,
    /// Current rarity thresholds
    pub rarity_rolls: RarityRolls,
    /// Reward descriptors keyed by (kind, rarity)
    pub rewards: RewardTable,
    /// Incremented on every configuration write
    pub config_version: u64,
    /// Emergency stop for claims
    pub is_paused: bool,
    pub created_at: i64,
    pub bump: u8,
}

impl LootConfig {
    pub fn initialize(&mut self, authority: Pubkey, currency_mint: Pubkey, now: i64, bump: u8) {
        self.authority = authority;
        self.admins = Vec::new();
        self.currency_mint = currency_mint;
        self.legendary_box_item_id = LEGENDARY_BOX_ITEM_ID;
        self.rarity_rolls = DEFAULT_RARITY_ROLLS;
        self.rewards = RewardTable::default();
        self.config_version = 0;
        self.is_paused = false;
        self.created_at = now;
        self.bump = bump;
    }

    pub fn has_admin_role(&self, account: &Pubkey) -> bool {
        self.admins.contains(account)
    }

    /// Returns false if the account already held the role
    pub fn grant_admin_role(&mut self, account: Pubkey) -> Result<bool> {
        if self.has_admin_role(&account) {
            return Ok(false);
        }
        require!(self.admins.len() < MAX_ADMINS, LootError::TooManyAdmins);
        self.admins.push(account);
        self.touch();
        Ok(true)
    }

    /// Returns false if the account did not hold the role
    pub fn revoke_admin_role(&mut self, account: &Pubkey) -> bool {
        let before = self.admins.len();
        self.admins.retain(|admin| admin != account);
        let changed = self.admins.len() != before;
        if changed {
            self.touch();
        }
        changed
    }

    pub fn rarity_rolls(&self) -> &RarityRolls {
        &self.rarity_rolls
    }

    /// Replace the whole roll table; a rejected table leaves the old one in place
    pub fn set_rarity_rolls(&mut self, rolls: RarityRolls) -> Result<()> {
        rolls.validate()?;
        self.rarity_rolls = rolls;
        self.touch();
        Ok(())
    }

    pub fn set_reward(
        &mut self,
        kind: RewardKind,
        rarity: Rarity,
        descriptor: &RewardDescriptor,
    ) -> Result<()> {
        self.rewards.set(kind, rarity, descriptor)?;
        self.touch();
        Ok(())
    }

    /// Hand the default-admin role to another account
    pub fn transfer_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        require!(new_authority != Pubkey::default(), LootError::InvalidAuthority);
        self.authority = new_authority;
        self.touch();
        Ok(())
    }

    pub fn set_legendary_box_item_id(&mut self, item_id: u64) {
        self.legendary_box_item_id = item_id;
        self.touch();
    }

    fn touch(&mut self) {
        self.config_version = self.config_version.wrapping_add(1);
    }
}

/// Address of the 0-decimal mint backing an item id
pub fn item_mint_address(item_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[ITEM_MINT_SEED, &item_id.to_le_bytes()], &crate::ID).0
}

#[cfg(test)]
pub(crate) fn test_config() -> LootConfig {
    let mut config = LootConfig {
        authority: Pubkey::default(),
        admins: Vec::new(),
        currency_mint: Pubkey::default(),
        legendary_box_item_id: 0,
        rarity_rolls: RarityRolls::default(),
        rewards: RewardTable::default(),
        config_version: 0,
        is_paused: false,
        created_at: 0,
        bump: 0,
    };
    config.initialize(
        Pubkey::new_from_array([1; 32]),
        Pubkey::new_from_array([2; 32]),
        1_700_000_000,
        255,
    );
    config
}
