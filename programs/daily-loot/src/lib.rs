#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod contexts;
pub mod errors;
pub mod events;
pub mod item_ledger;
pub mod randomness;
pub mod resolver;
pub mod state;

pub use contexts::*;
use state::{Rarity, RewardDescriptor, RewardKind};

declare_id!("35evW6xcmni9316FjFBs4Zyxf6bdsnCC9ZLomZUAYs8C");

#[program]
pub mod daily_loot {
    use super::*;

    // ============================================
    // LOOT CONFIG (default admin)
    // ============================================

    /// Create the loot config PDA with the default rarity rolls (once)
    pub fn initialize_loot(ctx: Context<InitializeLoot>) -> Result<()> {
        contexts::admin::handle_initialize_loot(ctx)
    }

    /// Transfer ownership, set the legendary box item, pause or resume claims
    /// A new legendary box item needs its item mint in remaining_accounts
    pub fn update_loot_config(
        ctx: Context<AuthorityAction>,
        new_authority: Option<Pubkey>,
        legendary_box_item_id: Option<u64>,
        is_paused: Option<bool>,
    ) -> Result<()> {
        contexts::admin::handle_update_loot_config(ctx, new_authority, legendary_box_item_id, is_paused)
    }

    pub fn grant_admin_role(ctx: Context<AuthorityAction>, account: Pubkey) -> Result<()> {
        contexts::admin::handle_grant_admin_role(ctx, account)
    }

    pub fn revoke_admin_role(ctx: Context<AuthorityAction>, account: Pubkey) -> Result<()> {
        contexts::admin::handle_revoke_admin_role(ctx, account)
    }

    // ============================================
    // RARITY & REWARD TABLES (admin role)
    // ============================================

    /// Replace all five tier thresholds and the roll range
    pub fn set_rarity_rolls(
        ctx: Context<AdminAction>,
        common: u64,
        uncommon: u64,
        rare: u64,
        epic: u64,
        legendary: u64,
        max_roll: u64,
    ) -> Result<()> {
        contexts::configure::handle_set_rarity_rolls(
            ctx, common, uncommon, rare, epic, legendary, max_roll,
        )
    }

    /// Replace the reward for one (kind, rarity) pair
    /// Item pools need every candidate's item mint in remaining_accounts
    pub fn set_reward(
        ctx: Context<AdminAction>,
        reward_kind: RewardKind,
        rarity: Rarity,
        descriptor: RewardDescriptor,
    ) -> Result<()> {
        contexts::configure::handle_set_reward(ctx, reward_kind, rarity, descriptor)
    }

    /// Create the mint that backs an item id
    pub fn register_item(ctx: Context<RegisterItem>, item_id: u64) -> Result<()> {
        contexts::items::handle_register_item(ctx, item_id)
    }

    // ============================================
    // DAILY CLAIM
    // ============================================

    /// Roll and pay the daily reward for `recipient`
    /// Item rewards need (item_mint, recipient_item_account) pairs in remaining_accounts
    pub fn claim<'info>(
        ctx: Context<'_, '_, '_, 'info, Claim<'info>>,
        entropy: u64,
    ) -> Result<()> {
        contexts::claim::handle_claim(ctx, entropy)
    }
}
