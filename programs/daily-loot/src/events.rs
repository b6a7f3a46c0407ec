use anchor_lang::prelude::*;

use crate::state::{Rarity, RewardKind};

/// Emitted for every successful daily claim
#[event]
pub struct DailyClaimEvent {
    pub recipient: Pubkey,
    pub reward_kind: RewardKind,
    pub rarity: Rarity,
    /// Currency amount in base units for Currency, item id for Item
    pub reward_data: u64,
    pub claimed_at: i64,
}

#[event]
pub struct RarityRollsUpdatedEvent {
    pub admin: Pubkey,
    pub common: u64,
    pub uncommon: u64,
    pub rare: u64,
    pub epic: u64,
    pub legendary: u64,
    pub max_roll: u64,
    pub config_version: u64,
}

#[event]
pub struct RewardUpdatedEvent {
    pub admin: Pubkey,
    pub reward_kind: RewardKind,
    pub rarity: Rarity,
    pub min: u64,
    pub max: u64,
    pub item_pool: Vec<u64>,
    pub config_version: u64,
}

#[event]
pub struct AdminRoleChangedEvent {
    pub authority: Pubkey,
    pub account: Pubkey,
    pub granted: bool,
}

#[event]
pub struct ItemRegisteredEvent {
    pub item_id: u64,
    pub item_mint: Pubkey,
}
