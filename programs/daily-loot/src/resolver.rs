use anchor_lang::prelude::*;

use crate::errors::LootError;
use crate::randomness::{DrawStep, RandomnessSource};
use crate::state::{ClaimRecord, LootConfig, Rarity, RewardKind};

/// Outcome of a claim before it is applied to the ledgers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedClaim {
    /// Tier roll in 1..=max_roll
    pub roll: u64,
    pub rarity: Rarity,
    pub kind: RewardKind,
    /// Currency amount or item id, depending on kind
    pub reward_data: u64,
}

/// Checks that run before any roll is taken
pub fn check_claim_gate(
    config: &LootConfig,
    record: &ClaimRecord,
    recipient: &Pubkey,
    now: i64,
) -> Result<()> {
    require!(*recipient != Pubkey::default(), LootError::InvalidRecipient);
    require!(!config.is_paused, LootError::LootPaused);
    require!(record.can_claim(now), LootError::ClaimTooSoon);
    Ok(())
}

/// Roll the tier, pick the reward kind and resolve the payout
pub fn resolve_claim<R: RandomnessSource>(config: &LootConfig, rng: &R) -> Result<ResolvedClaim> {
    let rolls = config.rarity_rolls();
    require!(rolls.is_configured(), LootError::RarityRollsNotConfigured);

    // draw < max_roll, so the shift into 1..=max_roll cannot overflow
    let roll = rng.draw(DrawStep::Tier, rolls.max_roll) + 1;
    let rarity = rolls.resolve_tier(roll);
    let kind = decide_kind(rarity, rng);
    let payout_roll = rng.draw(DrawStep::Payout, u64::MAX);
    let reward_data = resolve_reward_data(config, kind, rarity, payout_roll)?;

    Ok(ResolvedClaim {
        roll,
        rarity,
        kind,
        reward_data,
    })
}

/// Legendary always pays an item; other tiers split evenly between currency and items
fn decide_kind<R: RandomnessSource>(rarity: Rarity, rng: &R) -> RewardKind {
    if rarity == Rarity::Legendary {
        return RewardKind::Item;
    }
    if rng.draw(DrawStep::Kind, 2) == 0 {
        RewardKind::Currency
    } else {
        RewardKind::Item
    }
}

fn resolve_reward_data(
    config: &LootConfig,
    kind: RewardKind,
    rarity: Rarity,
    roll: u64,
) -> Result<u64> {
    if rarity == Rarity::Legendary && !config.rewards.item_pool(rarity).is_configured() {
        return Ok(config.legendary_box_item_id);
    }
    config.rewards.resolve_payout(kind, rarity, roll)
}
