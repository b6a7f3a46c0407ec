use anchor_lang::prelude::*;

use crate::state::*;
use crate::errors::LootError;
use crate::events::{RarityRollsUpdatedEvent, RewardUpdatedEvent};
use crate::item_ledger::verify_registered_items;

/// Admin-role actions on the rarity and reward tables
#[derive(Accounts)]
pub struct AdminAction<'info> {
    #[account(
        mut,
        seeds = [LOOT_CONFIG_SEED],
        bump = loot_config.bump,
        constraint = loot_config.has_admin_role(&admin.key()) @ LootError::Unauthorized
    )]
    pub loot_config: Box<Account<'info, LootConfig>>,

    pub admin: Signer<'info>,
}

/// Replace the whole rarity roll table
pub fn handle_set_rarity_rolls(
    ctx: Context<AdminAction>,
    common: u64,
    uncommon: u64,
    rare: u64,
    epic: u64,
    legendary: u64,
    max_roll: u64,
) -> Result<()> {
    let rolls = RarityRolls::new(common, uncommon, rare, epic, legendary, max_roll)?;
    let config = &mut ctx.accounts.loot_config;
    config.set_rarity_rolls(rolls)?;

    msg!(
        "Rarity rolls set: {}/{}/{}/{}/{} of {}",
        common, uncommon, rare, epic, legendary, max_roll
    );
    emit!(RarityRollsUpdatedEvent {
        admin: ctx.accounts.admin.key(),
        common,
        uncommon,
        rare,
        epic,
        legendary,
        max_roll,
        config_version: config.config_version,
    });
    Ok(())
}

/// Replace the reward for one (kind, rarity) pair
/// Item pools need every candidate's item mint in remaining_accounts.
pub fn handle_set_reward(
    ctx: Context<AdminAction>,
    reward_kind: RewardKind,
    rarity: Rarity,
    descriptor: RewardDescriptor,
) -> Result<()> {
    if reward_kind == RewardKind::Item {
        verify_registered_items(
            ctx.remaining_accounts,
            &descriptor.item_pool,
            &ctx.accounts.loot_config.key(),
        )?;
    }

    let config = &mut ctx.accounts.loot_config;
    config.set_reward(reward_kind, rarity, &descriptor)?;

    msg!("{} reward set for {}", reward_kind.name(), rarity.name());
    emit!(RewardUpdatedEvent {
        admin: ctx.accounts.admin.key(),
        reward_kind,
        rarity,
        min: descriptor.min,
        max: descriptor.max,
        item_pool: descriptor.item_pool,
        config_version: config.config_version,
    });
    Ok(())
}
