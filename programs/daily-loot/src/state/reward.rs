use anchor_lang::prelude::*;

use crate::errors::LootError;
use super::rarity::Rarity;

/// Maximum candidate item ids per rarity pool
pub const MAX_ITEM_POOL: usize = 16;

/// Whether a claim pays out fungible currency or a discrete item
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RewardKind {
    Currency,
    Item,
}

impl RewardKind {
    pub fn name(&self) -> &'static str {
        match self {
            RewardKind::Currency => "Currency",
            RewardKind::Item => "Item",
        }
    }
}

/// Reward data as submitted by an admin
/// Currency rewards read [min, max]; item rewards read item_pool.
/// The fields the kind does not use are ignored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardDescriptor {
    pub min: u64,
    pub max: u64,
    pub item_pool: Vec<u64>,
}

/// Inclusive currency payout range for one tier
/// Stored ranges always satisfy min < max, so max == 0 marks an unset tier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct CurrencyRange {
    pub min: u64,
    pub max: u64,
}

impl CurrencyRange {
    pub fn is_configured(&self) -> bool {
        self.max > 0
    }

    /// Map a roll linearly onto [min, max]
    pub fn payout(&self, roll: u64) -> Result<u64> {
        let span = (self.max - self.min) as u128 + 1;
        let amount = self.min as u128 + roll as u128 % span;
        u64::try_from(amount).map_err(|_| error!(LootError::MathOverflow))
    }
}

/// Candidate item ids for one tier
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ItemPool {
    #[max_len(MAX_ITEM_POOL)]
    pub item_ids: Vec<u64>,
}

impl ItemPool {
    pub fn is_configured(&self) -> bool {
        !self.item_ids.is_empty()
    }

    pub fn pick(&self, roll: u64) -> Option<u64> {
        if self.item_ids.is_empty() {
            return None;
        }
        let index = (roll % self.item_ids.len() as u64) as usize;
        self.item_ids.get(index).copied()
    }
}

/// Reward descriptors keyed by (kind, rarity)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RewardTable {
    pub currency: [CurrencyRange; 5],
    pub items: [ItemPool; 5],
}

impl RewardTable {
    /// Validate a descriptor and replace the entry for exactly (kind, rarity)
    pub fn set(&mut self, kind: RewardKind, rarity: Rarity, descriptor: &RewardDescriptor) -> Result<()> {
        match kind {
            RewardKind::Currency => {
                require!(descriptor.min < descriptor.max, LootError::InvalidRange);
                self.currency[rarity.index()] = CurrencyRange {
                    min: descriptor.min,
                    max: descriptor.max,
                };
            }
            RewardKind::Item => {
                require!(!descriptor.item_pool.is_empty(), LootError::InvalidItemPool);
                require!(
                    descriptor.item_pool.len() <= MAX_ITEM_POOL,
                    LootError::ItemPoolTooLarge
                );
                self.items[rarity.index()] = ItemPool {
                    item_ids: descriptor.item_pool.clone(),
                };
            }
        }
        Ok(())
    }

    pub fn currency_range(&self, rarity: Rarity) -> &CurrencyRange {
        &self.currency[rarity.index()]
    }

    pub fn item_pool(&self, rarity: Rarity) -> &ItemPool {
        &self.items[rarity.index()]
    }

    /// Resolve the concrete payout: a currency amount or an item id
    pub fn resolve_payout(&self, kind: RewardKind, rarity: Rarity, roll: u64) -> Result<u64> {
        match kind {
            RewardKind::Currency => {
                let range = self.currency_range(rarity);
                require!(range.is_configured(), LootError::RewardNotConfigured);
                range.payout(roll)
            }
            RewardKind::Item => self
                .item_pool(rarity)
                .pick(roll)
                .ok_or_else(|| error!(LootError::RewardNotConfigured)),
        }
    }
}
