pub mod rarity;
pub mod reward;
pub mod loot_config;
pub mod claim_record;

pub use rarity::{Rarity, RarityRolls, DEFAULT_RARITY_ROLLS};
pub use reward::{
    RewardKind, RewardDescriptor, RewardTable, CurrencyRange, ItemPool,
    MAX_ITEM_POOL,
};
pub use loot_config::{
    LootConfig, item_mint_address,
    LOOT_CONFIG_SEED, ITEM_MINT_SEED, MAX_ADMINS,
    LEGENDARY_BOX_ITEM_ID, ITEM_REWARD_COUNT,
};
pub use claim_record::{ClaimRecord, CLAIM_RECORD_SEED, CLAIM_COOLDOWN_SECONDS};

#[cfg(test)]
pub(crate) use loot_config::test_config;
