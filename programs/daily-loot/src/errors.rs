use anchor_lang::prelude::*;

#[error_code]
pub enum LootError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Loot claims are paused")]
    LootPaused,

    // Configuration errors
    #[msg("Rarity rolls must be strictly increasing and legendary must not exceed the max roll")]
    InvalidOrdering,
    #[msg("Invalid reward min/max data")]
    InvalidRange,
    #[msg("Invalid reward items data")]
    InvalidItemPool,
    #[msg("Item pool exceeds the maximum number of candidates")]
    ItemPoolTooLarge,
    #[msg("Too many admin role holders")]
    TooManyAdmins,
    #[msg("Currency mint authority must be the loot config")]
    CurrencyAuthorityMismatch,
    #[msg("Loot authority cannot be the null account")]
    InvalidAuthority,
    #[msg("Item mint is missing or not owned by the loot config")]
    ItemNotRegistered,

    // Claim errors
    #[msg("You can claim once per day")]
    ClaimTooSoon,
    #[msg("Claim recipient cannot be the null account")]
    InvalidRecipient,
    #[msg("Rarity rolls have not been configured")]
    RarityRollsNotConfigured,
    #[msg("No reward configured for this kind and rarity")]
    RewardNotConfigured,
    #[msg("Item mint and token account for the rolled item were not provided")]
    ItemAccountsMissing,
    #[msg("Item token account does not match the recipient and item mint")]
    InvalidItemAccount,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
