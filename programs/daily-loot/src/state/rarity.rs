use anchor_lang::prelude::*;

use crate::errors::LootError;

/// Roll table installed at initialization
/// Rolls land in 1..=100: Common 60%, Uncommon 20%, Rare 10%, Epic 8%, Legendary 2%
pub const DEFAULT_RARITY_ROLLS: RarityRolls = RarityRolls {
    common: 60,
    uncommon: 80,
    rare: 90,
    epic: 98,
    legendary: 100,
    max_roll: 100,
};

/// Rarity tiers, ordered from most common to most scarce
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, InitSpace)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Get rarity name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Slot of this tier in per-tier tables
    pub fn index(&self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }
}

/// Cumulative roll thresholds partitioning the roll space into rarity tiers
///
/// A roll is matched against the thresholds inclusively, lowest first:
/// - Common:    roll <= common
/// - Uncommon:  roll <= uncommon
/// - Rare:      roll <= rare
/// - Epic:      roll <= epic
/// - Legendary: everything above epic, up to max_roll
///
/// Claims roll in 1..=max_roll, so each tier's width is its threshold minus the
/// previous one and Legendary takes the overflow band max_roll - epic.
/// A zeroed table (max_roll == 0) means rolls were never configured.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RarityRolls {
    pub common: u64,
    pub uncommon: u64,
    pub rare: u64,
    pub epic: u64,
    pub legendary: u64,
    pub max_roll: u64,
}

impl RarityRolls {
    /// Build a validated roll table
    pub fn new(
        common: u64,
        uncommon: u64,
        rare: u64,
        epic: u64,
        legendary: u64,
        max_roll: u64,
    ) -> Result<Self> {
        let rolls = Self {
            common,
            uncommon,
            rare,
            epic,
            legendary,
            max_roll,
        };
        rolls.validate()?;
        Ok(rolls)
    }

    /// Require common < uncommon < rare < epic < legendary <= max_roll
    pub fn validate(&self) -> Result<()> {
        if self.common >= self.uncommon {
            msg!("Common must be less rare than uncommon");
            return err!(LootError::InvalidOrdering);
        }
        if self.uncommon >= self.rare {
            msg!("Uncommon must be less rare than rare");
            return err!(LootError::InvalidOrdering);
        }
        if self.rare >= self.epic {
            msg!("Rare must be less rare than epic");
            return err!(LootError::InvalidOrdering);
        }
        if self.epic >= self.legendary {
            msg!("Epic must be less rare than legendary");
            return err!(LootError::InvalidOrdering);
        }
        if self.legendary > self.max_roll {
            msg!("Legendary rarity level must be less than or equal to the max rarity roll");
            return err!(LootError::InvalidOrdering);
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.max_roll > 0
    }

    /// Map a roll to its rarity tier
    pub fn resolve_tier(&self, roll: u64) -> Rarity {
        if roll <= self.common {
            Rarity::Common
        } else if roll <= self.uncommon {
            Rarity::Uncommon
        } else if roll <= self.rare {
            Rarity::Rare
        } else if roll <= self.epic {
            Rarity::Epic
        } else {
            Rarity::Legendary
        }
    }

    /// Number of claim rolls (1..=max_roll) that land in a tier
    #[cfg(test)]
    pub fn band_width(&self, rarity: Rarity) -> u64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon - self.common,
            Rarity::Rare => self.rare - self.uncommon,
            Rarity::Epic => self.epic - self.rare,
            Rarity::Legendary => self.max_roll - self.epic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rarity_resolution_boundaries() {
        let rolls = RarityRolls::new(0, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(rolls.resolve_tier(0), Rarity::Common);
        assert_eq!(rolls.resolve_tier(1), Rarity::Uncommon);
        assert_eq!(rolls.resolve_tier(2), Rarity::Rare);
        assert_eq!(rolls.resolve_tier(3), Rarity::Epic);
        assert_eq!(rolls.resolve_tier(4), Rarity::Legendary);
        assert_eq!(rolls.resolve_tier(5), Rarity::Legendary);
    }

    #[test]
    fn test_default_rolls_distribution() {
        let rolls = DEFAULT_RARITY_ROLLS;
        assert!(rolls.validate().is_ok());

        assert_eq!(rolls.resolve_tier(1), Rarity::Common);
        assert_eq!(rolls.resolve_tier(60), Rarity::Common);
        assert_eq!(rolls.resolve_tier(61), Rarity::Uncommon);
        assert_eq!(rolls.resolve_tier(99), Rarity::Legendary);
        assert_eq!(rolls.resolve_tier(100), Rarity::Legendary);

        let widths: Vec<u64> = Rarity::ALL.iter().map(|r| rolls.band_width(*r)).collect();
        assert_eq!(widths, vec![60, 20, 10, 8, 2]);
        assert_eq!(widths.iter().sum::<u64>(), rolls.max_roll);
    }

    #[test]
    fn test_invalid_orderings_rejected() {
        let cases = [
            (1, 0, 2, 3, 4, 5),
            (0, 2, 1, 3, 4, 5),
            (0, 1, 3, 2, 4, 5),
            (0, 1, 2, 4, 3, 5),
            (0, 1, 2, 3, 5, 4),
            (0, 0, 2, 3, 4, 5),
        ];
        for (c, u, r, e, l, m) in cases {
            assert_eq!(
                RarityRolls::new(c, u, r, e, l, m).unwrap_err(),
                anchor_lang::error::Error::from(LootError::InvalidOrdering)
            );
        }
    }

    #[test]
    fn test_legendary_may_equal_max_roll() {
        assert!(RarityRolls::new(0, 1, 2, 3, 5, 5).is_ok());
    }

    #[test]
    fn test_zeroed_rolls_are_unconfigured() {
        assert!(!RarityRolls::default().is_configured());
        assert!(DEFAULT_RARITY_ROLLS.is_configured());
    }

    #[test]
    fn test_index_follows_tier_order() {
        for (i, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }

    fn valid_rolls() -> impl Strategy<Value = RarityRolls> {
        (0u64..500, 1u64..500, 1u64..500, 1u64..500, 1u64..500, 0u64..500).prop_map(
            |(c, du, dr, de, dl, dm)| RarityRolls {
                common: c,
                uncommon: c + du,
                rare: c + du + dr,
                epic: c + du + dr + de,
                legendary: c + du + dr + de + dl,
                max_roll: c + du + dr + de + dl + dm,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_valid_rolls_partition_roll_space(rolls in valid_rolls()) {
            prop_assert!(rolls.validate().is_ok());

            let mut seen = [0u64; 5];
            let mut previous = Rarity::Common;
            for roll in 0..=rolls.max_roll {
                let tier = rolls.resolve_tier(roll);
                prop_assert!(tier >= previous);
                prop_assert!(tier.index() <= previous.index() + 1);
                seen[tier.index()] += 1;
                previous = tier;
            }
            prop_assert!(seen.iter().all(|count| *count > 0));
        }

        #[test]
        fn prop_band_widths_cover_claim_rolls(rolls in valid_rolls()) {
            let total: u64 = Rarity::ALL.iter().map(|r| rolls.band_width(*r)).sum();
            prop_assert_eq!(total, rolls.max_roll);
        }

        #[test]
        fn prop_misordered_rolls_rejected(
            c in 0u64..20, u in 0u64..20, r in 0u64..20,
            e in 0u64..20, l in 0u64..20, m in 0u64..20,
        ) {
            let ordered = c < u && u < r && r < e && e < l && l <= m;
            prop_assert_eq!(RarityRolls::new(c, u, r, e, l, m).is_ok(), ordered);
        }
    }
}
