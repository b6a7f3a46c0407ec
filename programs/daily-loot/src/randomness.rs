use anchor_lang::prelude::*;

/// Leading bytes of the SlotHashes sysvar mixed into each seed
/// (entry count followed by the most recent slot and its hash)
pub const SLOT_HASHES_PREFIX_LEN: usize = 64;

/// The independent rolls taken while resolving a claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawStep {
    /// Selects the rarity tier
    Tier,
    /// Selects currency vs item
    Kind,
    /// Selects the amount or item id
    Payout,
}

impl DrawStep {
    fn domain(&self) -> u8 {
        match self {
            DrawStep::Tier => 0,
            DrawStep::Kind => 1,
            DrawStep::Payout => 2,
        }
    }
}

/// Source of bounded rolls for a single claim
pub trait RandomnessSource {
    /// Roll in [0, bound). A zero bound yields 0.
    fn draw(&self, step: DrawStep, bound: u64) -> u64;
}

/// Claim-time inputs that the caller cannot fully predict before submitting
pub struct DrawContext<'a> {
    /// Raw SlotHashes sysvar data
    pub slot_hashes: &'a [u8],
    pub caller: &'a Pubkey,
    pub recipient: &'a Pubkey,
    pub timestamp: i64,
    pub slot: u64,
}

/// Slot hash randomness
///
/// Deterministic for a given (entropy, context), so any claim can be replayed.
/// Not resistant to a leader choosing which slot to include the transaction in;
/// this is only meant to stop casual outcome picking by players.
pub struct SlotHashRandomness {
    seed: [u8; 32],
}

impl SlotHashRandomness {
    pub fn new(entropy: u64, context: &DrawContext) -> Self {
        let recent = &context.slot_hashes[..std::cmp::min(SLOT_HASHES_PREFIX_LEN, context.slot_hashes.len())];
        let seed = solana_sha256_hasher::hashv(&[
            recent,
            context.caller.as_ref(),
            context.recipient.as_ref(),
            &context.timestamp.to_le_bytes(),
            &context.slot.to_le_bytes(),
            &entropy.to_le_bytes(),
        ]);
        Self {
            seed: seed.to_bytes(),
        }
    }

    #[cfg(test)]
    pub fn seed(&self) -> [u8; 32] {
        self.seed
    }
}

impl RandomnessSource for SlotHashRandomness {
    fn draw(&self, step: DrawStep, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        let digest = solana_sha256_hasher::hashv(&[&self.seed, &[step.domain()]]).to_bytes();
        let value = u64::from_le_bytes([
            digest[0], digest[1], digest[2], digest[3],
            digest[4], digest[5], digest[6], digest[7],
        ]);
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(entropy: u64, timestamp: i64) -> SlotHashRandomness {
        let slot_hashes = [42u8; 128];
        let caller = Pubkey::new_from_array([3; 32]);
        let recipient = Pubkey::new_from_array([4; 32]);
        SlotHashRandomness::new(
            entropy,
            &DrawContext {
                slot_hashes: &slot_hashes,
                caller: &caller,
                recipient: &recipient,
                timestamp,
                slot: 1_000,
            },
        )
    }

    #[test]
    fn test_draws_are_replayable() {
        let a = source(7, 1_700_000_000);
        let b = source(7, 1_700_000_000);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.draw(DrawStep::Tier, 100), b.draw(DrawStep::Tier, 100));
        assert_eq!(a.draw(DrawStep::Payout, u64::MAX), b.draw(DrawStep::Payout, u64::MAX));
    }

    #[test]
    fn test_inputs_change_seed() {
        assert_ne!(source(7, 1_700_000_000).seed(), source(8, 1_700_000_000).seed());
        assert_ne!(source(7, 1_700_000_000).seed(), source(7, 1_700_000_001).seed());
    }

    #[test]
    fn test_draws_respect_bound() {
        for entropy in 0..200 {
            let rng = source(entropy, 1_700_000_000);
            assert!(rng.draw(DrawStep::Tier, 5) < 5);
            assert!(rng.draw(DrawStep::Kind, 2) < 2);
            assert_eq!(rng.draw(DrawStep::Payout, 1), 0);
            assert_eq!(rng.draw(DrawStep::Payout, 0), 0);
        }
    }

    #[test]
    fn test_steps_are_independent() {
        let differing = (0..200)
            .map(|entropy| source(entropy, 1_700_000_000))
            .filter(|rng| rng.draw(DrawStep::Tier, u64::MAX) != rng.draw(DrawStep::Payout, u64::MAX))
            .count();
        assert_eq!(differing, 200);
    }

    #[test]
    fn test_short_slot_hashes_accepted() {
        let caller = Pubkey::new_from_array([3; 32]);
        let context = DrawContext {
            slot_hashes: &[1, 2, 3],
            caller: &caller,
            recipient: &caller,
            timestamp: 0,
            slot: 0,
        };
        let rng = SlotHashRandomness::new(0, &context);
        assert!(rng.draw(DrawStep::Tier, 10) < 10);
    }
}
