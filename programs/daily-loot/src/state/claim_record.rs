use anchor_lang::prelude::*;

pub const CLAIM_RECORD_SEED: &[u8] = b"claim_record";

/// Minimum time between two successful claims by the same account
pub const CLAIM_COOLDOWN_SECONDS: i64 = 24 * 60 * 60;

/// Per-recipient claim cooldown state
/// PDA seeds: ["claim_record", recipient]
#[account]
#[derive(InitSpace)]
pub struct ClaimRecord {
    /// Account that receives the daily rewards
    pub recipient: Pubkey,
    /// Unix timestamp of the last successful claim
    pub last_claimed_at: i64,
    /// Successful claims so far (0 = never claimed)
    pub claim_count: u64,
    pub bump: u8,
}

impl ClaimRecord {
    pub fn has_claimed(&self) -> bool {
        self.claim_count > 0
    }

    /// True if no claim exists yet or a full cooldown has elapsed
    pub fn can_claim(&self, now: i64) -> bool {
        !self.has_claimed() || now.saturating_sub(self.last_claimed_at) >= CLAIM_COOLDOWN_SECONDS
    }

    /// Earliest timestamp at which the next claim is accepted
    pub fn next_claim_at(&self) -> Option<i64> {
        if self.has_claimed() {
            Some(self.last_claimed_at.saturating_add(CLAIM_COOLDOWN_SECONDS))
        } else {
            None
        }
    }

    /// Commit a successful claim. Only called once the payout has been applied.
    pub fn record_claim(&mut self, recipient: Pubkey, now: i64, bump: u8) {
        if !self.has_claimed() {
            self.recipient = recipient;
            self.bump = bump;
        }
        self.last_claimed_at = now;
        self.claim_count = self.claim_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = CLAIM_COOLDOWN_SECONDS;

    fn empty_record() -> ClaimRecord {
        ClaimRecord {
            recipient: Pubkey::default(),
            last_claimed_at: 0,
            claim_count: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_first_claim_always_allowed() {
        let record = empty_record();
        assert!(record.can_claim(0));
        assert!(record.can_claim(1_700_000_000));
        assert_eq!(record.next_claim_at(), None);
    }

    #[test]
    fn test_cooldown_window() {
        let player = Pubkey::new_from_array([7; 32]);
        let mut record = empty_record();
        let start = 1_700_000_000;

        record.record_claim(player, start, 254);
        assert_eq!(record.recipient, player);
        assert_eq!(record.bump, 254);
        assert_eq!(record.next_claim_at(), Some(start + DAY));

        assert!(!record.can_claim(start));
        assert!(!record.can_claim(start + DAY - 1));
        assert!(record.can_claim(start + DAY));
        assert!(record.can_claim(start + 3 * DAY));
    }

    #[test]
    fn test_record_claim_moves_window() {
        let player = Pubkey::new_from_array([7; 32]);
        let mut record = empty_record();
        let start = 1_700_000_000;

        record.record_claim(player, start, 254);
        record.record_claim(player, start + DAY + 5, 254);

        assert_eq!(record.claim_count, 2);
        assert_eq!(record.last_claimed_at, start + DAY + 5);
        assert!(!record.can_claim(start + 2 * DAY));
        assert!(record.can_claim(start + 2 * DAY + 5));
    }
}
