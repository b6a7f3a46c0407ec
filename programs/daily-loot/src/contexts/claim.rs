use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, AssociatedToken};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::state::*;
use crate::errors::LootError;
use crate::events::DailyClaimEvent;
use crate::item_ledger::select_item_accounts;
use crate::randomness::{DrawContext, SlotHashRandomness};
use crate::resolver::{check_claim_gate, resolve_claim};

// ============================================================================
// DAILY CLAIM - one reward per recipient per 24h
// ============================================================================

/// Claim the daily reward for a recipient
/// Anyone may pay for the claim; the reward always goes to `recipient`.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// CHECK: Any wallet may receive the daily reward except the null account
    #[account(constraint = recipient.key() != Pubkey::default() @ LootError::InvalidRecipient)]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        seeds = [LOOT_CONFIG_SEED],
        bump = loot_config.bump,
        has_one = currency_mint
    )]
    pub loot_config: Box<Account<'info, LootConfig>>,

    /// Recipient cooldown state
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ClaimRecord::INIT_SPACE,
        seeds = [CLAIM_RECORD_SEED, recipient.key().as_ref()],
        bump
    )]
    pub claim_record: Box<Account<'info, ClaimRecord>>,

    #[account(mut)]
    pub currency_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = currency_mint,
        associated_token::authority = recipient
    )]
    pub recipient_currency_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Slot hashes sysvar for randomness
    #[account(address = anchor_lang::solana_program::sysvar::slot_hashes::ID)]
    pub slot_hashes: AccountInfo<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    // remaining_accounts: pairs of (item_mint, recipient_item_account) for every
    // item the recipient could roll; only the rolled item's pair is used
}

impl<'info> Claim<'info> {
    /// Credit currency through the game-authority mint
    fn credit_currency(&self, amount: u64, signer: &[&[&[u8]]]) -> Result<()> {
        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.currency_mint.to_account_info(),
                    to: self.recipient_currency_account.to_account_info(),
                    authority: self.loot_config.to_account_info(),
                },
                signer,
            ),
            amount,
        )
    }

    /// Mint one unit of an item into the recipient's associated token account
    fn mint_item(
        &self,
        remaining: &[AccountInfo<'info>],
        item_id: u64,
        signer: &[&[&[u8]]],
    ) -> Result<()> {
        let keys: Vec<Pubkey> = remaining.iter().map(|info| info.key()).collect();
        let mint_index = select_item_accounts(&keys, &self.recipient.key(), item_id)?;
        let item_mint = &remaining[mint_index];
        let recipient_item_account = &remaining[mint_index + 1];

        associated_token::create_idempotent(CpiContext::new(
            self.associated_token_program.to_account_info(),
            associated_token::Create {
                payer: self.payer.to_account_info(),
                associated_token: recipient_item_account.clone(),
                authority: self.recipient.to_account_info(),
                mint: item_mint.clone(),
                system_program: self.system_program.to_account_info(),
                token_program: self.token_program.to_account_info(),
            },
        ))?;

        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: item_mint.clone(),
                    to: recipient_item_account.clone(),
                    authority: self.loot_config.to_account_info(),
                },
                signer,
            ),
            ITEM_REWARD_COUNT,
        )
    }
}

pub fn handle_claim<'info>(ctx: Context<'_, '_, '_, 'info, Claim<'info>>, entropy: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let recipient_key = ctx.accounts.recipient.key();
    let payer_key = ctx.accounts.payer.key();

    // =====================================================================
    // STEP 1: Gate
    // =====================================================================

    check_claim_gate(&ctx.accounts.loot_config, &ctx.accounts.claim_record, &recipient_key, now)?;

    // =====================================================================
    // STEP 2: Roll tier, decide kind, resolve payout
    // =====================================================================

    let resolved = {
        let slot_hashes_data = ctx.accounts.slot_hashes.try_borrow_data()?;
        let rng = SlotHashRandomness::new(
            entropy,
            &DrawContext {
                slot_hashes: &slot_hashes_data[..],
                caller: &payer_key,
                recipient: &recipient_key,
                timestamp: now,
                slot: clock.slot,
            },
        );
        resolve_claim(&ctx.accounts.loot_config, &rng)?
    };

    // =====================================================================
    // STEP 3: Apply to the currency / item ledgers
    // =====================================================================

    let config_bump = ctx.accounts.loot_config.bump;
    let config_seeds: &[&[u8]] = &[LOOT_CONFIG_SEED, &[config_bump]];
    let signer = &[config_seeds];

    match resolved.kind {
        RewardKind::Currency => ctx.accounts.credit_currency(resolved.reward_data, signer)?,
        RewardKind::Item => {
            ctx.accounts
                .mint_item(ctx.remaining_accounts, resolved.reward_data, signer)?
        }
    }

    // =====================================================================
    // STEP 4: Commit cooldown and emit
    // =====================================================================

    ctx.accounts
        .claim_record
        .record_claim(recipient_key, now, ctx.bumps.claim_record);

    msg!(
        "Daily claim for {}: {} {} (roll {}, data {})",
        recipient_key,
        resolved.rarity.name(),
        resolved.kind.name(),
        resolved.roll,
        resolved.reward_data
    );
    emit!(DailyClaimEvent {
        recipient: recipient_key,
        reward_kind: resolved.kind,
        rarity: resolved.rarity,
        reward_data: resolved.reward_data,
        claimed_at: now,
    });

    Ok(())
}
