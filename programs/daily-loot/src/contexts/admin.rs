use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, Token};

use crate::state::*;
use crate::errors::LootError;
use crate::events::{AdminRoleChangedEvent, ItemRegisteredEvent};
use crate::item_ledger::verify_registered_items;

/// Create the loot config (once) together with the legendary box item mint
/// The currency mint must already name the config PDA as its mint authority
#[derive(Accounts)]
pub struct InitializeLoot<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + LootConfig::INIT_SPACE,
        seeds = [LOOT_CONFIG_SEED],
        bump
    )]
    pub loot_config: Box<Account<'info, LootConfig>>,

    #[account(
        constraint = currency_mint.mint_authority == COption::Some(loot_config.key())
            @ LootError::CurrencyAuthorityMismatch
    )]
    pub currency_mint: Box<Account<'info, Mint>>,

    /// Item paid for Legendary rolls until a Legendary pool is configured
    #[account(
        init,
        payer = authority,
        seeds = [ITEM_MINT_SEED, &LEGENDARY_BOX_ITEM_ID.to_le_bytes()],
        bump,
        mint::decimals = 0,
        mint::authority = loot_config,
    )]
    pub box_item_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Default-admin actions: role management and top-level settings
#[derive(Accounts)]
pub struct AuthorityAction<'info> {
    #[account(
        mut,
        seeds = [LOOT_CONFIG_SEED],
        bump = loot_config.bump,
        has_one = authority @ LootError::Unauthorized
    )]
    pub loot_config: Box<Account<'info, LootConfig>>,

    pub authority: Signer<'info>,
}

pub fn handle_initialize_loot(ctx: Context<InitializeLoot>) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let currency_mint = ctx.accounts.currency_mint.key();

    ctx.accounts
        .loot_config
        .initialize(authority, currency_mint, timestamp, ctx.bumps.loot_config);

    msg!("Loot config initialized by {} for currency {}", authority, currency_mint);
    emit!(ItemRegisteredEvent {
        item_id: LEGENDARY_BOX_ITEM_ID,
        item_mint: ctx.accounts.box_item_mint.key(),
    });
    Ok(())
}

/// A new legendary box item needs its item mint in remaining_accounts
pub fn handle_update_loot_config(
    ctx: Context<AuthorityAction>,
    new_authority: Option<Pubkey>,
    legendary_box_item_id: Option<u64>,
    is_paused: Option<bool>,
) -> Result<()> {
    if let Some(item_id) = legendary_box_item_id {
        verify_registered_items(
            ctx.remaining_accounts,
            &[item_id],
            &ctx.accounts.loot_config.key(),
        )?;
    }

    let config = &mut ctx.accounts.loot_config;

    if let Some(authority) = new_authority {
        config.transfer_authority(authority)?;
        msg!("Loot authority transferred to {}", authority);
    }
    if let Some(item_id) = legendary_box_item_id {
        msg!("Legendary box item set to {}", item_id);
        config.set_legendary_box_item_id(item_id);
    }
    if let Some(paused) = is_paused {
        msg!("Loot claims paused: {}", paused);
        config.is_paused = paused;
    }

    Ok(())
}

pub fn handle_grant_admin_role(ctx: Context<AuthorityAction>, account: Pubkey) -> Result<()> {
    let granted = ctx.accounts.loot_config.grant_admin_role(account)?;
    if !granted {
        msg!("{} already holds the admin role", account);
        return Ok(());
    }

    msg!("Admin role granted to {}", account);
    emit!(AdminRoleChangedEvent {
        authority: ctx.accounts.authority.key(),
        account,
        granted: true,
    });
    Ok(())
}

pub fn handle_revoke_admin_role(ctx: Context<AuthorityAction>, account: Pubkey) -> Result<()> {
    if !ctx.accounts.loot_config.revoke_admin_role(&account) {
        msg!("{} does not hold the admin role", account);
        return Ok(());
    }

    msg!("Admin role revoked from {}", account);
    emit!(AdminRoleChangedEvent {
        authority: ctx.accounts.authority.key(),
        account,
        granted: false,
    });
    Ok(())
}
