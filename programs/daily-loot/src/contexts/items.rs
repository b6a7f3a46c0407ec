use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::state::*;
use crate::errors::LootError;
use crate::events::ItemRegisteredEvent;

/// Create the 0-decimal mint backing an item id
/// PDA seeds: ["item_mint", item_id (le bytes)], mint authority = loot config
#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct RegisterItem<'info> {
    #[account(
        seeds = [LOOT_CONFIG_SEED],
        bump = loot_config.bump,
        constraint = loot_config.has_admin_role(&admin.key()) @ LootError::Unauthorized
    )]
    pub loot_config: Box<Account<'info, LootConfig>>,

    #[account(
        init,
        payer = admin,
        seeds = [ITEM_MINT_SEED, &item_id.to_le_bytes()],
        bump,
        mint::decimals = 0,
        mint::authority = loot_config,
    )]
    pub item_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_register_item(ctx: Context<RegisterItem>, item_id: u64) -> Result<()> {
    let item_mint = ctx.accounts.item_mint.key();

    msg!("Item {} registered with mint {}", item_id, item_mint);
    emit!(ItemRegisteredEvent { item_id, item_mint });
    Ok(())
}
