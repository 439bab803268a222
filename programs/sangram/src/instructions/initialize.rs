use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_SLOTS, DEFAULT_MIN_SLOTS};
use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::name_registry::NameRegistry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Admin config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + AdminConfig::SIZE,
        seeds = [AdminConfig::SEED],
        bump
    )]
    pub config: Account<'info, AdminConfig>,

    /// Candidate-name registry, created empty; filled by
    /// `upload_name_registry`.
    #[account(
        init,
        payer = authority,
        space = 8 + NameRegistry::SIZE,
        seeds = [NameRegistry::SEED],
        bump
    )]
    pub name_registry: Box<Account<'info, NameRegistry>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>, platform_fee_percent: u8) -> Result<()> {
    require!(
        platform_fee_percent <= 100,
        SangramErrorCode::InvalidFeePercent
    );

    let clock = Clock::get()?;
    let authority_key = ctx.accounts.authority.key();

    // ────────────────────────────────────────────────
    // Admin config
    // ────────────────────────────────────────────────
    let cfg = &mut ctx.accounts.config;
    cfg.authority = authority_key;
    cfg.platform_fee_percent = platform_fee_percent;
    cfg.min_slots = DEFAULT_MIN_SLOTS;
    cfg.max_slots = DEFAULT_MAX_SLOTS;
    cfg.pause_ops = 0;
    cfg.started_at = clock.unix_timestamp;
    cfg.contests_created = 0;
    cfg.bump = ctx.bumps.config;
    cfg.version = AdminConfig::VERSION;
    cfg._reserved = [0; 16];

    // ────────────────────────────────────────────────
    // Name registry (empty until first upload)
    // ────────────────────────────────────────────────
    let registry = &mut ctx.accounts.name_registry;
    registry.authority = authority_key;
    registry.revision = 0;
    registry.names = Vec::new();
    registry.bump = ctx.bumps.name_registry;
    registry._reserved = [0; 8];

    Ok(())
}
