use anchor_lang::prelude::*;

use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Admin config PDA.
    /// Only the `authority` stored in it may update it.
    #[account(
        mut,
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    pub authority: Signer<'info>,
}

/// Updates one or more configuration parameters.
///
/// Any argument set to `None` is left unchanged. Slot bounds are validated
/// as a pair so a partial update cannot invert them.
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    new_authority: Option<Pubkey>,
    new_platform_fee_percent: Option<u8>,
    new_min_slots: Option<u16>,
    new_max_slots: Option<u16>,
    pause_ops: Option<u8>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flag
    // ─────────────────────────────────────────────
    if let Some(flag) = pause_ops {
        require!(flag <= 1, SangramErrorCode::InvalidPauseFlag);
        cfg.pause_ops = flag;
    }

    // ─────────────────────────────────────────────
    // Platform fee
    // ─────────────────────────────────────────────
    if let Some(fee) = new_platform_fee_percent {
        require!(fee <= 100, SangramErrorCode::InvalidFeePercent);
        cfg.platform_fee_percent = fee;
    }

    // ─────────────────────────────────────────────
    // Slot bounds: compute effective pair, validate, then apply
    // ─────────────────────────────────────────────
    let effective_min = new_min_slots.unwrap_or(cfg.min_slots);
    let effective_max = new_max_slots.unwrap_or(cfg.max_slots);
    require!(
        effective_min >= 2 && effective_min <= effective_max,
        SangramErrorCode::InvalidSlotBounds
    );
    cfg.min_slots = effective_min;
    cfg.max_slots = effective_max;

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(
            new_auth != Pubkey::default(),
            SangramErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != *ctx.program_id,
            SangramErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != cfg.key(),
            SangramErrorCode::InvalidAuthorityTarget
        );
        cfg.authority = new_auth;
    }

    Ok(())
}
