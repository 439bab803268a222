use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("DjeSangram4rngbyx1hD8t6NpidGRpzpn1RdrMaWNhQe");

security_txt! {
    name: "Sangram",
    project_url: "https://sangram.play",
    source_code: "https://github.com/sangram-play/sangram-program",
    contacts: "mailto:security@sangram.play, https://twitter.com/SangramPlay",
    policy: "https://github.com/sangram-play/sangram-program/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::contest::MatchType;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod sangram {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>, platform_fee_percent: u8) -> Result<()> {
        initialize_handler(ctx, platform_fee_percent)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_authority: Option<Pubkey>,
        new_platform_fee_percent: Option<u8>,
        new_min_slots: Option<u16>,
        new_max_slots: Option<u16>,
        pause_ops: Option<u8>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            new_authority,
            new_platform_fee_percent,
            new_min_slots,
            new_max_slots,
            pause_ops,
        )
    }

    // -------------------------------------------------------------------------
    // emergency_pause
    // -------------------------------------------------------------------------
    pub fn emergency_pause(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(ctx, None, None, None, None, Some(1))
    }

    // -------------------------------------------------------------------------
    // upload_name_registry
    // -------------------------------------------------------------------------
    pub fn upload_name_registry(ctx: Context<UploadNameRegistry>, blob: String) -> Result<()> {
        upload_name_registry_handler(ctx, blob)
    }

    // =====================================================================
    // CONTEST LIFECYCLE
    // =====================================================================

    pub fn create_contest(
        ctx: Context<CreateContest>,
        name: String,
        match_type: MatchType,
        duration_minutes: u32,
        slots: u16,
        entry_fee: u64,
        platform_fee_percent: Option<u8>,
        prize_pool_suggested: Option<u64>,
        start_time: String,
        end_time: String,
        manual_id: Option<String>,
    ) -> Result<()> {
        create_contest_handler(
            ctx,
            name,
            match_type,
            duration_minutes,
            slots,
            entry_fee,
            platform_fee_percent,
            prize_pool_suggested,
            start_time,
            end_time,
            manual_id,
        )
    }

    pub fn seed_roster(ctx: Context<SeedRoster>) -> Result<()> {
        seed_roster_handler(ctx)
    }

    pub fn end_contest(ctx: Context<EndContest>) -> Result<()> {
        end_contest_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // rent reclamation
    // -------------------------------------------------------------------------
    pub fn close_roster(ctx: Context<CloseRoster>) -> Result<()> {
        close_roster_handler(ctx)
    }

    pub fn close_contest(ctx: Context<CloseContest>) -> Result<()> {
        close_contest_handler(ctx)
    }
}
