use anchor_lang::prelude::*;

use crate::constants::{MAX_CONTEST_ID_LEN, MAX_CONTEST_NAME_LEN, MAX_TIME_LEN};

/// Contest category. The wire label feeds the contest ID and the portfolio
/// target lookup.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchType {
    Mahasangram,
    GoldGala,
    SilverSummit,
    QuickGainerChallenge,
    PracticeMatch,
}

impl MatchType {
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Mahasangram => "Mahasangram",
            MatchType::GoldGala => "Gold_Gala",
            MatchType::SilverSummit => "Silver_Summit",
            MatchType::QuickGainerChallenge => "Quick_Gainer_Challenge",
            MatchType::PracticeMatch => "PracticeMatch",
        }
    }

    /// Paid categories carry the raised portfolio-target tiers.
    pub fn is_paid(&self) -> bool {
        !matches!(self, MatchType::PracticeMatch)
    }
}

/// ---------------------------------------------------------------------------
/// Contest
/// ---------------------------------------------------------------------------
/// One contest as configured by the admin dashboard. Prizes and pool fields
/// are computed once at creation and never mutated afterwards; the roster
/// lives in its own account keyed by this one.
#[account]
pub struct Contest {
    /// Platform-wide contest key, e.g. `Gold_Gala_CONTEST_20240830140500`.
    pub contest_id: String,

    /// Display name shown on the dashboard.
    pub name: String,

    pub match_type: MatchType,

    /// Trading window length in minutes.
    pub duration_minutes: u32,

    /// Entry fee per real contestant, whole rupees.
    pub entry_fee: u64,

    /// Maximum contestant entries.
    pub slots: u16,

    /// Platform cut locked in at creation (percent, 0..=100).
    pub platform_fee_percent: u8,

    /// Schedule inputs as entered (`YYYY-MM-DDTHH:MM`).
    pub start_time: String,
    pub end_time: String,

    // ─────────────────────────────
    // Prize tiers (rounded, rupees)
    // ─────────────────────────────
    pub first_prize: u64,
    pub second_prize: u64,
    pub third_prize: u64,
    pub fourth_prize: u64,
    pub fifth_prize: u64,

    /// Admin-suggested pool; 0 means "derive from slots × entry fee".
    pub prize_pool_suggested: u64,

    /// The platform's cut of the gross pool.
    pub prize_pool_platform_fees: u64,

    /// Net pool advertised to contestants.
    pub prize_pool_to_show: u64,

    /// Real entrants joined so far; platform-side flows fill this in.
    pub contestant_count: u32,

    /// Synthetic entrants written to the roster account.
    pub bot_count: u16,

    pub ended: bool,

    /// Unix timestamp when the contest record was created.
    pub created_at: i64,

    /// PDA bump.
    pub bump: u8,

    /// Versioning for future migrations.
    pub version: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Contest {
    pub const SEED_PREFIX: &'static [u8] = b"contest";
    pub const VERSION: u8 = 1;

    /// Serialized size excluding the 8-byte discriminator, with every
    /// string at its cap.
    pub const SIZE: usize =
        (4 + MAX_CONTEST_ID_LEN) +   // contest_id
            (4 + MAX_CONTEST_NAME_LEN) + // name
            1 +  // match_type
            4 +  // duration_minutes
            8 +  // entry_fee
            2 +  // slots
            1 +  // platform_fee_percent
            (4 + MAX_TIME_LEN) + // start_time
            (4 + MAX_TIME_LEN) + // end_time
            (8 * 5) + // prize tiers
            8 +  // prize_pool_suggested
            8 +  // prize_pool_platform_fees
            8 +  // prize_pool_to_show
            4 +  // contestant_count
            2 +  // bot_count
            1 +  // ended
            8 +  // created_at
            1 +  // bump
            1 +  // version
            16;  // reserved
}
