use anchor_lang::prelude::*;

use crate::constants::{MAX_BOT_EMAIL_LEN, MAX_BOT_NAME_LEN, MAX_ROSTER_BOTS};

/// One synthetic contestant. The mail address is derived from the name and
/// doubles as the roster key the platform uses downstream.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BotContestant {
    pub name: String,
    pub email: String,

    /// Simulated portfolio value, below the roster's portfolio target.
    pub score: u64,

    /// Always zero at creation; awarded later by platform flows.
    pub tickets: u32,
}

impl BotContestant {
    /// Borsh space for one entry with both strings at their caps.
    pub const SPACE: usize =
        (4 + MAX_BOT_NAME_LEN) + (4 + MAX_BOT_EMAIL_LEN) + 8 + 4;
}

/// ---------------------------------------------------------------------------
/// ContestRoster
/// ---------------------------------------------------------------------------
/// The synthetic contestants for one contest, written whole in a single
/// seeding pass; there is never a partially-seeded roster on chain.
#[account]
pub struct ContestRoster {
    /// Contest this roster belongs to.
    pub contest: Pubkey,

    /// Slot whose clock fed the sampling draw (audit trail).
    pub seed_slot: u64,

    /// Score ceiling used for this roster.
    pub portfolio_target: u64,

    pub bots: Vec<BotContestant>,

    /// PDA bump.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 8],
}

impl ContestRoster {
    pub const SEED_PREFIX: &'static [u8] = b"roster";

    /// Serialized size excluding the 8-byte discriminator, with the bot
    /// vector at capacity.
    pub const SIZE: usize =
        32 + // contest
            8 +  // seed_slot
            8 +  // portfolio_target
            (4 + MAX_ROSTER_BOTS * BotContestant::SPACE) + // bots
            1 +  // bump
            8;   // reserved
}
