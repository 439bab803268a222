use anchor_lang::prelude::*;

/// Admin configuration PDA.
///
/// One per deployment: the dashboard authority, the default platform cut,
/// and the slot-count bounds enforced at contest creation. This account
/// holds no lamports beyond rent.
#[account]
pub struct AdminConfig {
    /// Dashboard admin authority.
    pub authority: Pubkey,

    /// Default platform cut for new contests (percent, 0..=100).
    pub platform_fee_percent: u8,

    /// Inclusive slot-count bounds for new contests.
    pub min_slots: u16,
    pub max_slots: u16,

    /// 1 = contest/roster/registry operations rejected, 0 = enabled.
    pub pause_ops: u8,

    /// Unix timestamp when the program was initialized.
    pub started_at: i64,

    /// Running count of contests created (analytics / audit).
    pub contests_created: u32,

    /// PDA bump.
    pub bump: u8,

    /// Versioning for future migrations.
    pub version: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl AdminConfig {
    pub const SEED: &'static [u8] = b"config";
    pub const VERSION: u8 = 1;

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            1 +  // platform_fee_percent
            2 +  // min_slots
            2 +  // max_slots
            1 +  // pause_ops
            8 +  // started_at
            4 +  // contests_created
            1 +  // bump
            1 +  // version
            16;  // reserved

    pub fn is_paused(&self) -> bool {
        self.pause_ops != 0
    }
}
