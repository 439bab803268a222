/// Slot-count bounds applied to new contests at deploy time.
/// The ceiling has moved between deployments; it lives in config, not code.
pub const DEFAULT_MIN_SLOTS: u16 = 10;
pub const DEFAULT_MAX_SLOTS: u16 = 2001;

/// Prize tiers settle in whole rupees, rounded to this step.
pub const PRIZE_STEP: u64 = 10;

/// Fifth place is a flat amount keyed off the pool size.
pub const FIFTH_PRIZE_POOL_CUTOFF: u64 = 10_000;
pub const FIFTH_PRIZE_SMALL: u64 = 10;
pub const FIFTH_PRIZE_LARGE: u64 = 20;

/// Simulated portfolio scores for bot contestants: every score lands in
/// [BOT_SCORE_FLOOR, portfolio target).
pub const BOT_SCORE_FLOOR: u64 = 50_000;
pub const PORTFOLIO_TARGET_BASE: u64 = 300_000;
pub const PORTFOLIO_TARGET_HIGH: u64 = 400_000;

/// Entry-fee tiers that select the raised portfolio target on paid matches.
pub const HIGH_TARGET_ENTRY_FEES: [u64; 3] = [1_000, 500, 250];
pub const BASE_TARGET_ENTRY_FEES: [u64; 3] = [200, 100, 50];

/// Mail domain appended to a bot's name; the address doubles as the
/// roster key downstream.
pub const BOT_EMAIL_DOMAIN: &str = "@gmail.com";

// String caps; account space math depends on these.
pub const MAX_CONTEST_ID_LEN: usize = 64;
pub const MAX_CONTEST_NAME_LEN: usize = 64;
pub const MAX_TIME_LEN: usize = 20;
pub const MAX_BOT_NAME_LEN: usize = 24;
pub const MAX_BOT_EMAIL_LEN: usize = MAX_BOT_NAME_LEN + BOT_EMAIL_DOMAIN.len();

/// Hard caps on the candidate pool and on a single contest's roster
/// (both bound the fixed account allocations).
pub const MAX_REGISTRY_NAMES: usize = 512;
pub const MAX_ROSTER_BOTS: usize = 256;

/// Digits expected in a `YYYY-MM-DDTHH:MM` start time once separators
/// are stripped.
pub const SCHEDULE_DIGITS: usize = 12;
