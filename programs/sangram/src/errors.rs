use anchor_lang::prelude::*;

#[error_code]
pub enum SangramErrorCode {
    // ─────────────────────────────
    // Access control / configuration
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Admin operations paused")]
    OpsPaused,

    InvalidAuthorityTarget,
    InvalidFeePercent,
    InvalidSlotBounds,
    InvalidPauseFlag,

    #[msg("Math overflow")]
    MathOverflow,

    // ─────────────────────────────
    // Contest form validation
    // ─────────────────────────────
    #[msg("Slot count out of range")]
    InvalidSlotCount,

    #[msg("Invalid contest name")]
    InvalidContestName,

    InvalidDuration,
    InvalidTimeWindow,

    #[msg("Contest ID not derivable")]
    InvalidContestId,

    // ─────────────────────────────
    // Candidate name registry
    // ─────────────────────────────
    #[msg("Empty name upload")]
    EmptyNameBlob,

    TooManyNames,
    NameTooLong,

    // ─────────────────────────────
    // Roster seeding
    // ─────────────────────────────
    #[msg("Candidate pool empty")]
    EmptyNamePool,

    #[msg("Roster already seeded")]
    RosterAlreadySeeded,

    RosterContestMismatch,

    // ─────────────────────────────
    // Contest lifecycle
    // ─────────────────────────────
    #[msg("Contest already ended")]
    ContestEnded,

    #[msg("Contest still open")]
    ContestNotEnded,
}
