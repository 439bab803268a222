use anchor_lang::prelude::*;

use crate::constants::{MAX_CONTEST_ID_LEN, MAX_CONTEST_NAME_LEN, MAX_TIME_LEN};
use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::contest::{Contest, MatchType};
use crate::utils::contest_id::{contest_id, contest_seed, resolve_schedule_id};
use crate::utils::prize::{
    compute_prize_breakdown, gross_pool, prize_pool_to_show, PrizeBreakdown,
};

#[derive(Accounts)]
#[instruction(
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
)]
pub struct CreateContest<'info> {
    #[account(
        mut,
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    /// Contests with the same category and schedule ID collapse to the same
    /// address, so a re-used contest ID fails right here at init.
    #[account(
        init,
        payer = authority,
        space = 8 + Contest::SIZE,
        seeds = [
            Contest::SEED_PREFIX,
            &[match_type as u8],
            &contest_seed(&start_time, &manual_id),
        ],
        bump
    )]
    pub contest: Box<Account<'info, Contest>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_contest_handler(
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
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.is_paused(), SangramErrorCode::OpsPaused);

    // ─────────────────────────────
    // Form validation
    // ─────────────────────────────
    require!(
        !name.is_empty() && name.len() <= MAX_CONTEST_NAME_LEN,
        SangramErrorCode::InvalidContestName
    );
    require!(
        slots >= cfg.min_slots && slots <= cfg.max_slots,
        SangramErrorCode::InvalidSlotCount
    );
    require!(duration_minutes > 0, SangramErrorCode::InvalidDuration);
    require!(
        !start_time.is_empty()
            && start_time.len() <= MAX_TIME_LEN
            && end_time.len() <= MAX_TIME_LEN,
        SangramErrorCode::InvalidTimeWindow
    );
    // Lexicographic order matches chronological order for this format.
    require!(end_time > start_time, SangramErrorCode::InvalidTimeWindow);

    let fee_percent = platform_fee_percent.unwrap_or(cfg.platform_fee_percent);
    require!(fee_percent <= 100, SangramErrorCode::InvalidFeePercent);

    // ─────────────────────────────
    // Contest ID
    // ─────────────────────────────
    let (_, schedule_id) = resolve_schedule_id(&start_time, &manual_id)
        .ok_or(SangramErrorCode::InvalidContestId)?;
    let contest_id = contest_id(match_type, &schedule_id);
    require!(
        contest_id.len() <= MAX_CONTEST_ID_LEN,
        SangramErrorCode::InvalidContestId
    );

    // ─────────────────────────────
    // Pool and prize tiers
    // ─────────────────────────────
    let gross = gross_pool(slots, entry_fee).ok_or(SangramErrorCode::MathOverflow)?;
    let pool_to_show = prize_pool_to_show(slots, entry_fee, fee_percent)
        .ok_or(SangramErrorCode::MathOverflow)?;
    let platform_fees = gross.saturating_sub(pool_to_show);

    let suggested = prize_pool_suggested.unwrap_or(0);
    let pool_basis = if suggested > 0 { suggested } else { pool_to_show };

    // A zero basis (free practice contests) leaves every tier at zero.
    let breakdown =
        compute_prize_breakdown(pool_basis, slots).unwrap_or(PrizeBreakdown::ZERO);

    // ─────────────────────────────
    // Persist the contest record
    // ─────────────────────────────
    let clock = Clock::get()?;
    let contest = &mut ctx.accounts.contest;

    contest.contest_id = contest_id;
    contest.name = name;
    contest.match_type = match_type;
    contest.duration_minutes = duration_minutes;
    contest.entry_fee = entry_fee;
    contest.slots = slots;
    contest.platform_fee_percent = fee_percent;
    contest.start_time = start_time;
    contest.end_time = end_time;

    contest.first_prize = breakdown.first;
    contest.second_prize = breakdown.second;
    contest.third_prize = breakdown.third;
    contest.fourth_prize = breakdown.fourth;
    contest.fifth_prize = breakdown.fifth;

    contest.prize_pool_suggested = suggested;
    contest.prize_pool_platform_fees = platform_fees;
    contest.prize_pool_to_show = pool_to_show;

    contest.contestant_count = 0;
    contest.bot_count = 0;
    contest.ended = false;
    contest.created_at = clock.unix_timestamp;
    contest.bump = ctx.bumps.contest;
    contest.version = Contest::VERSION;
    contest._reserved = [0; 16];

    cfg.contests_created = cfg.contests_created.saturating_add(1);

    msg!(
        "Contest {} created | {} slots | {} entry | pool {}",
        contest.contest_id,
        contest.slots,
        contest.entry_fee,
        contest.prize_pool_to_show,
    );

    Ok(())
}
