use anchor_lang::prelude::*;

use crate::constants::MAX_ROSTER_BOTS;
use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::contest::Contest;
use crate::state::name_registry::NameRegistry;
use crate::state::roster::ContestRoster;
use crate::utils::rng::XorShift64Star;
use crate::utils::roster::{bot_count, portfolio_target, sample_roster};

#[derive(Accounts)]
pub struct SeedRoster<'info> {
    #[account(
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    #[account(
        seeds = [NameRegistry::SEED],
        bump = name_registry.bump
    )]
    pub name_registry: Box<Account<'info, NameRegistry>>,

    #[account(mut)]
    pub contest: Box<Account<'info, Contest>>,

    /// One roster per contest; a second seeding attempt fails at init.
    #[account(
        init,
        payer = authority,
        space = 8 + ContestRoster::SIZE,
        seeds = [ContestRoster::SEED_PREFIX, contest.key().as_ref()],
        bump
    )]
    pub roster: Box<Account<'info, ContestRoster>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Fills a contest's roster with synthetic contestants.
///
/// The whole roster is drawn and written in this one instruction: the
/// candidate pool is read once, the bot count is drawn, and every bot is
/// sampled without replacement. Either the full roster lands or the
/// transaction fails; no partial rosters.
pub fn seed_roster_handler(ctx: Context<SeedRoster>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let registry = &ctx.accounts.name_registry;
    let contest = &mut ctx.accounts.contest;

    require!(!cfg.is_paused(), SangramErrorCode::OpsPaused);
    require!(!contest.ended, SangramErrorCode::ContestEnded);
    require!(contest.bot_count == 0, SangramErrorCode::RosterAlreadySeeded);
    require!(registry.usable_len() > 0, SangramErrorCode::EmptyNamePool);

    let clock = Clock::get()?;
    let contest_key = contest.key();
    let mut rng =
        XorShift64Star::from_seed_material(clock.slot, clock.unix_timestamp, contest_key.as_ref());

    // ─────────────────────────────
    // Draw the roster size
    // ─────────────────────────────
    let drawn = bot_count(contest.slots as u64, &mut rng) as usize;
    let capped = drawn.min(MAX_ROSTER_BOTS);
    if capped < drawn {
        msg!("Bot draw {} exceeds roster capacity, capped to {}", drawn, capped);
    }

    // ─────────────────────────────
    // Sample the roster
    // ─────────────────────────────
    let target = portfolio_target(contest.match_type, contest.entry_fee);
    let bots = sample_roster(&registry.names, capped, target, &mut rng);

    let roster = &mut ctx.accounts.roster;
    roster.contest = contest_key;
    roster.seed_slot = clock.slot;
    roster.portfolio_target = target;
    roster.bots = bots;
    roster.bump = ctx.bumps.roster;
    roster._reserved = [0; 8];

    contest.bot_count = roster.bots.len() as u16;

    msg!(
        "Roster for {}: {} bots, portfolio target {}",
        contest.contest_id,
        contest.bot_count,
        target,
    );

    Ok(())
}
