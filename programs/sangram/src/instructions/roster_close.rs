use anchor_lang::prelude::*;

use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::contest::Contest;
use crate::state::roster::ContestRoster;

#[derive(Accounts)]
pub struct CloseRoster<'info> {
    #[account(
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    #[account(constraint = contest.ended @ SangramErrorCode::ContestNotEnded)]
    pub contest: Box<Account<'info, Contest>>,

    #[account(
        mut,
        seeds = [ContestRoster::SEED_PREFIX, contest.key().as_ref()],
        bump = roster.bump,
        constraint = roster.contest == contest.key() @ SangramErrorCode::RosterContestMismatch,
        close = authority
    )]
    pub roster: Box<Account<'info, ContestRoster>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn close_roster_handler(ctx: Context<CloseRoster>) -> Result<()> {
    msg!(
        "Roster for {} closed ({} bots)",
        ctx.accounts.contest.contest_id,
        ctx.accounts.roster.bots.len(),
    );
    Ok(())
}
