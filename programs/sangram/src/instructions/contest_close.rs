use anchor_lang::prelude::*;

use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::contest::Contest;

#[derive(Accounts)]
pub struct CloseContest<'info> {
    #[account(
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    /// Close the roster first; this only reclaims the contest record.
    #[account(
        mut,
        constraint = contest.ended @ SangramErrorCode::ContestNotEnded,
        close = authority
    )]
    pub contest: Box<Account<'info, Contest>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn close_contest_handler(ctx: Context<CloseContest>) -> Result<()> {
    msg!("Contest {} closed", ctx.accounts.contest.contest_id);
    Ok(())
}
