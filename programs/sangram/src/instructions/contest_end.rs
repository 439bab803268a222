use anchor_lang::prelude::*;

use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::contest::Contest;

#[derive(Accounts)]
pub struct EndContest<'info> {
    #[account(
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    #[account(mut)]
    pub contest: Box<Account<'info, Contest>>,

    pub authority: Signer<'info>,
}

pub fn end_contest_handler(ctx: Context<EndContest>) -> Result<()> {
    let contest = &mut ctx.accounts.contest;
    require!(!contest.ended, SangramErrorCode::ContestEnded);

    contest.ended = true;

    msg!("Contest {} ended", contest.contest_id);
    Ok(())
}
