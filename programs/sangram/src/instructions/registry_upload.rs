use anchor_lang::prelude::*;

use crate::constants::{MAX_BOT_NAME_LEN, MAX_REGISTRY_NAMES};
use crate::errors::SangramErrorCode;
use crate::state::config::AdminConfig;
use crate::state::name_registry::NameRegistry;
use crate::utils::roster::split_name_blob;

#[derive(Accounts)]
pub struct UploadNameRegistry<'info> {
    #[account(
        seeds = [AdminConfig::SEED],
        bump = config.bump,
        has_one = authority @ SangramErrorCode::Unauthorized
    )]
    pub config: Account<'info, AdminConfig>,

    #[account(
        mut,
        seeds = [NameRegistry::SEED],
        bump = name_registry.bump
    )]
    pub name_registry: Box<Account<'info, NameRegistry>>,

    pub authority: Signer<'info>,
}

/// Replaces the candidate pool with the parsed upload. The blob is the raw
/// sheet export: one name per line, parsed once here and never re-read
/// during roster seeding.
pub fn upload_name_registry_handler(
    ctx: Context<UploadNameRegistry>,
    blob: String,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.is_paused(), SangramErrorCode::OpsPaused);
    require!(!blob.is_empty(), SangramErrorCode::EmptyNameBlob);

    let names = split_name_blob(&blob);
    require!(
        names.len() <= MAX_REGISTRY_NAMES,
        SangramErrorCode::TooManyNames
    );
    for name in &names {
        require!(name.len() <= MAX_BOT_NAME_LEN, SangramErrorCode::NameTooLong);
    }

    let registry = &mut ctx.accounts.name_registry;
    registry.names = names;
    registry.revision = registry.revision.saturating_add(1);

    msg!(
        "Name registry revision {}: {} candidates ({} usable)",
        registry.revision,
        registry.names.len(),
        registry.usable_len()
    );

    Ok(())
}
