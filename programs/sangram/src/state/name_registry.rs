use anchor_lang::prelude::*;

use crate::constants::{MAX_BOT_NAME_LEN, MAX_REGISTRY_NAMES};

/// Candidate bot names, replaced wholesale on every upload of the curated
/// newline-delimited sheet export.
#[account]
pub struct NameRegistry {
    /// Who may replace the candidate pool.
    pub authority: Pubkey,

    /// Bumped on every upload (audit trail).
    pub revision: u32,

    /// The uploaded split kept verbatim; the final element is reserved and
    /// never sampled.
    pub names: Vec<String>,

    /// PDA bump.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 8],
}

impl NameRegistry {
    pub const SEED: &'static [u8] = b"names";

    /// Serialized size excluding the 8-byte discriminator, with the name
    /// list at capacity.
    pub const SIZE: usize =
        32 + // authority
            4 +  // revision
            (4 + MAX_REGISTRY_NAMES * (4 + MAX_BOT_NAME_LEN)) + // names
            1 +  // bump
            8;   // reserved

    /// Names eligible for sampling: the stored list minus the reserved tail.
    pub fn usable_len(&self) -> usize {
        self.names.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn registry_size_covers_full_capacity() {
        let registry = NameRegistry {
            authority: Pubkey::default(),
            revision: 0,
            names: vec!["x".repeat(MAX_BOT_NAME_LEN); MAX_REGISTRY_NAMES],
            bump: 0,
            _reserved: [0; 8],
        };

        let bytes = registry.try_to_vec().unwrap();
        assert_eq!(bytes.len(), NameRegistry::SIZE);
    }

    #[test]
    fn usable_len_reserves_the_tail() {
        let mut registry = NameRegistry {
            authority: Pubkey::default(),
            revision: 0,
            names: vec!["a".into(), "b".into(), "c".into()],
            bump: 0,
            _reserved: [0; 8],
        };
        assert_eq!(registry.usable_len(), 2);

        registry.names.clear();
        assert_eq!(registry.usable_len(), 0);
    }
}
