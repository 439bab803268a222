use crate::constants::{
    FIFTH_PRIZE_LARGE, FIFTH_PRIZE_POOL_CUTOFF, FIFTH_PRIZE_SMALL, PRIZE_STEP,
};

/// Named prize tiers for one contest, each already rounded to `PRIZE_STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeBreakdown {
    pub first: u64,
    pub second: u64,
    pub third: u64,
    pub fourth: u64,
    pub fifth: u64,
}

impl PrizeBreakdown {
    pub const ZERO: PrizeBreakdown = PrizeBreakdown {
        first: 0,
        second: 0,
        third: 0,
        fourth: 0,
        fifth: 0,
    };
}

/// Split `pool_basis` across the five named tiers.
///
/// Returns `None` when either input is zero; the caller keeps whatever it
/// was showing rather than displaying a half-computed breakdown. Each tier
/// rounds independently against its own ratio; the sum is NOT re-normalized
/// against the pool.
///
/// Slot bands:
/// - up to 10 entries: 1/2, 3/10, 1/5, no fourth or fifth
/// - 11 to 50:        1/2, 3/10, 1/10, 1/70, flat fifth
/// - 51 and above:    9/20, 1/4, 1/10, 1/35, flat fifth
pub fn compute_prize_breakdown(pool_basis: u64, slots: u16) -> Option<PrizeBreakdown> {
    if pool_basis == 0 || slots == 0 {
        return None;
    }

    let fifth_flat = if pool_basis < FIFTH_PRIZE_POOL_CUTOFF {
        FIFTH_PRIZE_SMALL
    } else {
        FIFTH_PRIZE_LARGE
    };

    let breakdown = if slots <= 10 {
        PrizeBreakdown {
            first: tier_share(pool_basis, 1, 2),
            second: tier_share(pool_basis, 3, 10),
            third: tier_share(pool_basis, 1, 5),
            fourth: 0,
            fifth: 0,
        }
    } else if slots <= 50 {
        PrizeBreakdown {
            first: tier_share(pool_basis, 1, 2),
            second: tier_share(pool_basis, 3, 10),
            third: tier_share(pool_basis, 1, 10),
            fourth: tier_share(pool_basis, 1, 70),
            fifth: fifth_flat,
        }
    } else {
        PrizeBreakdown {
            first: tier_share(pool_basis, 9, 20),
            second: tier_share(pool_basis, 1, 4),
            third: tier_share(pool_basis, 1, 10),
            fourth: tier_share(pool_basis, 1, 35),
            fifth: fifth_flat,
        }
    };

    Some(breakdown)
}

/// pool × num/den, rounded half-up to the nearest `PRIZE_STEP`.
/// Inputs are non-negative, so half-up equals half-away-from-zero.
fn tier_share(pool: u64, num: u64, den: u64) -> u64 {
    let scaled = pool as u128 * num as u128;
    let step = den as u128 * PRIZE_STEP as u128;
    ((scaled + step / 2) / step * PRIZE_STEP as u128) as u64
}

/// Displayed prize pool: slots × entry fee net of the platform cut,
/// rounded half-up to the nearest whole rupee. `None` on u64 overflow.
pub fn prize_pool_to_show(slots: u16, entry_fee: u64, platform_fee_percent: u8) -> Option<u64> {
    if platform_fee_percent > 100 {
        return None;
    }
    let gross = slots as u128 * entry_fee as u128;
    let net = gross * (100 - platform_fee_percent as u128);
    u64::try_from((net + 50) / 100).ok()
}

/// Gross pool before the platform cut. `None` on u64 overflow.
pub fn gross_pool(slots: u16, entry_fee: u64) -> Option<u64> {
    (slots as u64).checked_mul(entry_fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_band_exact_values() {
        let b = compute_prize_breakdown(10_000, 20).unwrap();
        assert_eq!(b.first, 5_000);
        assert_eq!(b.second, 3_000);
        assert_eq!(b.third, 1_000);
        assert_eq!(b.fourth, 140); // 10000/70 = 142.86 -> 140
        assert_eq!(b.fifth, 20); // pool at the 10k cutoff
    }

    #[test]
    fn small_band_has_three_tiers() {
        let b = compute_prize_breakdown(1_000, 10).unwrap();
        assert_eq!(b.first, 500);
        assert_eq!(b.second, 300);
        assert_eq!(b.third, 200);
        assert_eq!(b.fourth, 0);
        assert_eq!(b.fifth, 0);
    }

    #[test]
    fn large_band_flat_fifth_tracks_pool() {
        let small = compute_prize_breakdown(5_000, 51).unwrap();
        assert_eq!(small.first, 2_250);
        assert_eq!(small.second, 1_250);
        assert_eq!(small.third, 500);
        assert_eq!(small.fourth, 140); // 5000/35 = 142.86 -> 140
        assert_eq!(small.fifth, 10);

        let large = compute_prize_breakdown(20_000, 51).unwrap();
        assert_eq!(large.first, 9_000);
        assert_eq!(large.fifth, 20);
    }

    #[test]
    fn band_edges() {
        // 10 vs 11: the fourth/fifth tiers appear
        let ten = compute_prize_breakdown(10_000, 10).unwrap();
        let eleven = compute_prize_breakdown(10_000, 11).unwrap();
        assert_eq!(ten.fourth, 0);
        assert_eq!(ten.fifth, 0);
        assert_eq!(eleven.fourth, 140);
        assert_eq!(eleven.fifth, 20);

        // 50 vs 51: the first-place ratio drops from 1/2 to 9/20
        let fifty = compute_prize_breakdown(10_000, 50).unwrap();
        let fifty_one = compute_prize_breakdown(10_000, 51).unwrap();
        assert_eq!(fifty.first, 5_000);
        assert_eq!(fifty_one.first, 4_500);
    }

    #[test]
    fn rounds_half_up_to_step() {
        // 15 * 1/2 = 7.5 -> 10; 15 * 3/10 = 4.5 -> 0
        let b = compute_prize_breakdown(15, 10).unwrap();
        assert_eq!(b.first, 10);
        assert_eq!(b.second, 0);
        // 25 * 1/5 = 5, exactly half a step, rounds up
        let b = compute_prize_breakdown(25, 10).unwrap();
        assert_eq!(b.third, 10);
    }

    #[test]
    fn not_computable_inputs() {
        assert!(compute_prize_breakdown(0, 20).is_none());
        assert!(compute_prize_breakdown(10_000, 0).is_none());
    }

    #[test]
    fn breakdown_is_pure() {
        let a = compute_prize_breakdown(73_210, 33).unwrap();
        let b = compute_prize_breakdown(73_210, 33).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pool_to_show_applies_platform_cut() {
        assert_eq!(prize_pool_to_show(20, 500, 20), Some(8_000));
        assert_eq!(prize_pool_to_show(20, 500, 0), Some(10_000));
        assert_eq!(prize_pool_to_show(20, 500, 100), Some(0));
    }

    #[test]
    fn pool_to_show_rounds_to_nearest() {
        // 13 * 77 = 1001 gross; 93% = 930.93 -> 931
        assert_eq!(prize_pool_to_show(13, 77, 7), Some(931));
    }

    #[test]
    fn pool_overflow_is_signalled() {
        assert_eq!(prize_pool_to_show(2_001, u64::MAX, 0), None);
        assert_eq!(gross_pool(2_001, u64::MAX), None);
    }
}
