use crate::constants::{
    BASE_TARGET_ENTRY_FEES, BOT_EMAIL_DOMAIN, BOT_SCORE_FLOOR, HIGH_TARGET_ENTRY_FEES,
    PORTFOLIO_TARGET_BASE, PORTFOLIO_TARGET_HIGH,
};
use crate::state::contest::MatchType;
use crate::state::roster::BotContestant;
use crate::utils::rng::{gen_range, RngSource};

/// Split a newline-delimited candidate upload the way the sheet export is
/// produced: `\r?\n` separators, segments kept verbatim (no trimming).
pub fn split_name_blob(blob: &str) -> Vec<String> {
    blob.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Candidates eligible for sampling. The final element of the stored list
/// is never drawn from.
pub fn usable_names(names: &[String]) -> &[String] {
    &names[..names.len().saturating_sub(1)]
}

/// Number of synthetic contestants for a contest: uniform in [slots/3, slots).
pub fn bot_count(slots: u64, rng: &mut impl RngSource) -> u64 {
    gen_range(rng, slots / 3, slots)
}

/// Upper bound for a bot's simulated portfolio score.
///
/// Paid match types at the premium entry fees raise the target; the
/// standard fees keep the base target (written out so both fee tiers stay
/// visible side by side). Everything else, including practice matches,
/// falls through to the base target.
pub fn portfolio_target(match_type: MatchType, entry_fee: u64) -> u64 {
    if match_type.is_paid() {
        if HIGH_TARGET_ENTRY_FEES.contains(&entry_fee) {
            return PORTFOLIO_TARGET_HIGH;
        }
        if BASE_TARGET_ENTRY_FEES.contains(&entry_fee) {
            return PORTFOLIO_TARGET_BASE;
        }
    }
    PORTFOLIO_TARGET_BASE
}

/// A bot's mail address, derived from its name.
pub fn bot_email(name: &str) -> String {
    format!("{}{}", name, BOT_EMAIL_DOMAIN)
}

/// Sample `count` distinct candidates into bot records.
///
/// Draws without replacement over the usable pool: a working set of
/// not-yet-chosen indices shrinks by swap-remove on every pick. Stops early
/// if the pool runs out, returning a shorter roster rather than failing.
/// Scores are independent uniform draws in [BOT_SCORE_FLOOR, target).
pub fn sample_roster(
    names: &[String],
    count: usize,
    portfolio_target: u64,
    rng: &mut impl RngSource,
) -> Vec<BotContestant> {
    let usable = usable_names(names);
    let mut remaining: Vec<usize> = (0..usable.len()).collect();
    let mut roster = Vec::with_capacity(count.min(usable.len()));

    while roster.len() < count && !remaining.is_empty() {
        let pick = gen_range(rng, 0, remaining.len() as u64) as usize;
        let idx = remaining.swap_remove(pick);
        let name = usable[idx].clone();
        let email = bot_email(&name);
        let score = gen_range(rng, BOT_SCORE_FLOOR, portfolio_target);

        roster.push(BotContestant {
            name,
            email,
            score,
            tickets: 0,
        });
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng::XorShift64Star;

    /// Replays a fixed tape of draws; wraps around when exhausted.
    struct TapeRng {
        tape: Vec<u64>,
        at: usize,
    }

    impl TapeRng {
        fn new(tape: Vec<u64>) -> Self {
            Self { tape, at: 0 }
        }
    }

    impl RngSource for TapeRng {
        fn next_u64(&mut self) -> u64 {
            let v = self.tape[self.at % self.tape.len()];
            self.at += 1;
            v
        }
    }

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn split_handles_both_line_endings() {
        assert_eq!(split_name_blob("a\nb\nc"), pool(&["a", "b", "c"]));
        assert_eq!(split_name_blob("a\r\nb\r\n"), pool(&["a", "b", ""]));
    }

    #[test]
    fn last_stored_name_is_reserved() {
        let names = pool(&["a", "b", "c"]);
        assert_eq!(usable_names(&names), &names[..2]);
        assert!(usable_names(&[]).is_empty());
    }

    #[test]
    fn bot_count_range_holds_over_many_trials() {
        let mut rng = XorShift64Star::new(0xC0FFEE);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let n = bot_count(300, &mut rng);
            assert!((100..300).contains(&n));
            seen.insert(n);
        }
        // distribution sanity: the draw is not stuck on one value
        assert!(seen.len() > 1);
    }

    #[test]
    fn portfolio_target_fee_tiers() {
        assert_eq!(portfolio_target(MatchType::Mahasangram, 1_000), 400_000);
        assert_eq!(portfolio_target(MatchType::GoldGala, 500), 400_000);
        assert_eq!(portfolio_target(MatchType::SilverSummit, 250), 400_000);
        assert_eq!(portfolio_target(MatchType::QuickGainerChallenge, 200), 300_000);
        assert_eq!(portfolio_target(MatchType::Mahasangram, 100), 300_000);
        assert_eq!(portfolio_target(MatchType::GoldGala, 50), 300_000);
        // off-tier fee falls through to the base target
        assert_eq!(portfolio_target(MatchType::Mahasangram, 777), 300_000);
        // practice matches never raise the target
        assert_eq!(portfolio_target(MatchType::PracticeMatch, 1_000), 300_000);
    }

    #[test]
    fn roster_names_are_distinct() {
        // eleven stored names, ten usable
        let names = pool(&[
            "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "reserved",
        ]);
        let mut rng = XorShift64Star::new(99);
        let roster = sample_roster(&names, 5, 300_000, &mut rng);

        assert_eq!(roster.len(), 5);
        let mut seen = std::collections::HashSet::new();
        for bot in &roster {
            assert!(seen.insert(bot.name.clone()), "duplicate {}", bot.name);
            assert_ne!(bot.name, "reserved");
            assert!((BOT_SCORE_FLOOR..300_000).contains(&bot.score));
            assert_eq!(bot.tickets, 0);
        }
    }

    #[test]
    fn oversized_request_exhausts_the_pool() {
        let names = pool(&["a", "b", "c", "d"]); // three usable
        let mut rng = XorShift64Star::new(5);
        let roster = sample_roster(&names, 10, 300_000, &mut rng);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn empty_and_single_pools_yield_nothing() {
        let mut rng = XorShift64Star::new(5);
        assert!(sample_roster(&[], 3, 300_000, &mut rng).is_empty());
        assert!(sample_roster(&pool(&["only"]), 3, 300_000, &mut rng).is_empty());
    }

    #[test]
    fn deterministic_rng_pins_the_roster() {
        let names = pool(&["alpha", "bravo", "charlie", "delta"]); // three usable
        let mut rng = TapeRng::new(vec![1, 7, 0, 3]);
        let roster = sample_roster(&names, 2, 300_000, &mut rng);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "bravo");
        assert_eq!(roster[0].email, "bravo@gmail.com");
        assert_eq!(roster[0].score, BOT_SCORE_FLOOR + 7);
        assert_eq!(roster[1].name, "alpha");
        assert_eq!(roster[1].score, BOT_SCORE_FLOOR + 3);
    }

    #[test]
    fn email_is_name_plus_domain() {
        assert_eq!(bot_email("ravi"), "ravi@gmail.com");
    }
}
