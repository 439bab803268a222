use crate::constants::SCHEDULE_DIGITS;
use crate::state::contest::MatchType;

/// Strip the schedule separators from a `YYYY-MM-DDTHH:MM` input and append
/// the seconds placeholder. `None` unless the remainder is the expected run
/// of digits.
pub fn schedule_id_from_start_time(start_time: &str) -> Option<String> {
    let digits: String = start_time
        .chars()
        .filter(|c| !matches!(c, '-' | 'T' | ':'))
        .collect();

    if digits.len() != SCHEDULE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}00", digits))
}

/// Normalize a hand-entered numeric field the way the admin form does:
/// keep the leading digit run, parse, re-stringify. Leading zeros drop out;
/// `None` clears the field.
pub fn normalize_numeric(input: &str) -> Option<String> {
    let digits: String = input
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let value: u64 = digits.parse().ok()?;
    Some(value.to_string())
}

/// Resolve the manual-or-derived schedule ID to (numeric form, canonical
/// string). A manual entry, when present, wins over the start-time
/// derivation.
pub fn resolve_schedule_id(
    start_time: &str,
    manual_id: &Option<String>,
) -> Option<(u64, String)> {
    let id = match manual_id {
        Some(raw) => normalize_numeric(raw)?,
        None => schedule_id_from_start_time(start_time)?,
    };
    let numeric: u64 = id.parse().ok()?;
    Some((numeric, id))
}

/// `{MatchType}_CONTEST_{id}`, the platform's contest key format.
pub fn contest_id(match_type: MatchType, schedule_id: &str) -> String {
    format!("{}_CONTEST_{}", match_type.label(), schedule_id)
}

/// Little-endian PDA seed for the contest's numeric schedule ID. Falls back
/// to the zero seed when the ID is not derivable; the create handler
/// re-resolves and rejects before the account is touched.
pub fn contest_seed(start_time: &str, manual_id: &Option<String>) -> [u8; 8] {
    match resolve_schedule_id(start_time, manual_id) {
        Some((numeric, _)) => numeric.to_le_bytes(),
        None => [0u8; 8],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_id_strips_separators_and_pads_seconds() {
        assert_eq!(
            schedule_id_from_start_time("2024-08-30T14:05"),
            Some("20240830140500".to_string())
        );
    }

    #[test]
    fn schedule_id_rejects_malformed_input() {
        assert!(schedule_id_from_start_time("2024-08-30").is_none());
        assert!(schedule_id_from_start_time("not a time").is_none());
        assert!(schedule_id_from_start_time("").is_none());
        assert!(schedule_id_from_start_time("2024-08-30T14:0x").is_none());
    }

    #[test]
    fn contest_id_format() {
        assert_eq!(
            contest_id(MatchType::GoldGala, "20240830140500"),
            "Gold_Gala_CONTEST_20240830140500"
        );
        assert_eq!(
            contest_id(MatchType::PracticeMatch, "1"),
            "PracticeMatch_CONTEST_1"
        );
    }

    #[test]
    fn normalize_drops_leading_zeros_and_junk() {
        assert_eq!(normalize_numeric("0042"), Some("42".to_string()));
        assert_eq!(normalize_numeric(" 7 "), Some("7".to_string()));
        assert_eq!(normalize_numeric("12ab"), Some("12".to_string()));
        assert_eq!(normalize_numeric("abc"), None);
        assert_eq!(normalize_numeric(""), None);
    }

    #[test]
    fn manual_id_wins_over_start_time() {
        let (numeric, id) =
            resolve_schedule_id("2024-08-30T14:05", &Some("000123".to_string())).unwrap();
        assert_eq!(numeric, 123);
        assert_eq!(id, "123");

        let (numeric, id) = resolve_schedule_id("2024-08-30T14:05", &None).unwrap();
        assert_eq!(numeric, 20240830140500);
        assert_eq!(id, "20240830140500");
    }

    #[test]
    fn unresolvable_id_maps_to_zero_seed() {
        assert_eq!(contest_seed("junk", &None), [0u8; 8]);
        assert_eq!(
            contest_seed("2024-08-30T14:05", &None),
            20240830140500u64.to_le_bytes()
        );
    }
}
