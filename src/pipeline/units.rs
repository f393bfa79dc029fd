//! Time-unit normalization for follow-up recommendations.
//!
//! Uses flat multipliers (month = 30 days, year = 365 days). This is an
//! intentional simplification: follow-up gaps are bucketed into coarse
//! severity tiers, so calendar-accurate month/year lengths would not change
//! any outcome. It does NOT account for variable month or leap-year lengths.

use serde::{Deserialize, Serialize};

/// Duration unit attached to a follow-up recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpUnit {
    Day,
    Week,
    Month,
    Year,
}

impl FollowUpUnit {
    /// Parse a unit word, case-insensitively, singular or plural.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.trim_end_matches('s') {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Convert an amount of `unit` to days: day=1, week=7, month=30, year=365.
///
/// Widened to `u64`: any amount that parses out of a report must normalize
/// without overflow, however absurd the duration.
pub fn to_days(amount: u32, unit: FollowUpUnit) -> u64 {
    let factor: u64 = match unit {
        FollowUpUnit::Day => 1,
        FollowUpUnit::Week => 7,
        FollowUpUnit::Month => 30,
        FollowUpUnit::Year => 365,
    };
    u64::from(amount) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_multipliers() {
        assert_eq!(to_days(1, FollowUpUnit::Day), 1);
        assert_eq!(to_days(2, FollowUpUnit::Week), 14);
        assert_eq!(to_days(3, FollowUpUnit::Month), 90);
        assert_eq!(to_days(1, FollowUpUnit::Year), 365);
    }

    #[test]
    fn extreme_durations_do_not_overflow() {
        assert_eq!(to_days(20_000_000, FollowUpUnit::Year), 7_300_000_000);
        assert_eq!(to_days(u32::MAX, FollowUpUnit::Year), u64::from(u32::MAX) * 365);
    }

    #[test]
    fn parses_plural_and_mixed_case() {
        assert_eq!(FollowUpUnit::parse("months"), Some(FollowUpUnit::Month));
        assert_eq!(FollowUpUnit::parse("Week"), Some(FollowUpUnit::Week));
        assert_eq!(FollowUpUnit::parse("DAYS"), Some(FollowUpUnit::Day));
        assert_eq!(FollowUpUnit::parse("fortnight"), None);
    }
}
