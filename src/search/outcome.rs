//! Aggregate outcome of one search invocation

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Terminal status of a search, attached to the response exactly once.
///
/// A query that matched nothing reports `NoMatches` rather than a
/// vacuous `Succeeded`, so callers can tell an empty collection apart
/// from a fully converted result set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was attempted (no criteria supplied)
    FailedToStart,

    /// The search aborted, or every matched record failed conversion
    Failed,

    /// Some, but not all, matched records were converted
    PartiallySucceeded,

    /// The query ran but matched no records
    NoMatches,

    /// Every matched record was converted into a result
    Succeeded,
}

impl Outcome {
    /// Derive the outcome from the per-record conversion tally.
    pub fn from_counts(successes: usize, total: usize) -> Self {
        debug_assert!(successes <= total);

        if total == 0 {
            Outcome::NoMatches
        } else if successes == total {
            Outcome::Succeeded
        } else if successes > 0 {
            Outcome::PartiallySucceeded
        } else {
            Outcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tally_state_machine() {
        assert_eq!(Outcome::from_counts(3, 3), Outcome::Succeeded);
        assert_eq!(Outcome::from_counts(1, 2), Outcome::PartiallySucceeded);
        assert_eq!(Outcome::from_counts(0, 5), Outcome::Failed);
        assert_eq!(Outcome::from_counts(1, 1), Outcome::Succeeded);
    }

    // A query that matches nothing deliberately does not count as a
    // success: zero conversions of zero records reports NoMatches, not
    // the vacuous Succeeded that `successes == total` would imply.
    #[test]
    fn test_zero_matches_are_not_a_vacuous_success() {
        assert_eq!(Outcome::from_counts(0, 0), Outcome::NoMatches);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Outcome::PartiallySucceeded.to_string(), "partially_succeeded");
        assert_eq!(
            Outcome::from_str("failed_to_start").unwrap(),
            Outcome::FailedToStart
        );
    }
}
