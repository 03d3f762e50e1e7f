//! Review scheduling
//!
//! Picks, for a given plan day, the earlier days whose new words are reviewed
//! on that day. Two regimes share one entry point:
//!
//! - **Short** (`total_days <= 10`): a hand-tuned lookup table keyed by day.
//! - **Long** (`total_days > 10`): golden intervals `{1, 2, 4, 7, 15}` counted
//!   back from the current day, keeping at most the four closest.
//!
//! The short table rows are tuned data, not derived from the golden rule.

use serde::Serialize;

/// Plans up to this many days use [`SHORT_PLAN_TABLE`].
pub const SHORT_PLAN_MAX_DAYS: u32 = 10;

/// Review offsets (in days) for long plans, ascending.
pub const GOLDEN_INTERVALS: [u32; 5] = [1, 2, 4, 7, 15];

/// Upper bound on review source days per plan day in long plans.
pub const MAX_REVIEW_SOURCES: usize = 4;

/// Row `i` lists the review source days for plan day `i + 1`.
pub static SHORT_PLAN_TABLE: [&[u32]; 10] = [
    &[],
    &[1],
    &[1, 2],
    &[2, 3],
    &[1, 3, 4],
    &[2, 4, 5],
    &[3, 5, 6],
    &[1, 4, 6, 7],
    &[2, 5, 7, 8],
    &[3, 6, 8, 9],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewRegime {
    Short,
    Long,
}

impl ReviewRegime {
    pub fn for_plan(total_days: u32) -> Self {
        if total_days <= SHORT_PLAN_MAX_DAYS {
            Self::Short
        } else {
            Self::Long
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Long => "LONG",
        }
    }

    /// Review source days for `current_day` under this regime, in schedule order.
    pub fn review_days(&self, current_day: u32) -> Vec<u32> {
        if current_day <= 1 {
            return Vec::new();
        }

        match self {
            Self::Short => usize::try_from(current_day - 1)
                .ok()
                .and_then(|index| SHORT_PLAN_TABLE.get(index))
                .map(|row| row.to_vec())
                .unwrap_or_default(),
            Self::Long => GOLDEN_INTERVALS
                .iter()
                .filter_map(|&interval| current_day.checked_sub(interval))
                .filter(|&day| day >= 1)
                .take(MAX_REVIEW_SOURCES)
                .collect(),
        }
    }
}

/// Days whose new words must be reviewed on `current_day` of a
/// `total_days`-long plan. Every returned day is in `1..current_day`.
pub fn review_days_for(current_day: u32, total_days: u32) -> Vec<u32> {
    ReviewRegime::for_plan(total_days).review_days(current_day)
}
