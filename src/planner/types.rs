//! Plan data model
//!
//! Values produced by the planner are built once, in day order, and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

use super::validation::PlanInputError;

/// A validated plan request.
///
/// Invariant: `total_words >= plan_days >= 1`, so every day receives at least
/// one new word under even distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    total_words: u64,
    plan_days: u32,
    include_review: bool,
}

impl PlanRequest {
    pub fn new(total_words: u64, plan_days: u32, include_review: bool) -> Result<Self, PlanInputError> {
        if total_words == 0 || plan_days == 0 {
            return Err(PlanInputError::InvalidNumber);
        }
        if total_words < u64::from(plan_days) {
            return Err(PlanInputError::WordsFewerThanDays);
        }
        Ok(Self {
            total_words,
            plan_days,
            include_review,
        })
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn plan_days(&self) -> u32 {
        self.plan_days
    }

    pub fn include_review(&self) -> bool {
        self.include_review
    }
}

/// New words assigned to one plan day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAllocation {
    /// 1-based plan day
    pub day: u32,
    pub new_words: u64,
}

/// Back-reference from a plan day to an earlier day whose new words are reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSource {
    pub source_day: u32,
    pub words_reviewed: u64,
}

/// One row of the study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub day: u32,
    pub new_words: u64,
    /// Sum of `review_sources[*].words_reviewed`
    pub review_words: u64,
    /// `new_words + review_words`
    pub total_daily: u64,
    /// Only references days strictly before `day`
    pub review_sources: Vec<ReviewSource>,
    pub note: String,
}

/// Ordered plan, one entry per plan day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub total_words: u64,
    pub plan_days: u32,
    pub include_review: bool,
    pub days: Vec<PlanDay>,
}

impl StudyPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, day: u32) -> Option<&PlanDay> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get(index)
    }

    pub fn total_new_words(&self) -> u64 {
        self.days.iter().map(|d| d.new_words).sum()
    }

    pub fn total_review_words(&self) -> u64 {
        self.days.iter().map(|d| d.review_words).sum()
    }

    /// Heaviest single-day workload (new + review)
    pub fn peak_daily_load(&self) -> u64 {
        self.days.iter().map(|d| d.total_daily).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_zero() {
        assert_eq!(PlanRequest::new(0, 5, true), Err(PlanInputError::InvalidNumber));
        assert_eq!(PlanRequest::new(10, 0, true), Err(PlanInputError::InvalidNumber));
    }

    #[test]
    fn test_request_rejects_fewer_words_than_days() {
        assert_eq!(
            PlanRequest::new(4, 5, false),
            Err(PlanInputError::WordsFewerThanDays)
        );
    }

    #[test]
    fn test_request_accepts_one_word_per_day() {
        let request = PlanRequest::new(5, 5, true).unwrap();
        assert_eq!(request.total_words(), 5);
        assert_eq!(request.plan_days(), 5);
        assert!(request.include_review());
    }

    #[test]
    fn test_plan_day_lookup_is_one_based() {
        let plan = StudyPlan {
            total_words: 3,
            plan_days: 1,
            include_review: false,
            days: vec![PlanDay {
                day: 1,
                new_words: 3,
                review_words: 0,
                total_daily: 3,
                review_sources: Vec::new(),
                note: String::new(),
            }],
        };
        assert!(plan.day(0).is_none());
        assert_eq!(plan.day(1).map(|d| d.new_words), Some(3));
        assert!(plan.day(2).is_none());
        assert_eq!(plan.peak_daily_load(), 3);
    }
}
