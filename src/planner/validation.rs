//! Input validation for plan requests arriving from outside the planner.

use thiserror::Error;

use super::types::PlanRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanInputError {
    #[error("请输入有效的数字！")]
    InvalidNumber,
    #[error("总单词量不能小于计划天数，请调整！")]
    WordsFewerThanDays,
    #[error("计划天数不能超过{max}天")]
    PlanTooLong { max: u32 },
    #[error("总单词量不能超过{max}个")]
    TooManyWords { max: u64 },
}

/// Upper bounds applied at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_plan_days: u32,
    pub max_total_words: u64,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_plan_days: 3650,
            max_total_words: 1_000_000,
        }
    }
}

/// Turns raw numbers into a [`PlanRequest`]. `include_review` defaults to on.
pub fn validate_plan_input(
    total_words: Option<i64>,
    plan_days: Option<i64>,
    include_review: Option<bool>,
    limits: &PlanLimits,
) -> Result<PlanRequest, PlanInputError> {
    let (Some(total_words), Some(plan_days)) = (total_words, plan_days) else {
        return Err(PlanInputError::InvalidNumber);
    };
    if total_words <= 0 || plan_days <= 0 {
        return Err(PlanInputError::InvalidNumber);
    }
    if total_words < plan_days {
        return Err(PlanInputError::WordsFewerThanDays);
    }

    let plan_days = u32::try_from(plan_days)
        .ok()
        .filter(|&days| days <= limits.max_plan_days)
        .ok_or(PlanInputError::PlanTooLong {
            max: limits.max_plan_days,
        })?;
    let total_words = u64::try_from(total_words)
        .ok()
        .filter(|&words| words <= limits.max_total_words)
        .ok_or(PlanInputError::TooManyWords {
            max: limits.max_total_words,
        })?;

    PlanRequest::new(total_words, plan_days, include_review.unwrap_or(true))
}
