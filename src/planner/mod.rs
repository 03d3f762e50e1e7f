//! 单词背诵计划生成
//!
//! Spaced-repetition plan generator:
//!
//! - [`allocator`] - 新单词按天平均分配，余数前置
//! - [`scheduler`] - 每天应复习的来源天（短计划查表 / 长计划黄金间隔）
//! - [`builder`] - 组合分配与复习，生成逐日计划
//! - [`curve`] - 示意用遗忘曲线数据（仅供图表）
//! - [`export`] - 计划的纯文本表格
//! - [`validation`] - 外部输入校验
//!
//! All functions are pure; a [`StudyPlan`] depends only on its [`PlanRequest`].
//!
//! ```rust
//! use danci_study_plan::planner::{build, PlanRequest};
//!
//! let plan = build(&PlanRequest::new(100, 10, true).unwrap());
//! assert_eq!(plan.day(5).unwrap().review_words, 30);
//! ```

pub mod allocator;
pub mod builder;
pub mod curve;
pub mod export;
pub mod scheduler;
pub mod types;
pub mod validation;

pub use allocator::{allocate, allocate_days};
pub use builder::build;
pub use curve::{forgetting_curve, CurvePoint, CurveSeries};
pub use export::to_clipboard_text;
pub use scheduler::{review_days_for, ReviewRegime};
pub use types::{DayAllocation, PlanDay, PlanRequest, ReviewSource, StudyPlan};
pub use validation::{validate_plan_input, PlanInputError, PlanLimits};
