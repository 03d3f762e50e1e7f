use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::planner::{
    self, validate_plan_input, CurveSeries, PlanDay, PlanRequest, ReviewRegime, StudyPlan,
};
use crate::response::{AppError, SuccessResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratePlanRequest {
    total_words: Option<i64>,
    plan_days: Option<i64>,
    include_review: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDaysQuery {
    day: Option<u32>,
    total_days: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudyPlanResponse<'a> {
    total_words: u64,
    plan_days: u32,
    include_review: bool,
    total_new_words: u64,
    total_review_words: u64,
    peak_daily_load: u64,
    days: &'a [PlanDay],
}

impl<'a> From<&'a StudyPlan> for StudyPlanResponse<'a> {
    fn from(plan: &'a StudyPlan) -> Self {
        Self {
            total_words: plan.total_words,
            plan_days: plan.plan_days,
            include_review: plan.include_review,
            total_new_words: plan.total_new_words(),
            total_review_words: plan.total_review_words(),
            peak_daily_load: plan.peak_daily_load(),
            days: &plan.days,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDaysResponse {
    day: u32,
    total_days: u32,
    regime: ReviewRegime,
    review_days: Vec<u32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_plan))
        .route("/export", post(export_plan))
        .route("/review-days", get(review_days))
        .route("/curve", get(curve))
}

async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_request(&state, payload)?;
    let plan = planner::build(&request);

    tracing::info!(
        total_words = request.total_words(),
        plan_days = request.plan_days(),
        include_review = request.include_review(),
        peak_daily_load = plan.peak_daily_load(),
        "study plan generated"
    );

    let body = SuccessResponse::with_message(StudyPlanResponse::from(&plan), "背诵计划已生成");
    Ok(Json(body).into_response())
}

async fn export_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_request(&state, payload)?;
    let plan = planner::build(&request);
    let text = planner::to_clipboard_text(&plan);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

async fn review_days(
    State(state): State<AppState>,
    query: Result<Query<ReviewDaysQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|_| AppError::bad_request("day 和 totalDays 必须是正整数"))?;
    let (Some(day), Some(total_days)) = (query.day, query.total_days) else {
        return Err(AppError::bad_request("缺少 day 或 totalDays 参数"));
    };

    if total_days == 0 || day == 0 || day > total_days {
        return Err(AppError::validation("day 必须在 1 到 totalDays 之间"));
    }
    let max_days = state.plan_limits().max_plan_days;
    if total_days > max_days {
        return Err(AppError::validation(format!("计划天数不能超过{max_days}天")));
    }

    let regime = ReviewRegime::for_plan(total_days);
    Ok(Json(SuccessResponse::ok(ReviewDaysResponse {
        day,
        total_days,
        regime,
        review_days: regime.review_days(day),
    })))
}

async fn curve() -> Json<SuccessResponse<CurveSeries>> {
    Json(SuccessResponse::ok(CurveSeries::standard()))
}

fn parse_request(
    state: &AppState,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<PlanRequest, AppError> {
    let Json(payload) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected plan request body");
        AppError::bad_request("请求体格式错误")
    })?;

    let request = validate_plan_input(
        payload.total_words,
        payload.plan_days,
        payload.include_review,
        &state.plan_limits(),
    )?;
    Ok(request)
}
