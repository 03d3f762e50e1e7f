#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;

use danci_study_plan::config::Config;
use danci_study_plan::planner::PlanLimits;

pub fn create_test_app() -> Router {
    danci_study_plan::create_app(Config::default())
}

pub fn create_test_app_with_limits(limits: PlanLimits) -> Router {
    danci_study_plan::create_app(Config {
        plan_limits: limits,
        ..Config::default()
    })
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
