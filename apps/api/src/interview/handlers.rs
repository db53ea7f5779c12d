//! Axum route handlers for the Interview API.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::interview::evaluator::{submit_answer, SubmitAnswerRequest, SubmitAnswerResponse};
use crate::interview::models::InterviewSetup;
use crate::interview::questions::{start_interview, StartInterviewResponse};
use crate::interview::report::{
    complete_interview, CompleteInterviewQuery, CompleteInterviewResponse,
};
use crate::state::AppState;

/// POST /api/start-interview
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(setup): Json<InterviewSetup>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let response = start_interview(&state.sessions, state.llm.as_ref(), setup).await?;
    Ok(Json(response))
}

/// POST /api/submit-answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    let response = submit_answer(&state.sessions, state.llm.as_ref(), request).await?;
    Ok(Json(response))
}

/// POST /api/complete-interview?session_id=...
pub async fn handle_complete_interview(
    State(state): State<AppState>,
    Query(params): Query<CompleteInterviewQuery>,
) -> Result<Json<CompleteInterviewResponse>, AppError> {
    let response =
        complete_interview(&state.sessions, state.llm.as_ref(), &params.session_id).await?;
    Ok(Json(response))
}
