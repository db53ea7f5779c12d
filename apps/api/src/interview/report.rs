//! Report Summarizer: averages per-answer scores and asks the oracle for a
//! final coaching report. Read-only with respect to the session registry.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::models::{CriterionScores, FinalReport, HistoryEntry, InterviewSetup};
use crate::interview::prompts::SUMMARY_PROMPT_TEMPLATE;
use crate::interview::session_store::SessionStore;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{generate_json, LanguageModel};

#[derive(Debug, Deserialize)]
pub struct CompleteInterviewQuery {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct CompleteInterviewResponse {
    pub session_id: String,
    pub average_scores: CriterionScores,
    pub total_score: f64,
    pub final_report: FinalReport,
    pub question_details: Vec<HistoryEntry>,
}

/// Per-criterion means over the whole history. `None` when nothing was answered.
pub fn average_scores(history: &[HistoryEntry]) -> Option<CriterionScores> {
    CriterionScores::mean(history.iter().map(|e| &e.evaluation.scores))
}

pub fn build_summary_prompt(setup: &InterviewSetup, averages: &CriterionScores) -> String {
    let technical = format!("{:.1}", averages.technical_correctness);
    let clarity = format!("{:.1}", averages.clarity);
    let depth = format!("{:.1}", averages.depth);
    let tradeoffs = format!("{:.1}", averages.tradeoff_awareness);
    let communication = format!("{:.1}", averages.communication);
    let total = format!("{:.1}", averages.sum());

    fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("role", setup.role.as_str()),
            ("seniority", setup.seniority.as_str()),
            ("focus_area", setup.focus_area.as_str()),
            ("technical", technical.as_str()),
            ("clarity", clarity.as_str()),
            ("depth", depth.as_str()),
            ("tradeoffs", tradeoffs.as_str()),
            ("communication", communication.as_str()),
            ("total", total.as_str()),
        ],
    )
}

pub async fn complete_interview(
    store: &SessionStore,
    llm: &dyn LanguageModel,
    session_id: &str,
) -> Result<CompleteInterviewResponse, AppError> {
    let session = store.get(session_id).await?;

    let averages = average_scores(&session.conversation_history)
        .ok_or_else(|| AppError::InvalidState("No answers submitted".to_string()))?;
    let total_score = averages.sum();

    let prompt = build_summary_prompt(&session.setup, &averages);
    let final_report: FinalReport = generate_json(llm, &prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating final report: {e}")))?;

    info!(
        "Final report for session {}: {:.1}/50 over {} answers, readiness '{}'",
        session.session_id,
        total_score,
        session.conversation_history.len(),
        final_report.readiness_level
    );

    Ok(CompleteInterviewResponse {
        session_id: session.session_id,
        average_scores: averages,
        total_score,
        final_report,
        question_details: session.conversation_history,
    })
}
