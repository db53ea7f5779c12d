//! Question Generator: asks the oracle for a question list and opens a session.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::models::InterviewSetup;
use crate::interview::prompts::QUESTIONS_PROMPT_TEMPLATE;
use crate::interview::session_store::SessionStore;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{generate_json, LanguageModel};

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub session_id: String,
    pub questions: Vec<String>,
    pub total_questions: usize,
}

pub fn build_questions_prompt(setup: &InterviewSetup) -> String {
    fill_template(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("role", setup.role.as_str()),
            ("seniority", setup.seniority.as_str()),
            ("focus_area", setup.focus_area.as_str()),
        ],
    )
}

/// Generates questions for `setup` and stores a new session.
/// Nothing is stored unless the oracle returns a non-empty JSON array of strings.
pub async fn start_interview(
    store: &SessionStore,
    llm: &dyn LanguageModel,
    setup: InterviewSetup,
) -> Result<StartInterviewResponse, AppError> {
    let prompt = build_questions_prompt(&setup);
    let questions: Vec<String> = generate_json(llm, &prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating questions: {e}")))?;

    if questions.is_empty() {
        return Err(AppError::Upstream(
            "Error generating questions: model returned no questions".to_string(),
        ));
    }

    info!(
        "Generated {} questions for {} {} ({})",
        questions.len(),
        setup.seniority,
        setup.role,
        setup.focus_area
    );

    let session = store.create(setup, questions).await?;
    Ok(StartInterviewResponse {
        total_questions: session.questions.len(),
        session_id: session.session_id,
        questions: session.questions,
    })
}
