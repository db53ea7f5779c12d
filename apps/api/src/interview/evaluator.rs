//! Answer Evaluator: scores one answer and records it in the session history.
//!
//! Flow: look up session → build prompt → oracle → decode `Evaluation` →
//!       append history entry → pick the next question.
//!
//! The registry lock is released during the oracle call, so two submissions
//! for the same session are both recorded, in the order their evaluations
//! finish. Resubmitting an answer appends another entry.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::models::{Evaluation, HistoryEntry, InterviewSetup};
use crate::interview::prompts::EVALUATION_PROMPT_TEMPLATE;
use crate::interview::session_store::SessionStore;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{generate_json, LanguageModel};

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session_id: String,
    pub question_number: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub evaluation: Evaluation,
    pub question_number: usize,
    /// `None` once the last question has been answered.
    pub next_question: Option<String>,
}

pub fn build_evaluation_prompt(setup: &InterviewSetup, question: &str, answer: &str) -> String {
    fill_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("role", setup.role.as_str()),
            ("seniority", setup.seniority.as_str()),
            ("question", question),
            ("answer", answer),
        ],
    )
}

pub async fn submit_answer(
    store: &SessionStore,
    llm: &dyn LanguageModel,
    request: SubmitAnswerRequest,
) -> Result<SubmitAnswerResponse, AppError> {
    let session = store.get(&request.session_id).await?;

    let prompt = build_evaluation_prompt(&session.setup, &request.question, &request.answer);
    let evaluation: Evaluation = generate_json(llm, &prompt)
        .await
        .map_err(|e| AppError::Upstream(format!("Error evaluating answer: {e}")))?;

    let entry = HistoryEntry {
        question_number: request.question_number,
        question: request.question,
        answer: request.answer,
        evaluation: evaluation.clone(),
    };
    let session = store.append_history(&request.session_id, entry).await?;

    info!(
        "Evaluated answer {} for session {}: total {} ({} of {} answered)",
        request.question_number,
        session.session_id,
        evaluation.total_score,
        session.conversation_history.len(),
        session.questions.len()
    );

    Ok(SubmitAnswerResponse {
        next_question: session
            .next_question(request.question_number)
            .map(str::to_string),
        question_number: request.question_number,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::fixtures::{backend_setup as setup, EVALUATION_JSON};
    use crate::llm_client::testing::ScriptedModel;

    async fn store_with_session(questions: &[&str]) -> (SessionStore, String) {
        let store = SessionStore::new();
        let session = store
            .create(setup(), questions.iter().map(|q| q.to_string()).collect())
            .await
            .unwrap();
        (store, session.session_id)
    }

    fn request(session_id: &str, question_number: usize) -> SubmitAnswerRequest {
        SubmitAnswerRequest {
            session_id: session_id.to_string(),
            question_number,
            question: format!("q{question_number}"),
            answer: "I split the service and added a queue.".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_context_and_pair() {
        let prompt = build_evaluation_prompt(&setup(), "Why Raft?", "Because {role} said so");
        assert!(prompt.contains("You are evaluating a Senior Backend Engineer candidate."));
        assert!(prompt.contains("Question:\nWhy Raft?"));
        assert!(prompt.contains("Candidate Answer:\nBecause {role} said so"));
        assert!(prompt.contains("1. SCORING (0-10 scale):"));
        assert!(prompt.contains("\"tradeoff_awareness\": 0,"));
    }

    #[tokio::test]
    async fn test_submit_appends_and_returns_next() {
        let (store, id) = store_with_session(&["q0", "q1", "q2"]).await;
        let model = ScriptedModel::new().reply(EVALUATION_JSON);

        let response = submit_answer(&store, &model, request(&id, 0)).await.unwrap();
        assert_eq!(response.question_number, 0);
        assert_eq!(response.next_question.as_deref(), Some("q1"));
        assert_eq!(response.evaluation.scores.technical_correctness, 8.0);

        let history = store.get(&id).await.unwrap().conversation_history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].question, "q0");
        assert_eq!(history[0].evaluation, response.evaluation);
    }

    #[tokio::test]
    async fn test_last_question_has_no_next() {
        let (store, id) = store_with_session(&["q0", "q1", "q2"]).await;
        let model = ScriptedModel::new().reply(EVALUATION_JSON);
        let response = submit_answer(&store, &model, request(&id, 2)).await.unwrap();
        assert!(response.next_question.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_skips_oracle() {
        let store = SessionStore::new();
        let model = ScriptedModel::new().reply(EVALUATION_JSON);
        let err = submit_answer(&store, &model, request("session_nope", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_evaluation_leaves_history_untouched() {
        let (store, id) = store_with_session(&["q0", "q1"]).await;
        let model = ScriptedModel::new().reply(r#"{"scores": {"clarity": 7}}"#);

        let err = submit_answer(&store, &model, request(&id, 0)).await.unwrap_err();
        match err {
            AppError::Upstream(msg) => assert!(msg.starts_with("Error evaluating answer:")),
            other => panic!("expected Upstream, got {other:?}"),
        }
        assert!(store.get(&id).await.unwrap().conversation_history.is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_grows_history_by_one_each_time() {
        let (store, id) = store_with_session(&["q0", "q1"]).await;
        let model = ScriptedModel::new()
            .reply(EVALUATION_JSON)
            .reply(EVALUATION_JSON)
            .reply(EVALUATION_JSON);

        for expected in 1..=3 {
            submit_answer(&store, &model, request(&id, 0)).await.unwrap();
            let history = store.get(&id).await.unwrap().conversation_history;
            assert_eq!(history.len(), expected);
        }
    }
}
