//! In-memory session registry.
//!
//! Sessions live for the lifetime of the process: there is no eviction, no TTL
//! and no persistence, so memory grows with every interview started. Readers
//! get cloned snapshots; the lock is never held across an oracle call.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{HistoryEntry, InterviewSetup, Session};

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an id and stores a new session. The id is allocated under the
    /// write lock and an occupied slot is never overwritten.
    pub async fn create(
        &self,
        setup: InterviewSetup,
        questions: Vec<String>,
    ) -> Result<Session, AppError> {
        if questions.is_empty() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "refusing to create a session without questions"
            )));
        }

        let mut sessions = self.sessions.write().await;
        let session_id = new_session_id();
        if sessions.contains_key(&session_id) {
            return Err(AppError::Internal(anyhow::anyhow!(
                "session id collision: {session_id}"
            )));
        }

        let session = Session {
            session_id: session_id.clone(),
            setup,
            questions,
            conversation_history: Vec::new(),
            created_at: Utc::now(),
        };
        sessions.insert(session_id.clone(), session.clone());
        info!(
            "Created session {session_id} ({} questions, {} live sessions)",
            session.questions.len(),
            sessions.len()
        );
        Ok(session)
    }

    pub async fn get(&self, session_id: &str) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(session_not_found)
    }

    /// Appends one history entry and returns the updated session snapshot.
    pub async fn append_history(
        &self,
        session_id: &str,
        entry: HistoryEntry,
    ) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(session_id).ok_or_else(session_not_found)?;
        session.conversation_history.push(entry);
        Ok(session.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub fn session_not_found() -> AppError {
    AppError::NotFound("Session not found".to_string())
}

/// `session_<unix micros>_<8 hex chars>`; time-ordered, with a random suffix
/// so sessions created in the same microsecond do not share an id.
fn new_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session_{}_{}", Utc::now().timestamp_micros(), &suffix[..8])
}
