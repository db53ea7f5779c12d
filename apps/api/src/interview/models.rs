use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who the candidate is interviewing as. Immutable once a session exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterviewSetup {
    pub role: String,
    pub seniority: String,
    pub focus_area: String,
}

/// The five scoring criteria, each on a 0 to 10 scale.
///
/// Used both for a single answer's scores and for per-criterion averages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CriterionScores {
    pub technical_correctness: f64,
    pub clarity: f64,
    pub depth: f64,
    pub tradeoff_awareness: f64,
    pub communication: f64,
}

impl CriterionScores {
    pub fn sum(&self) -> f64 {
        self.technical_correctness
            + self.clarity
            + self.depth
            + self.tradeoff_awareness
            + self.communication
    }

    /// Arithmetic mean per criterion. `None` for an empty slice.
    pub fn mean<'a>(all: impl ExactSizeIterator<Item = &'a CriterionScores>) -> Option<Self> {
        let n = all.len();
        if n == 0 {
            return None;
        }
        let total = all.fold(CriterionScores::default(), |acc, s| CriterionScores {
            technical_correctness: acc.technical_correctness + s.technical_correctness,
            clarity: acc.clarity + s.clarity,
            depth: acc.depth + s.depth,
            tradeoff_awareness: acc.tradeoff_awareness + s.tradeoff_awareness,
            communication: acc.communication + s.communication,
        });
        let n = n as f64;
        Some(CriterionScores {
            technical_correctness: total.technical_correctness / n,
            clarity: total.clarity / n,
            depth: total.depth / n,
            tradeoff_awareness: total.tradeoff_awareness / n,
            communication: total.communication / n,
        })
    }
}

/// Structured per-answer scoring produced by the oracle. Ranges are not re-checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub scores: CriterionScores,
    pub total_score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggested_answer: String,
}

/// One evaluated question/answer pair. Never mutated after it is appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Caller-supplied question index.
    pub question_number: usize,
    pub question: String,
    pub answer: String,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: String,
    pub setup: InterviewSetup,
    pub questions: Vec<String>,
    pub conversation_history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// The question after `question_number`, or `None` when it was the last one.
    pub fn next_question(&self, question_number: usize) -> Option<&str> {
        question_number
            .checked_add(1)
            .and_then(|i| self.questions.get(i))
            .map(String::as_str)
    }
}

/// Final coaching report produced by the oracle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalReport {
    pub overall_performance: String,
    pub key_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub actionable_next_steps: Vec<String>,
    pub readiness_level: String,
    pub recommended_resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(v: [f64; 5]) -> CriterionScores {
        CriterionScores {
            technical_correctness: v[0],
            clarity: v[1],
            depth: v[2],
            tradeoff_awareness: v[3],
            communication: v[4],
        }
    }

    fn session(questions: &[&str]) -> Session {
        Session {
            session_id: "session_test".to_string(),
            setup: InterviewSetup {
                role: "Backend Engineer".to_string(),
                seniority: "Senior".to_string(),
                focus_area: "distributed systems".to_string(),
            },
            questions: questions.iter().map(|q| q.to_string()).collect(),
            conversation_history: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_mean_of_two_entries() {
        let all = [scores([8.0, 8.0, 5.0, 4.0, 9.0]), scores([6.0, 6.0, 7.0, 4.0, 6.0])];
        let avg = CriterionScores::mean(all.iter()).unwrap();
        assert_eq!(avg.clarity, 7.0);
        assert_eq!(avg.technical_correctness, 7.0);
        assert_eq!(avg.depth, 6.0);
        assert_eq!(avg.tradeoff_awareness, 4.0);
        assert_eq!(avg.communication, 7.5);
        assert_eq!(avg.sum(), 31.5);
    }

    #[test]
    fn test_mean_of_empty_is_none() {
        let all: [CriterionScores; 0] = [];
        assert!(CriterionScores::mean(all.iter()).is_none());
    }

    #[test]
    fn test_next_question_in_bounds() {
        let s = session(&["q0", "q1", "q2"]);
        assert_eq!(s.next_question(0), Some("q1"));
        assert_eq!(s.next_question(1), Some("q2"));
    }

    #[test]
    fn test_next_question_none_at_last_index() {
        let s = session(&["q0", "q1", "q2"]);
        assert_eq!(s.next_question(2), None);
        assert_eq!(s.next_question(17), None);
        assert_eq!(s.next_question(usize::MAX), None);
    }

    #[test]
    fn test_evaluation_deserializes_integer_scores() {
        let json = r#"{
            "scores": {
                "technical_correctness": 7,
                "clarity": 8,
                "depth": 6,
                "tradeoff_awareness": 5,
                "communication": 9
            },
            "total_score": 35,
            "feedback": "You explained the context well.",
            "strengths": ["You named concrete tools"],
            "improvements": ["Add metrics", "Mention alternatives", "Close with the result"],
            "suggested_answer": "Open with the situation, then your actions."
        }"#;
        let evaluation: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.scores.sum(), 35.0);
        assert_eq!(evaluation.total_score, 35.0);
        assert_eq!(evaluation.improvements.len(), 3);
    }

    #[test]
    fn test_evaluation_missing_field_is_rejected() {
        let json = r#"{"scores": {"clarity": 8}, "total_score": 8}"#;
        assert!(serde_json::from_str::<Evaluation>(json).is_err());
    }
}
