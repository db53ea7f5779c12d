//! Shared test fixtures for the interview module.

use crate::interview::models::InterviewSetup;

pub fn backend_setup() -> InterviewSetup {
    InterviewSetup {
        role: "Backend Engineer".to_string(),
        seniority: "Senior".to_string(),
        focus_area: "distributed systems".to_string(),
    }
}

pub const SIX_QUESTIONS: &str = r#"[
    "Tell me about a time you debugged a partition in production.",
    "Describe a consistency tradeoff you made.",
    "How did you handle a cascading failure?",
    "Tell me about a migration you led.",
    "Describe a disagreement over system design.",
    "Tell me about scaling a service by 10x."
]"#;

/// Scores 8 / 7 / 6 / 5 / 9, total 35.
pub const EVALUATION_JSON: &str = r#"{
    "scores": {
        "technical_correctness": 8,
        "clarity": 7,
        "depth": 6,
        "tradeoff_awareness": 5,
        "communication": 9
    },
    "total_score": 35,
    "feedback": "You gave clear context. Add the measurable result.",
    "strengths": ["You named the tools you used", "You explained your role"],
    "improvements": ["Quantify the impact", "Discuss an alternative", "Close with the result"],
    "suggested_answer": "Start with the situation, then walk through your decision."
}"#;

/// Same shape as `EVALUATION_JSON` with every criterion set to `score`.
pub fn uniform_evaluation(score: u32) -> String {
    format!(
        r#"{{
            "scores": {{
                "technical_correctness": {score},
                "clarity": {score},
                "depth": {score},
                "tradeoff_awareness": {score},
                "communication": {score}
            }},
            "total_score": {total},
            "feedback": "You stayed on topic.",
            "strengths": ["You described the problem"],
            "improvements": ["Add metrics", "Name alternatives", "State the outcome"],
            "suggested_answer": "Lead with the result."
        }}"#,
        total = score * 5
    )
}

pub const REPORT_JSON: &str = r#"{
    "overall_performance": "You communicated clearly and grounded answers in real incidents.",
    "key_strengths": ["You used concrete examples", "Your explanations were structured"],
    "areas_for_improvement": ["Quantify outcomes", "Discuss tradeoffs explicitly"],
    "actionable_next_steps": ["Prepare 5 stories with metrics", "Practice STAR out loud"],
    "readiness_level": "Ready for interviews",
    "recommended_resources": ["Designing Data-Intensive Applications"]
}"#;
