//! End-of-run score summary.
//!
//! Pure functions, (QuizSession, SummaryFormat) -> String. Printed once after
//! the terminal is restored; nothing is written to disk.

use crate::models::QuizSession;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub wrong: usize,
    pub answered: usize,
    pub total: usize,
    pub finished: bool,
}

impl ScoreSummary {
    pub fn from_session(session: &QuizSession) -> Self {
        let correct = session.correct_answers();
        let wrong = session.wrong_answers();
        Self {
            correct,
            wrong,
            answered: correct + wrong,
            total: session.total(),
            finished: session.is_finished(),
        }
    }
}

pub fn format_summary(session: &QuizSession, format: SummaryFormat) -> String {
    let summary = ScoreSummary::from_session(session);
    match format {
        SummaryFormat::Human => format_human(&summary),
        SummaryFormat::Json => format_json(&summary),
    }
}

fn format_human(summary: &ScoreSummary) -> String {
    let mut out = String::new();
    out.push_str("=== Quiz Summary ===\n");
    out.push_str(&format!("Correct answers: {}\n", summary.correct));
    out.push_str(&format!("Wrong answers:   {}\n", summary.wrong));
    out.push_str(&format!(
        "Answered:        {} / {}\n",
        summary.answered, summary.total
    ));
    if summary.finished {
        out.push_str("Status:          completed\n");
    } else {
        out.push_str("Status:          stopped early\n");
    }
    out
}

fn format_json(summary: &ScoreSummary) -> String {
    // A struct of plain integers and a bool always serializes.
    serde_json::to_string_pretty(summary).unwrap_or_default()
}
