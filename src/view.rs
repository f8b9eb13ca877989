//! Pure view model: what the screen shows for a given session.
//!
//! `render` takes the session by reference and returns plain data. The
//! ratatui layer in `ui` only decides how that data looks.

use crate::models::{OptionTag, QuizSession};

#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub progress: Progress,
    pub body: Body,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Question(QuestionView),
    Completed { correct: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub explanation: Option<String>,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub tag: OptionTag,
    pub label: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Pre-submit: still selectable.
    Choice { selected: bool },
    Correct,
    Incorrect,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Submit,
    Next,
    Restart { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    pub correct: usize,
    pub wrong: usize,
    pub completed: usize,
    pub total: usize,
}

pub fn completion_message(correct: usize) -> String {
    format!("Quiz completed! You answered {} questions correctly.", correct)
}

pub fn render(session: &QuizSession) -> QuizView {
    let total = session.total();
    let current = (session.current_index() + 1).min(total);
    let ratio = if total == 0 {
        0.0
    } else {
        current as f64 / total as f64
    };

    let sidebar = Sidebar {
        correct: session.correct_answers(),
        wrong: session.wrong_answers(),
        completed: current,
        total,
    };

    let body = match session.current_question() {
        None => Body::Completed {
            correct: session.correct_answers(),
            total,
        },
        Some(question) => {
            let submitted = session.answer_submitted();
            let selected = session.selected_option();

            let options = OptionTag::ALL
                .iter()
                .map(|&tag| {
                    let mark = if !submitted {
                        OptionMark::Choice {
                            selected: selected == Some(tag),
                        }
                    } else if tag == question.answer {
                        OptionMark::Correct
                    } else if selected == Some(tag) {
                        OptionMark::Incorrect
                    } else {
                        OptionMark::Plain
                    };
                    OptionView {
                        tag,
                        label: question.option(tag).to_string(),
                        mark,
                    }
                })
                .collect();

            let control = if !submitted {
                Control::Submit
            } else if session.is_last_question() {
                Control::Restart {
                    message: completion_message(session.correct_answers()),
                }
            } else {
                Control::Next
            };

            Body::Question(QuestionView {
                number: session.current_index() + 1,
                prompt: question.prompt.clone(),
                options,
                explanation: submitted.then(|| question.explanation.clone()),
                control,
            })
        }
    };

    QuizView {
        progress: Progress {
            current,
            total,
            ratio,
        },
        body,
        sidebar,
    }
}
