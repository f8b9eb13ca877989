use crate::logger;
use crate::models::{App, AppState, InputWarning, OptionTag, Question, QuizSession};
use crate::reference::ReferenceDocument;
use crate::error::ReferenceError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Wrong,
    NoSelection,
    AlreadySubmitted,
}

impl QuizSession {
    pub fn new(bank: Arc<[Question]>) -> Self {
        Self::with_rng(bank, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(bank: Arc<[Question]>, rng: &mut R) -> Self {
        let mut session = Self {
            order: (0..bank.len()).collect(),
            bank,
            current_index: 0,
            correct_answers: 0,
            wrong_answers: 0,
            selected_option: None,
            answer_submitted: false,
            show_reference: false,
        };
        session.shuffle_with(rng);
        session
    }

    /// Replaces the question order with a fresh uniform permutation of the bank.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order = (0..self.bank.len()).collect();
        self.order.shuffle(rng);
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn wrong_answers(&self) -> usize {
        self.wrong_answers
    }

    pub fn selected_option(&self) -> Option<OptionTag> {
        self.selected_option
    }

    pub fn answer_submitted(&self) -> bool {
        self.answer_submitted
    }

    pub fn show_reference(&self) -> bool {
        self.show_reference
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.order
            .get(self.current_index)
            .map(|&bank_idx| &self.bank[bank_idx])
    }

    /// Questions in the order this session presents them.
    pub fn ordered_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.order.iter().map(|&i| &self.bank[i])
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.total()
    }

    /// True once the index has moved past the final question.
    pub fn is_past_end(&self) -> bool {
        self.current_index >= self.total()
    }

    /// True when nothing is left to answer: past the end, or the last
    /// question has been submitted.
    pub fn is_finished(&self) -> bool {
        self.is_past_end() || (self.answer_submitted && self.is_last_question())
    }

    pub fn select_option(&mut self, tag: OptionTag) -> bool {
        if self.answer_submitted || self.is_past_end() {
            return false;
        }
        self.selected_option = Some(tag);
        true
    }

    pub fn submit_answer(&mut self) -> SubmitOutcome {
        if self.answer_submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        let Some(selected) = self.selected_option else {
            return SubmitOutcome::NoSelection;
        };
        let Some(correct) = self.current_question().map(|q| q.answer) else {
            return SubmitOutcome::NoSelection;
        };

        self.answer_submitted = true;
        if selected == correct {
            self.correct_answers += 1;
            SubmitOutcome::Correct
        } else {
            self.wrong_answers += 1;
            SubmitOutcome::Wrong
        }
    }

    pub fn next_question(&mut self) -> bool {
        if !self.answer_submitted || self.is_last_question() || self.is_past_end() {
            return false;
        }
        self.current_index += 1;
        self.selected_option = None;
        self.answer_submitted = false;
        self.show_reference = false;
        true
    }

    pub fn restart_quiz(&mut self) {
        self.restart_quiz_with(&mut rand::thread_rng());
    }

    pub fn restart_quiz_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current_index = 0;
        self.correct_answers = 0;
        self.wrong_answers = 0;
        self.selected_option = None;
        self.answer_submitted = false;
        self.show_reference = false;
        self.shuffle_with(rng);
    }

    pub fn toggle_reference(&mut self) -> bool {
        self.show_reference = !self.show_reference;
        self.show_reference
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::QuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Quiz;
            }
            _ => {}
        },
        AppState::Quiz => handle_quiz_key(app, key.code),
    }
}

fn handle_quiz_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            if app.session.is_finished() {
                restart(app);
            } else if app.session.answer_submitted() {
                advance(app);
            } else {
                submit(app);
            }
        }
        KeyCode::Char('n') => advance(app),
        KeyCode::Char('r') => restart(app),
        KeyCode::Char('p') => toggle_reference(app),
        KeyCode::Char(c) => {
            if let Some(tag) = OptionTag::from_key(c)
                && app.session.select_option(tag)
            {
                app.warning = None;
            }
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    match app.session.submit_answer() {
        SubmitOutcome::NoSelection => {
            app.warning = Some(InputWarning::NoSelection);
        }
        SubmitOutcome::AlreadySubmitted => {}
        outcome => {
            app.warning = None;
            logger::log(&format!(
                "question {} answered {:?}: correct={} wrong={}",
                app.session.current_index() + 1,
                outcome,
                app.session.correct_answers(),
                app.session.wrong_answers()
            ));
        }
    }
}

fn advance(app: &mut App) {
    if app.session.next_question() {
        app.warning = None;
    }
}

fn restart(app: &mut App) {
    logger::log(&format!(
        "restart after {} correct, {} wrong",
        app.session.correct_answers(),
        app.session.wrong_answers()
    ));
    app.session.restart_quiz();
    app.warning = None;
}

fn toggle_reference(app: &mut App) {
    if app.session.show_reference() {
        app.session.toggle_reference();
        return;
    }

    if app.reference.is_none() {
        let loaded = match &app.reference_path {
            Some(path) => ReferenceDocument::load(path),
            None => Err(ReferenceError::NotConfigured),
        };
        match loaded {
            Ok(doc) => {
                logger::log(&format!("loaded reference {} ({} bytes)", doc.name(), doc.size));
                app.reference = Some(doc);
            }
            Err(e) => {
                logger::log(&format!("reference load failed: {}", e));
                app.warning = Some(InputWarning::Reference(e.to_string()));
                return;
            }
        }
    }

    app.session.toggle_reference();
    app.warning = None;
}
