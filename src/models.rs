use crate::reference::ReferenceDocument;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionTag {
    A,
    B,
    C,
    D,
}

impl OptionTag {
    pub const ALL: [OptionTag; 4] = [OptionTag::A, OptionTag::B, OptionTag::C, OptionTag::D];

    pub fn index(self) -> usize {
        match self {
            OptionTag::A => 0,
            OptionTag::B => 1,
            OptionTag::C => 2,
            OptionTag::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionTag::A => "A",
            OptionTag::B => "B",
            OptionTag::C => "C",
            OptionTag::D => "D",
        }
    }

    /// Maps a key press (`a`-`d`, `A`-`D` or `1`-`4`) to a tag.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' | '1' => Some(OptionTag::A),
            'B' | '2' => Some(OptionTag::B),
            'C' | '3' => Some(OptionTag::C),
            'D' | '4' => Some(OptionTag::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionTagError(pub String);

impl FromStr for OptionTag {
    type Err = ParseOptionTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(OptionTag::A),
            "B" | "b" => Ok(OptionTag::B),
            "C" | "c" => Ok(OptionTag::C),
            "D" | "d" => Ok(OptionTag::D),
            other => Err(ParseOptionTagError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub answer: OptionTag,
    pub explanation: String,
}

impl Question {
    pub fn option(&self, tag: OptionTag) -> &str {
        &self.options[tag.index()]
    }
}

/// Progress of one user through the question bank.
///
/// `order` is a permutation of indices into `bank`; `current_index` walks it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub(crate) bank: Arc<[Question]>,
    pub(crate) order: Vec<usize>,
    pub(crate) current_index: usize,
    pub(crate) correct_answers: usize,
    pub(crate) wrong_answers: usize,
    pub(crate) selected_option: Option<OptionTag>,
    pub(crate) answer_submitted: bool,
    pub(crate) show_reference: bool,
}

/// Non-fatal problem shown inline under the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWarning {
    NoSelection,
    Reference(String),
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::NoSelection => f.write_str("Please select an option before submitting."),
            InputWarning::Reference(msg) => write!(f, "Reference unavailable: {}", msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
}

/// Everything the event loop owns between frames.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub state: AppState,
    pub warning: Option<InputWarning>,
    pub reference_path: Option<PathBuf>,
    pub reference: Option<ReferenceDocument>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession, reference_path: Option<PathBuf>) -> Self {
        Self {
            session,
            state: AppState::Quiz,
            warning: None,
            reference_path,
            reference: None,
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_tag_parses_trimmed_and_lowercase() {
        assert_eq!(" B ".parse::<OptionTag>(), Ok(OptionTag::B));
        assert_eq!("d".parse::<OptionTag>(), Ok(OptionTag::D));
        assert!("E".parse::<OptionTag>().is_err());
        assert!("".parse::<OptionTag>().is_err());
    }

    #[test]
    fn test_option_tag_from_key() {
        assert_eq!(OptionTag::from_key('a'), Some(OptionTag::A));
        assert_eq!(OptionTag::from_key('C'), Some(OptionTag::C));
        assert_eq!(OptionTag::from_key('4'), Some(OptionTag::D));
        assert_eq!(OptionTag::from_key('x'), None);
    }

    #[test]
    fn test_question_option_lookup() {
        let q = Question {
            prompt: "2+2?".to_string(),
            options: [
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "22".to_string(),
            ],
            answer: OptionTag::B,
            explanation: "Arithmetic".to_string(),
        };
        assert_eq!(q.option(OptionTag::B), "4");
        assert_eq!(q.option(q.answer), "4");
        assert_eq!(q.option(OptionTag::D), "22");
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(
            InputWarning::NoSelection.to_string(),
            "Please select an option before submitting."
        );
        assert!(InputWarning::Reference("gone".into())
            .to_string()
            .contains("gone"));
    }
}
