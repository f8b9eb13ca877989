pub mod bank;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod reference;
pub mod report;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use bank::{load_questions, parse_questions};
pub use error::{QuizError, ReferenceError};
pub use models::{App, AppState, InputWarning, OptionTag, Question, QuizSession};
pub use reference::ReferenceDocument;
pub use report::{SummaryFormat, format_summary};
pub use session::{SubmitOutcome, handle_quiz_input};
pub use ui::draw_app;
pub use view::{QuizView, render};
