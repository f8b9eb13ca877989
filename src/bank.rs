use crate::error::QuizError;
use crate::models::{OptionTag, Question};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_QUESTION: &str = "Question";
pub const COL_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];
pub const COL_ANSWER: &str = "Right Answer";
pub const COL_EXPLANATION: &str = "Explanation";

/// Column positions resolved from the header row.
struct Columns {
    question: usize,
    options: [usize; 4],
    answer: usize,
    explanation: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, QuizError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(QuizError::MissingColumn(name))
        };

        Ok(Columns {
            question: find(COL_QUESTION)?,
            options: [
                find(COL_OPTIONS[0])?,
                find(COL_OPTIONS[1])?,
                find(COL_OPTIONS[2])?,
                find(COL_OPTIONS[3])?,
            ],
            answer: find(COL_ANSWER)?,
            explanation: find(COL_EXPLANATION)?,
        })
    }
}

pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(file)
}

/// Parses a question bank from CSV with a header row. Column order is free;
/// unknown columns are ignored.
pub fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, QuizError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let columns = Columns::resolve(reader.headers()?)?;

    let mut questions = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        let raw_answer = field(columns.answer);
        let answer = raw_answer
            .parse::<OptionTag>()
            .map_err(|e| QuizError::InvalidAnswer {
                row: i + 1,
                value: e.0,
            })?;

        questions.push(Question {
            prompt: field(columns.question),
            options: columns.options.map(field),
            answer,
            explanation: field(columns.explanation),
        });
    }

    if questions.is_empty() {
        return Err(QuizError::Empty);
    }

    Ok(questions)
}
