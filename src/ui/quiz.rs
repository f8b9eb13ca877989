use crate::models::InputWarning;
use crate::ui::layout::{QuizLayout, calculate_quiz_chunks};
use crate::view::{Body, Control, OptionMark, OptionView, QuestionView, QuizView, Sidebar};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz(
    f: &mut Frame,
    view: &QuizView,
    warning: Option<&InputWarning>,
    has_reference: bool,
) {
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new("Quiz App")
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(view.progress.ratio)
        .label(format!("{} / {}", view.progress.current, view.progress.total));
    f.render_widget(gauge, layout.progress_area);

    match &view.body {
        Body::Question(question) => draw_question(f, &layout, question, warning),
        Body::Completed { correct, total } => {
            draw_completed(f, layout.body_area, *correct, *total)
        }
    }

    draw_sidebar(f, layout.sidebar_area, &view.sidebar);
    draw_help(f, layout.help_area, &view.body, has_reference);
}

fn draw_question(
    f: &mut Frame,
    layout: &QuizLayout,
    question: &QuestionView,
    warning: Option<&InputWarning>,
) {
    let prompt = Paragraph::new(Text::from(question.prompt.as_str()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question {}", question.number)),
        );
    f.render_widget(prompt, layout.question_area);

    let option_lines: Vec<Line> = question.options.iter().map(option_line).collect();
    let options = Paragraph::new(option_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let mut text = Text::default();
    if let Some(warning) = warning {
        text.push_line(Line::from(Span::styled(
            warning.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
    }

    if let Some(explanation) = &question.explanation {
        text.push_line(Line::from(Span::styled(
            "Explanation:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(Span::styled(
            explanation.as_str(),
            Style::default().fg(Color::Blue),
        )));
        text.push_line(Line::from(""));
    }

    match &question.control {
        Control::Submit => {
            text.push_line(Line::from(vec![
                Span::styled("Enter", key_style()),
                Span::from(" Submit"),
            ]));
        }
        Control::Next => {
            text.push_line(Line::from(vec![
                Span::styled("Enter", key_style()),
                Span::from(" Next question"),
            ]));
        }
        Control::Restart { message } => {
            text.push_line(Line::from(Span::styled(
                message.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(vec![
                Span::styled("Enter", key_style()),
                Span::from(" Restart"),
            ]));
        }
    }

    let feedback = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);
}

fn option_line(option: &OptionView) -> Line<'_> {
    let text = format!("{}: {}", option.tag, option.label);
    match option.mark {
        OptionMark::Choice { selected: true } => Line::from(vec![
            Span::styled("▶ ", key_style()),
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        OptionMark::Choice { selected: false } | OptionMark::Plain => {
            Line::from(vec![Span::from("  "), Span::from(text)])
        }
        OptionMark::Correct => Line::from(Span::styled(
            format!("✓ {} (Correct answer)", text),
            Style::default().fg(Color::Green),
        )),
        OptionMark::Incorrect => Line::from(Span::styled(
            format!("✗ {} (Incorrect answer)", text),
            Style::default().fg(Color::Red),
        )),
    }
}

fn draw_completed(f: &mut Frame, area: Rect, correct: usize, total: usize) {
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        crate::view::completion_message(correct),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(format!("Total questions: {}", total)));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::styled("Enter", key_style()),
        Span::from(" Restart"),
    ]));

    let done = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(done, area);
}

fn draw_sidebar(f: &mut Frame, area: Rect, sidebar: &Sidebar) {
    let text = vec![
        Line::from(Span::styled(
            format!("Correct Answers: {}", sidebar.correct),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Wrong Answers: {}", sidebar.wrong),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(format!(
            "Questions Completed: {} / {}",
            sidebar.completed, sidebar.total
        )),
    ];

    let stats = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz Statistics"));
    f.render_widget(stats, area);
}

fn draw_help(f: &mut Frame, area: Rect, body: &Body, has_reference: bool) {
    let mut spans = Vec::new();
    if let Body::Question(question) = body
        && question.control == Control::Submit
    {
        spans.extend([Span::styled("A-D", key_style()), Span::from(" Select  ")]);
    }
    spans.extend([
        Span::styled("r", key_style()),
        Span::from(" Restart  "),
    ]);
    if has_reference {
        spans.extend([
            Span::styled("p", key_style()),
            Span::from(" Reference  "),
        ]);
    }
    spans.extend([Span::styled("q", key_style()), Span::from(" Quit")]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = crate::ui::layout::centered_rect(50, 30, f.area());
    f.render_widget(ratatui::widgets::Clear, area);

    let text = vec![
        Line::from(""),
        Line::from("Quit the quiz? Your score will not be kept."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Yes  "),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(" No (Continue Quiz)"),
        ]),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quit")
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, area);
}
