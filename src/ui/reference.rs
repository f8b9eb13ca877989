use crate::reference::ReferenceDocument;
use crate::ui::layout::centered_rect;
use crate::utils::truncate_string;
use humansize::{BINARY, format_size};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const EMBED_PREVIEW_LEN: usize = 60;

pub fn draw_reference(f: &mut Frame, doc: &ReferenceDocument) {
    let area = centered_rect(70, 50, f.area());
    f.render_widget(Clear, area);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(vec![Span::styled("Document: ", label), Span::from(doc.name())]),
        Line::from(vec![Span::styled("Type: ", label), Span::from(doc.mime)]),
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::from(format_size(doc.size, BINARY)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Inline embed:", label)),
        Line::from(Span::styled(
            truncate_string(&doc.embed_html(), EMBED_PREVIEW_LEN),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "p",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Close"),
        ]),
    ];

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Reference")
                .style(Style::default().fg(Color::White)),
        );
    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::Path;

    #[test]
    fn test_reference_panel_shows_metadata() {
        let doc = ReferenceDocument::from_bytes(Path::new("/docs/guide.pdf"), &[0u8; 2048]);
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw_reference(f, &doc)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(content.contains("guide.pdf"));
        assert!(content.contains("application/pdf"));
        assert!(content.contains("KiB"));
        assert!(content.contains("<iframe src=\"data:application/pdf;base64,"));
    }
}
