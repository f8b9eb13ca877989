pub mod layout;
mod quiz;
mod reference;

pub use layout::{calculate_quiz_chunks, centered_rect};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use reference::draw_reference;

use crate::models::{App, AppState};
use crate::view::render;
use ratatui::Frame;

/// Draws the whole screen for the current app state.
pub fn draw_app(f: &mut Frame, app: &App) {
    let view = render(&app.session);
    draw_quiz(f, &view, app.warning.as_ref(), app.reference_path.is_some());

    if app.session.show_reference()
        && let Some(doc) = &app.reference
    {
        draw_reference(f, doc);
    }

    if app.state == AppState::QuitConfirm {
        draw_quit_confirmation(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionTag;
    use crate::reference::ReferenceDocument;
    use crate::session::tests::session_in_order;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::{Path, PathBuf};

    fn buffer_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw_app(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_reference_panel_only_when_toggled() {
        let mut app = App::new(
            session_in_order(&[OptionTag::A]),
            Some(PathBuf::from("/docs/guide.pdf")),
        );
        app.reference = Some(ReferenceDocument::from_bytes(
            Path::new("/docs/guide.pdf"),
            b"%PDF",
        ));
        assert!(!buffer_text(&app).contains("Inline embed"));

        app.session.toggle_reference();
        assert!(buffer_text(&app).contains("Inline embed"));
    }

    #[test]
    fn test_help_mentions_reference_when_configured() {
        let app = App::new(session_in_order(&[OptionTag::A]), Some(PathBuf::from("x.pdf")));
        assert!(buffer_text(&app).contains("Reference"));

        let app = App::new(session_in_order(&[OptionTag::A]), None);
        assert!(!buffer_text(&app).contains("Reference"));
    }

    #[test]
    fn test_quit_popup_over_quiz() {
        let mut app = App::new(session_in_order(&[OptionTag::A]), None);
        app.state = AppState::QuitConfirm;
        assert!(buffer_text(&app).contains("Quit the quiz?"));
    }
}
