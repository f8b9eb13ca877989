use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quiz_app::config::Cli;
use quiz_app::{App, QuizSession, draw_app, format_summary, handle_quiz_input, load_questions, logger};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = logger::init(path)
    {
        eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
    }

    let questions = match load_questions(&cli.data) {
        Ok(questions) => questions,
        Err(e) => {
            logger::log(&format!("load failed: {}", e));
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logger::log(&format!(
        "loaded {} questions from {}",
        questions.len(),
        cli.data.display()
    ));

    let session = QuizSession::new(Arc::from(questions));
    let mut app = App::new(session, cli.reference.clone());

    if let Err(e) = run(&mut app) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    print!("{}", format_summary(&app.session, cli.summary.into()));
    ExitCode::SUCCESS
}

fn run(app: &mut App) -> io::Result<()> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    logger::log("session started");
    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw_app(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_quiz_input(app, key);
        }
    }
    logger::log("session ended");
    Ok(())
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
