use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use tour_calculator::{
    models::Mode,
    scoring::ProgressionCalculator,
    tui::{ui, Action, App, Event as TuiEvent, EventHandler},
    utils::Clock,
};

pub fn run_tui<C: Clock>(calculator: ProgressionCalculator<C>, mode: Mode) -> Result<()> {
    // Log lines would tear up the alternate screen
    disable_logging_output();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(calculator.settings(), mode);
    let events = EventHandler::new(250);

    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app, &events, &calculator);

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        Err(err)
    } else {
        Ok(())
    }
}

fn disable_logging_output() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let null_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::sink)
        .with_filter(tracing_subscriber::filter::LevelFilter::OFF);

    let _ = tracing_subscriber::registry().with(null_layer).try_init();
}

fn run_app<B: ratatui::backend::Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
    calculator: &ProgressionCalculator<C>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        match events.next()? {
            TuiEvent::Key(key) => match app.handle_key(key) {
                Action::Calculate => {
                    let outcome = calculator.calculate(&app.request());
                    app.apply_calculation(outcome);
                }
                Action::Quit | Action::None => {}
            },
            TuiEvent::Resize(_, _) | TuiEvent::Tick => {}
        }
    }

    Ok(())
}
