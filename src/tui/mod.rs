//! TUI (Text User Interface): chat history, model selector and the message info modal.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

pub use app::App;

use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::LaunchConfig;

use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// After a lone Esc, wait briefly for the key of an Esc+key (Option as Meta) sequence.
/// Terminals may deliver the second byte with a delay, so poll in short steps.
fn drain_escape_sequence(app: &mut App) -> io::Result<Option<KeyEvent>> {
    let step_ms = 25u64;
    let mut elapsed = 0u64;
    while elapsed < constants::ESC_SEQUENCE_DRAIN_MS {
        if event::poll(Duration::from_millis(step_ms))? {
            match event::read()? {
                Event::Key(next) => return Ok(Some(next)),
                Event::Mouse(m) => {
                    let _ = handlers::handle_mouse(m, app);
                    return Ok(None);
                }
                _ => {}
            }
        }
        elapsed += step_ms;
    }
    Ok(None)
}

/// Run the TUI loop until the user quits.
pub fn run(config: Arc<LaunchConfig>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.as_ref());
    log::info!(
        "TUI started with model {} ({} models available)",
        app.current_model_name,
        config.all_models().len()
    );

    // Mouse events for tab clicks, message selection and wheel scrolling
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Kitty keyboard protocol: Alt+key as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        match event::read()? {
            Event::Mouse(mouse) => {
                let _ = handlers::handle_mouse(mouse, &mut app);
            }
            Event::Key(key) => {
                let key_to_handle = if handlers::would_esc_start_meta_sequence(&key, &app) {
                    match drain_escape_sequence(&mut app)? {
                        Some(next) => {
                            app.escape_pending = true;
                            next
                        }
                        None => key,
                    }
                } else {
                    key
                };
                if handlers::handle_key(key_to_handle, &mut app, config.as_ref())
                    == HandleResult::Break
                {
                    break;
                }
            }
            _ => {}
        }
    }

    log::info!("TUI exiting after {} messages", app.messages.len());
    terminal.show_cursor()?;
    Ok(())
}
