// Geez Terminal Front End
// Full-screen line editor that types through a composition session

mod app;
mod handlers;
mod ui;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use geez_core::Session;
use ratatui::prelude::*;

use app::Editor;
use handlers::handle_input;
use ui::draw_ui;

/// Run the editor until the user quits or `running` is cleared.
///
/// Returns every line typed, including one left open at exit.
pub fn run(session: Session, running: Arc<AtomicBool>) -> io::Result<Vec<String>> {
    let mut editor = Editor::new(session);
    let tick_interval = editor.tick_interval();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = loop {
        if !running.load(Ordering::SeqCst) {
            break Ok(());
        }

        if let Err(err) = terminal.draw(|f| draw_ui(f, &editor)) {
            break Err(err);
        }

        // Nothing typed for a while: let a held match go out
        match event::poll(tick_interval) {
            Ok(true) => {}
            Ok(false) => {
                editor.tick(Instant::now());
                continue;
            }
            Err(err) => break Err(err),
        }

        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(err) => break Err(err),
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if handle_input(&mut editor, key, Instant::now()) {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result.map(|()| editor.finish())
}
