//! Calculator-Stacks launcher
//!
//! Sets the terminal up, runs the draw/input loop, and restores the
//! terminal on the way out. All calculator behavior lives in the
//! library; this binary only shuttles events.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use calc_stacks::tui::{layout, render, InputHandler, TuiApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = TuiApp::new();
    let input_handler = InputHandler::new();

    loop {
        let mut keypad_area = Rect::default();
        terminal.draw(|frame| {
            keypad_area = layout(frame.area()).keypad;
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(keypad_area, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
