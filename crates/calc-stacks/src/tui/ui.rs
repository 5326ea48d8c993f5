//! TUI layout and rendering
//!
//! The window mirrors the original desktop arrangement: a right-aligned
//! display line above the button grid, with the calculation history in
//! a sidebar and a one-line key hint at the bottom.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::TuiApp;
use super::keypad::KeypadWidget;

/// Window title
pub const WINDOW_TITLE: &str = " Calculator-Stacks ";

/// Key hints shown at the bottom of the window
pub const KEY_HINTS: &str = "0-9 . + - * /   Enter/= evaluate   Esc/C clear   q quit";

/// How many history entries the sidebar shows
const HISTORY_ROWS: usize = 12;

/// The screen regions of the calculator window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    /// The display line
    pub display: Rect,
    /// The button grid
    pub keypad: Rect,
    /// The history sidebar
    pub history: Rect,
    /// The key hint footer
    pub hints: Rect,
}

/// Computes the screen regions for the given terminal area. The event
/// loop uses the same split to hit-test mouse clicks against the
/// keypad.
#[must_use]
pub fn layout(area: Rect) -> UiAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // calculator column
            Constraint::Length(26), // history sidebar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // display
            Constraint::Min(12),   // keypad
            Constraint::Length(1), // key hints
        ])
        .split(columns[0]);

    UiAreas {
        display: main[0],
        keypad: main[1],
        hints: main[2],
        history: columns[1],
    }
}

/// Renders the calculator window to the frame.
pub fn render(app: &TuiApp, frame: &mut Frame) {
    let area = frame.area();
    let areas = layout(area);

    frame.render_widget(
        Block::default()
            .title(WINDOW_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
        area,
    );

    render_display(app, frame, areas.display);
    frame.render_widget(KeypadWidget::new(app.keypad()), areas.keypad);
    render_history(app, frame, areas.history);
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        areas.hints,
    );
}

fn render_display(app: &TuiApp, frame: &mut Frame, area: Rect) {
    let text = app.display();
    let style = if text.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(paragraph, area);
}

fn render_history(app: &TuiApp, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .state()
        .history()
        .iter_rev()
        .take(HISTORY_ROWS)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(&entry.expression, Style::default().fg(Color::Gray)),
                Span::raw(" = "),
                Span::styled(
                    format!("{}", entry.result),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::InputEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn screen_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn enter(app: &mut TuiApp, keys: &str) {
        for c in keys.chars() {
            let event = match c {
                '0'..='9' | '.' => InputEvent::DigitOrDot(c),
                '+' | '-' | '*' | '/' => InputEvent::Operator(c),
                '=' => InputEvent::Evaluate,
                _ => continue,
            };
            app.press(event);
        }
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_regions_are_disjoint_columns() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert!(areas.display.width > 0);
        assert!(areas.keypad.height >= 12);
        assert_eq!(areas.history.width, 26);
        // sidebar starts right of the calculator column
        assert!(areas.history.x >= areas.display.x + areas.display.width);
    }

    #[test]
    fn test_layout_display_above_keypad() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert!(areas.display.y < areas.keypad.y);
        assert!(areas.keypad.y < areas.hints.y);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_empty_app() {
        let app = TuiApp::new();
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = screen_content(&terminal);
        assert!(content.contains("Calculator-Stacks"));
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("History"));
    }

    #[test]
    fn test_render_shows_expression() {
        let mut app = TuiApp::new();
        enter(&mut app, "3+4");
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_content(&terminal).contains("3 + 4"));
    }

    #[test]
    fn test_render_shows_result() {
        let mut app = TuiApp::new();
        enter(&mut app, "3+4=");
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_content(&terminal).contains('7'));
    }

    #[test]
    fn test_render_shows_error() {
        let mut app = TuiApp::new();
        enter(&mut app, "5/0=");
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_content(&terminal).contains("Error: Division by 0"));
    }

    #[test]
    fn test_render_shows_history_entry() {
        let mut app = TuiApp::new();
        enter(&mut app, "6*7=");
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = screen_content(&terminal);
        assert!(content.contains("6 * 7"));
        assert!(content.contains("42"));
    }

    #[test]
    fn test_render_shows_key_hints() {
        let app = TuiApp::new();
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_content(&terminal).contains("evaluate"));
    }

    #[test]
    fn test_render_small_terminal_no_panic() {
        let app = TuiApp::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_keypad_click_target_matches_layout() {
        let mut app = TuiApp::new();
        let areas = layout(Rect::new(0, 0, 80, 24));
        // click the middle of the keypad area and expect some button
        let x = areas.keypad.x + areas.keypad.width / 2;
        let y = areas.keypad.y + areas.keypad.height / 2;
        app.click(areas.keypad, x, y);
        // whichever button that was, the event must have reached the core
        // (display text or keypad highlight changed)
        let highlighted = app
            .keypad()
            .buttons_with_positions()
            .any(|(_, b)| b.pressed)
            || app.keypad().clear_button().pressed;
        assert!(highlighted);
    }
}
