//! Button grid for the terminal calculator
//!
//! The original desktop layout: four rows of digit/operator buttons and
//! a clear button spanning the full bottom row.
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! [         C         ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::session::InputEvent;

/// What a keypad button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Decimal,
    /// Append an operator
    Operator(char),
    /// Evaluate the expression
    Equals,
    /// Clear the display
    Clear,
}

impl ButtonAction {
    /// The calculator event this button produces.
    #[must_use]
    pub fn to_event(self) -> InputEvent {
        match self {
            Self::Digit(d) => {
                InputEvent::DigitOrDot(char::from_digit(u32::from(d), 10).unwrap_or('0'))
            }
            Self::Decimal => InputEvent::DigitOrDot('.'),
            Self::Operator(op) => InputEvent::Operator(op),
            Self::Equals => InputEvent::Evaluate,
            Self::Clear => InputEvent::Clear,
        }
    }
}

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('0'),
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator button.
    #[must_use]
    pub fn operator(op: char) -> Self {
        Self {
            label: op,
            pressed: false,
            action: ButtonAction::Operator(op),
        }
    }

    /// Creates the decimal-point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            action: ButtonAction::Decimal,
        }
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            action: ButtonAction::Equals,
        }
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            action: ButtonAction::Clear,
        }
    }
}

/// Number of columns in the button grid
const COLS: usize = 4;
/// Number of grid rows (the clear row is extra)
const ROWS: usize = 4;

/// The keypad: a 4x4 grid plus a full-width clear row.
#[derive(Debug, Clone)]
pub struct Keypad {
    grid: Vec<KeypadButton>,
    clear: KeypadButton,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout.
    #[must_use]
    pub fn new() -> Self {
        let grid = vec![
            // Row 1: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator('/'),
            // Row 2: 4 5 6 *
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator('*'),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator('-'),
            // Row 4: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::decimal(),
            KeypadButton::equals(),
            KeypadButton::operator('+'),
        ];

        Self {
            grid,
            clear: KeypadButton::clear(),
        }
    }

    /// Returns the grid dimensions (rows, cols), not counting the clear
    /// row.
    #[must_use]
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a grid button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < ROWS && col < COLS {
            self.grid.get(row * COLS + col)
        } else {
            None
        }
    }

    /// The full-width clear button.
    #[must_use]
    pub fn clear_button(&self) -> &KeypadButton {
        &self.clear
    }

    /// Finds a button (grid or clear) by its label character.
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<&KeypadButton> {
        self.grid
            .iter()
            .find(|b| b.label == label)
            .or_else(|| (self.clear.label == label).then_some(&self.clear))
    }

    /// Iterates the grid buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.grid
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / COLS, i % COLS), btn))
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for btn in &mut self.grid {
            btn.pressed = false;
        }
        self.clear.pressed = false;
    }

    /// Highlights the button that produces the given event, releasing
    /// every other one.
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if self.clear.action.to_event() == event {
            self.clear.pressed = true;
            return;
        }
        if let Some(btn) = self.grid.iter_mut().find(|b| b.action.to_event() == event) {
            btn.pressed = true;
        }
    }

    /// Maps a click position inside the keypad area to a button action.
    /// The area border and dead space between buttons miss.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border is 1 char on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let visual_rows = (ROWS + 1) as u16;
        let btn_width = (area.width - 2) / COLS as u16;
        let btn_height = (area.height - 2) / visual_rows;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < ROWS && col < COLS {
            self.grid.get(row * COLS + col).map(|b| b.action)
        } else if row == ROWS {
            Some(self.clear.action)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over the given keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.action {
        ButtonAction::Digit(_) => Style::default().fg(Color::White),
        ButtonAction::Decimal => Style::default().fg(Color::Cyan),
        ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
        ButtonAction::Equals => Style::default().fg(Color::Green),
        ButtonAction::Clear => Style::default().fg(Color::Red),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let visual_rows = (ROWS + 1) as u16;
        if inner.width < COLS as u16 || inner.height < visual_rows {
            return; // too small to render
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / visual_rows;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, button_style(btn)),
                        btn_width,
                    );
                }
            }
        }

        // clear row spans all four columns
        let clear = self.keypad.clear_button();
        let label = format!("[{:^width$}]", clear.label, width = 9);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        let label_y = inner.y + (ROWS as u16 * btn_height) + btn_height / 2;
        if label_y < inner.y + inner.height {
            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, button_style(clear)),
                inner.width,
            );
        }
    }
}
