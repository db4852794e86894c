//! Keypad widget and mouse hit testing
//!
//! The widget draws the shared [`Keypad`] model inside a bordered box.
//! [`hit_test`] uses the same geometry, so a click lands on the button
//! drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Token;
use crate::input::Keypad;

/// Cell size of one button inside `area`, or `None` if it does not fit
fn button_size(keypad: &Keypad, area: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let inner_w = area.width.checked_sub(2)?;
    let inner_h = area.height.checked_sub(2)?;
    let w = inner_w / u16::try_from(cols).ok()?;
    let h = inner_h / u16::try_from(rows).ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

/// Converts a click position to a button index
///
/// Clicks on the border, in the empty cells of the last row, or outside
/// the area return `None`.
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let (btn_w, btn_h) = button_size(keypad, area)?;

    let rel_x = x.checked_sub(area.x)?;
    let rel_y = y.checked_sub(area.y)?;
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let col = usize::from((rel_x - 1) / btn_w);
    let row = usize::from((rel_y - 1) / btn_h);
    keypad.index_at(row, col)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(token: Token, pressed: bool) -> Style {
    if pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match token {
        Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
        Token::Operator(_) => Style::default().fg(Color::Yellow),
        Token::Evaluate => Style::default().fg(Color::Green),
        Token::Clear | Token::Delete => Style::default().fg(Color::Red),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_w, btn_h)) = button_size(self.keypad, area) else {
            return;
        };
        if btn_w < 3 {
            return;
        }

        let inner = area.inner(Margin::new(1, 1));
        for btn in self.keypad.buttons() {
            let (Ok(col), Ok(row)) = (u16::try_from(btn.col), u16::try_from(btn.row)) else {
                continue;
            };
            let label = format!("[{}]", btn.label());
            let width = u16::try_from(label.chars().count()).unwrap_or(btn_w);
            let x = inner.x + col * btn_w + btn_w.saturating_sub(width) / 2;
            let y = inner.y + row * btn_h + btn_h / 2;

            if y < inner.bottom() && x < inner.right() {
                let style = button_style(btn.token, btn.pressed);
                buf.set_span(x, y, &Span::styled(label, style), btn_w);
            }
        }
    }
}
