//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::input::KEY_BINDINGS;

/// Window title
pub const TITLE: &str = " Pocket Calculator ";

/// Terminal-only shortcuts shown under the key bindings
pub const TUI_SHORTCUTS: &[(&str, &str)] = &[
    ("Click", "Press button"),
    ("Ctrl+L", "Clear history"),
    ("Ctrl+C", "Quit"),
];

/// Height of the keypad box: five button rows of two lines plus border
const KEYPAD_HEIGHT: u16 = 12;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display box
    pub display: Rect,
    /// Pending operation box
    pub pending: Rect,
    /// History list
    pub history: Rect,
    /// Keypad box, also used for mouse hit testing
    pub keypad: Rect,
    /// Help panel
    pub help: Rect,
}

impl UiLayout {
    /// Splits the frame area into regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(22),
                Constraint::Length(24),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .split(columns[0]);

        let keypad = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Fill(1)])
            .split(columns[1]);

        Self {
            display: main[0],
            pending: main[1],
            history: main[2],
            keypad: keypad[0],
            help: columns[2],
        }
    }
}

/// Where the keypad is drawn for a given frame area
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    UiLayout::new(area).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.calculator().state();
        let style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(state.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let pending = self
            .app
            .calculator()
            .state()
            .pending_expression()
            .unwrap_or_default();

        Paragraph::new(Span::styled(pending, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Pending ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from(area.height.saturating_sub(2));
        let items: Vec<ListItem> = self
            .app
            .calculator()
            .history()
            .iter_rev()
            .take(visible)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = KEY_BINDINGS
            .iter()
            .chain(TUI_SHORTCUTS)
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::new(area);
        self.render_display(layout.display, buf);
        self.render_pending(layout.pending, buf);
        self.render_history(layout.history, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        Self::render_help(layout.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn draw(app: &CalculatorApp) -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn enter(app: &mut CalculatorApp, script: &str) {
        let now = Instant::now();
        for c in script.chars() {
            app.press(Token::from_char(c).unwrap(), now);
        }
    }

    #[test]
    fn test_layout_regions() {
        let layout = UiLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.keypad.width, 22);
        assert_eq!(layout.keypad.height, KEYPAD_HEIGHT);
        assert_eq!(layout.help.width, 24);
        assert_eq!(layout.display.height, 3);
        assert!(layout.display.right() <= layout.keypad.x);
        assert_eq!(keypad_area(Rect::new(0, 0, 80, 24)), layout.keypad);
    }

    #[test]
    fn test_render_initial() {
        let app = CalculatorApp::new();
        let text = screen_text(&draw(&app));
        assert!(text.contains("Pocket Calculator"));
        assert!(text.contains("Display"));
        assert!(text.contains("Keypad"));
        assert!(text.contains("Help"));
        assert!(text.contains("[7]"));
    }

    #[test]
    fn test_render_display_right_aligned() {
        let mut app = CalculatorApp::new();
        enter(&mut app, "123");
        let terminal = draw(&app);
        let layout = UiLayout::new(Rect::new(0, 0, 80, 24));
        let buf = terminal.backend().buffer();
        let y = layout.display.y + 1;
        let last = layout.display.right() - 2;
        assert_eq!(buf[(last, y)].symbol(), "3");
        assert_eq!(buf[(last - 2, y)].symbol(), "1");
    }

    #[test]
    fn test_render_pending_operation() {
        let mut app = CalculatorApp::new();
        enter(&mut app, "12+");
        let text = screen_text(&draw(&app));
        assert!(text.contains("12 +"));
    }

    #[test]
    fn test_render_error_in_red() {
        let mut app = CalculatorApp::new();
        enter(&mut app, "5/0=");
        let terminal = draw(&app);
        assert!(screen_text(&terminal).contains("Error"));

        let layout = UiLayout::new(Rect::new(0, 0, 80, 24));
        let buf = terminal.backend().buffer();
        let cell = &buf[(layout.display.right() - 2, layout.display.y + 1)];
        assert_eq!(cell.symbol(), "r");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_render_history_newest_first() {
        let mut app = CalculatorApp::new();
        enter(&mut app, "1+1=C2+2=");
        let text = screen_text(&draw(&app));
        let older = text.find("1 + 1 = 2").unwrap();
        let newer = text.find("2 + 2 = 4").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_render_help_bindings() {
        let app = CalculatorApp::new();
        let text = screen_text(&draw(&app));
        assert!(text.contains("Evaluate"));
        assert!(text.contains("Clear history"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
