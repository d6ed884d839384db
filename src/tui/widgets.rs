//! Small reusable widgets for the questionnaire screen.

use super::theme::{Styles, colors};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Minimum terminal size for the questionnaire screen
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Rows outside the input area: header, question, buttons, status, footer.
pub const FIXED_ROWS: u16 = 9;
/// Smallest input box: two borders and one line of text.
pub const INPUT_MIN_ROWS: u16 = 3;

/// Height needed to show `inputs` input boxes with at least one line each.
#[must_use]
pub fn required_height(inputs: usize) -> u16 {
    let inputs = u16::try_from(inputs).unwrap_or(u16::MAX);
    MIN_HEIGHT.max(FIXED_ROWS.saturating_add(INPUT_MIN_ROWS.saturating_mul(inputs)))
}

/// Check if terminal meets the size requirements of a screen needing
/// `min_height` rows.
pub const fn check_terminal_size(
    width: u16,
    height: u16,
    min_height: u16,
) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < min_height {
        Err((MIN_WIDTH, min_height))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Display width of a navigation button, including its brackets and padding.
#[must_use]
pub fn button_width(label: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(label) + 4).unwrap_or(u16::MAX)
}

/// A navigation button span, `[ label ]`.
#[must_use]
pub fn button(label: &str, enabled: bool, focused: bool, primary: bool) -> Span<'static> {
    Span::styled(
        format!("[ {label} ]"),
        Styles::button(enabled, focused, primary),
    )
}

/// Centered rectangle taking the given percentages of `r`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a bordered popup over whatever is beneath it.
pub fn render_popup(frame: &mut ratatui::Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24, MIN_HEIGHT).is_ok());
        assert_eq!(
            check_terminal_size(40, 24, MIN_HEIGHT),
            Err((MIN_WIDTH, MIN_HEIGHT))
        );
        assert_eq!(check_terminal_size(80, 20, 24), Err((MIN_WIDTH, 24)));
    }

    #[test]
    fn test_required_height_grows_with_inputs() {
        assert_eq!(required_height(1), MIN_HEIGHT);
        assert_eq!(required_height(2), MIN_HEIGHT);
        // Five one-line boxes plus the fixed rows
        assert_eq!(required_height(5), 24);
    }

    #[test]
    fn test_button_width_counts_wide_characters() {
        assert_eq!(button_width("Next"), 8);
        // Two CJK characters take two columns each
        assert_eq!(button_width("次へ"), 8);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
