//! Terminal setup, the main loop, and screen rendering.

use super::app::{App, FocusTarget};
use super::events::{Event, EventHandler, handle_key_event};
use super::theme::{FooterHints, Styles, render_footer_hints};
use super::widgets::{
    INPUT_MIN_ROWS, button, button_width, centered_rect, check_terminal_size, render_popup,
    render_size_warning, required_height,
};
use crate::presentation::{InputWidget, SelectInput, StepView, TextInput};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, stdout};

/// Caret drawn at the end of the focused text input
const CARET: &str = "▏";

/// Run the TUI application until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!(steps = app.controller().len(), "Starting questionnaire TUI");
    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            tracing::debug!(
                answered = app.controller().answers().len(),
                "Questionnaire closed"
            );
            return Ok(());
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.view();

    if let Err((width, height)) =
        check_terminal_size(area.width, area.height, required_height(view.inputs.len()))
    {
        render_size_warning(frame, area, width, height);
        return;
    }

    let focused = app.focused();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Question
            Constraint::Min(6),    // Inputs
            Constraint::Length(1), // Navigation buttons
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app, &view);
    render_question(frame, chunks[1], &view);
    render_inputs(frame, chunks[2], &view, focused);
    render_navigation(frame, chunks[3], &view, focused);
    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5], &view, focused);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, view: &StepView) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());

    if app.show_progress {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {}/{} ", view.position + 1, view.total),
                Styles::subsection_title(),
            ))
            .right_aligned(),
        );
    }

    let heading = Paragraph::new(Line::from(Span::styled(
        view.heading(),
        Styles::header_title(),
    )))
    .block(block);
    frame.render_widget(heading, area);
}

fn render_question(frame: &mut Frame, area: Rect, view: &StepView) {
    let question = Paragraph::new(Span::styled(view.question.clone(), Styles::question()))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(ratatui::widgets::Padding::horizontal(1)));
    frame.render_widget(question, area);
}

fn render_inputs(frame: &mut Frame, area: Rect, view: &StepView, focused: Option<FocusTarget>) {
    let constraints: Vec<Constraint> = view
        .inputs
        .iter()
        .map(|input| match input {
            InputWidget::Select(_) => Constraint::Length(INPUT_MIN_ROWS),
            InputWidget::Text(_) => Constraint::Min(INPUT_MIN_ROWS),
        })
        .collect();

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, (input, slot)) in view.inputs.iter().zip(slots.iter()).enumerate() {
        let is_focused = focused == Some(FocusTarget::Input(i));
        match input {
            InputWidget::Select(select) => render_select(frame, *slot, select, is_focused),
            InputWidget::Text(text) => render_text(frame, *slot, text, is_focused),
        }
    }
}

fn input_block(title: Option<&str>, focused: bool) -> Block<'static> {
    let mut block = Block::default().borders(Borders::ALL).border_style(if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    });
    if let Some(title) = title {
        block = block.title(Span::styled(format!(" {title} "), Styles::subsection_title()));
    }
    block
}

fn render_select(frame: &mut Frame, area: Rect, select: &SelectInput, focused: bool) {
    let choice = select.current();
    let label_style = if select.is_unanswered() {
        Styles::placeholder()
    } else {
        Styles::text().bold()
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Styles::shortcut_key()),
        Span::styled(choice.label.clone(), label_style),
        Span::styled(" ▶", Styles::shortcut_key()),
        Span::styled(
            format!("  ({}/{})", select.selected, select.choices.len() - 1),
            Styles::shortcut_desc(),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(input_block(None, focused)),
        area,
    );
}

/// Lines of a text input: the value, or the placeholder when empty.
fn text_lines(text: &TextInput, focused: bool) -> Vec<Line<'static>> {
    if text.value.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(CARET, Styles::border_focused()));
        }
        spans.push(Span::styled(text.placeholder.clone(), Styles::placeholder()));
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line<'static>> = text
        .value
        .split('\n')
        .map(|l| Line::styled(l.to_string(), Styles::text()))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CARET, Styles::border_focused()));
        }
    }
    lines
}

/// Rows to scroll so the last wrapped line of `paragraph` is visible.
fn tail_scroll(paragraph: &Paragraph, inner: Rect) -> u16 {
    let wrapped = paragraph.line_count(inner.width);
    wrapped.saturating_sub(inner.height as usize) as u16
}

fn render_text(frame: &mut Frame, area: Rect, text: &TextInput, focused: bool) {
    let block = input_block(text.heading.as_deref(), focused);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(text_lines(text, focused)).wrap(Wrap { trim: false });
    let scroll = tail_scroll(&paragraph, inner);
    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
}

fn render_navigation(
    frame: &mut Frame,
    area: Rect,
    view: &StepView,
    focused: Option<FocusTarget>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(&view.previous_label)),
            Constraint::Min(0),
            Constraint::Length(button_width(&view.next_label)),
        ])
        .split(area);

    let previous = button(
        &view.previous_label,
        view.navigation.previous_enabled,
        focused == Some(FocusTarget::Previous),
        false,
    );
    let next = button(
        &view.next_label,
        view.navigation.next_enabled,
        focused == Some(FocusTarget::Next),
        true,
    );

    frame.render_widget(Paragraph::new(Line::from(previous)), cols[0]);
    frame.render_widget(Paragraph::new(Line::from(next)), cols[2]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(msg) = app.status.peek() {
        Line::from(Span::styled(format!(" {msg}"), Styles::warning()))
    } else {
        let (answered, total) = app.controller().current_progress();
        Line::from(Span::styled(
            format!(" {answered}/{total} answered on this step"),
            if answered == total {
                Styles::success()
            } else {
                Styles::shortcut_desc()
            },
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &StepView, focused: Option<FocusTarget>) {
    let kind = focused.map_or("none", |f| f.kind(view));
    let hints = FooterHints::for_focus(kind);
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    let rows = [
        ("Tab / ↓", "next field"),
        ("Shift+Tab / ↑", "previous field"),
        ("← → ↑ ↓", "change selection"),
        ("Enter", "press button / new line"),
        ("Backspace", "delete character"),
        ("PgDn / Ctrl+N", "next step"),
        ("PgUp / Ctrl+P", "previous step"),
        ("Ctrl+T", "cycle theme"),
        ("F1", "close help"),
        ("Esc / Ctrl+C", "quit (answers are not saved)"),
    ];
    let lines = rows
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:>16}  "), Styles::shortcut_key()),
                Span::styled((*desc).to_string(), Styles::text()),
            ])
        })
        .collect();
    render_popup(frame, popup_area, "Help", lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::QuestionnaireController;
    use crate::model::{Labels, Part, Questionnaire, Step};
    use ratatui::backend::TestBackend;

    fn ascii_app() -> App {
        let labels = Labels {
            title: "Inventory".to_string(),
            select_placeholder: "Choose one".to_string(),
            text_placeholder: "Write here".to_string(),
            previous: "Prev".to_string(),
            next: "Next".to_string(),
        };
        let q = Questionnaire::new(
            vec![
                Step::select("Period", "Which period?", "period", ["School", "Now"]),
                Step::multipart(
                    "Wellbeing",
                    "Tell me about each",
                    "wellbeing",
                    vec![
                        Part::new("Flow", "What absorbed you?", "flow"),
                        Part::new("Meaning", "What mattered?", "meaning"),
                    ],
                ),
            ],
            labels,
        )
        .expect("valid");
        let mut app = App::new(QuestionnaireController::new(q));
        app.persist_preferences = false;
        app
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_heading_question_and_sentinel() {
        let app = ascii_app();
        let text = screen(&app, 80, 24);
        assert!(text.contains("Inventory - Period"), "{text}");
        assert!(text.contains("Which period?"), "{text}");
        assert!(text.contains("Choose one"), "{text}");
        assert!(text.contains("[ Prev ]"), "{text}");
        assert!(text.contains("[ Next ]"), "{text}");
        assert!(text.contains("1/2"), "{text}");
    }

    #[test]
    fn test_renders_multipart_labels_and_answers() {
        let mut app = ascii_app();
        app.next_step();
        app.type_char('x');
        let text = screen(&app, 80, 24);
        assert!(text.contains("Flow"), "{text}");
        assert!(text.contains("Meaning"), "{text}");
        assert!(text.contains("What mattered?"), "{text}");
        assert!(text.contains("1/2 answered"), "{text}");
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let app = ascii_app();
        let text = screen(&app, 40, 10);
        assert!(text.contains("Terminal too small"), "{text}");
    }

    fn builtin_multipart_app() -> App {
        let mut app = App::new(QuestionnaireController::default());
        app.persist_preferences = false;
        for _ in 0..4 {
            app.next_step();
        }
        app
    }

    #[test]
    fn test_five_part_step_needs_taller_terminal() {
        let app = builtin_multipart_app();
        let text = screen(&app, 60, 20);
        assert!(text.contains("Terminal too small"), "{text}");
    }

    #[test]
    fn test_five_part_step_shows_every_answer() {
        let mut app = builtin_multipart_app();
        for _ in 0..5 {
            assert!(app.type_char('Z'));
            app.focus_next();
        }
        let text = screen(&app, 60, 24);
        assert!(!text.contains("Terminal too small"), "{text}");
        assert_eq!(text.matches('Z').count(), 5, "{text}");
    }

    #[test]
    fn test_long_wrapped_answer_keeps_caret_visible() {
        let mut app = ascii_app();
        app.next_step();
        for _ in 0..600 {
            app.type_char('x');
        }
        let text = screen(&app, 80, 24);
        assert!(text.contains(CARET), "{text}");
    }

    #[test]
    fn test_help_overlay_rendered() {
        let mut app = ascii_app();
        app.toggle_help();
        let text = screen(&app, 80, 24);
        assert!(text.contains("Help"), "{text}");
        assert!(text.contains("next step"), "{text}");
    }

    #[test]
    fn test_text_lines_placeholder_and_caret() {
        let input = TextInput {
            key: "k".to_string(),
            heading: None,
            placeholder: "hint".to_string(),
            value: String::new(),
        };
        let lines = text_lines(&input, true);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, CARET);

        let filled = TextInput {
            value: "a\nb".to_string(),
            ..input
        };
        let lines = text_lines(&filled, false);
        assert_eq!(lines.len(), 2);
    }
}
