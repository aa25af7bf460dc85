//! The text regions the dispatcher writes to: both status lines, the answer
//! and the sources line.

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn status_style(text: &str, busy: bool) -> Style {
    if busy {
        Theme::status_busy()
    } else if text.starts_with("Error: ") {
        Theme::status_error()
    } else if text.starts_with("Please ") || text.starts_with("Unknown command") {
        Theme::status_prompt()
    } else {
        Theme::status_ok()
    }
}

fn render_status(frame: &mut Frame, area: Rect, label: &str, text: &str, busy: bool, tick: u64) {
    let mut spans = vec![Span::styled(format!(" {:<6}", label), Theme::label())];
    if busy {
        let frame_idx = (tick / 2) as usize % SPINNER.len();
        spans.push(Span::styled(format!("{} ", SPINNER[frame_idx]), Theme::status_busy()));
    }
    spans.push(Span::styled(text, status_style(text, busy)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_index_status(frame: &mut Frame, area: Rect, state: &AppState) {
    render_status(
        frame,
        area,
        "Index",
        &state.view.index_status,
        state.view.index_busy(),
        state.tick_count,
    );
}

pub fn render_ask_status(frame: &mut Frame, area: Rect, state: &AppState) {
    render_status(
        frame,
        area,
        "Ask",
        &state.view.ask_status,
        state.view.ask_busy(),
        state.tick_count,
    );
}

pub fn render_answer(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Answer;
    let block = Block::default()
        .title(" Answer ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    // answer text is shown verbatim, no markup interpretation
    let paragraph = Paragraph::new(state.view.answer.as_str())
        .style(Theme::answer_text())
        .wrap(Wrap { trim: false })
        .scroll((state.answer_scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_sources(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(format!(" {}", state.view.sources))
        .style(Theme::sources())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_style_classes() {
        assert_eq!(status_style("Error: boom", false), Theme::status_error());
        assert_eq!(status_style("Please type a question.", false), Theme::status_prompt());
        assert_eq!(status_style("Thinking...", true), Theme::status_busy());
        assert_eq!(status_style("Done.", false), Theme::status_ok());
    }
}
