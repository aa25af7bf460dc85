use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    input: &InputState,
    focused: bool,
) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = if input.text.is_empty() && !focused {
        Span::styled(placeholder, Theme::placeholder())
    } else {
        Span::styled(input.text.as_str(), Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let cursor_x = cursor_column(inner, &input.text[..input.cursor]);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

/// Terminal column of the cursor after `typed`, kept inside `inner`.
fn cursor_column(inner: Rect, typed: &str) -> u16 {
    // chevron "❯ " is two columns wide
    let prompt_offset = 2usize;
    let offset = (prompt_offset + typed.width()).min(inner.width.saturating_sub(1) as usize);
    inner.x.saturating_add(offset as u16)
}
