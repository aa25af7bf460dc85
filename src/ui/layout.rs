use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub upload_box: Rect,
    pub index_status: Rect,
    pub question_box: Rect,
    pub ask_status: Rect,
    pub answer_area: Rect,
    pub sources: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Upload path input
            Constraint::Length(1), // Index status
            Constraint::Length(3), // Question input
            Constraint::Length(1), // Ask status
            Constraint::Min(5),    // Answer
            Constraint::Length(2), // Sources
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        upload_box: chunks[0],
        index_status: chunks[1],
        question_box: chunks[2],
        ask_status: chunks[3],
        answer_area: chunks[4],
        sources: chunks[5],
        status_bar: chunks[6],
    }
}
