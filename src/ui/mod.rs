mod input_box;
mod layout;
mod regions;
mod status_bar;
mod theme;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    input_box::render(
        frame,
        app_layout.upload_box,
        "Upload PDF",
        "path to a PDF, Enter to upload & index (F5 indexes the default PDF)",
        &state.upload_path,
        state.focus == FocusPanel::UploadPath,
    );
    regions::render_index_status(frame, app_layout.index_status, state);
    input_box::render(
        frame,
        app_layout.question_box,
        "Question",
        "type a question and press Enter",
        &state.question,
        state.focus == FocusPanel::Question,
    );
    regions::render_ask_status(frame, app_layout.ask_status, state);
    regions::render_answer(frame, app_layout.answer_area, state);
    regions::render_sources(frame, app_layout.sources, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
