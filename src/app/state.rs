use crate::app::view::View;
use crate::config::AppConfig;
use chrono::Local;

/// A finished question and answer, queued for the transcript logger.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub timestamp: String,
    pub question: String,
    pub answer: String,
    pub sources: String,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
    max_history: usize,
}

impl InputState {
    pub fn new(max_history: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            max_history,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the current text, clearing the box and remembering non-blank
    /// entries in history.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.trim().is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Question,
    UploadPath,
    Answer,
}

pub struct AppState {
    pub config: AppConfig,
    pub view: View,
    pub question: InputState,
    pub upload_path: InputState,
    pub focus: FocusPanel,
    pub answer_scroll: u16,
    pub transcript: Vec<TranscriptEntry>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let max_history = config.ui.max_history;
        Self {
            config,
            view: View::new(),
            question: InputState::new(max_history),
            upload_path: InputState::new(max_history),
            focus: FocusPanel::Question,
            answer_scroll: 0,
            transcript: Vec::new(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut InputState> {
        match self.focus {
            FocusPanel::Question => Some(&mut self.question),
            FocusPanel::UploadPath => Some(&mut self.upload_path),
            FocusPanel::Answer => None,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Question => FocusPanel::UploadPath,
            FocusPanel::UploadPath => FocusPanel::Answer,
            FocusPanel::Answer => FocusPanel::Question,
        };
        self.dirty = true;
    }

    pub fn record_answer(&mut self, question: String) {
        self.transcript.push(TranscriptEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            question,
            answer: self.view.answer.clone(),
            sources: self.view.sources.clone(),
        });
    }

    pub fn busy(&self) -> bool {
        self.view.index_busy() || self.view.ask_busy()
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("Backend: {}", self.config.server.base_url);
        if self.view.index_busy() {
            s.push_str(" | indexing");
        }
        if self.view.ask_busy() {
            s.push_str(" | waiting for answer");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_is_utf8_safe() {
        let mut input = InputState::new(10);
        for c in "año?".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "ao?");
        input.move_end();
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_history_is_bounded_and_skips_blanks() {
        let mut input = InputState::new(2);
        for q in ["one", "   ", "two", "two", "three"] {
            input.text = q.to_string();
            input.take_text();
        }
        assert_eq!(input.history, vec!["two".to_string(), "three".to_string()]);

        input.history_up();
        assert_eq!(input.text, "three");
        input.history_up();
        assert_eq!(input.text, "two");
        input.history_down();
        input.history_down();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Question);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::UploadPath);
        state.cycle_focus();
        assert!(state.focused_input().is_none());
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Question);
    }
}
