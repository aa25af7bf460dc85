use crate::app::action::Action;
use crate::app::commands::{self, ParsedCommand, HELP_TEXT};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::IndexFinished {
            ticket,
            kind,
            result,
        } => {
            if state.view.finish_index(ticket, kind, &result) {
                state.dirty = true;
            } else {
                debug!(ticket, ?kind, "dropping stale index result");
            }
            vec![]
        }
        AppEvent::AskFinished {
            ticket,
            question,
            result,
        } => {
            if state.view.finish_ask(ticket, &result) {
                if result.is_ok() {
                    state.record_answer(question);
                }
                state.answer_scroll = 0;
                state.dirty = true;
            } else {
                debug!(ticket, "dropping stale ask result");
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // spinner frames only while something is in flight
            if state.busy() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            if let Some(input) = state.focused_input() {
                for c in text.chars().filter(|c| !c.is_control()) {
                    input.insert_char(c);
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::F(5) {
        return vec![Action::IndexDefault];
    }
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Question => handle_question_key(state, key),
        FocusPanel::UploadPath => handle_upload_key(state, key),
        FocusPanel::Answer => handle_answer_key(state, key),
    }
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let text = state.question.take_text();
            submit_question_line(state, &text)
        }
        KeyCode::Up => {
            state.question.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.question.history_down();
            vec![]
        }
        KeyCode::PageUp | KeyCode::PageDown => handle_answer_key(state, key),
        _ => {
            edit_input(&mut state.question, key);
            vec![]
        }
    }
}

fn handle_upload_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // the path stays in the box so a failed upload can be retried
            let path = state.upload_path.text.clone();
            vec![Action::UploadAndIndex { path }]
        }
        _ => {
            edit_input(&mut state.upload_path, key);
            vec![]
        }
    }
}

fn handle_answer_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.answer_scroll = state.answer_scroll.saturating_sub(1),
        KeyCode::Down => state.answer_scroll = state.answer_scroll.saturating_add(1),
        KeyCode::PageUp => state.answer_scroll = state.answer_scroll.saturating_sub(10),
        KeyCode::PageDown => state.answer_scroll = state.answer_scroll.saturating_add(10),
        KeyCode::Home => state.answer_scroll = 0,
        KeyCode::Esc => state.focus = FocusPanel::Question,
        _ => {}
    }
    vec![]
}

fn edit_input(input: &mut InputState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char('u') if ctrl => {
            input.text.clear();
            input.cursor = 0;
        }
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Route a line typed into the question box: slash commands first, anything
/// else is a question (blank lines included, so the dispatcher can prompt).
pub fn submit_question_line(state: &mut AppState, line: &str) -> Vec<Action> {
    if line.trim_start().starts_with('/') {
        return match commands::parse_command(line) {
            Some(ParsedCommand::Index) => vec![Action::IndexDefault],
            Some(ParsedCommand::Upload { path }) => {
                if !path.is_empty() {
                    state.upload_path.text = path.clone();
                    state.upload_path.move_end();
                }
                vec![Action::UploadAndIndex { path }]
            }
            Some(ParsedCommand::Ask { question }) => vec![Action::Ask { question }],
            Some(ParsedCommand::Clear) => {
                state.view.clear_answer();
                state.answer_scroll = 0;
                vec![]
            }
            Some(ParsedCommand::Help) => {
                state.view.prompt_ask(HELP_TEXT);
                vec![]
            }
            Some(ParsedCommand::Quit) => vec![Action::Quit],
            None => {
                let cmd = line.split_whitespace().next().unwrap_or(line);
                state.view.prompt_ask(format!("Unknown command: {}", cmd));
                vec![]
            }
        };
    }
    vec![Action::Ask {
        question: line.to_string(),
    }]
}
