//! Terminal events to wizard events

use crate::wizard::{Event, Step, WizardState};
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a raw terminal event for the current state.
///
/// Text steps get the whole new buffer in a `TextEdit`, so the wizard never
/// has to know about individual keystrokes.
pub fn translate(state: &WizardState, event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => translate_key(state, key),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(state: &WizardState, key: &KeyEvent) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global cancel
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return Some(Event::Cancel);
    }

    match state.step {
        Step::AppName | Step::OutputPath => match key.code {
            KeyCode::Enter => Some(Event::Confirm),
            KeyCode::Backspace => {
                let mut buffer = state.text_buffer.clone();
                buffer.pop()?;
                Some(Event::TextEdit(buffer))
            }
            KeyCode::Char(c) if !ctrl => {
                let mut buffer = state.text_buffer.clone();
                buffer.push(c);
                Some(Event::TextEdit(buffer))
            }
            _ => None,
        },
        Step::LanguageSelection
        | Step::FrameworkSelection
        | Step::ProjectTypeSelection
        | Step::ComplexitySelection => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveDown),
            KeyCode::Enter => Some(Event::Confirm),
            KeyCode::Char('q') => Some(Event::Cancel),
            _ => None,
        },
        Step::Scaffolding => None,
        Step::Done => Some(Event::Confirm),
    }
}
