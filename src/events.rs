use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Dispatch a terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // Terminal will redraw on next iteration
        _ => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Fine steps
        KeyCode::Left | KeyCode::Char('h') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.nudge(-1.0);
            } else {
                app.step_down();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.nudge(1.0);
            } else {
                app.step_up();
            }
        }
        KeyCode::Char('H') => app.nudge(-1.0),
        KeyCode::Char('L') => app.nudge(1.0),

        // Whole steps
        KeyCode::PageDown | KeyCode::Down | KeyCode::Char('j') => app.nudge(-1.0),
        KeyCode::PageUp | KeyCode::Up | KeyCode::Char('k') => app.nudge(1.0),

        // Ends of the scale
        KeyCode::Home => app.set_level(0),
        KeyCode::End => app.set_level(10),

        // Direct rating
        KeyCode::Char(c @ '0'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.set_level(digit as u8);
            }
        }

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.step_up(),
        MouseEventKind::ScrollDown => app.step_down(),

        // Click or drag on the track moves the knob
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            let on_track = app
                .slider_track
                .is_some_and(|track| mouse.row >= track.y && mouse.row < track.y + track.height);
            if on_track {
                app.set_from_column(mouse.column);
            }
        }

        _ => {}
    }
}
