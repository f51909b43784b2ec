use crate::app::App;
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let on_select = app.form.focused_field().is_select();
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::SubmitForm);
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
        KeyCode::Left if on_select => app.form.cycle(false),
        KeyCode::Right if on_select => app.form.cycle(true),
        KeyCode::Char(' ') if on_select => app.form.cycle(true),
        KeyCode::Left => app.form.move_cursor(false),
        KeyCode::Right => app.form.move_cursor(true),
        KeyCode::Home => app.form.cursor_home_end(true),
        KeyCode::End => app.form.cursor_home_end(false),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Esc => {
            enqueue_action(action_tx, Action::Navigate(Route::Agenda));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input_char(c);
        }
        _ => {}
    }
}
