use crate::app::{App, View};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod activities;
mod agenda;
mod detail;
mod form;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Tab keys that work everywhere. Digits only switch tabs where nothing
/// is being typed, so they are checked by the view handlers instead.
fn handle_tab_key(key: KeyEvent, action_tx: &ActionTx) -> bool {
    let route = match key.code {
        KeyCode::F(1) => Route::Agenda,
        KeyCode::F(2) => Route::Activities,
        KeyCode::F(3) => Route::NewActivity,
        _ => return false,
    };
    enqueue_action(action_tx, Action::Navigate(route));
    true
}

/// `1`/`2`/`3` outside text entry.
fn digit_route(c: char) -> Option<Route> {
    match c {
        '1' => Some(Route::Agenda),
        '2' => Some(Route::Activities),
        '3' => Some(Route::NewActivity),
        _ => None,
    }
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.quit();
        return;
    }

    // The modal captures every key while open.
    if app.detail.is_some() {
        detail::handle_detail_key(key, app, action_tx);
        return;
    }

    if handle_tab_key(key, action_tx) {
        return;
    }

    match app.current_view {
        View::Agenda => agenda::handle_agenda_key(key, app, action_tx),
        View::Activities => activities::handle_activities_key(key, app, action_tx),
        View::Form => form::handle_form_key(key, app, action_tx),
    }
}
