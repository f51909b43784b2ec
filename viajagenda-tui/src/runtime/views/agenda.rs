use crate::app::{App, View};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{digit_route, enqueue_action};

pub(super) fn handle_agenda_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.agenda_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.agenda_select_previous(),
        KeyCode::PageDown | KeyCode::Char('J') => app.agenda_next_month(),
        KeyCode::PageUp | KeyCode::Char('K') => app.agenda_previous_month(),
        KeyCode::Enter => {
            if let Some(activity) = app.selected_agenda_activity().cloned() {
                app.open_detail(activity, View::Agenda);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            enqueue_action(action_tx, Action::Navigate(Route::NewActivity));
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::Refresh);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c) => {
            if let Some(route) = digit_route(c) {
                enqueue_action(action_tx, Action::Navigate(route));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::action_queue::channel;
    use crate::types::Activity;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn activity(id: i64, date: &str) -> Activity {
        serde_json::from_value(serde_json::json!({ "id": id, "titulo": "x", "data": date }))
            .unwrap()
    }

    #[test]
    fn enter_opens_selected_activity() {
        let mut app = App::new();
        app.set_agenda(vec![activity(1, "2024-03-01"), activity(2, "2024-03-02")]);
        let (tx, mut rx) = channel();

        handle_agenda_key(key(KeyCode::Char('j')), &mut app, &tx);
        handle_agenda_key(key(KeyCode::Enter), &mut app, &tx);

        let detail = app.detail.as_ref().expect("modal should be open");
        assert_eq!(detail.activity.id, 2);
        assert_eq!(detail.origin, View::Agenda);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn enter_on_empty_agenda_does_nothing() {
        let mut app = App::new();
        app.set_agenda(Vec::new());
        let (tx, _rx) = channel();
        handle_agenda_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.detail.is_none());
    }

    #[test]
    fn digits_switch_tabs() {
        let mut app = App::new();
        let (tx, mut rx) = channel();
        handle_agenda_key(key(KeyCode::Char('3')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::Navigate(Route::NewActivity)));
    }
}
