use crate::app::{maps_url, App};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_detail_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };

    if detail.confirm_delete {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                enqueue_action(action_tx, Action::DeleteSelected);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                detail.confirm_delete = false;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            enqueue_action(action_tx, Action::CompleteSelected);
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            enqueue_action(action_tx, Action::CancelSelected);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let id = detail.activity_id();
            enqueue_action(action_tx, Action::Navigate(Route::EditActivity(id)));
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            detail.confirm_delete = true;
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            if let Some(url) = maps_url(&detail.activity) {
                open_browser(url);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            detail.scroll = detail.scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            detail.scroll = detail.scroll.saturating_sub(1);
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.close_detail(),
        _ => {}
    }
}

fn open_browser(url: &str) {
    tracing::debug!(url, "opening location in browser");
    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd").args(["/c", "start", url]).spawn();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::runtime::action_queue::channel;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_modal() -> App {
        let mut app = App::new();
        let activity = serde_json::from_value(serde_json::json!({ "id": 5, "titulo": "x" })).unwrap();
        app.open_detail(activity, View::Agenda);
        app
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut app = app_with_modal();
        let (tx, mut rx) = channel();

        handle_detail_key(key(KeyCode::Char('d')), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(app.detail.as_ref().is_some_and(|d| d.confirm_delete));

        handle_detail_key(key(KeyCode::Char('y')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::DeleteSelected));
    }

    #[test]
    fn declining_delete_keeps_modal() {
        let mut app = app_with_modal();
        let (tx, mut rx) = channel();

        handle_detail_key(key(KeyCode::Char('d')), &mut app, &tx);
        handle_detail_key(key(KeyCode::Char('n')), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert!(app.detail.as_ref().is_some_and(|d| !d.confirm_delete));
    }

    #[test]
    fn status_actions_are_queued() {
        let mut app = app_with_modal();
        let (tx, mut rx) = channel();

        handle_detail_key(key(KeyCode::Char('c')), &mut app, &tx);
        handle_detail_key(key(KeyCode::Char('x')), &mut app, &tx);
        handle_detail_key(key(KeyCode::Char('e')), &mut app, &tx);

        assert_eq!(rx.try_recv().ok(), Some(Action::CompleteSelected));
        assert_eq!(rx.try_recv().ok(), Some(Action::CancelSelected));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::Navigate(Route::EditActivity(5)))
        );
    }

    #[test]
    fn arrows_scroll_the_fields() {
        let mut app = app_with_modal();
        let (tx, _rx) = channel();

        handle_detail_key(key(KeyCode::Up), &mut app, &tx);
        handle_detail_key(key(KeyCode::Down), &mut app, &tx);
        handle_detail_key(key(KeyCode::Char('j')), &mut app, &tx);
        assert_eq!(app.detail.as_ref().map(|d| d.scroll), Some(2));

        handle_detail_key(key(KeyCode::Char('k')), &mut app, &tx);
        assert_eq!(app.detail.as_ref().map(|d| d.scroll), Some(1));
    }

    #[test]
    fn esc_closes_modal() {
        let mut app = app_with_modal();
        let (tx, _rx) = channel();
        handle_detail_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(app.detail.is_none());
    }
}
