use crate::app::{ActivitiesFocus, App, CardDirection, View};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{digit_route, enqueue_action};

pub(super) fn handle_activities_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.activities_focus {
        ActivitiesFocus::Filters => handle_filters_key(key, app, action_tx),
        ActivitiesFocus::Cards => handle_cards_key(key, app, action_tx),
    }
}

fn handle_filters_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::ClearFilters);
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SearchActivities);
        }
        KeyCode::Tab => {
            if !app.filter.focus_next() {
                app.toggle_activities_focus();
            }
        }
        KeyCode::BackTab => {
            app.filter.focus_previous();
        }
        KeyCode::Down | KeyCode::Esc => app.toggle_activities_focus(),
        KeyCode::Left => app.filter.cycle(false),
        KeyCode::Right => app.filter.cycle(true),
        KeyCode::Home => app.filter.cursor_home_end(true),
        KeyCode::End => app.filter.cursor_home_end(false),
        KeyCode::Backspace => app.filter.backspace(),
        KeyCode::Char(' ') if !app.filter.focused_field().is_text() => app.filter.cycle(true),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter.input_char(c);
        }
        _ => {}
    }
}

fn handle_cards_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.card_move(CardDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => app.card_move(CardDirection::Right),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selected_card < app.cards_per_row.max(1) {
                app.toggle_activities_focus();
            } else {
                app.card_move(CardDirection::Up);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.card_move(CardDirection::Down),
        KeyCode::Enter => {
            if let Some(activity) = app.selected_card_activity().cloned() {
                app.open_detail(activity, View::Activities);
            }
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') | KeyCode::Char('f') => {
            app.toggle_activities_focus();
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::ClearFilters);
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
    use crate::app::FilterField;
    use crate::runtime::action_queue::channel;
    use crate::types::{Activity, Category};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn activity(id: i64) -> Activity {
        serde_json::from_value(serde_json::json!({ "id": id, "titulo": format!("A{id}") }))
            .unwrap()
    }

    fn app_on_activities() -> App {
        let mut app = App::new();
        app.current_view = View::Activities;
        app
    }

    #[test]
    fn typing_in_filters_then_enter_searches() {
        let mut app = app_on_activities();
        let (tx, mut rx) = channel();

        for c in "lapa".chars() {
            handle_activities_key(key(KeyCode::Char(c)), &mut app, &tx);
        }
        handle_activities_key(key(KeyCode::Tab), &mut app, &tx);
        handle_activities_key(key(KeyCode::Right), &mut app, &tx);
        handle_activities_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(rx.try_recv().ok(), Some(Action::SearchActivities));
        let filter = app.filter.to_filter();
        assert_eq!(filter.title.as_deref(), Some("lapa"));
        assert_eq!(filter.category, Some(Category::Alimentacao));
    }

    #[test]
    fn digits_are_typed_into_the_date_filter() {
        let mut app = app_on_activities();
        app.filter.focused = FilterField::ALL.len() - 1;
        let (tx, mut rx) = channel();

        for c in "2024-03-05".chars() {
            handle_activities_key(key(KeyCode::Char(c)), &mut app, &tx);
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(app.filter.to_filter().date.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn ctrl_x_clears_filters() {
        let mut app = app_on_activities();
        let (tx, mut rx) = channel();
        handle_activities_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert_eq!(rx.try_recv().ok(), Some(Action::ClearFilters));
    }

    #[test]
    fn enter_on_card_opens_detail() {
        let mut app = app_on_activities();
        app.set_activities(vec![activity(1), activity(2)], None);
        app.activities_focus = ActivitiesFocus::Cards;
        let (tx, _rx) = channel();

        handle_activities_key(key(KeyCode::Char('l')), &mut app, &tx);
        handle_activities_key(key(KeyCode::Enter), &mut app, &tx);

        let detail = app.detail.as_ref().expect("modal should be open");
        assert_eq!(detail.activity.id, 2);
        assert_eq!(detail.origin, View::Activities);
    }

    #[test]
    fn tab_past_last_filter_moves_to_cards() {
        let mut app = app_on_activities();
        app.set_activities(vec![activity(1)], None);
        let (tx, _rx) = channel();

        for _ in 0..FilterField::ALL.len() {
            handle_activities_key(key(KeyCode::Tab), &mut app, &tx);
        }
        assert_eq!(app.activities_focus, ActivitiesFocus::Cards);
    }
}
