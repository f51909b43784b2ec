use super::*;

impl App {
    /// Move card selection one step in the grid (vim-style h/j/k/l).
    pub fn card_move(&mut self, direction: CardDirection) {
        let len = self.activities.len();
        if len == 0 {
            self.selected_card = 0;
            return;
        }
        let columns = self.cards_per_row.max(1);
        let idx = self.selected_card.min(len - 1);
        self.selected_card = match direction {
            CardDirection::Left => idx.saturating_sub(1),
            CardDirection::Right => (idx + 1).min(len - 1),
            CardDirection::Up => idx.checked_sub(columns).unwrap_or(idx),
            CardDirection::Down if idx + columns < len => idx + columns,
            CardDirection::Down => idx,
        };
    }

    pub fn selected_card_activity(&self) -> Option<&Activity> {
        self.activities.get(self.selected_card)
    }

    /// Tab from the filter row lands on the cards, and back.
    pub fn toggle_activities_focus(&mut self) {
        self.activities_focus = match self.activities_focus {
            ActivitiesFocus::Filters if !self.activities.is_empty() => ActivitiesFocus::Cards,
            ActivitiesFocus::Filters => ActivitiesFocus::Filters,
            ActivitiesFocus::Cards => ActivitiesFocus::Filters,
        };
    }

    /// The route matching the screen currently shown.
    pub fn current_route(&self) -> Route {
        match self.current_view {
            View::Agenda => Route::Agenda,
            View::Activities => Route::Activities,
            View::Form => match self.form.mode {
                FormMode::Create => Route::NewActivity,
                FormMode::Edit(id) => Route::EditActivity(id),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDirection {
    Left,
    Right,
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_cards(count: usize, columns: usize) -> App {
        let mut app = App::new();
        app.activities = (0..count as i64)
            .map(|id| Activity {
                id,
                title: format!("Atividade {id}"),
                image: None,
                description: String::new(),
                location_url: None,
                date: None,
                start_time: None,
                end_time: None,
                estimated_cost: None,
                category: None,
                priority: None,
                status: Default::default(),
            })
            .collect();
        app.cards_per_row = columns;
        app
    }

    #[test]
    fn grid_moves_stay_in_bounds() {
        let mut app = app_with_cards(7, 3);
        app.card_move(CardDirection::Down);
        assert_eq!(app.selected_card, 3);
        app.card_move(CardDirection::Down);
        assert_eq!(app.selected_card, 6);
        app.card_move(CardDirection::Down);
        assert_eq!(app.selected_card, 6);
        app.card_move(CardDirection::Right);
        assert_eq!(app.selected_card, 6);
        app.card_move(CardDirection::Up);
        assert_eq!(app.selected_card, 3);
        app.card_move(CardDirection::Left);
        assert_eq!(app.selected_card, 2);
    }

    #[test]
    fn focus_stays_on_filters_without_cards() {
        let mut app = app_with_cards(0, 3);
        app.toggle_activities_focus();
        assert_eq!(app.activities_focus, ActivitiesFocus::Filters);

        let mut app = app_with_cards(2, 3);
        app.toggle_activities_focus();
        assert_eq!(app.activities_focus, ActivitiesFocus::Cards);
    }

    #[test]
    fn current_route_tracks_form_mode() {
        let mut app = app_with_cards(0, 1);
        app.open_form(FormState::new(FormMode::Edit(4)));
        assert_eq!(app.current_route(), Route::EditActivity(4));
        app.navigate_to(View::Agenda);
        assert_eq!(app.current_route(), Route::Agenda);
    }
}
