use super::*;
use crate::agenda::group_by_month_and_day;

impl App {
    /// Replace the agenda contents, keeping the cursor in range.
    pub fn set_agenda(&mut self, activities: Vec<Activity>) {
        self.agenda = group_by_month_and_day(&activities);
        self.agenda_loaded = true;
        let len = self.agenda_len();
        self.agenda_selected = match self.agenda_selected {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => Some(0),
        };
    }

    /// Activities in display order: month, then day, then within-day order.
    pub fn agenda_entries(&self) -> impl Iterator<Item = &Activity> {
        self.agenda
            .iter()
            .flat_map(|month| month.days.iter())
            .flat_map(|day| day.activities.iter())
    }

    pub fn agenda_len(&self) -> usize {
        self.agenda_entries().count()
    }

    pub fn selected_agenda_activity(&self) -> Option<&Activity> {
        self.agenda_selected
            .and_then(|idx| self.agenda_entries().nth(idx))
    }

    pub fn agenda_select_next(&mut self) {
        let len = self.agenda_len();
        if len == 0 {
            return;
        }
        self.agenda_selected = Some(match self.agenda_selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn agenda_select_previous(&mut self) {
        if self.agenda_len() == 0 {
            return;
        }
        self.agenda_selected = Some(match self.agenda_selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Jump to the first activity of the next month.
    pub fn agenda_next_month(&mut self) {
        let Some(current) = self.agenda_selected else {
            return;
        };
        let mut offset = 0;
        for month in &self.agenda {
            let count: usize = month.days.iter().map(|d| d.activities.len()).sum();
            if offset > current {
                self.agenda_selected = Some(offset);
                return;
            }
            offset += count;
        }
    }

    /// Jump to the first activity of the current month, or the previous one
    /// when already there.
    pub fn agenda_previous_month(&mut self) {
        let Some(current) = self.agenda_selected else {
            return;
        };
        let mut starts = Vec::with_capacity(self.agenda.len());
        let mut offset = 0;
        for month in &self.agenda {
            starts.push(offset);
            offset += month.days.iter().map(|d| d.activities.len()).sum::<usize>();
        }
        if let Some(start) = starts.into_iter().rev().find(|start| *start < current) {
            self.agenda_selected = Some(start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityId;

    fn activity(id: ActivityId, date: &str) -> Activity {
        Activity {
            id,
            title: format!("Atividade {id}"),
            image: None,
            description: "desc".to_string(),
            location_url: None,
            date: Some(date.to_string()),
            start_time: None,
            end_time: None,
            estimated_cost: None,
            category: None,
            priority: Some(1),
            status: Default::default(),
        }
    }

    fn app_with_agenda() -> App {
        let mut app = App::new();
        app.set_agenda(vec![
            activity(1, "2024-03-01"),
            activity(2, "2024-03-05"),
            activity(3, "2024-04-02"),
            activity(4, "2024-05-10"),
        ]);
        app
    }

    #[test]
    fn selection_follows_display_order() {
        let mut app = app_with_agenda();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(1));
        app.agenda_select_next();
        app.agenda_select_next();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(3));
        for _ in 0..5 {
            app.agenda_select_next();
        }
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(4));
    }

    #[test]
    fn month_jumps() {
        let mut app = app_with_agenda();
        app.agenda_next_month();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(3));
        app.agenda_next_month();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(4));
        app.agenda_next_month();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(4));

        app.agenda_select_previous();
        app.agenda_previous_month();
        assert_eq!(app.selected_agenda_activity().map(|a| a.id), Some(1));
    }

    #[test]
    fn reload_clamps_selection() {
        let mut app = app_with_agenda();
        app.agenda_selected = Some(3);
        app.set_agenda(vec![activity(9, "2024-03-01")]);
        assert_eq!(app.agenda_selected, Some(0));

        app.set_agenda(Vec::new());
        assert_eq!(app.agenda_selected, None);
        assert!(app.agenda_loaded);
    }
}
