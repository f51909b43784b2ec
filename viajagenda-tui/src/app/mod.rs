use crate::agenda::MonthGroup;
use crate::routes::Route;
use crate::types::Activity;

mod agenda;
mod detail;
mod filter;
mod form;
mod navigation;
mod state;
pub use detail::{detail_lines, maps_url};
pub use filter::{FilterField, FilterState};
pub use form::{FormField, FormMode, FormState, BLOCKED_MESSAGE};
pub use navigation::CardDirection;
pub use state::{ActivitiesFocus, DetailState, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,
    pub status_is_error: bool,

    // Agenda
    pub agenda: Vec<MonthGroup>,
    pub agenda_loaded: bool,
    pub agenda_selected: Option<usize>, // Flat index over agenda_entries()

    // Activities list and filters
    pub activities: Vec<Activity>,
    pub selected_card: usize,
    pub cards_per_row: usize, // Updated by the renderer each frame
    pub list_message: Option<String>,
    pub filter: FilterState,
    pub activities_focus: ActivitiesFocus,

    // Create/edit form
    pub form: FormState,
    pub form_message: Option<String>,

    // Detail modal, drawn over the originating view
    pub detail: Option<DetailState>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Agenda,
            status_message: None,
            status_is_error: false,
            agenda: Vec::new(),
            agenda_loaded: false,
            agenda_selected: None,
            activities: Vec::new(),
            selected_card: 0,
            cards_per_row: 3,
            list_message: None,
            filter: FilterState::default(),
            activities_focus: ActivitiesFocus::Filters,
            form: FormState::new(FormMode::Create),
            form_message: None,
            detail: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch screens. Any open modal belongs to the old screen and closes.
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.detail = None;
    }

    /// Replace the card list. `message` is shown instead of cards when set.
    pub fn set_activities(&mut self, activities: Vec<Activity>, message: Option<String>) {
        self.activities = activities;
        self.list_message = message;
        if self.activities.is_empty() {
            self.selected_card = 0;
            self.activities_focus = ActivitiesFocus::Filters;
        } else {
            self.selected_card = self.selected_card.min(self.activities.len() - 1);
        }
    }

    pub fn open_form(&mut self, form: FormState) {
        self.form = form;
        self.form_message = None;
        self.navigate_to(View::Form);
    }

    pub fn open_detail(&mut self, activity: Activity, origin: View) {
        self.detail = Some(DetailState::new(activity, origin));
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
