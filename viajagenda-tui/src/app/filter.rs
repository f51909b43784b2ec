use super::state::{cycle_optional, TextInput};
use crate::api::dto::ActivityFilter;
use crate::types::{Category, Status};

pub const PRIORITIES: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Title,
    Category,
    Status,
    Priority,
    Date,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Title,
        FilterField::Category,
        FilterField::Status,
        FilterField::Priority,
        FilterField::Date,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            FilterField::Title => "Buscar por título",
            FilterField::Category => "Categoria",
            FilterField::Status => "Status",
            FilterField::Priority => "Prioridade",
            FilterField::Date => "Data (AAAA-MM-DD)",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FilterField::Title | FilterField::Date)
    }
}

/// The five search fields of the activities screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub title: TextInput,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub priority: Option<u8>,
    pub date: TextInput,
    pub focused: usize,
}

impl FilterState {
    pub fn focused_field(&self) -> FilterField {
        FilterField::ALL[self.focused.min(FilterField::ALL.len() - 1)]
    }

    /// Move to the next field. Returns false when already on the last one.
    pub fn focus_next(&mut self) -> bool {
        if self.focused + 1 < FilterField::ALL.len() {
            self.focused += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous field. Returns false when already on the first one.
    pub fn focus_previous(&mut self) -> bool {
        if self.focused > 0 {
            self.focused -= 1;
            true
        } else {
            false
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field() {
            FilterField::Title => self.title.backspace(),
            FilterField::Date => self.date.backspace(),
            FilterField::Category => self.category = None,
            FilterField::Status => self.status = None,
            FilterField::Priority => self.priority = None,
        }
    }

    /// Left/right: cursor movement on text fields, option cycling otherwise.
    pub fn cycle(&mut self, forward: bool) {
        match self.focused_field() {
            FilterField::Category => {
                self.category = cycle_optional(&Category::ALL, self.category, forward)
            }
            FilterField::Status => self.status = cycle_optional(&Status::ALL, self.status, forward),
            FilterField::Priority => {
                self.priority = cycle_optional(&PRIORITIES, self.priority, forward)
            }
            FilterField::Title | FilterField::Date => {
                if let Some(input) = self.focused_input() {
                    if forward {
                        input.move_right();
                    } else {
                        input.move_left();
                    }
                }
            }
        }
    }

    pub fn cursor_home_end(&mut self, home: bool) {
        if let Some(input) = self.focused_input() {
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field() {
            FilterField::Title => Some(&mut self.title),
            FilterField::Date => Some(&mut self.date),
            _ => None,
        }
    }

    /// Display value of a field, `None` when unset.
    pub fn display_value(&self, field: FilterField) -> Option<String> {
        let text = |input: &TextInput| (!input.value.is_empty()).then(|| input.value.clone());
        match field {
            FilterField::Title => text(&self.title),
            FilterField::Date => text(&self.date),
            FilterField::Category => self.category.map(|c| c.to_string()),
            FilterField::Status => self.status.map(|s| s.to_string()),
            FilterField::Priority => self.priority.map(|p| p.to_string()),
        }
    }

    /// Only the non-empty fields end up in the query.
    pub fn to_filter(&self) -> ActivityFilter {
        let text = |input: &TextInput| {
            let trimmed = input.value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        ActivityFilter {
            title: text(&self.title),
            category: self.category,
            status: self.status,
            priority: self.priority,
            date: text(&self.date),
        }
    }

    pub fn clear(&mut self) {
        *self = Self {
            focused: self.focused,
            ..Self::default()
        };
    }
}
