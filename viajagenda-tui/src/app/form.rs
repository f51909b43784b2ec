use std::collections::BTreeMap;

use super::filter::PRIORITIES;
use super::state::{cycle_required, TextInput};
use crate::api::dto::ActivityPayload;
use crate::locale::parse_iso_date;
use crate::types::{Activity, ActivityId, Category, Status};

pub const REQUIRED_MESSAGE: &str = "Campo obrigatório. Preencha para cadastrar a atividade.";
pub const BLOCKED_MESSAGE: &str = "Preencha todos os campos obrigatórios para continuar.";
const INVALID_DATE_MESSAGE: &str = "Data inválida. Use o formato AAAA-MM-DD.";
const INVALID_TIME_MESSAGE: &str = "Hora inválida. Use o formato HH:MM.";
const INVALID_COST_MESSAGE: &str = "Informe um valor numérico maior ou igual a zero.";

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Description,
    LocationUrl,
    Date,
    StartTime,
    EndTime,
    Category,
    Priority,
    EstimatedCost,
    Status,
}

impl FormField {
    const ALL: [FormField; 10] = [
        FormField::Title,
        FormField::Description,
        FormField::LocationUrl,
        FormField::Date,
        FormField::StartTime,
        FormField::EndTime,
        FormField::Category,
        FormField::Priority,
        FormField::EstimatedCost,
        FormField::Status,
    ];

    pub const REQUIRED: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Date,
        FormField::Category,
        FormField::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Título",
            FormField::Description => "Descrição",
            FormField::LocationUrl => "Local (URL do Maps)",
            FormField::Date => "Data",
            FormField::StartTime => "Hora de Início",
            FormField::EndTime => "Hora de Fim",
            FormField::Category => "Categoria",
            FormField::Priority => "Prioridade",
            FormField::EstimatedCost => "Custo Estimado (R$)",
            FormField::Status => "Status",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            FormField::Date => Some("AAAA-MM-DD"),
            FormField::StartTime | FormField::EndTime => Some("HH:MM"),
            FormField::EstimatedCost => Some("0,00"),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Picked from a closed set with left/right instead of typed.
    pub fn is_select(self) -> bool {
        matches!(
            self,
            FormField::Category | FormField::Priority | FormField::Status
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ActivityId),
}

/// Per-field error messages from one validation pass.
///
/// Never mutated in place: every pass builds a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    /// A copy with `field` set to `error`, or cleared when `error` is `None`.
    pub fn with(&self, field: FormField, error: Option<String>) -> Self {
        let mut next = self.0.clone();
        match error {
            Some(message) => next.insert(field, message),
            None => next.remove(&field),
        };
        Self(next)
    }
}

impl FromIterator<(FormField, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub title: TextInput,
    pub description: TextInput,
    pub location_url: TextInput,
    pub date: TextInput,
    pub start_time: TextInput,
    pub end_time: TextInput,
    pub estimated_cost: TextInput,
    pub category: Option<Category>,
    pub priority: u8,
    pub status: Status,
    /// Never shown, carried so updates do not drop it.
    pub image: Option<String>,
    pub focused: usize,
    pub errors: ValidationErrors,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            title: TextInput::with_max_chars(TITLE_MAX_CHARS),
            description: TextInput::with_max_chars(DESCRIPTION_MAX_CHARS),
            location_url: TextInput::new(),
            date: TextInput::new(),
            start_time: TextInput::new(),
            end_time: TextInput::new(),
            estimated_cost: TextInput::new(),
            category: None,
            priority: 1,
            status: Status::Pendente,
            image: None,
            focused: 0,
            errors: ValidationErrors::default(),
        }
    }

    /// Populate an edit form from a fetched activity.
    pub fn from_activity(activity: &Activity) -> Self {
        let mut form = Self::new(FormMode::Edit(activity.id));
        form.title.set(&activity.title);
        form.description.set(&activity.description);
        form.location_url
            .set(activity.location_url.as_deref().unwrap_or_default());
        form.date.set(activity.date.as_deref().unwrap_or_default());
        form.start_time
            .set(&to_time_input(activity.start_time.as_deref()));
        form.end_time.set(&to_time_input(activity.end_time.as_deref()));
        form.estimated_cost.set(
            &activity
                .estimated_cost
                .map(|cost| cost.to_string())
                .unwrap_or_default(),
        );
        form.category = activity.category;
        // An unknown stored priority stays unset so saving cannot overwrite it
        // silently; the field shows as required until one is picked.
        form.priority = activity
            .priority
            .and_then(|p| u8::try_from(p).ok())
            .filter(|p| PRIORITIES.contains(p))
            .unwrap_or(0);
        if form.priority == 0 {
            form.check_field(FormField::Priority);
        }
        form.status = activity.status;
        form.image = activity.image.clone();
        form
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Cadastrar Atividade",
            FormMode::Edit(_) => "Editar Atividade",
        }
    }

    /// Status is only editable on existing activities.
    pub fn fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| *field != FormField::Status || self.is_edit())
            .collect()
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    /// Leaving a field validates it.
    pub fn focus_next(&mut self) {
        self.check_field(self.focused_field());
        self.focused = (self.focused + 1) % self.fields().len();
    }

    pub fn focus_previous(&mut self) {
        self.check_field(self.focused_field());
        let len = self.fields().len();
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Description => Some(&self.description),
            FormField::LocationUrl => Some(&self.location_url),
            FormField::Date => Some(&self.date),
            FormField::StartTime => Some(&self.start_time),
            FormField::EndTime => Some(&self.end_time),
            FormField::EstimatedCost => Some(&self.estimated_cost),
            FormField::Category | FormField::Priority | FormField::Status => None,
        }
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::LocationUrl => Some(&mut self.location_url),
            FormField::Date => Some(&mut self.date),
            FormField::StartTime => Some(&mut self.start_time),
            FormField::EndTime => Some(&mut self.end_time),
            FormField::EstimatedCost => Some(&mut self.estimated_cost),
            FormField::Category | FormField::Priority | FormField::Status => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(input) = self.input_mut(field) {
            if input.insert(c) {
                self.changed(field);
            }
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(input) = self.input_mut(field) {
            input.backspace();
            self.changed(field);
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let field = self.focused_field();
        if let Some(input) = self.input_mut(field) {
            if forward {
                input.move_right();
            } else {
                input.move_left();
            }
        }
    }

    pub fn cursor_home_end(&mut self, home: bool) {
        let field = self.focused_field();
        if let Some(input) = self.input_mut(field) {
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    /// Pick the next/previous option of a select field.
    pub fn cycle(&mut self, forward: bool) {
        let field = self.focused_field();
        match field {
            FormField::Category => {
                self.category = Some(match self.category {
                    Some(current) => cycle_required(&Category::ALL, current, forward),
                    None if forward => Category::ALL[0],
                    None => Category::ALL[Category::ALL.len() - 1],
                });
            }
            FormField::Priority => {
                self.priority = if PRIORITIES.contains(&self.priority) {
                    cycle_required(&PRIORITIES, self.priority, forward)
                } else if forward {
                    PRIORITIES[0]
                } else {
                    PRIORITIES[PRIORITIES.len() - 1]
                };
            }
            FormField::Status => {
                self.status = cycle_required(&Status::ALL, self.status, forward);
            }
            _ => return,
        }
        self.changed(field);
    }

    /// Required fields revalidate on every change so errors clear while typing.
    fn changed(&mut self, field: FormField) {
        if field.is_required() {
            self.check_field(field);
        }
    }

    pub fn check_field(&mut self, field: FormField) {
        self.errors = self.errors.with(field, self.validate_field(field));
    }

    pub fn validate_field(&self, field: FormField) -> Option<String> {
        let blank = |input: &TextInput| input.is_blank();
        let error = match field {
            FormField::Title if blank(&self.title) => Some(REQUIRED_MESSAGE),
            FormField::Description if blank(&self.description) => Some(REQUIRED_MESSAGE),
            FormField::Date if blank(&self.date) => Some(REQUIRED_MESSAGE),
            FormField::Date if parse_iso_date(self.date.value.trim()).is_none() => {
                Some(INVALID_DATE_MESSAGE)
            }
            FormField::Category if self.category.is_none() => Some(REQUIRED_MESSAGE),
            FormField::Priority if !PRIORITIES.contains(&self.priority) => Some(REQUIRED_MESSAGE),
            FormField::StartTime if !is_valid_time_input(&self.start_time.value) => {
                Some(INVALID_TIME_MESSAGE)
            }
            FormField::EndTime if !is_valid_time_input(&self.end_time.value) => {
                Some(INVALID_TIME_MESSAGE)
            }
            FormField::EstimatedCost if parse_cost(&self.estimated_cost.value).is_err() => {
                Some(INVALID_COST_MESSAGE)
            }
            _ => None,
        };
        error.map(str::to_string)
    }

    pub fn validate_all(&self) -> ValidationErrors {
        self.fields()
            .into_iter()
            .filter_map(|field| self.validate_field(field).map(|error| (field, error)))
            .collect()
    }

    /// Validate every field and build the request body.
    ///
    /// Returns `None` when any check fails; `errors` then holds every failure.
    pub fn prepare_submission(&mut self) -> Option<ActivityPayload> {
        self.errors = self.validate_all();
        if !self.errors.is_empty() {
            return None;
        }

        let optional = |input: &TextInput| {
            let trimmed = input.value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Some(ActivityPayload {
            title: self.title.value.trim().to_string(),
            image: self.image.clone(),
            description: self.description.value.trim().to_string(),
            location_url: optional(&self.location_url),
            date: self.date.value.trim().to_string(),
            start_time: from_time_input(&self.start_time.value),
            end_time: from_time_input(&self.end_time.value),
            estimated_cost: parse_cost(&self.estimated_cost.value).ok().flatten(),
            category: self.category?,
            priority: self.priority,
            status: self.is_edit().then_some(self.status),
        })
    }

    /// The chosen priority, or `None` while it is unset.
    pub fn priority_label(&self) -> Option<String> {
        PRIORITIES
            .contains(&self.priority)
            .then(|| self.priority.to_string())
    }

    pub fn success_message(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Atividade cadastrada com sucesso!",
            FormMode::Edit(_) => "Atividade atualizada com sucesso!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Erro ao cadastrar atividade.",
            FormMode::Edit(_) => "Erro ao atualizar atividade.",
        }
    }
}

/// `HH:MM:SS` from the API to the `HH:MM` the form edits.
pub fn to_time_input(stored: Option<&str>) -> String {
    let Some(value) = stored.map(str::trim).filter(|v| !v.is_empty()) else {
        return String::new();
    };
    let mut parts = value.split(':');
    let hours = parts.next().filter(|h| !h.is_empty()).unwrap_or("00");
    let minutes = parts.next().filter(|m| !m.is_empty()).unwrap_or("00");
    format!("{hours}:{minutes}")
}

/// Back to `HH:MM:SS`; blank input becomes absent.
pub fn from_time_input(input: &str) -> Option<String> {
    let value = input.trim();
    if value.is_empty() {
        None
    } else if value.len() == 5 {
        Some(format!("{value}:00"))
    } else {
        Some(value.to_string())
    }
}

/// Blank, `HH:MM` or `HH:MM:SS` on a 24-hour clock.
fn is_valid_time_input(input: &str) -> bool {
    let value = input.trim();
    if value.is_empty() {
        return true;
    }
    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return false;
    }
    let limits = [24u8, 60, 60];
    parts.iter().zip(limits).all(|(part, limit)| {
        part.len() == 2
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u8>().is_ok_and(|n| n < limit)
    })
}

/// Blank is absent; a decimal comma is accepted.
fn parse_cost(input: &str) -> Result<Option<f64>, ()> {
    let value = input.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(Some(cost)),
        _ => Err(()),
    }
}
