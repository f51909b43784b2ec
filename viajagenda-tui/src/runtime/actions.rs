use crate::api::dto::ActivityFilter;
use crate::api::{ApiClient, ApiError};
use crate::app::{App, FormMode, FormState, View, BLOCKED_MESSAGE};
use crate::routes::Route;
use crate::types::{Activity, ActivityId};
use anyhow::Result;

use super::action_queue::Action;

const NO_MATCHES_MESSAGE: &str =
    "Não foi possível encontrar atividades com essa combinação de filtros.";
const SEARCH_FAILED_MESSAGE: &str = "Ocorreu um erro ao buscar atividades. Tente novamente.";
const EDIT_LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar a atividade.";
const EDIT_NOT_FOUND_MESSAGE: &str = "Atividade não encontrada.";

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) -> Result<()> {
    match action {
        Action::Navigate(route) => {
            app.clear_status();
            load_route(route, app, client).await;
        }
        Action::Refresh => {
            tracing::debug!(route = %app.current_route(), "refreshing");
            match app.current_view {
                View::Agenda => load_agenda(app, client).await,
                View::Activities if !app.filter.to_filter().is_empty() => {
                    search_activities(app, client).await
                }
                View::Activities => load_activities(app, client).await,
                // Reloading the form would discard what has been typed.
                View::Form => {}
            }
        }
        Action::SearchActivities => {
            search_activities(app, client).await;
        }
        Action::ClearFilters => {
            app.filter.clear();
            app.list_message = None;
            load_activities(app, client).await;
        }
        Action::SubmitForm => {
            submit_form(app, client).await;
        }
        Action::CompleteSelected => {
            act_on_detail(app, client, DetailAction::Complete).await;
        }
        Action::CancelSelected => {
            act_on_detail(app, client, DetailAction::Cancel).await;
        }
        Action::DeleteSelected => {
            act_on_detail(app, client, DetailAction::Delete).await;
        }
    }
    Ok(())
}

/// Show the screen for `route` and load what it displays.
pub(crate) async fn load_route(route: Route, app: &mut App, client: &ApiClient) {
    match route {
        Route::Agenda => {
            app.navigate_to(View::Agenda);
            load_agenda(app, client).await;
        }
        Route::Activities => {
            app.navigate_to(View::Activities);
            app.filter.clear();
            app.list_message = None;
            load_activities(app, client).await;
        }
        Route::NewActivity => {
            app.open_form(FormState::new(FormMode::Create));
        }
        Route::EditActivity(id) => {
            open_edit_form(id, app, client).await;
        }
    }
}

/// The agenda always shows the full unfiltered list; a failure shows it empty.
async fn load_agenda(app: &mut App, client: &ApiClient) {
    match client.list(&ActivityFilter::default()).await {
        Ok(activities) => app.set_agenda(activities),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load agenda");
            app.set_agenda(Vec::new());
        }
    }
}

/// Unfiltered load of the card list. Empty or failed loads stay silent.
async fn load_activities(app: &mut App, client: &ApiClient) {
    let message = app.list_message.take();
    match client.list(&ActivityFilter::default()).await {
        Ok(activities) => app.set_activities(activities, message),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load activities");
            app.set_activities(Vec::new(), message);
        }
    }
}

async fn search_activities(app: &mut App, client: &ApiClient) {
    let filter = app.filter.to_filter();
    tracing::debug!(?filter, "searching activities");
    match client.list(&filter).await {
        Ok(activities) => {
            let message = activities
                .is_empty()
                .then(|| NO_MATCHES_MESSAGE.to_string());
            app.set_activities(activities, message);
        }
        Err(e) => {
            tracing::warn!(error = %e, "activity search failed");
            app.set_activities(Vec::new(), Some(SEARCH_FAILED_MESSAGE.to_string()));
        }
    }
}

async fn open_edit_form(id: ActivityId, app: &mut App, client: &ApiClient) {
    match client.get(id).await {
        Ok(activity) => app.open_form(FormState::from_activity(&activity)),
        Err(e) => {
            tracing::warn!(error = %e, id, "failed to load activity for editing");
            let message = if e.is_not_found() {
                EDIT_NOT_FOUND_MESSAGE
            } else {
                EDIT_LOAD_FAILED_MESSAGE
            };
            app.open_form(FormState::new(FormMode::Edit(id)));
            app.form_message = Some(message.to_string());
        }
    }
}

async fn submit_form(app: &mut App, client: &ApiClient) {
    let Some(payload) = app.form.prepare_submission() else {
        app.form_message = Some(BLOCKED_MESSAGE.to_string());
        return;
    };

    let result: Result<Activity, ApiError> = match app.form.mode {
        FormMode::Create => client.create(&payload).await,
        FormMode::Edit(id) => client.update(id, &payload).await,
    };

    match result {
        Ok(saved) => {
            tracing::info!(id = saved.id, "activity saved");
            let message = app.form.success_message();
            load_route(Route::Agenda, app, client).await;
            app.set_status(message);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to save activity");
            app.form_message = Some(app.form.failure_message().to_string());
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DetailAction {
    Complete,
    Cancel,
    Delete,
}

impl DetailAction {
    fn failure_message(self) -> &'static str {
        match self {
            DetailAction::Complete => "Erro ao concluir atividade.",
            DetailAction::Cancel => "Erro ao cancelar atividade.",
            DetailAction::Delete => "Erro ao excluir atividade.",
        }
    }
}

/// Run a modal action, then reload the list the modal was opened from and
/// close it. On failure the modal stays open.
async fn act_on_detail(app: &mut App, client: &ApiClient, action: DetailAction) {
    let Some((id, origin)) = app.detail.as_ref().map(|d| (d.activity_id(), d.origin)) else {
        return;
    };

    let result = match action {
        DetailAction::Complete => client.complete(id).await,
        DetailAction::Cancel => client.cancel(id).await,
        DetailAction::Delete => client.delete(id).await,
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, id, ?action, "activity action failed");
        if let Some(detail) = app.detail.as_mut() {
            detail.confirm_delete = false;
        }
        app.set_error(action.failure_message());
        return;
    }

    tracing::info!(id, ?action, "activity action applied");
    match origin {
        View::Activities => load_activities(app, client).await,
        _ => load_agenda(app, client).await,
    }
    app.close_detail();
}
