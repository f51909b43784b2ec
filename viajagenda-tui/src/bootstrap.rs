use crate::api::ApiClient;
use crate::app::App;
use crate::routes::Route;
use crate::runtime::load_route;

/// Load the start screen before the first frame. Failures leave it empty.
pub async fn initialize_app_state(app: &mut App, client: &ApiClient, route: Route) {
    app.is_loading = true;
    tracing::info!(%route, base_url = %client.base_url(), "loading start screen");
    load_route(route, app, client).await;
    app.is_loading = false;
}
