use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    get_favorite_status::{__path_get_favorite_status, get_favorite_status},
    get_favorites::{__path_get_favorites, get_favorites},
    get_history::{__path_get_history, get_history},
    record_view::{__path_record_view, record_view},
    toggle_favorite::{__path_toggle_favorite, toggle_favorite},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_favorites, toggle_favorite, get_favorite_status))]
pub struct FavoritesApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_history, record_view, clear_history))]
pub struct HistoryApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/favorites"), get(get_favorites))
        .route(
            &format!("{root_path}/favorites/toggle"),
            post(toggle_favorite),
        )
        .route(
            &format!("{root_path}/favorites/status"),
            get(get_favorite_status),
        )
        .route(
            &format!("{root_path}/history"),
            get(get_history).post(record_view).delete(clear_history),
        )
}
