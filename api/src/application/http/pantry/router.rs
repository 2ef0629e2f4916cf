use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_suggestion::{__path_add_suggestion, add_suggestion},
    create_ingredient::{__path_create_ingredient, create_ingredient},
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    get_grouped_ingredients::{__path_get_grouped_ingredients, get_grouped_ingredients},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    get_suggestions::{__path_get_suggestions, get_suggestions},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_grouped_ingredients,
    create_ingredient,
    delete_ingredient,
    get_suggestions,
    add_suggestion
))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/pantry/ingredients"),
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{root_path}/pantry/ingredients/grouped"),
            get(get_grouped_ingredients),
        )
        .route(
            &format!("{root_path}/pantry/ingredients/{{ingredient_id}}"),
            delete(delete_ingredient),
        )
        .route(
            &format!("{root_path}/pantry/suggestions"),
            get(get_suggestions),
        )
        .route(
            &format!("{root_path}/pantry/suggestions/{{name}}"),
            post(add_suggestion),
        )
}
