use utoipa::OpenApi;

use crate::application::http::{
    catalog::router::CatalogApiDoc,
    health::HealthApiDoc,
    pantry::router::PantryApiDoc,
    profile::router::{FavoritesApiDoc, HistoryApiDoc},
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Despensa API",
        description = "Pantry tracking and AI recipe discovery"
    ),
    nest(
        (path = "/catalog", api = CatalogApiDoc),
        (path = "/pantry", api = PantryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/favorites", api = FavoritesApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
