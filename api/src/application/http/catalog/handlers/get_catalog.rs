use despensa_core::domain::catalog::Catalog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCatalogResponse {
    pub data: Catalog,
}

#[utoipa::path(
    get,
    path = "",
    tag = "catalog",
    summary = "Get catalog",
    description = "Lists the fixed meal types, dietary preferences, ingredient categories and sort modes.",
    responses(
        (status = 200, body = GetCatalogResponse)
    ),
)]
pub async fn get_catalog() -> Result<Response<GetCatalogResponse>, ApiError> {
    Ok(Response::OK(GetCatalogResponse {
        data: Catalog::current(),
    }))
}
