//! Banner HTTP Routes
//!
//! The four `/banners.*` endpoints, plus the error mapping between store
//! results and HTTP status codes. The reference deployment dispatched on
//! path only, so every endpoint accepts both GET and POST.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use thiserror::Error;

use crate::banners::{Banner, BannerService, ServiceError};

// ==================
// Shared State
// ==================

/// Banner state shared across handlers
#[derive(Debug, Default)]
pub struct BannerState {
    pub service: BannerService,
}

impl BannerState {
    pub fn new() -> Self {
        Self {
            service: BannerService::new(),
        }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
struct IdParams {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct SaveParams {
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    button: String,
    #[serde(default)]
    link: String,
}

impl SaveParams {
    /// A save with every text field empty is rejected before it reaches
    /// the store.
    fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.content.is_empty()
            && self.button.is_empty()
            && self.link.is_empty()
    }
}

// ==================
// Errors
// ==================

/// Errors surfaced at the HTTP boundary.
///
/// Store `NotFound` maps to 500, not 404, and error bodies carry only the
/// status reason phrase; both preserve the reference deployment's observable
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `id` query parameter missing or not an integer
    #[error("invalid or missing id parameter")]
    InvalidQuery,

    /// All four banner text fields were empty on save
    #[error("banner fields are all empty")]
    BlankBanner,

    /// Store-level failure, including "not found"
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::BlankBanner => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => ApiError::Internal,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> Self {
        ApiError::InvalidQuery
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed");
        let status = self.status_code();
        let body = status.canonical_reason().unwrap_or("").to_string();
        (status, body).into_response()
    }
}

// ==================
// Banner Routes
// ==================

/// Create banner routes
pub fn banner_routes(state: Arc<BannerState>) -> Router {
    Router::new()
        .route("/banners.getAll", get(get_all_handler).post(get_all_handler))
        .route(
            "/banners.getById",
            get(get_by_id_handler).post(get_by_id_handler),
        )
        .route("/banners.save", get(save_handler).post(save_handler))
        .route(
            "/banners.removeById",
            get(remove_by_id_handler).post(remove_by_id_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn get_all_handler(State(state): State<Arc<BannerState>>) -> Json<Vec<Banner>> {
    Json(state.service.all())
}

async fn get_by_id_handler(
    State(state): State<Arc<BannerState>>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<Json<Banner>, ApiError> {
    let Query(params) = params?;
    let banner = state.service.by_id(params.id)?;
    Ok(Json(banner))
}

async fn save_handler(
    State(state): State<Arc<BannerState>>,
    params: Result<Query<SaveParams>, QueryRejection>,
) -> Result<Json<Banner>, ApiError> {
    let Query(params) = params?;
    if params.is_blank() {
        return Err(ApiError::BlankBanner);
    }

    let banner = state.service.save(Banner {
        id: params.id,
        title: params.title,
        content: params.content,
        button: params.button,
        link: params.link,
    })?;
    Ok(Json(banner))
}

async fn remove_by_id_handler(
    State(state): State<Arc<BannerState>>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<Json<Banner>, ApiError> {
    let Query(params) = params?;
    let banner = state.service.remove_by_id(params.id)?;
    Ok(Json(banner))
}
