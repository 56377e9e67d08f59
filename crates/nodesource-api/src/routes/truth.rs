use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::AppState;

pub fn scoped_routes() -> Router<AppState> {
    Router::new().route("/truth/{token}/{blockheight}", get(truth_scoped))
}

pub fn bare_routes() -> Router<AppState> {
    Router::new().route("/truth", get(truth_bare))
}

/// Placeholder ground truth for a token at a block height
#[utoipa::path(
    get,
    path = "/truth/{token}/{blockheight}",
    params(
        ("token" = String, Path, description = "Token symbol (ignored)"),
        ("blockheight" = String, Path, description = "Block height (ignored)")
    ),
    responses(
        (status = 200, description = "Decimal value in [0.0, 100.0)", body = String, content_type = "text/plain")
    ),
    tag = "truth"
)]
pub async fn truth_scoped(
    State(state): State<AppState>,
    Path((token, block_height)): Path<(String, String)>,
) -> String {
    state.service.truth(Some(&token), Some(&block_height))
}

/// Placeholder ground truth without parameters (inference profile)
#[utoipa::path(
    get,
    path = "/truth",
    responses(
        (status = 200, description = "Decimal value in [0.0, 100.0)", body = String, content_type = "text/plain")
    ),
    tag = "truth"
)]
pub async fn truth_bare(State(state): State<AppState>) -> String {
    state.service.truth(None, None)
}
