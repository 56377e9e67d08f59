use axum::Router;
use nodesource_core::{PlaceholderService, Profile, sampler_for_seed};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod routes;

pub use config::ApiConfig;

/// Application state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub service: PlaceholderService,
    pub profile: Profile,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: PlaceholderService, profile: Profile) -> Self {
        Self { service, profile }
    }

    /// Build state from configuration, validating the sampling range
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let range = config.sampler.range()?;
        let sampler = sampler_for_seed(config.sampler.seed);
        Ok(Self::new(
            PlaceholderService::new(sampler, range),
            config.profile,
        ))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::greeting,
        crate::routes::health::health_check,
        crate::routes::worker::inference,
        crate::routes::worker::forecast,
        crate::routes::truth::truth_scoped,
        crate::routes::truth::truth_bare,
        crate::routes::loss::is_never_negative,
        crate::routes::loss::calculate,
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::routes::worker::NodeValueDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "worker", description = "Placeholder inferences and forecasts"),
        (name = "truth", description = "Placeholder ground truth"),
        (name = "loss", description = "Placeholder loss function")
    )
)]
pub struct ApiDoc;

/// Build API application with default configuration
pub fn build_app(state: AppState) -> Router {
    build_app_with_config(state, &ApiConfig::default())
}

/// Build API application
pub fn build_app_with_config(state: AppState, config: &ApiConfig) -> Router {
    let mut router = routes::routes(state.profile);
    if config.enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(config.cors.layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
