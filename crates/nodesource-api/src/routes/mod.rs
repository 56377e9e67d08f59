use crate::AppState;
use axum::Router;
use nodesource_core::{Profile, TruthRoute};

pub mod health;
pub mod loss;
pub mod truth;
pub mod worker;

/// Merge the routes a profile exposes
pub fn routes(profile: Profile) -> Router<AppState> {
    let mut router = Router::new()
        .merge(health::routes())
        .merge(worker::routes());

    if profile.serves_greeting() {
        router = router.merge(health::greeting_routes());
    }

    router = match profile.truth_route() {
        TruthRoute::Scoped => router.merge(truth::scoped_routes()),
        TruthRoute::Bare => router.merge(truth::bare_routes()),
    };

    if profile.serves_loss() {
        router = router.merge(loss::routes());
    }

    router
}
