use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::previsit::{check_previsit, show_previsit_invitation};

pub fn build_previsit_routers() -> Router<AppRegistry> {
    let previsit_routers = Router::new()
        .route("/:reservation_id/previsit", get(check_previsit))
        .route(
            "/:reservation_id/previsit/invitation",
            get(show_previsit_invitation),
        );

    Router::new().nest("/reservations", previsit_routers)
}
