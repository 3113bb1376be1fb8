use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::server::{
    controller::resource,
    service::{
        activity::ActivityResource, admin::AdminResource, class::ClassResource,
        member::MemberResource, resource::Resource, subscription::SubscriptionResource,
        super_admin::SuperAdminResource, trainer::TrainerResource,
    },
    state::AppState,
};

/// Builds the API router with every resource mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/admins", resource_router::<AdminResource>())
        .nest("/api/super-admins", resource_router::<SuperAdminResource>())
        .nest("/api/member", resource_router::<MemberResource>())
        .nest("/api/trainer", resource_router::<TrainerResource>())
        .nest("/api/activities", resource_router::<ActivityResource>())
        .nest("/api/class", resource_router::<ClassResource>())
        .nest("/api/subscription", resource_router::<SubscriptionResource>())
}

/// Lifecycle routes shared by every resource.
///
/// `/cleanup` is a static segment and takes priority over `/{id}`.
fn resource_router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<R>).post(resource::create::<R>))
        .route("/cleanup", delete(resource::cleanup::<R>))
        .route(
            "/{id}",
            get(resource::get_by_id::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
        .route("/{id}/recover", patch(resource::recover::<R>))
}
