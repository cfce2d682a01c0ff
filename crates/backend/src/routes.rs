use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Routes that need a valid bearer token
fn protected_routes() -> Router {
    Router::new()
        .route("/api/system/auth/me", get(system::handlers::auth::current_user))
        // ========================================
        // MODAL FORMS
        // ========================================
        .route(
            "/api/guinea_pig/add",
            get(handlers::a002_guinea_pig::add_form).post(handlers::a002_guinea_pig::add_submit),
        )
        .route(
            "/api/guinea_pig/edit/:id",
            get(handlers::a002_guinea_pig::edit_form).post(handlers::a002_guinea_pig::edit_submit),
        )
        .route(
            "/api/food_type/add",
            get(handlers::a003_food_type::add_form).post(handlers::a003_food_type::add_submit),
        )
        .route(
            "/api/food_type/edit/:id",
            get(handlers::a003_food_type::edit_form).post(handlers::a003_food_type::edit_submit),
        )
        .route(
            "/api/food_entry/add",
            get(handlers::a004_food_entry::add_form).post(handlers::a004_food_entry::add_submit),
        )
        .route(
            "/api/food_entry/edit/:id",
            get(handlers::a004_food_entry::edit_form).post(handlers::a004_food_entry::edit_submit),
        )
        .route(
            "/api/food_entry/delete",
            post(handlers::a004_food_entry::delete),
        )
        .route(
            "/api/weight_entry/add",
            get(handlers::a005_weight_entry::add_form)
                .post(handlers::a005_weight_entry::add_submit),
        )
        .route(
            "/api/weight_entry/edit/:id",
            get(handlers::a005_weight_entry::edit_form)
                .post(handlers::a005_weight_entry::edit_submit),
        )
        // ========================================
        // SETTINGS LISTS
        // ========================================
        .route("/api/guinea_pig", get(handlers::a002_guinea_pig::list_all))
        .route("/api/food_type", get(handlers::a003_food_type::list_all))
        // ========================================
        // PAGES
        // ========================================
        .route("/api/dashboard", get(handlers::d400_daily_summary::get_summary))
        .route(
            "/api/vitamin_c/toggle",
            post(handlers::d400_daily_summary::toggle_vitamin_c),
        )
        .route("/api/statistics", get(handlers::d401_statistics::get_statistics))
        .route("/api/history", get(handlers::p900_history::get_history))
        .layer(middleware::from_fn(system::auth::middleware::require_auth))
}

/// All API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .merge(protected_routes())
}
