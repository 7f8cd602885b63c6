//! 应用层：路由表与各业务模块

pub mod feedback;
pub mod health;
pub mod product;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use product::{handler, ProductStore};

#[derive(Clone, Default)]
pub struct AppState {
    pub product_store: ProductStore,
}

impl AppState {
    pub fn new(product_store: ProductStore) -> Self {
        Self { product_store }
    }
}

/// 构建完整的路由表
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .route("/feedback", post(feedback::handler::submit_feedback))
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
