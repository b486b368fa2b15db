use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::refresh_tokens;
use super::handlers::categories::create_category;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_category;
use super::handlers::categories::list_categories;
use super::handlers::categories::update_category;
use super::handlers::comments::create_comment;
use super::handlers::comments::list_comments;
use super::handlers::health::health_check;
use super::handlers::news::create_news;
use super::handlers::news::delete_news;
use super::handlers::news::get_news;
use super::handlers::news::list_news;
use super::handlers::news::update_news;
use super::handlers::pages::create_page;
use super::handlers::pages::delete_page;
use super::handlers::pages::get_page;
use super::handlers::pages::list_pages;
use super::handlers::pages::update_page;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::news::ports::NewsServicePort;
use crate::domain::page::ports::PageServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub news_service: Arc<dyn NewsServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub page_service: Arc<dyn PageServicePort>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh", post(refresh_tokens))
        .route("/api/v1/categories", get(list_categories))
        .route("/api/v1/categories/:id", get(get_category))
        .route("/api/v1/news", get(list_news))
        .route("/api/v1/news/:id", get(get_news))
        .route(
            "/api/v1/news/:id/comments",
            get(list_comments).post(create_comment),
        )
        .route("/api/v1/pages", get(list_pages))
        .route("/api/v1/pages/:id", get(get_page));

    let protected_routes = Router::new()
        .route("/api/v1/categories", post(create_category))
        .route(
            "/api/v1/categories/:id",
            put(update_category).delete(delete_category),
        )
        .route("/api/v1/news", post(create_news))
        .route(
            "/api/v1/news/:id",
            put(update_news).delete(delete_news),
        )
        .route("/api/v1/pages", post(create_page))
        .route(
            "/api/v1/pages/:id",
            put(update_page).delete(delete_page),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
