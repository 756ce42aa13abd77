// region:    --- Imports
use crate::handlers::{self, SharedStore};
use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

// endregion: --- Imports

/// GET 라우트 (다른 메서드는 JSON 405 응답)
fn get_only<H, T>(handler: H) -> MethodRouter<SharedStore>
where
    H: axum::handler::Handler<T, SharedStore>,
    T: 'static,
{
    get(handler).fallback(handlers::handle_method_not_allowed)
}

/// 라우터 설정
pub fn create_router(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    // 프론트엔드 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 정적 파일이 없으면 JSON 404
    let assets = ServeDir::new(static_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::handle_fallback.into_service());

    Router::new()
        .route("/", get_only(handlers::handle_index))
        .route("/api/cars", get_only(handlers::handle_get_cars))
        .route("/api/cars/:id", get_only(handlers::handle_get_car))
        .route("/api/blogs", get_only(handlers::handle_get_blogs))
        .route("/api/blogs/:id", get_only(handlers::handle_get_blog))
        .nest_service("/assets", assets)
        .fallback(handlers::handle_fallback)
        .layer(cors)
        .with_state(store)
}
