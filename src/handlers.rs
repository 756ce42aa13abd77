// region:    --- Imports
use crate::catalog::model::{ArticleDetail, ArticleSummary, CarDetail, CarSummary};
use crate::error::{AppError, Result};
use crate::store::CatalogStore;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

/// 핸들러 공유 상태
pub type SharedStore = Arc<dyn CatalogStore>;

const INDEX_HTML: &str = include_str!("../templates/index.html");

// region:    --- Page Handlers

/// 메인 페이지
pub async fn handle_index() -> Html<&'static str> {
    info!("{:<12} --> 메인 페이지", "HandlerPage");
    Html(INDEX_HTML)
}

/// 존재하지 않는 경로
pub async fn handle_fallback() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

/// 지원하지 않는 메서드
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}

// endregion: --- Page Handlers

// region:    --- Query Handlers

/// 모든 차량 매물 조회
pub async fn handle_get_cars(State(store): State<SharedStore>) -> Result<Json<Vec<CarSummary>>> {
    info!("{:<12} --> 모든 차량 매물 조회", "HandlerQuery");
    let cars = store.list_cars().await?;
    Ok(Json(cars.iter().map(CarSummary::from).collect()))
}

/// 차량 매물 조회
pub async fn handle_get_car(
    State(store): State<SharedStore>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<CarDetail>> {
    let raw_id = path_id(path)?;
    info!("{:<12} --> 차량 매물 조회 id: {}", "HandlerQuery", raw_id);
    let car_id = parse_id(&raw_id)?;
    match store.get_car(car_id).await? {
        Some(car) => Ok(Json(CarDetail::from(car))),
        None => Err(AppError::NotFound(format!("Car {car_id} not found"))),
    }
}

/// 모든 게시글 조회
pub async fn handle_get_blogs(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<ArticleSummary>>> {
    info!("{:<12} --> 모든 게시글 조회", "HandlerQuery");
    let articles = store.list_articles().await?;
    Ok(Json(articles.iter().map(ArticleSummary::from).collect()))
}

/// 게시글 조회
pub async fn handle_get_blog(
    State(store): State<SharedStore>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ArticleDetail>> {
    let raw_id = path_id(path)?;
    info!("{:<12} --> 게시글 조회 id: {}", "HandlerQuery", raw_id);
    let article_id = parse_id(&raw_id)?;
    match store.get_article(article_id).await? {
        Some(article) => Ok(Json(ArticleDetail::from(article))),
        None => Err(AppError::NotFound(format!("Blog {article_id} not found"))),
    }
}

// endregion: --- Query Handlers

/// axum 경로 추출 실패도 JSON 에러로 응답
fn path_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    path.map(|Path(raw_id)| raw_id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// 경로 id 파싱 (부호 없는 10진수만 허용)
pub fn parse_id(raw: &str) -> Result<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "id must be a non-negative integer, got {raw:?}"
        )));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("id {raw} is out of range")))
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("0042").unwrap(), 42);
    }

    #[test]
    fn rejects_signs_and_text() {
        for raw in ["", "-1", "+1", "abc", "1.5", " 1", "1e3"] {
            assert!(
                matches!(parse_id(raw), Err(AppError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_id("99999999999999999999"),
            Err(AppError::BadRequest(_))
        ));
    }
}
// endregion: --- Tests
