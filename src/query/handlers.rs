// region:    --- Imports
use super::queries;
use crate::catalog::model::{Article, CarListing};
use sqlx::Error as SqlxError;
use sqlx::SqlitePool;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 모든 차량 매물 조회
pub async fn get_all_cars(pool: &SqlitePool) -> Result<Vec<CarListing>, SqlxError> {
    info!("{:<12} --> 모든 차량 매물 조회", "Query");
    sqlx::query_as::<_, CarListing>(queries::GET_ALL_CARS)
        .fetch_all(pool)
        .await
}

/// 차량 매물 조회
pub async fn get_car(pool: &SqlitePool, car_id: i64) -> Result<Option<CarListing>, SqlxError> {
    info!("{:<12} --> 차량 매물 조회 id: {}", "Query", car_id);
    sqlx::query_as::<_, CarListing>(queries::GET_CAR)
        .bind(car_id)
        .fetch_optional(pool)
        .await
}

/// 모든 게시글 조회
pub async fn get_all_articles(pool: &SqlitePool) -> Result<Vec<Article>, SqlxError> {
    info!("{:<12} --> 모든 게시글 조회", "Query");
    sqlx::query_as::<_, Article>(queries::GET_ALL_ARTICLES)
        .fetch_all(pool)
        .await
}

/// 게시글 조회
pub async fn get_article(pool: &SqlitePool, article_id: i64) -> Result<Option<Article>, SqlxError> {
    info!("{:<12} --> 게시글 조회 id: {}", "Query", article_id);
    sqlx::query_as::<_, Article>(queries::GET_ARTICLE)
        .bind(article_id)
        .fetch_optional(pool)
        .await
}

// endregion: --- Query Handlers
