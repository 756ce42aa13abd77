// region:    --- Imports
use crate::catalog::model::{Article, CarListing};
use crate::database::DatabaseManager;
use crate::query;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Catalog Store Trait
/// 카탈로그 저장소 트레이트
/// 조회 결과가 없으면 `Ok(None)`을 반환한다.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_cars(&self) -> Result<Vec<CarListing>, sqlx::Error>;
    async fn get_car(&self, id: i64) -> Result<Option<CarListing>, sqlx::Error>;
    async fn list_articles(&self) -> Result<Vec<Article>, sqlx::Error>;
    async fn get_article(&self, id: i64) -> Result<Option<Article>, sqlx::Error>;
}

/// SQLite 구현체
#[async_trait]
impl CatalogStore for DatabaseManager {
    async fn list_cars(&self) -> Result<Vec<CarListing>, sqlx::Error> {
        query::handlers::get_all_cars(self.pool()).await
    }

    async fn get_car(&self, id: i64) -> Result<Option<CarListing>, sqlx::Error> {
        query::handlers::get_car(self.pool(), id).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, sqlx::Error> {
        query::handlers::get_all_articles(self.pool()).await
    }

    async fn get_article(&self, id: i64) -> Result<Option<Article>, sqlx::Error> {
        query::handlers::get_article(self.pool(), id).await
    }
}
// endregion: --- Catalog Store Trait
