use chrono::NaiveDateTime;
use serde::Serialize;

/// 게시글 날짜 표기 형식 (예: "January 05, 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

pub fn format_display_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_DATE_FORMAT).to_string()
}

// region:    --- Stored Rows

// 차량 매물 모델
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CarListing {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub mileage: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// 구조 없는 텍스트 그대로 보존
    pub features: Option<String>,
    pub created_at: NaiveDateTime,
}

// 게시글 모델
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
}

// endregion: --- Stored Rows

// region:    --- Projections

/// 목록 응답용 차량 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSummary {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub mileage: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub image: Option<String>,
}

/// 상세 응답용 차량 정보 (요약 + 설명, 옵션)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarDetail {
    #[serde(flatten)]
    pub summary: CarSummary,
    pub description: Option<String>,
    pub features: Option<String>,
}

/// 목록 응답용 게시글 요약
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub created_at: String,
}

/// 상세 응답용 게시글 정보 (요약 + 본문)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    pub content: Option<String>,
}

impl From<&CarListing> for CarSummary {
    fn from(car: &CarListing) -> Self {
        Self {
            id: car.id,
            title: car.title.clone(),
            price: car.price,
            mileage: car.mileage.clone(),
            fuel_type: car.fuel_type.clone(),
            transmission: car.transmission.clone(),
            image: car.image.clone(),
        }
    }
}

impl From<CarListing> for CarDetail {
    fn from(car: CarListing) -> Self {
        let summary = CarSummary::from(&car);
        Self {
            summary,
            description: car.description,
            features: car.features,
        }
    }
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            category: article.category.clone(),
            author: article.author.clone(),
            image: article.image.clone(),
            created_at: format_display_date(&article.created_at),
        }
    }
}

impl From<Article> for ArticleDetail {
    fn from(article: Article) -> Self {
        let summary = ArticleSummary::from(&article);
        Self {
            summary,
            content: article.content,
        }
    }
}

// endregion: --- Projections

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn timestamp(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn sedan() -> CarListing {
        CarListing {
            id: 1,
            title: "2020 Sedan".to_string(),
            price: 15000.0,
            mileage: Some("30,000 mi".to_string()),
            fuel_type: Some("Gasoline".to_string()),
            transmission: Some("Automatic".to_string()),
            image: Some("/img/1.jpg".to_string()),
            description: Some("Clean title.".to_string()),
            features: Some("AC, Bluetooth".to_string()),
            created_at: timestamp(2024, 1, 5),
        }
    }

    #[test]
    fn display_date_is_zero_padded() {
        assert_eq!(format_display_date(&timestamp(2024, 1, 5)), "January 05, 2024");
        assert_eq!(format_display_date(&timestamp(2023, 12, 31)), "December 31, 2023");
    }

    #[test]
    fn car_summary_excludes_heavy_fields() {
        let value = serde_json::to_value(CarSummary::from(&sedan())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "2020 Sedan",
                "price": 15000.0,
                "mileage": "30,000 mi",
                "fuel_type": "Gasoline",
                "transmission": "Automatic",
                "image": "/img/1.jpg"
            })
        );
    }

    #[test]
    fn car_detail_flattens_summary() {
        let car = sedan();
        let summary = CarSummary::from(&car);
        let detail = CarDetail::from(car);
        assert_eq!(detail.summary, summary);

        let value = serde_json::to_value(&detail).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert_eq!(object["description"], "Clean title.");
        assert_eq!(object["features"], "AC, Bluetooth");
        assert!(!object.contains_key("created_at"));
    }

    #[test]
    fn article_projections_share_formatted_date() {
        let article = Article {
            id: 7,
            title: "Buying used".to_string(),
            category: Some("Guides".to_string()),
            author: None,
            image: None,
            content: Some("Check the service history.".to_string()),
            created_at: timestamp(2024, 1, 5),
        };

        let summary = ArticleSummary::from(&article);
        let detail = ArticleDetail::from(article);
        assert_eq!(summary.created_at, "January 05, 2024");
        assert_eq!(detail.summary, summary);

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["created_at"], "January 05, 2024");
        assert_eq!(value["content"], "Check the service history.");
        assert!(value["author"].is_null());
    }
}
// endregion: --- Tests
