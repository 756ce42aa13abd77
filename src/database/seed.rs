//! 샘플 데이터 적재 (관리용)
//! HTTP 라우트에서는 호출하지 않는다.
// region:    --- Imports
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::info;

// endregion: --- Imports

// region:    --- Records
/// 신규 차량 매물
#[derive(Debug, Clone, Default)]
pub struct NewCarListing {
    pub title: String,
    pub price: f64,
    pub mileage: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
}

/// 신규 게시글
/// `created_at`이 없으면 저장 시각을 사용한다.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
// endregion: --- Records

// region:    --- Inserts

/// 차량 매물 추가
pub async fn insert_car(pool: &SqlitePool, car: &NewCarListing) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO car (title, price, mileage, fuel_type, transmission, image, description, features)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&car.title)
    .bind(car.price)
    .bind(&car.mileage)
    .bind(&car.fuel_type)
    .bind(&car.transmission)
    .bind(&car.image)
    .bind(&car.description)
    .bind(&car.features)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// 게시글 추가
pub async fn insert_article(pool: &SqlitePool, article: &NewArticle) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO blog (title, category, author, image, content, created_at)
         VALUES (?, ?, ?, ?, ?, COALESCE(?, CURRENT_TIMESTAMP))",
    )
    .bind(&article.title)
    .bind(&article.category)
    .bind(&article.author)
    .bind(&article.image)
    .bind(&article.content)
    .bind(article.created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// 기존 데이터를 지우고 샘플 카탈로그 적재
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM car").execute(pool).await?;
    sqlx::query("DELETE FROM blog").execute(pool).await?;
    info!("{:<12} --> 기존 데이터 삭제", "Seed");

    let cars = sample_cars();
    for car in &cars {
        insert_car(pool, car).await?;
    }

    let articles = sample_articles();
    for article in &articles {
        insert_article(pool, article).await?;
    }

    info!(
        "{:<12} --> 샘플 데이터 적재 완료 (차량 {}, 게시글 {})",
        "Seed",
        cars.len(),
        articles.len()
    );
    Ok(())
}

// endregion: --- Inserts

// region:    --- Sample Data

fn sample_cars() -> Vec<NewCarListing> {
    vec![
        NewCarListing {
            title: "Mercedes-Benz E-Class 2023".to_string(),
            price: 65000.0,
            mileage: Some("1,200 Miles".to_string()),
            fuel_type: Some("Petrol".to_string()),
            transmission: Some("Automatic".to_string()),
            image: Some("assets/images/portfolio/30.webp".to_string()),
            description: Some(
                "The 2023 Mercedes-Benz E-Class exemplifies luxury and performance. This model \
                 comes with advanced driver assistance systems, premium interior finishes, and \
                 state-of-the-art technology features."
                    .to_string(),
            ),
            features: Some(
                [
                    "Automatic Climate Control",
                    "Navigation System",
                    "Leather Seats",
                    "Panoramic Sunroof",
                    "LED Headlights",
                    "Wireless Charging",
                    "360-Degree Camera",
                    "Blind Spot Monitoring",
                ]
                .join(", "),
            ),
        },
        NewCarListing {
            title: "BMW 7 Series 2023".to_string(),
            price: 95000.0,
            mileage: Some("500 Miles".to_string()),
            fuel_type: Some("Hybrid".to_string()),
            transmission: Some("Automatic".to_string()),
            image: Some("assets/images/portfolio/04.webp".to_string()),
            description: Some(
                "The all-new BMW 7 Series represents the pinnacle of luxury and innovation. \
                 Experience first-class comfort with executive lounge seating and cutting-edge \
                 technology."
                    .to_string(),
            ),
            features: Some(
                [
                    "Executive Lounge Seating",
                    "31-inch Theatre Screen",
                    "BMW Curved Display",
                    "Panoramic Sky Lounge LED Roof",
                    "Automatic Doors",
                    "Crystal Headlights",
                    "Massage Seats",
                    "Air Suspension",
                ]
                .join(", "),
            ),
        },
        NewCarListing {
            title: "Tesla Model S 2023".to_string(),
            price: 89900.0,
            mileage: Some("0 Miles".to_string()),
            fuel_type: Some("Electric".to_string()),
            transmission: Some("Automatic".to_string()),
            image: Some("assets/images/portfolio/05.webp".to_string()),
            description: None,
            features: None,
        },
    ]
}

fn sample_articles() -> Vec<NewArticle> {
    vec![
        NewArticle {
            title: "What to Check Before Buying a Used Luxury Sedan".to_string(),
            category: Some("Buying Guide".to_string()),
            author: Some("Jonathan Doe".to_string()),
            image: Some("assets/images/blog/01.webp".to_string()),
            content: Some(
                "Service records, tyre wear and a pre-purchase inspection tell you more than \
                 the odometer ever will."
                    .to_string(),
            ),
            created_at: None,
        },
        NewArticle {
            title: "Hybrid or Electric: Picking Your Next Car".to_string(),
            category: Some("Electric".to_string()),
            author: Some("Sarah Wilson".to_string()),
            image: Some("assets/images/blog/02.webp".to_string()),
            content: Some(
                "Daily range, charging access at home and long-trip habits decide most of it."
                    .to_string(),
            ),
            created_at: None,
        },
    ]
}

// endregion: --- Sample Data
