/// 모든 차량 매물 조회
pub const GET_ALL_CARS: &str = r#"
    SELECT id, title, price, mileage, fuel_type, transmission, image, description, features, created_at
    FROM car
    ORDER BY id
"#;

/// 차량 매물 조회
pub const GET_CAR: &str = "SELECT id, title, price, mileage, fuel_type, transmission, image, description, features, created_at FROM car WHERE id = ?";

/// 모든 게시글 조회
pub const GET_ALL_ARTICLES: &str = r#"
    SELECT id, title, category, author, image, content, created_at
    FROM blog
    ORDER BY id
"#;

/// 게시글 조회
pub const GET_ARTICLE: &str =
    "SELECT id, title, category, author, image, content, created_at FROM blog WHERE id = ?";
