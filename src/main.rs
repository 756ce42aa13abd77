// region:    --- Imports
use autovault_catalog::config::Config;
use autovault_catalog::database::{seed, DatabaseManager};
use autovault_catalog::error::Result;
use autovault_catalog::handlers::SharedStore;
use autovault_catalog::routes::create_router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<()> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let seed_requested = std::env::args().skip(1).any(|arg| arg == "--seed");

    // 설정 로드
    let config = Config::from_env()?;

    // DatabaseManager 생성
    let db_manager = match DatabaseManager::connect(&config).await {
        Ok(db_manager) => Arc::new(db_manager),
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Main", e);
            return Err(e.into());
        }
    };

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // 샘플 데이터 적재 (--seed)
    if seed_requested {
        seed::seed_sample_data(db_manager.pool()).await?;
    }

    // 라우터 설정
    let store: SharedStore = db_manager;
    let routes_all = create_router(store, &config.static_dir);

    // 리스너 생성
    let listener = TcpListener::bind(config.bind_target()).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
