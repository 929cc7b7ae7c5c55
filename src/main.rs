// region:    --- Imports
use auction_crud_service::app::build_app;
use auction_crud_service::config::Config;
use auction_crud_service::database::DatabaseManager;
use auction_crud_service::handlers::AppState;
use auction_crud_service::seed;
use auction_crud_service::store::{InMemoryAuctionStore, PostgresAuctionStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = Config::from_env()?;
    info!("{:<12} --> 설정 로드: bind_addr={}", "Main", config.bind_addr);

    // 저장소 생성 (DATABASE_URL 이 없으면 메모리 저장소)
    let store: AppState = match DatabaseManager::from_config(&config).await? {
        Some(db_manager) => {
            // 데이터베이스 초기화
            if let Err(e) = db_manager.initialize_database(config.reset_database).await {
                error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
                return Err(e.into());
            }
            info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
            Arc::new(PostgresAuctionStore::new(Arc::new(db_manager)))
        }
        None => {
            warn!("{:<12} --> DATABASE_URL 미설정, 메모리 저장소 사용", "Main");
            Arc::new(InMemoryAuctionStore::new())
        }
    };

    // 샘플 데이터
    if config.seed_database {
        seed::seed_if_empty(&*store).await?;
    }

    // 라우터 설정
    let routes_all = build_app(store);

    // 리스너 생성
    let listener = TcpListener::bind(&config.bind_addr).await?;
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
