/// 샘플 경매 데이터
// region:    --- Imports
use crate::auction::CreateAuctionDto;
use crate::error::AuctionError;
use crate::mapping::to_auction;
use crate::store::AuctionStore;
use chrono::{Duration, Utc};
use tracing::info;

// endregion: --- Imports

// (make, model, year, color, mileage, reserve_price, seller, 종료까지 남은 일수)
const SAMPLES: &[(&str, &str, i32, &str, i32, i32, &str, i64)] = &[
    ("Ford", "GT", 2020, "White", 50000, 20000, "bob", 10),
    ("Bugatti", "Veyron", 2018, "Black", 15035, 90000, "alice", 60),
    ("Mercedes", "SLK", 2016, "Silver", 15001, 0, "bob", 4),
    ("BMW", "X1", 2017, "Blue", 90000, 20000, "tom", 6),
    ("Ferrari", "Spider", 2015, "Red", 50000, 20000, "alice", 55),
    ("Audi", "R8", 2021, "Black", 10050, 20000, "bob", 13),
    ("Ford", "Model T", 1938, "Rust", 150150, 20000, "alice", 35),
];

/// 샘플 생성 요청 목록
pub fn sample_auctions() -> Vec<CreateAuctionDto> {
    let now = Utc::now();
    SAMPLES
        .iter()
        .map(
            |&(make, model, year, color, mileage, reserve_price, seller, days)| CreateAuctionDto {
                make: make.to_string(),
                model: model.to_string(),
                year,
                color: color.to_string(),
                mileage,
                image_url: format!(
                    "/images/{}-{}.jpg",
                    make.to_lowercase(),
                    model.to_lowercase().replace(' ', "-")
                ),
                reserve_price,
                auction_end: now + Duration::days(days),
                seller: Some(seller.to_string()),
            },
        )
        .collect()
}

/// 저장소가 비어 있으면 샘플 경매 저장. 저장한 건수 반환
pub async fn seed_if_empty(store: &dyn AuctionStore) -> Result<usize, AuctionError> {
    if !store.list().await?.is_empty() {
        info!("{:<12} --> 기존 데이터 존재, 샘플 생략", "Seed");
        return Ok(0);
    }

    let samples = sample_auctions();
    let count = samples.len();
    for dto in samples {
        store.create(to_auction(dto)).await?;
    }
    info!("{:<12} --> 샘플 경매 {}건 저장", "Seed", count);
    Ok(count)
}

// endregion: --- Tests
