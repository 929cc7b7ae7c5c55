// region:    --- Imports
use super::{queries, AuctionStore};
use crate::auction::{Auction, Item, ItemChanges};
use crate::database::DatabaseManager;
use crate::error::AuctionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Row Model
/// 경매 + 상품 조인 결과 행
#[derive(Debug, FromRow)]
struct AuctionRow {
    id: Uuid,
    reserve_price: i32,
    seller: Option<String>,
    winner: Option<String>,
    sold_amount: Option<i32>,
    current_high_bid: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    auction_end: DateTime<Utc>,
    status: String,
    item_id: Uuid,
    make: String,
    model: String,
    year: i32,
    color: String,
    mileage: i32,
    image_url: String,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = AuctionError;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        Ok(Auction {
            id: row.id,
            reserve_price: row.reserve_price,
            seller: row.seller,
            winner: row.winner,
            sold_amount: row.sold_amount,
            current_high_bid: row.current_high_bid,
            created_at: row.created_at,
            updated_at: row.updated_at,
            auction_end: row.auction_end,
            status: row.status.parse().map_err(AuctionError::Decode)?,
            item: Item {
                id: row.item_id,
                make: row.make,
                model: row.model,
                year: row.year,
                color: row.color,
                mileage: row.mileage,
                image_url: row.image_url,
            },
        })
    }
}
// endregion: --- Row Model

// region:    --- Postgres Auction Store
/// PostgreSQL 경매 저장소
pub struct PostgresAuctionStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

/// 트랜잭션 내 경매 조회
async fn fetch_auction(conn: &mut PgConnection, id: Uuid) -> Result<Option<Auction>, AuctionError> {
    sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .map(Auction::try_from)
        .transpose()
}

#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn list(&self) -> Result<Vec<Auction>, AuctionError> {
        info!("{:<12} --> 모든 경매 조회", "Store");
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let rows = sqlx::query_as::<_, AuctionRow>(queries::GET_ALL_AUCTIONS)
                        .fetch_all(&mut **tx)
                        .await?;
                    rows.into_iter()
                        .map(Auction::try_from)
                        .collect::<Result<Vec<_>, AuctionError>>()
                })
            })
            .await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, AuctionError> {
        info!("{:<12} --> 경매 조회 id: {}", "Store", id);
        self.db_manager
            .transaction(move |tx| Box::pin(async move { fetch_auction(&mut **tx, id).await }))
            .await
    }

    async fn create(&self, auction: Auction) -> Result<Auction, AuctionError> {
        info!("{:<12} --> 경매 생성 id: {}", "Store", auction.id);
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    sqlx::query(queries::INSERT_AUCTION)
                        .bind(auction.id)
                        .bind(auction.reserve_price)
                        .bind(&auction.seller)
                        .bind(&auction.winner)
                        .bind(auction.sold_amount)
                        .bind(auction.current_high_bid)
                        .bind(auction.created_at)
                        .bind(auction.updated_at)
                        .bind(auction.auction_end)
                        .bind(auction.status.as_str())
                        .execute(&mut **tx)
                        .await?;

                    sqlx::query(queries::INSERT_ITEM)
                        .bind(auction.item.id)
                        .bind(&auction.item.make)
                        .bind(&auction.item.model)
                        .bind(auction.item.year)
                        .bind(&auction.item.color)
                        .bind(auction.item.mileage)
                        .bind(&auction.item.image_url)
                        .bind(auction.id)
                        .execute(&mut **tx)
                        .await?;

                    // 저장된 값(타임스탬프 정밀도 포함)으로 반환
                    fetch_auction(&mut **tx, auction.id)
                        .await?
                        .ok_or(AuctionError::NotFound)
                })
            })
            .await
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<(), AuctionError> {
        info!("{:<12} --> 경매 수정 id: {}", "Store", id);
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    let mut auction = fetch_auction(&mut **tx, id)
                        .await?
                        .ok_or(AuctionError::NotFound)?;

                    // 바뀐 값이 없으면 쓰기 없이 0행 반영으로 처리
                    if !auction.item.apply(changes) {
                        return Err(AuctionError::UpdateFailed);
                    }

                    let item = &auction.item;
                    let result = sqlx::query(queries::UPDATE_ITEM)
                        .bind(id)
                        .bind(&item.make)
                        .bind(&item.model)
                        .bind(item.year)
                        .bind(&item.color)
                        .bind(item.mileage)
                        .bind(&item.image_url)
                        .execute(&mut **tx)
                        .await?;

                    if result.rows_affected() == 0 {
                        return Err(AuctionError::UpdateFailed);
                    }

                    sqlx::query(queries::TOUCH_AUCTION)
                        .bind(id)
                        .bind(Utc::now())
                        .execute(&mut **tx)
                        .await?;

                    Ok(())
                })
            })
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuctionError> {
        info!("{:<12} --> 경매 삭제 id: {}", "Store", id);
        self.db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    if fetch_auction(&mut **tx, id).await?.is_none() {
                        return Err(AuctionError::NotFound);
                    }

                    let result = sqlx::query(queries::DELETE_AUCTION)
                        .bind(id)
                        .execute(&mut **tx)
                        .await?;

                    if result.rows_affected() == 0 {
                        return Err(AuctionError::DeleteFailed);
                    }
                    Ok(())
                })
            })
            .await
    }
}
// endregion: --- Postgres Auction Store
