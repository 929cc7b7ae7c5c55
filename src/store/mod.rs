/// 경매 저장소
/// 1. 목록 (상품 조인, 제조사 순)
/// 2. 단건 조회
/// 3. 생성
/// 4. 부분 수정
/// 5. 삭제 (상품 함께 삭제)
// region:    --- Imports
use crate::auction::{Auction, ItemChanges};
use crate::error::AuctionError;
use async_trait::async_trait;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Modules
pub mod in_memory;
pub mod postgres;
pub mod queries;

pub use in_memory::InMemoryAuctionStore;
pub use postgres::PostgresAuctionStore;
// endregion: --- Modules

// region:    --- Auction Store Trait
/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 1. 모든 경매 조회
    async fn list(&self) -> Result<Vec<Auction>, AuctionError>;

    /// 2. 경매 조회 (없으면 None)
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, AuctionError>;

    /// 3. 경매 + 상품 저장 후 저장된 경매 반환
    async fn create(&self, auction: Auction) -> Result<Auction, AuctionError>;

    /// 4. 상품 부분 수정
    ///
    /// 경매가 없으면 `NotFound`, 반영된 행이 없으면 `UpdateFailed`.
    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<(), AuctionError>;

    /// 5. 경매 삭제
    ///
    /// 경매가 없으면 `NotFound`, 삭제된 행이 없으면 `DeleteFailed`.
    async fn delete(&self, id: Uuid) -> Result<(), AuctionError>;
}
// endregion: --- Auction Store Trait
