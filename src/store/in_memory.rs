// region:    --- Imports
use super::AuctionStore;
use crate::auction::{Auction, ItemChanges};
use crate::error::AuctionError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- In-Memory Auction Store
/// 메모리 경매 저장소
///
/// 테스트/개발용. 상품은 경매 값 안에 포함되어 함께 삭제된다.
#[derive(Debug, Default)]
pub struct InMemoryAuctionStore {
    auctions: RwLock<HashMap<Uuid, Auction>>,
}

impl InMemoryAuctionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuctionStore for InMemoryAuctionStore {
    async fn list(&self) -> Result<Vec<Auction>, AuctionError> {
        info!("{:<12} --> 모든 경매 조회", "MemStore");
        let auctions = self.auctions.read().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<Auction> = auctions.values().cloned().collect();
        list.sort_by(|a, b| {
            a.item
                .make
                .cmp(&b.item.make)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(list)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, AuctionError> {
        info!("{:<12} --> 경매 조회 id: {}", "MemStore", id);
        let auctions = self.auctions.read().unwrap_or_else(PoisonError::into_inner);
        Ok(auctions.get(&id).cloned())
    }

    async fn create(&self, auction: Auction) -> Result<Auction, AuctionError> {
        info!("{:<12} --> 경매 생성 id: {}", "MemStore", auction.id);
        let mut auctions = self.auctions.write().unwrap_or_else(PoisonError::into_inner);
        auctions.insert(auction.id, auction.clone());
        Ok(auction)
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> Result<(), AuctionError> {
        info!("{:<12} --> 경매 수정 id: {}", "MemStore", id);
        let mut auctions = self.auctions.write().unwrap_or_else(PoisonError::into_inner);
        let auction = auctions.get_mut(&id).ok_or(AuctionError::NotFound)?;

        if !auction.item.apply(changes) {
            return Err(AuctionError::UpdateFailed);
        }
        auction.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AuctionError> {
        info!("{:<12} --> 경매 삭제 id: {}", "MemStore", id);
        let mut auctions = self.auctions.write().unwrap_or_else(PoisonError::into_inner);
        auctions
            .remove(&id)
            .map(|_| ())
            .ok_or(AuctionError::NotFound)
    }
}
// endregion: --- In-Memory Auction Store

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::CreateAuctionDto;
    use crate::mapping::to_auction;
    use chrono::Duration;

    fn new_auction(make: &str, model: &str) -> Auction {
        to_auction(CreateAuctionDto {
            make: make.to_string(),
            model: model.to_string(),
            year: 2015,
            color: "Silver".to_string(),
            mileage: 40000,
            image_url: format!("/images/{model}.jpg"),
            reserve_price: 0,
            auction_end: Utc::now() + Duration::days(7),
            seller: None,
        })
    }

    #[tokio::test]
    async fn created_auction_can_be_fetched() {
        let store = InMemoryAuctionStore::new();
        let created = store.create(new_auction("Audi", "R8")).await.unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn missing_auction_is_none() {
        let store = InMemoryAuctionStore::new();
        assert_eq!(store.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_ordered_by_make() {
        let store = InMemoryAuctionStore::new();
        for (make, model) in [("Mercedes", "SLK"), ("Audi", "TT"), ("BMW", "X1"), ("Audi", "R8")] {
            store.create(new_auction(make, model)).await.unwrap();
        }

        let makes: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.item.make)
            .collect();
        assert_eq!(makes, vec!["Audi", "Audi", "BMW", "Mercedes"]);

        let first: Vec<Uuid> = store.list().await.unwrap().iter().map(|a| a.id).collect();
        let second: Vec<Uuid> = store.list().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_overwrites_only_supplied_fields() {
        let store = InMemoryAuctionStore::new();
        let created = store.create(new_auction("Ford", "GT")).await.unwrap();

        store
            .update(
                created.id,
                ItemChanges {
                    color: Some("Blue".to_string()),
                    year: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated.item.color, "Blue");
        assert_eq!(updated.item.year, created.item.year);
        assert_eq!(updated.item.make, created.item.make);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn empty_update_fails_and_keeps_item() {
        let store = InMemoryAuctionStore::new();
        let created = store.create(new_auction("Ford", "Model T")).await.unwrap();

        let result = store.update(created.id, ItemChanges::default()).await;
        assert!(matches!(result, Err(AuctionError::UpdateFailed)));

        let unchanged = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_auction_are_not_found() {
        let store = InMemoryAuctionStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            store.update(id, ItemChanges::default()).await,
            Err(AuctionError::NotFound)
        ));
        assert!(matches!(store.delete(id).await, Err(AuctionError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_auction_with_item() {
        let store = InMemoryAuctionStore::new();
        let created = store.create(new_auction("Ferrari", "Spider")).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert_eq!(store.get_by_id(created.id).await.unwrap(), None);
        assert!(store.list().await.unwrap().is_empty());
    }
}
// endregion: --- Tests
