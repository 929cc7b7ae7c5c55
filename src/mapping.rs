/// 요청/응답 DTO <-> 엔티티 필드 매핑
/// 1. 경매 -> 응답 DTO (평탄화)
/// 2. 생성 요청 -> 경매 + 상품
/// 3. 수정 요청 -> 상품 부분 수정 값
// region:    --- Imports
use crate::auction::{
    Auction, AuctionDto, CreateAuctionDto, Item, ItemChanges, Status, UpdateAuctionDto,
};
use chrono::Utc;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Mappings

/// 1. 경매 -> 응답 DTO
pub fn to_auction_dto(auction: &Auction) -> AuctionDto {
    AuctionDto {
        id: auction.id,
        created_at: auction.created_at,
        updated_at: auction.updated_at,
        auction_end: auction.auction_end,
        seller: auction.seller.clone(),
        winner: auction.winner.clone(),
        make: auction.item.make.clone(),
        model: auction.item.model.clone(),
        year: auction.item.year,
        color: auction.item.color.clone(),
        mileage: auction.item.mileage,
        image_url: auction.item.image_url.clone(),
        status: auction.status.to_string(),
        reserve_price: auction.reserve_price,
        sold_amount: auction.sold_amount,
        current_high_bid: auction.current_high_bid,
    }
}

/// 2. 생성 요청 -> 경매 + 상품 (새 식별자 발급)
pub fn to_auction(dto: CreateAuctionDto) -> Auction {
    let now = Utc::now();
    Auction {
        id: Uuid::new_v4(),
        reserve_price: dto.reserve_price,
        seller: dto.seller,
        winner: None,
        sold_amount: None,
        current_high_bid: None,
        created_at: now,
        updated_at: now,
        auction_end: dto.auction_end,
        status: Status::Live,
        item: Item {
            id: Uuid::new_v4(),
            make: dto.make,
            model: dto.model,
            year: dto.year,
            color: dto.color,
            mileage: dto.mileage,
            image_url: dto.image_url,
        },
    }
}

/// 3. 수정 요청 -> 상품 부분 수정 값
pub fn to_item_changes(dto: UpdateAuctionDto) -> ItemChanges {
    ItemChanges {
        make: dto.make,
        model: dto.model,
        year: dto.year,
        color: dto.color,
        mileage: dto.mileage,
        image_url: dto.image_url,
    }
}

// endregion: --- Mappings

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_dto() -> CreateAuctionDto {
        CreateAuctionDto {
            make: "Bugatti".to_string(),
            model: "Veyron".to_string(),
            year: 2018,
            color: "Black".to_string(),
            mileage: 15035,
            image_url: "https://example.com/veyron.jpg".to_string(),
            reserve_price: 20000,
            auction_end: Utc::now() + Duration::days(10),
            seller: Some("bob".to_string()),
        }
    }

    #[test]
    fn create_request_builds_nested_auction() {
        let dto = create_dto();
        let auction = to_auction(dto.clone());

        assert_eq!(auction.status, Status::Live);
        assert_eq!(auction.reserve_price, 20000);
        assert_eq!(auction.seller.as_deref(), Some("bob"));
        assert_eq!(auction.auction_end, dto.auction_end);
        assert_eq!(auction.created_at, auction.updated_at);
        assert!(auction.winner.is_none());
        assert!(auction.sold_amount.is_none());
        assert!(auction.current_high_bid.is_none());
        assert_eq!(auction.item.make, "Bugatti");
        assert_eq!(auction.item.mileage, 15035);
        assert_ne!(auction.id, auction.item.id);
    }

    #[test]
    fn fresh_identifiers_per_mapping() {
        let a = to_auction(create_dto());
        let b = to_auction(create_dto());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn response_flattens_item_fields() {
        let auction = to_auction(create_dto());
        let dto = to_auction_dto(&auction);

        assert_eq!(dto.id, auction.id);
        assert_eq!(dto.make, "Bugatti");
        assert_eq!(dto.model, "Veyron");
        assert_eq!(dto.year, 2018);
        assert_eq!(dto.color, "Black");
        assert_eq!(dto.image_url, "https://example.com/veyron.jpg");
        assert_eq!(dto.status, "Live");
        assert_eq!(dto.reserve_price, 20000);
    }

    #[test]
    fn response_uses_camel_case_on_the_wire() {
        let dto = to_auction_dto(&to_auction(create_dto()));
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["imageUrl"], "https://example.com/veyron.jpg");
        assert_eq!(json["reservePrice"], 20000);
        assert!(json.get("auctionEnd").is_some());
        assert!(json["currentHighBid"].is_null());
    }

    #[test]
    fn update_request_maps_field_by_field() {
        let changes = to_item_changes(UpdateAuctionDto {
            model: Some("Chiron".to_string()),
            year: Some(0),
            ..Default::default()
        });

        assert_eq!(changes.model.as_deref(), Some("Chiron"));
        assert_eq!(changes.year, Some(0));
        assert!(changes.make.is_none());
    }
}
// endregion: --- Tests
