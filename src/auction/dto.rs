// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Response
/// 경매 조회 응답 (경매 + 상품 필드를 평탄화)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub seller: Option<String>,
    pub winner: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub status: String,
    pub reserve_price: i32,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
}
// endregion: --- Response

// region:    --- Requests
/// 경매 생성 요청
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    #[serde(default)]
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
    #[serde(default)]
    pub seller: Option<String>,
}

/// 경매 수정 요청 (모든 필드 선택)
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionDto {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub mileage: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}
// endregion: --- Requests
