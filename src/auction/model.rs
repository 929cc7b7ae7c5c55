// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Status
/// 경매 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Live,
    Finished,
    ReserveNotMet,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Finished => "Finished",
            Status::ReserveNotMet => "ReserveNotMet",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Status::Live),
            "Finished" => Ok(Status::Finished),
            "ReserveNotMet" => Ok(Status::ReserveNotMet),
            other => Err(format!("unknown auction status: {other}")),
        }
    }
}
// endregion: --- Status

// region:    --- Entities
/// 경매 모델 (상품 1건을 소유)
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: Option<String>,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: Status,
    pub item: Item,
}

/// 상품 모델
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

/// 상품 부분 수정 값
/// 문자열은 None, 숫자는 None 또는 0 이면 기존 값 유지
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub image_url: Option<String>,
}

impl Item {
    /// 부분 수정 적용. 실제로 값이 바뀐 필드가 있으면 true
    pub fn apply(&mut self, changes: ItemChanges) -> bool {
        let before = self.clone();

        if let Some(make) = changes.make {
            self.make = make;
        }
        if let Some(model) = changes.model {
            self.model = model;
        }
        if let Some(year) = changes.year.filter(|y| *y != 0) {
            self.year = year;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        if let Some(mileage) = changes.mileage.filter(|m| *m != 0) {
            self.mileage = mileage;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = image_url;
        }

        *self != before
    }
}
// endregion: --- Entities

// endregion: --- Tests
