pub mod dto;
pub mod model;

pub use dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
pub use model::{Auction, Item, ItemChanges, Status};
