// region:    --- Imports
use crate::auction::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::error::AuctionError;
use crate::mapping::{to_auction, to_auction_dto, to_item_changes};
use crate::store::AuctionStore;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

pub type AppState = Arc<dyn AuctionStore>;

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn handle_get_auctions(
    State(store): State<AppState>,
) -> Result<Json<Vec<AuctionDto>>, AuctionError> {
    info!("{:<12} --> 모든 경매 조회", "HandlerQuery");
    let auctions = store.list().await?;
    Ok(Json(auctions.iter().map(to_auction_dto).collect()))
}

/// 경매 조회
pub async fn handle_get_auction(
    State(store): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<AuctionDto>, AuctionError> {
    let Path(id) = id?;
    info!("{:<12} --> 경매 조회 id: {}", "HandlerQuery", id);
    match store.get_by_id(id).await? {
        Some(auction) => Ok(Json(to_auction_dto(&auction))),
        None => Err(AuctionError::NotFound),
    }
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 경매 생성
pub async fn handle_create_auction(
    State(store): State<AppState>,
    payload: Result<Json<CreateAuctionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AuctionError> {
    let Json(dto) = payload?;
    info!("{:<12} --> 경매 생성 요청: {:?}", "Command", dto);
    let created = store.create(to_auction(dto)).await?;
    let location = format!("/api/auctions/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(to_auction_dto(&created)),
    ))
}

/// 경매 수정 (상품 필드 부분 수정)
pub async fn handle_update_auction(
    State(store): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateAuctionDto>, JsonRejection>,
) -> Result<StatusCode, AuctionError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    info!("{:<12} --> 경매 수정 요청 id: {}, {:?}", "Command", id, dto);
    store.update(id, to_item_changes(dto)).await?;
    Ok(StatusCode::OK)
}

/// 경매 삭제
pub async fn handle_delete_auction(
    State(store): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AuctionError> {
    let Path(id) = id?;
    info!("{:<12} --> 경매 삭제 요청 id: {}", "Command", id);
    store.delete(id).await?;
    Ok(StatusCode::OK)
}

// endregion: --- Command Handlers
