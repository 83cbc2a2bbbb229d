use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::provinces::dtos::ProvinceResponseDto;
use crate::features::provinces::services::ProvinceSyncService;
use crate::shared::types::ApiResponse;

/// Refresh the store from the remote source, then return its full contents
pub async fn sync_and_list_provinces(
    State(service): State<Arc<ProvinceSyncService>>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    service.sync().await?;

    let provinces = service.list().await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        dtos,
        "Successfully fetched provinces",
    )))
}
