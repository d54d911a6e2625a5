use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{models::TickerPrice, Error as CommonError};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::service::PriceService;

pub type SharedService = Arc<PriceService>;

/// Body sent to the caller for every failed price lookup ("Error fetching price")
pub const PRICE_ERROR_MESSAGE: &str = "Ошибка получения цены";

// Wrapper so common::Error can be turned into a response
pub struct ApiError(CommonError);

impl From<CommonError> for ApiError {
    fn from(err: CommonError) -> Self {
        ApiError(err)
    }
}

// Every cause collapses into one 500; details stay in the server log
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Price request failed: {}", self.0);

        #[derive(Serialize)]
        struct ErrorResponse {
            error: &'static str,
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: PRICE_ERROR_MESSAGE,
            }),
        )
            .into_response()
    }
}

// Relay the Binance BTCUSDT ticker; method and body are ignored
pub async fn binance_price(
    State(service): State<SharedService>,
) -> Result<Json<TickerPrice>, ApiError> {
    let price = service.binance_price().await?;
    Ok(Json(price))
}
