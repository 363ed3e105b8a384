use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    response::Ack,
    state::AppState,
};

use super::{
    dto::{BuyStickerRequest, StickerList},
    repo,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get-user-stickers", get(get_user_stickers))
        .route("/buy-sticker", post(buy_sticker))
}

#[instrument(skip(state))]
pub async fn get_user_stickers(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<StickerList>, ApiError> {
    let stickers = repo::list_owned(&state.db, &identity.user_id).await?;
    Ok(Json(StickerList { stickers }))
}

#[instrument(skip(state, payload))]
pub async fn buy_sticker(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<BuyStickerRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    if !repo::exists(&state.db, payload.sticker_id).await? {
        return Err(ApiError::NotFound("Sticker not found".into()));
    }

    // Pre-check gives the friendly error; the primary key on
    // (user_id, sticker_id) is what actually prevents a duplicate row when
    // two purchases race.
    if repo::is_owned(&state.db, &identity.user_id, payload.sticker_id).await? {
        return Err(ApiError::Conflict("Sticker already owned".into()));
    }

    let granted = repo::grant(&state.db, &identity.user_id, payload.sticker_id).await?;
    if !granted {
        warn!(user_id = %identity.user_id, sticker_id = payload.sticker_id, "purchase lost race");
        return Err(ApiError::Conflict("Sticker already owned".into()));
    }

    info!(user_id = %identity.user_id, sticker_id = payload.sticker_id, "sticker purchased");
    Ok((
        StatusCode::CREATED,
        Json(Ack::ok("Sticker purchased successfully")),
    ))
}
