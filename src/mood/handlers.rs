use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    dates::parse_date,
    error::ApiError,
    response::Ack,
    state::AppState,
    sticker,
};

use super::{
    dto::{AddToCalendarRequest, MoodColor, MoodRange, MoodRangeQuery, SetMoodRequest},
    repo,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/set-mood", post(set_mood))
        .route("/get-mood/:date", get(get_mood))
        .route("/get-mood-range", get(get_mood_range))
        .route("/add-to-calendar", post(add_to_calendar))
}

#[instrument(skip(state, payload))]
pub async fn set_mood(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<SetMoodRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    if payload.color.trim().is_empty() {
        return Err(ApiError::Validation("Date and color are required.".into()));
    }
    let date = parse_date(&payload.date)?;

    repo::set_color(&state.db, &identity.user_id, date, &payload.color).await?;

    info!(user_id = %identity.user_id, %date, color = %payload.color, "mood color set");
    Ok((
        StatusCode::CREATED,
        Json(Ack::ok("Mood color set successfully")),
    ))
}

#[instrument(skip(state))]
pub async fn get_mood(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(date): Path<String>,
) -> Result<Json<MoodColor>, ApiError> {
    let date = parse_date(&date)?;
    let color = repo::get_color(&state.db, &identity.user_id, date)
        .await?
        .ok_or_else(|| ApiError::NotFound("Mood color not found for this date".into()))?;
    Ok(Json(MoodColor {
        is_success: true,
        color,
    }))
}

#[instrument(skip(state))]
pub async fn get_mood_range(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(query): Query<MoodRangeQuery>,
) -> Result<Json<MoodRange>, ApiError> {
    let (Some(start), Some(end)) = (query.start_date, query.end_date) else {
        return Err(ApiError::Validation(
            "Start date and end date are required.".into(),
        ));
    };
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;

    let moods = repo::range(&state.db, &identity.user_id, start, end).await?;
    if moods.is_empty() {
        return Err(ApiError::NotFound(
            "No mood colors found for the given range.".into(),
        ));
    }
    Ok(Json(MoodRange {
        is_success: true,
        moods,
    }))
}

#[instrument(skip(state, payload))]
pub async fn add_to_calendar(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<AddToCalendarRequest>,
) -> Result<Json<Ack>, ApiError> {
    let date = parse_date(&payload.date)?;

    // Only stickers the caller actually owns can be placed on the calendar.
    if !sticker::repo::is_owned(&state.db, &identity.user_id, payload.sticker_id).await? {
        return Err(ApiError::NotFound(
            "Sticker not found or you do not own it".into(),
        ));
    }

    let attached =
        repo::attach_sticker(&state.db, &identity.user_id, date, payload.sticker_id).await?;
    if !attached {
        return Err(ApiError::NotFound(
            "No mood recorded for this date".into(),
        ));
    }

    info!(user_id = %identity.user_id, %date, sticker_id = payload.sticker_id, "sticker added to calendar");
    Ok(Json(Ack::ok("Sticker added to calendar successfully")))
}
