use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    dates::parse_date,
    error::ApiError,
    response::Ack,
    state::AppState,
};

use super::{
    dto::{AddDiaryRequest, DiaryCreated, DiaryDetails, DiaryList},
    repo::Diary,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-diary", post(add_diary))
        .route("/get-diaries", get(get_diaries))
        .route("/get-diary/:id", get(get_diary))
        .route("/delete-diary/:id", delete(delete_diary))
}

#[instrument(skip(state, payload))]
pub async fn add_diary(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<AddDiaryRequest>,
) -> Result<(StatusCode, Json<DiaryCreated>), ApiError> {
    if payload.title.trim().is_empty() || payload.content.trim().is_empty() {
        return Err(ApiError::Validation("All fields are required.".into()));
    }
    let date = parse_date(&payload.date)?;

    let diary_id = Diary::insert(
        &state.db,
        &identity.user_id,
        date,
        &payload.title,
        &payload.content,
        payload.one.as_deref(),
    )
    .await?;

    info!(user_id = %identity.user_id, diary_id, "diary added");
    Ok((
        StatusCode::CREATED,
        Json(DiaryCreated {
            is_success: true,
            message: "Diary added successfully",
            diary_id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_diaries(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<DiaryList>, ApiError> {
    let diaries = Diary::list_by_owner(&state.db, &identity.user_id).await?;
    Ok(Json(DiaryList { diaries }))
}

#[instrument(skip(state))]
pub async fn get_diary(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DiaryDetails>, ApiError> {
    let diary = Diary::get(&state.db, &identity.user_id, id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Diary not found or you are not authorized to view it".into())
        })?;
    Ok(Json(DiaryDetails { diary }))
}

#[instrument(skip(state))]
pub async fn delete_diary(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, ApiError> {
    let deleted = Diary::delete(&state.db, &identity.user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(
            "Diary not found or you are not authorized to delete it".into(),
        ));
    }
    info!(user_id = %identity.user_id, diary_id = id, "diary deleted");
    Ok(Json(Ack::ok("Diary deleted successfully")))
}
