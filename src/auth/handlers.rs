use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            ChangePasswordRequest, LoginRequest, LoginResponse, PublicUser, SignupRequest,
            UserInfo, UserInfoResponse,
        },
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    response::Ack,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/user-info", get(user_info))
        .route("/change-password", post(change_password))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let name = payload.name.trim();
    let user_id = payload.user_id.trim();
    if name.is_empty() || user_id.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("All fields are required.".into()));
    }

    let hash = hash_password(&payload.password)?;
    let created = User::create(&state.db, name, user_id, &hash).await?;
    if !created {
        warn!(%user_id, "signup for existing user id");
        return Err(ApiError::Conflict("User ID already registered".into()));
    }

    info!(%user_id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(Ack::ok("User created successfully")),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user_id = payload.user_id.trim();
    if user_id.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("All fields are required.".into()));
    }

    let user = User::find(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            warn!(%user_id, "login for unknown user id");
            ApiError::Unauthorized("User not found".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(%user_id, "login with invalid password");
        return Err(ApiError::Unauthorized("Invalid password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.user_id, &user.name)?;

    info!(%user_id, "user logged in");
    Ok(Json(LoginResponse {
        is_success: true,
        message: "Login successful",
        token,
        user: PublicUser {
            user_id: user.user_id,
            name: user.name,
        },
    }))
}

#[instrument(skip(state))]
pub async fn user_info(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserInfoResponse>, ApiError> {
    let user = User::find(&state.db, &identity.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    Ok(Json(UserInfoResponse {
        user: UserInfo {
            name: user.name,
            user_id: user.user_id,
            coin: user.coin,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<Ack>, ApiError> {
    if payload.current_password.is_empty() || payload.new_password.is_empty() {
        return Err(ApiError::Validation("All fields are required".into()));
    }

    // Token authentication is not enough here: the caller must also prove
    // the current password before the hash is replaced.
    let user = User::find(&state.db, &identity.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    if !verify_password(&payload.current_password, &user.password_hash)? {
        warn!(user_id = %identity.user_id, "change-password with wrong current password");
        return Err(ApiError::Unauthorized(
            "Current password is incorrect".into(),
        ));
    }

    let new_hash = hash_password(&payload.new_password)?;
    if !User::update_password(&state.db, &identity.user_id, &new_hash).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }

    info!(user_id = %identity.user_id, "password updated");
    Ok(Json(Ack::ok("Password updated successfully")))
}
