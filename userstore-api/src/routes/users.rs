//! User CRUD endpoints
//!
//! Handlers decode and validate the request, call the [`UserService`], and wrap
//! the outcome in the standard envelope. Shape validation (username length,
//! email format, numeric id) happens here so the service only ever sees
//! well-formed input.
//!
//! # Endpoints
//!
//! - `POST   /api/v1/users` - Create user
//! - `GET    /api/v1/users` - List users
//! - `GET    /api/v1/users/:id` - Get user
//! - `PUT    /api/v1/users/:id` - Update user
//! - `DELETE /api/v1/users/:id` - Delete user
//!
//! [`UserService`]: userstore_shared::service::UserService

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response::ApiResponse,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::{info, instrument};
use userstore_shared::models::user::{NewUser, User, UserChanges};
use validator::Validate;

/// Create/update request body
///
/// Any other fields in the body (`id`, timestamps) are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    /// Username (3-20 characters)
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        NewUser::new(req.username, req.email)
    }
}

impl From<UserRequest> for UserChanges {
    fn from(req: UserRequest) -> Self {
        UserChanges::new(req.username, req.email)
    }
}

/// Parses a path segment as a user id
fn parse_user_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::BadRequest("invalid user ID".to_string()))
}

/// Decodes and validates a JSON body
fn validated(payload: Result<Json<UserRequest>, JsonRejection>) -> ApiResult<UserRequest> {
    let Json(req) = payload?;
    req.validate()?;
    Ok(req)
}

/// Create user
///
/// # Endpoint
///
/// ```text
/// POST /api/v1/users
/// Content-Type: application/json
///
/// { "username": "alice", "email": "alice@example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with a `Location` header and the stored record:
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "alice",
///     "email": "alice@example.com",
///     "created_at": "2025-01-03T12:00:00Z",
///     "updated_at": "2025-01-03T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed JSON or validation failed
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<ApiResponse<User>>)> {
    let req = validated(payload)?;

    let user = state.users.create_user(req.into());
    info!(user_id = user.id, "user created");

    let location = format!("/api/v1/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(user)),
    ))
}

/// Get user by id
///
/// # Errors
///
/// - `400 Bad Request`: Id is not an unsigned integer
/// - `404 Not Found`: No such user
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let id = parse_user_id(&id)?;
    let user = state.users.get_user(id)?;
    Ok(Json(ApiResponse::success(user)))
}

/// List all users
///
/// Order is unspecified.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    Ok(Json(ApiResponse::success(state.users.list_users())))
}

/// Update user
///
/// Replaces username and email; `id` and `created_at` never change.
///
/// # Errors
///
/// - `400 Bad Request`: Bad id, malformed JSON, or validation failed
/// - `404 Not Found`: No such user
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let id = parse_user_id(&id)?;
    let req = validated(payload)?;

    let user = state.users.update_user(id, req.into())?;
    info!(user_id = user.id, "user updated");

    Ok(Json(ApiResponse::success(user)))
}

/// Delete user
///
/// # Response
///
/// ```json
/// { "success": true, "data": "user deleted successfully" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Id is not an unsigned integer
/// - `404 Not Found`: No such user
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    let id = parse_user_id(&id)?;
    state.users.delete_user(id)?;
    info!(user_id = id, "user deleted");

    Ok(Json(ApiResponse::success("user deleted successfully")))
}
