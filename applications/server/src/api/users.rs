/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{RosterError, User, UserId};
use serde::Deserialize;

/// Response header carrying the cursor of the next page
pub const X_CURSOR: &str = "x-cursor";

/// Query parameters of the list endpoint
///
/// Only the first occurrence of a repeated parameter counts, and an
/// unparseable `num` reads as 0.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub num: i64,
    pub cursor: String,
}

impl ListQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            num: first("num").and_then(|n| n.parse().ok()).unwrap_or(0),
            cursor: first("cursor").unwrap_or_default().to_string(),
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl UserRequest {
    /// Check that every required field is present and non-empty
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("password", &self.password),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServerError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| ServerError::Domain(RosterError::NotFound))
}

fn bind(payload: std::result::Result<Json<UserRequest>, JsonRejection>) -> Result<UserRequest> {
    let Json(request) = payload.map_err(|e| ServerError::Unprocessable(e.body_text()))?;
    request.validate()?;
    Ok(request)
}

/// GET /users
/// List users page by page, oldest first
pub async fn list_users(
    State(app_state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response> {
    let query = pairs
        .map(|Query(pairs)| ListQuery::from_pairs(pairs))
        .unwrap_or_default();

    let page = app_state.users.fetch(&query.cursor, query.num).await?;

    let mut response = Json(page.users).into_response();
    if let Some(cursor) = page.next_cursor {
        let value = HeaderValue::from_str(&cursor)
            .map_err(|e| RosterError::internal(format!("unencodable cursor: {}", e)))?;
        response.headers_mut().insert(X_CURSOR, value);
    }

    Ok(response)
}

/// GET /users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let user = app_state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// POST /users
/// Sign up a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let request = bind(payload)?;

    let mut user = User::new(request.name, request.password, request.email);
    app_state.users.signup(&mut user).await?;

    tracing::info!(user_id = user.id, "user signed up");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id
/// Replace a user's name, password and email
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let request = bind(payload)?;

    let mut user = app_state.users.get_by_id(id).await?;
    user.name = request.name;
    user.password = request.password;
    user.email = request.email;
    app_state.users.update(&mut user).await?;

    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    app_state.users.delete(id).await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
