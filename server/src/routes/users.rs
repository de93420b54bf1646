use axum::{
    Json,
    extract::{Path, State},
};
use platform_api::{ApiError, ApiResult};
use platform_authz::{Permission, Role};
use serde::Deserialize;
use tracing::info;

use crate::{guard::require, http::AppState, identity::CurrentSession, store::User};

pub async fn list(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<Json<Vec<User>>> {
    require(&session, Permission::ReadUsers)?;
    let dir = state.store.read();
    let mut users: Vec<User> = dir.users.values().cloned().collect();
    users.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(Json(users))
}

/// The acting user's own directory record.
pub async fn me(State(state): State<AppState>, session: CurrentSession) -> ApiResult<Json<User>> {
    let identity = require(&session, Permission::ReadOwnProfile)?;
    let dir = state.store.read();
    let user = dir.users.get(&identity.id).cloned().ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

pub async fn create(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<Json<User>> {
    let actor = require(&session, Permission::CreateUser)?;
    let mut dir = state.store.write();
    if dir.users.contains_key(&body.id) {
        return Err(ApiError::InvalidInput(format!(
            "user {} already exists",
            body.id
        )));
    }
    let user = User {
        id: body.id,
        name: body.name,
        role: body.role,
        active: body.active,
    };
    info!(user = %user.id, by = %actor.id, "user created");
    dir.users.insert(user.id.clone(), user.clone());
    Ok(Json(user))
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

pub async fn update(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    require(&session, Permission::UpdateUser)?;
    let mut dir = state.store.write();
    let user = dir.users.get_mut(&id).ok_or(ApiError::NotFound)?;
    if let Some(name) = body.name {
        user.name = name;
    }
    if let Some(role) = body.role {
        user.role = role;
    }
    if let Some(active) = body.active {
        user.active = active;
    }
    Ok(Json(user.clone()))
}

pub async fn remove(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let actor = require(&session, Permission::DeleteUser)?;
    let mut dir = state.store.write();
    let user = dir.users.remove(&id).ok_or(ApiError::NotFound)?;
    info!(user = %user.id, by = %actor.id, "user deleted");
    Ok(Json(user))
}
