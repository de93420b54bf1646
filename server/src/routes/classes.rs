use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use platform_api::{ApiError, ApiResult};
use platform_authz::Permission;
use serde::Deserialize;
use tracing::info;

use crate::{
    guard::{require, require_owned_act},
    http::AppState,
    identity::CurrentSession,
    store::{ClassSession, ClassStatus},
};

pub async fn list(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<Json<Vec<ClassSession>>> {
    require(&session, Permission::ReadClasses)?;
    let dir = state.store.read();
    let mut classes: Vec<ClassSession> = dir.classes.values().cloned().collect();
    classes.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
    Ok(Json(classes))
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub id: String,
    pub subject: String,
    pub group: String,
    pub teacher_id: String,
    pub starts_at: DateTime<Utc>,
}

pub async fn create(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(body): Json<CreateClassRequest>,
) -> ApiResult<Json<ClassSession>> {
    require(&session, Permission::CreateClass)?;
    let mut dir = state.store.write();
    if dir.classes.contains_key(&body.id) {
        return Err(ApiError::InvalidInput(format!(
            "class {} already exists",
            body.id
        )));
    }
    let class = ClassSession {
        id: body.id,
        subject: body.subject,
        group: body.group,
        teacher_id: body.teacher_id,
        starts_at: body.starts_at,
        status: ClassStatus::Scheduled,
    };
    dir.classes.insert(class.id.clone(), class.clone());
    Ok(Json(class))
}

/// Cancellation is ownership-narrowed: a teacher may cancel only classes
/// assigned to them, an admin may cancel any.
pub async fn cancel(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<String>,
) -> ApiResult<Json<ClassSession>> {
    // Resolve the session before touching the store so anonymous callers
    // cannot probe which class ids exist.
    if session.identity().is_none() {
        return Err(ApiError::Unauthorized);
    }
    let mut dir = state.store.write();
    let teacher_id = dir
        .classes
        .get(&id)
        .map(|class| class.teacher_id.clone())
        .ok_or(ApiError::NotFound)?;
    let actor = require_owned_act(&session, Permission::CancelClass, Some(&teacher_id))?;
    let class = dir.classes.get_mut(&id).ok_or(ApiError::NotFound)?;
    class.status = ClassStatus::Cancelled;
    info!(class = %class.id, by = %actor.id, "class cancelled");
    Ok(Json(class.clone()))
}

pub async fn remove(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<String>,
) -> ApiResult<Json<ClassSession>> {
    require(&session, Permission::DeleteClass)?;
    let mut dir = state.store.write();
    let class = dir.classes.remove(&id).ok_or(ApiError::NotFound)?;
    dir.replace_sheet(&id, Vec::new());
    Ok(Json(class))
}
