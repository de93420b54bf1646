use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use platform_api::{ApiError, ApiResult};
use platform_authz::Permission;
use serde::Deserialize;
use tracing::info;

use crate::{
    guard::{require, require_owned_act, require_owned_view},
    http::AppState,
    identity::CurrentSession,
    store::{AttendanceRecord, AttendanceStatus, ClassStatus, StudentStats},
};

#[derive(Debug, Deserialize)]
pub struct MarkSheetRequest {
    pub marks: Vec<Mark>,
}

#[derive(Debug, Deserialize)]
pub struct Mark {
    pub student_id: String,
    pub status: AttendanceStatus,
}

/// Bulk marking: replaces the class's attendance sheet wholesale.
/// Ownership-narrowed to the class's assigned teacher.
pub async fn mark_sheet(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(class_id): Path<String>,
    Json(body): Json<MarkSheetRequest>,
) -> ApiResult<Json<Vec<AttendanceRecord>>> {
    // Resolve the session before touching the store so anonymous callers
    // cannot probe which class ids exist.
    if session.identity().is_none() {
        return Err(ApiError::Unauthorized);
    }
    let mut dir = state.store.write();
    let class = dir.classes.get(&class_id).cloned().ok_or(ApiError::NotFound)?;
    let actor = require_owned_act(&session, Permission::MarkAttendance, Some(&class.teacher_id))?;
    if class.status == ClassStatus::Cancelled {
        return Err(ApiError::InvalidInput(format!(
            "class {class_id} is cancelled"
        )));
    }
    let now = Utc::now();
    let records: Vec<AttendanceRecord> = body
        .marks
        .into_iter()
        .map(|mark| AttendanceRecord {
            class_id: class_id.clone(),
            student_id: mark.student_id,
            status: mark.status,
            recorded_by: actor.id.clone(),
            recorded_at: now,
        })
        .collect();
    info!(class = %class_id, marks = records.len(), by = %actor.id, "attendance sheet recorded");
    dir.replace_sheet(&class_id, records.clone());
    Ok(Json(records))
}

/// A student sees their own records; read-all-attendance holders see any.
pub async fn for_student(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(student_id): Path<String>,
) -> ApiResult<Json<Vec<AttendanceRecord>>> {
    require_owned_view(
        &session,
        Permission::ReadOwnAttendance,
        Permission::ReadAllAttendance,
        Some(&student_id),
    )?;
    let dir = state.store.read();
    Ok(Json(dir.records_for_student(&student_id)))
}

pub async fn statistics(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<Json<Vec<StudentStats>>> {
    require(&session, Permission::ViewStatistics)?;
    let dir = state.store.read();
    Ok(Json(dir.statistics()))
}

pub async fn statistics_for_student(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(student_id): Path<String>,
) -> ApiResult<Json<StudentStats>> {
    require_owned_view(
        &session,
        Permission::ViewOwnStatistics,
        Permission::ViewStatistics,
        Some(&student_id),
    )?;
    let dir = state.store.read();
    Ok(Json(dir.statistics_for_student(&student_id)))
}
