//! Task API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::state::ApiState;
use crate::error::DaytabError;
use crate::model::{NewTask, Priority, Task, TaskPatch};

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
}

/// Update task request; absent fields keep their stored values
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub completed: Option<bool>,
}

/// Delete acknowledgment
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

// ============================================================================
// Helper functions
// ============================================================================

/// Map store errors onto HTTP status codes
fn store_error_to_status(err: DaytabError) -> StatusCode {
    match err {
        DaytabError::NotFound(_) => StatusCode::NOT_FOUND,
        other => {
            error!("store error: {other}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /tasks
/// Full task list in insertion order
pub async fn list_tasks(State(state): State<ApiState>) -> Result<Json<Vec<Task>>, StatusCode> {
    let tasks = state.store.list().await.map_err(store_error_to_status)?;
    Ok(Json(tasks))
}

/// POST /tasks
/// Create a task; the store assigns the id and `completed` starts false
pub async fn create_task(
    State(state): State<ApiState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, StatusCode> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let task = state
        .store
        .create(NewTask {
            title: title.to_string(),
            date: req.date,
            priority: req.priority,
        })
        .await
        .map_err(store_error_to_status)?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
/// Patch a task: only the fields present in the body change
pub async fn update_task(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, StatusCode> {
    let title = match req.title {
        Some(t) => {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                return Err(StatusCode::BAD_REQUEST);
            }
            Some(trimmed.to_string())
        }
        None => None,
    };

    let patch = TaskPatch {
        title,
        date: req.date,
        completed: req.completed,
    };
    let task = state
        .store
        .update(id, patch)
        .await
        .map_err(store_error_to_status)?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, StatusCode> {
    state
        .store
        .delete(id)
        .await
        .map_err(store_error_to_status)?;
    Ok(Json(DeleteResponse {
        message: "Task deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use std::sync::Arc;

    fn empty_state() -> ApiState {
        ApiState::new(Arc::new(MemoryStore::new()))
    }

    fn create_req(title: &str, date: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            date: date.parse().unwrap(),
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = empty_state();

        let Json(created) = create_task(
            State(state.clone()),
            Json(create_req("Buy milk", "2024-01-10")),
        )
        .await
        .unwrap();
        assert!(!created.completed);
        assert_eq!(created.title, "Buy milk");

        let Json(listed) = list_tasks(State(state)).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_created_ids_are_distinct() {
        let state = empty_state();
        let mut ids = Vec::new();
        for i in 0..3 {
            let Json(task) = create_task(
                State(state.clone()),
                Json(create_req(&format!("task {i}"), "2024-01-10")),
            )
            .await
            .unwrap();
            assert!(!ids.contains(&task.id));
            ids.push(task.id);
        }
    }

    #[tokio::test]
    async fn test_create_trims_title_and_rejects_blank() {
        let state = empty_state();

        let Json(created) = create_task(
            State(state.clone()),
            Json(create_req("  padded  ", "2024-01-10")),
        )
        .await
        .unwrap();
        assert_eq!(created.title, "padded");

        let err = create_task(State(state), Json(create_req("   ", "2024-01-10")))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_toggles_completed_only() {
        let state = empty_state();
        let Json(created) = create_task(
            State(state.clone()),
            Json(create_req("toggle me", "2024-01-10")),
        )
        .await
        .unwrap();

        let Json(updated) = update_task(
            State(state),
            Path(created.id),
            Json(UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let state = empty_state();
        let Json(created) = create_task(
            State(state.clone()),
            Json(create_req("valid", "2024-01-10")),
        )
        .await
        .unwrap();

        let err = update_task(
            State(state),
            Path(created.id),
            Json(UpdateTaskRequest {
                title: Some("  ".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let err = update_task(
            State(empty_state()),
            Path(42),
            Json(UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_acks_then_404s() {
        let state = empty_state();
        let Json(created) = create_task(
            State(state.clone()),
            Json(create_req("delete me", "2024-01-10")),
        )
        .await
        .unwrap();

        let Json(ack) = delete_task(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(ack.message, "Task deleted");

        let err = delete_task(State(state), Path(created.id))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }
}
