//! 进程内存储，仅测试用
//!
//! 与数据库后端实现同一契约：ID 自增分配、插入顺序即列表顺序。

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::TaskStore;
use crate::error::{DaytabError, Result};
use crate::model::{NewTask, Task, TaskPatch};

pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn probe(&self) -> Result<()> {
        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create(&self, new: NewTask) -> Result<Task> {
        let task = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new.title,
            date: new.date,
            priority: new.priority,
            completed: false,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DaytabError::not_found(format!("task {id}")))?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(date) = patch.date {
            task.date = date;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(DaytabError::not_found(format!("task {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::NaiveDate;

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn test_ids_are_distinct_and_ascending() {
        let store = MemoryStore::new();
        let a = store.create(new_task("a")).await.unwrap();
        let b = store.create(new_task("b")).await.unwrap();
        assert!(b.id > a.id);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, a.id);
    }

    #[tokio::test]
    async fn test_patch_keeps_absent_fields() {
        let store = MemoryStore::new();
        let created = store.create(new_task("keep me")).await.unwrap();

        let updated = store
            .update(
                created.id,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "keep me");
        assert_eq!(updated.date, created.date);
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update(99, TaskPatch::default()).await.unwrap_err();
        assert!(matches!(err, DaytabError::NotFound(_)));
        let err = store.delete(99).await.unwrap_err();
        assert!(matches!(err, DaytabError::NotFound(_)));
    }
}
