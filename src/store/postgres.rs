//! PostgreSQL 存储实现

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use super::TaskStore;
use crate::config::DbConfig;
use crate::error::{DaytabError, Result};
use crate::model::{NewTask, Task, TaskPatch};

/// DB_PORT 未设置时的默认端口
const DEFAULT_PORT: u16 = 5432;

pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    /// 惰性建池：此处不触网，首次查询时才真正建连
    pub fn connect_lazy(cfg: &DbConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port.unwrap_or(DEFAULT_PORT))
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.database);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn probe(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS tasks (
                id        BIGSERIAL PRIMARY KEY,
                title     TEXT NOT NULL,
                date      DATE NOT NULL,
                priority  TEXT NOT NULL DEFAULT 'medium',
                completed BOOLEAN NOT NULL DEFAULT FALSE
            )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as(
            "SELECT id, title, date, priority, completed FROM tasks ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn create(&self, new: NewTask) -> Result<Task> {
        let task = sqlx::query_as(
            r#"INSERT INTO tasks (title, date, priority, completed)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, date, priority, completed"#,
        )
        .bind(&new.title)
        .bind(new.date)
        .bind(new.priority)
        .bind(false)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        // COALESCE 实现"缺省字段保持原值"的 patch 语义
        let task: Option<Task> = sqlx::query_as(
            r#"UPDATE tasks
            SET title = COALESCE($1, title),
                date = COALESCE($2, date),
                completed = COALESCE($3, completed)
            WHERE id = $4
            RETURNING id, title, date, priority, completed"#,
        )
        .bind(patch.title)
        .bind(patch.date)
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        task.ok_or_else(|| DaytabError::not_found(format!("task {id}")))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
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

    // 需要可达的 PostgreSQL（读 DB_* 环境变量），手动运行：
    // cargo test --features postgres -- --ignored

    async fn setup() -> PgTaskStore {
        let cfg = DbConfig::from_env().unwrap();
        let store = PgTaskStore::connect_lazy(&cfg);
        store.init_schema().await.unwrap();
        store
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_crud_roundtrip() {
        let store = setup().await;

        let created = store
            .create(NewTask {
                title: "integration probe".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                priority: Priority::High,
            })
            .await
            .unwrap();
        assert!(!created.completed);
        assert_eq!(created.priority, Priority::High);

        let listed = store.list().await.unwrap();
        assert!(listed.iter().any(|t| t.id == created.id));
        let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

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
        assert!(updated.completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.date, created.date);

        store.delete(created.id).await.unwrap();
        let err = store.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DaytabError::NotFound(_)));
        let err = store
            .update(created.id, TaskPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DaytabError::NotFound(_)));
    }
}
