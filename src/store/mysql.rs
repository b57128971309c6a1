//! MySQL 存储实现
//!
//! 与 postgres 实现同一契约。MySQL 没有 RETURNING，写操作后补一次
//! SELECT 取回完整行。

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use super::TaskStore;
use crate::config::DbConfig;
use crate::error::{DaytabError, Result};
use crate::model::{NewTask, Task, TaskPatch};

/// DB_PORT 未设置时的默认端口
const DEFAULT_PORT: u16 = 3306;

pub struct MySqlTaskStore {
    pool: MySqlPool,
}

impl MySqlTaskStore {
    /// 惰性建池：此处不触网，首次查询时才真正建连
    pub fn connect_lazy(cfg: &DbConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port.unwrap_or(DEFAULT_PORT))
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.database);
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as(
            "SELECT id, title, date, priority, completed FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }
}

#[async_trait]
impl TaskStore for MySqlTaskStore {
    async fn probe(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS tasks (
                id        BIGINT AUTO_INCREMENT PRIMARY KEY,
                title     VARCHAR(255) NOT NULL,
                date      DATE NOT NULL,
                priority  VARCHAR(16) NOT NULL DEFAULT 'medium',
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
        let result = sqlx::query(
            "INSERT INTO tasks (title, date, priority, completed) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.title)
        .bind(new.date)
        .bind(new.priority)
        .bind(false)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DaytabError::not_found(format!("task {id}")))
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        // COALESCE 实现"缺省字段保持原值"的 patch 语义。
        // 行不存在时 UPDATE 静默影响 0 行，由随后的 SELECT 报 NotFound。
        sqlx::query(
            r#"UPDATE tasks
            SET title = COALESCE(?, title),
                date = COALESCE(?, date),
                completed = COALESCE(?, completed)
            WHERE id = ?"#,
        )
        .bind(patch.title)
        .bind(patch.date)
        .bind(patch.completed)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DaytabError::not_found(format!("task {id}")))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
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

    // 需要可达的 MySQL（读 DB_* 环境变量），手动运行：
    // cargo test --no-default-features --features mysql -- --ignored

    async fn setup() -> MySqlTaskStore {
        let cfg = DbConfig::from_env().unwrap();
        let store = MySqlTaskStore::connect_lazy(&cfg);
        store.init_schema().await.unwrap();
        store
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL"]
    async fn test_crud_roundtrip() {
        let store = setup().await;

        let created = store
            .create(NewTask {
                title: "integration probe".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                priority: Priority::Low,
            })
            .await
            .unwrap();
        assert!(!created.completed);
        assert_eq!(created.priority, Priority::Low);

        let listed = store.list().await.unwrap();
        assert!(listed.iter().any(|t| t.id == created.id));

        let updated = store
            .update(
                created.id,
                TaskPatch {
                    title: Some("renamed".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert!(updated.completed);
        assert_eq!(updated.date, created.date);

        store.delete(created.id).await.unwrap();
        let err = store.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DaytabError::NotFound(_)));
    }
}
