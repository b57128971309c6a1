//! 任务数据模型
//!
//! `Task` 与 REST API 的 JSON 结构一一对应，同时直接映射 `tasks` 表的行。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 任务优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// 显示标签
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// 切换到下一档（表单里循环选择）
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// 切换到上一档
    pub fn previous(&self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// 存储层分配的自增 ID，分配后不可变
    pub id: i64,
    /// 任务标题（非空）
    pub title: String,
    /// 截止日期（纯日历日期，无时间无时区）
    pub date: NaiveDate,
    /// 优先级
    pub priority: Priority,
    /// 是否已完成
    pub completed: bool,
}

/// 新建任务的输入（ID 由存储层分配，completed 恒为 false）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub date: NaiveDate,
    pub priority: Priority,
}

/// 更新任务的输入，None 字段保持原值
///
/// 优先级创建后不可修改（接口层没有这条通路），因此这里没有 priority 字段。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// 是否没有任何待更新字段
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.completed.is_none()
    }
}
