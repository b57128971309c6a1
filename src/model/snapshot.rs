//! 任务列表快照
//!
//! 不可变状态容器：每次变更产生新快照，旧快照不受影响。
//! 前端只在服务端确认一次往返之后才换入新快照，视图从快照整体重算。

use super::task::Task;

/// 一份完整的任务列表快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// 借出全部任务，供视图计算使用
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 按 ID 查找
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 追加一个任务，返回新快照
    pub fn with_added(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self { tasks }
    }

    /// 以同 ID 任务替换原任务（保持原位置），ID 不存在则快照不变
    pub fn with_replaced(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        Self { tasks }
    }

    /// 移除指定 ID 的任务，返回新快照
    pub fn with_removed(&self, id: i64) -> Self {
        let tasks = self
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::NaiveDate;

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            priority: Priority::Medium,
            completed: false,
        }
    }

    #[test]
    fn test_with_added_appends() {
        let list = TaskList::default();
        let next = list.with_added(task(1, "a")).with_added(task(2, "b"));
        assert!(list.is_empty());
        assert_eq!(next.len(), 2);
        assert_eq!(next.tasks()[1].id, 2);
    }

    #[test]
    fn test_with_replaced_keeps_position() {
        let list = TaskList::new(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let mut edited = task(2, "b2");
        edited.completed = true;

        let next = list.with_replaced(edited);
        assert_eq!(next.tasks()[1].title, "b2");
        assert!(next.tasks()[1].completed);
        // 原快照不受影响
        assert_eq!(list.tasks()[1].title, "b");
        assert!(!list.tasks()[1].completed);
    }

    #[test]
    fn test_with_replaced_unknown_id_is_noop() {
        let list = TaskList::new(vec![task(1, "a")]);
        let next = list.with_replaced(task(9, "ghost"));
        assert_eq!(next, list);
    }

    #[test]
    fn test_with_removed() {
        let list = TaskList::new(vec![task(1, "a"), task(2, "b")]);
        let next = list.with_removed(1);
        assert_eq!(next.len(), 1);
        assert_eq!(next.tasks()[0].id, 2);
        assert_eq!(list.len(), 2);
        assert!(next.get(1).is_none());
        assert_eq!(next.get(2).map(|t| t.id), Some(2));
    }
}
