//! 任务筛选与 Tab 计数
//!
//! 前端的核心视图逻辑：把任务快照按"今天"分桶到 Today / Pending / Overdue，
//! 并计算三个 Tab 的计数。纯函数，无共享状态，每次渲染整体重算。

use chrono::NaiveDate;

use super::task::Task;

/// 列表页的 Tab 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Today,
    Pending,
    Overdue,
}

impl Tab {
    /// 全部 Tab，按显示顺序
    pub fn all() -> [Tab; 3] {
        [Tab::Today, Tab::Pending, Tab::Overdue]
    }

    /// 切换到下一个 Tab（循环）
    pub fn next(&self) -> Self {
        match self {
            Tab::Today => Tab::Pending,
            Tab::Pending => Tab::Overdue,
            Tab::Overdue => Tab::Today,
        }
    }

    /// Tab 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Today => "Today",
            Tab::Pending => "Pending",
            Tab::Overdue => "Overdue",
        }
    }

    /// 转换为数组索引
    pub fn index(&self) -> usize {
        match self {
            Tab::Today => 0,
            Tab::Pending => 1,
            Tab::Overdue => 2,
        }
    }

    /// 判断日期是否落入本 Tab
    ///
    /// Pending 的谓词是 `date >= today`，包含今天，即 Pending 是 Today 的
    /// 超集。三个 Tab 并非两两互斥，这是既定产品行为。
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Tab::Today => date == today,
            Tab::Pending => date >= today,
            Tab::Overdue => date < today,
        }
    }
}

/// 三个 Tab 的任务计数
///
/// 始终基于全部未完成任务计算，与当前选中的 Tab 无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabCounts {
    pub today: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl TabCounts {
    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Today => self.today,
            Tab::Pending => self.pending,
            Tab::Overdue => self.overdue,
        }
    }
}

/// 一次视图计算的完整输出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskView {
    /// 当前 Tab 下的未完成任务，按日期升序
    pub active: Vec<Task>,
    /// 已完成任务，同样按日期升序
    pub completed: Vec<Task>,
    /// 三个 Tab 的计数
    pub counts: TabCounts,
}

/// 由任务快照计算当前视图
///
/// 纯函数：相同输入产生相同输出。日期比较只看日历日期，不涉及时间戳。
/// 排序是稳定的，同日期任务保持快照中的相对顺序（即存储插入顺序）。
pub fn build_view(tasks: &[Task], today: NaiveDate, active_tab: Tab) -> TaskView {
    let mut sorted: Vec<Task> = tasks.to_vec();
    sorted.sort_by_key(|t| t.date);

    let (incomplete, completed): (Vec<Task>, Vec<Task>) =
        sorted.into_iter().partition(|t| !t.completed);

    let counts = TabCounts {
        today: count_matching(&incomplete, Tab::Today, today),
        pending: count_matching(&incomplete, Tab::Pending, today),
        overdue: count_matching(&incomplete, Tab::Overdue, today),
    };

    let active = incomplete
        .into_iter()
        .filter(|t| active_tab.matches(t.date, today))
        .collect();

    TaskView {
        active,
        completed,
        counts,
    }
}

fn count_matching(tasks: &[Task], tab: Tab, today: NaiveDate) -> usize {
    tasks.iter().filter(|t| tab.matches(t.date, today)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(id: i64, d: &str, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            date: date(d),
            priority: Priority::Medium,
            completed,
        }
    }

    #[test]
    fn test_tab_cycle_and_index() {
        assert_eq!(Tab::Today.next(), Tab::Pending);
        assert_eq!(Tab::Pending.next(), Tab::Overdue);
        assert_eq!(Tab::Overdue.next(), Tab::Today);
        assert_eq!(Tab::Today.index(), 0);
        assert_eq!(Tab::Overdue.index(), 2);
        assert_eq!(Tab::Pending.label(), "Pending");
    }

    #[test]
    fn test_empty_list() {
        let view = build_view(&[], date("2024-01-10"), Tab::Today);
        assert!(view.active.is_empty());
        assert!(view.completed.is_empty());
        assert_eq!(view.counts, TabCounts::default());
    }

    #[test]
    fn test_task_due_today() {
        // 只有一个今天到期的任务：today 和 pending 都计 1
        let tasks = vec![task(1, "2024-01-10", false)];
        let view = build_view(&tasks, date("2024-01-10"), Tab::Today);
        assert_eq!(view.counts.today, 1);
        assert_eq!(view.counts.pending, 1);
        assert_eq!(view.counts.overdue, 0);
        assert_eq!(view.active.len(), 1);
    }

    #[test]
    fn test_task_overdue() {
        // 只有一个过期任务：overdue 计 1，pending 不含过期任务
        let tasks = vec![task(1, "2024-01-05", false)];
        let view = build_view(&tasks, date("2024-01-10"), Tab::Overdue);
        assert_eq!(view.counts.overdue, 1);
        assert_eq!(view.counts.today, 0);
        assert_eq!(view.counts.pending, 0);
        assert_eq!(view.active.len(), 1);
    }

    #[test]
    fn test_pending_is_superset_of_today() {
        // 今天到期的任务同时出现在 Today 和 Pending 两个列表里
        let tasks = vec![
            task(1, "2024-01-10", false),
            task(2, "2024-01-12", false),
            task(3, "2024-01-08", false),
        ];
        let today = date("2024-01-10");

        let today_view = build_view(&tasks, today, Tab::Today);
        let pending_view = build_view(&tasks, today, Tab::Pending);

        assert_eq!(today_view.active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(
            pending_view.active.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        for t in &today_view.active {
            assert!(pending_view.active.contains(t));
        }
        assert!(pending_view.counts.pending >= pending_view.counts.today);
    }

    #[test]
    fn test_counts_partition_incomplete_tasks() {
        // 每个未完成任务恰好落入 {today, 严格未来, overdue} 之一，
        // 因此 today + 严格未来 == pending 计数，today/overdue 互斥
        let tasks = vec![
            task(1, "2024-01-01", false),
            task(2, "2024-01-10", false),
            task(3, "2024-01-10", false),
            task(4, "2024-01-15", false),
            task(5, "2024-01-20", false),
            task(6, "2024-01-03", true),
        ];
        let today = date("2024-01-10");
        let view = build_view(&tasks, today, Tab::Today);

        let strictly_future = tasks
            .iter()
            .filter(|t| !t.completed && t.date > today)
            .count();
        assert_eq!(view.counts.today + strictly_future, view.counts.pending);
        assert_eq!(view.counts.today, 2);
        assert_eq!(view.counts.overdue, 1);
        assert_eq!(view.counts.pending, 4);

        for t in tasks.iter().filter(|t| !t.completed) {
            let buckets = [
                Tab::Today.matches(t.date, today),
                t.date > today,
                Tab::Overdue.matches(t.date, today),
            ];
            assert_eq!(buckets.iter().filter(|b| **b).count(), 1);
            assert!(!(Tab::Today.matches(t.date, today) && Tab::Overdue.matches(t.date, today)));
        }
    }

    #[test]
    fn test_completed_excluded_everywhere() {
        let tasks = vec![
            task(1, "2024-01-10", true),
            task(2, "2024-01-05", true),
            task(3, "2024-01-12", false),
        ];
        let today = date("2024-01-10");
        for tab in Tab::all() {
            let view = build_view(&tasks, today, tab);
            assert!(view.active.iter().all(|t| !t.completed));
            assert_eq!(view.completed.len(), 2);
        }
        let view = build_view(&tasks, today, Tab::Today);
        assert_eq!(view.counts.today, 0);
        assert_eq!(view.counts.overdue, 0);
        assert_eq!(view.counts.pending, 1);
    }

    #[test]
    fn test_sorted_by_date_stable_on_ties() {
        // 同日期任务保持插入顺序（id 2 在 id 4 前）
        let tasks = vec![
            task(2, "2024-01-12", false),
            task(3, "2024-01-08", false),
            task(4, "2024-01-12", false),
            task(5, "2024-01-10", false),
        ];
        let view = build_view(&tasks, date("2024-01-01"), Tab::Pending);
        let ids: Vec<i64> = view.active.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5, 2, 4]);
    }

    #[test]
    fn test_completed_list_sorted_by_date() {
        let tasks = vec![
            task(1, "2024-01-12", true),
            task(2, "2024-01-03", true),
            task(3, "2024-01-08", false),
        ];
        let view = build_view(&tasks, date("2024-01-10"), Tab::Today);
        let ids: Vec<i64> = view.completed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let tasks = vec![
            task(1, "2024-01-01", false),
            task(2, "2024-01-10", true),
            task(3, "2024-01-15", false),
        ];
        let today = date("2024-01-10");
        let first = build_view(&tasks, today, Tab::Overdue);
        let second = build_view(&tasks, today, Tab::Overdue);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_complete_moves_between_lists() {
        // 完成一个任务后重算：离开 activeList，进入 completedList，计数减一
        let mut tasks = vec![task(1, "2024-01-10", false), task(2, "2024-01-10", false)];
        let today = date("2024-01-10");

        let before = build_view(&tasks, today, Tab::Today);
        assert_eq!(before.counts.today, 2);
        assert_eq!(before.completed.len(), 0);

        tasks[0].completed = true;
        let after = build_view(&tasks, today, Tab::Today);
        assert_eq!(after.counts.today, 1);
        assert_eq!(after.active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(after.completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_date_edit_crosses_tab_boundary() {
        // 编辑日期后没有增量状态可言，重算即生效
        let mut tasks = vec![task(1, "2024-01-12", false)];
        let today = date("2024-01-10");
        assert_eq!(build_view(&tasks, today, Tab::Overdue).active.len(), 0);

        tasks[0].date = date("2024-01-02");
        let view = build_view(&tasks, today, Tab::Overdue);
        assert_eq!(view.active.len(), 1);
        assert_eq!(view.counts.overdue, 1);
        assert_eq!(view.counts.pending, 0);
    }
}
