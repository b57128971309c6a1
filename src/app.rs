use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use ratatui::widgets::ListState;
use tracing::warn;

use crate::client::ApiClient;
use crate::model::{build_view, NewTask, Priority, Tab, Task, TaskList, TaskPatch, TaskView};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};
use crate::ui::components::task_form::{TaskFormData, TaskFormMode};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// REST 客户端
    pub client: ApiClient,
    /// 服务端任务快照
    pub tasks: TaskList,
    /// 当前视图（由 tasks + today + current_tab 派生）
    pub view: TaskView,
    /// 当前选中的 Tab
    pub current_tab: Tab,
    /// 列表选择状态（每个 Tab 独立维护）
    pub list_states: [ListState; 3], // Today, Pending, Overdue
    /// 本地日期（跨零点时更新，影响 Today/Overdue 判定）
    pub today: NaiveDate,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 新建 / 编辑任务弹窗
    pub task_form: Option<TaskFormData>,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        let theme = Theme::Auto;
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);
        let today = Local::now().date_naive();

        let mut app = Self {
            should_quit: false,
            client,
            tasks: TaskList::default(),
            view: TaskView::default(),
            current_tab: Tab::default(),
            list_states: [
                ListState::default(),
                ListState::default(),
                ListState::default(),
            ],
            today,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            task_form: None,
        };

        // 启动时拉取一次任务列表，失败则从空列表开始
        app.refresh();
        app
    }

    /// 从服务端拉取任务列表，失败时保留本地快照
    pub fn refresh(&mut self) -> bool {
        match self.client.list() {
            Ok(tasks) => {
                self.tasks = TaskList::new(tasks);
                self.rebuild_view();
                self.ensure_selection();
                true
            }
            Err(err) => {
                warn!("failed to fetch tasks: {err}");
                false
            }
        }
    }

    /// 重新计算当前视图
    pub fn rebuild_view(&mut self) {
        self.view = build_view(self.tasks.tasks(), self.today, self.current_tab);
    }

    /// 当前可选中的行数（未完成 + 已完成）
    pub fn visible_len(&self) -> usize {
        self.view.active.len() + self.view.completed.len()
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.current_list_state().selected()?;
        if index < self.view.active.len() {
            self.view.active.get(index)
        } else {
            self.view.completed.get(index - self.view.active.len())
        }
    }

    /// 获取当前 Tab 的列表状态（不可变）
    pub fn current_list_state(&self) -> &ListState {
        &self.list_states[self.current_tab.index()]
    }

    /// 获取当前 Tab 的列表状态（可变）
    pub fn current_list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_states[self.current_tab.index()]
    }

    /// 切换到下一个 Tab
    pub fn next_tab(&mut self) {
        self.set_tab(self.current_tab.next());
    }

    /// 切换到指定 Tab
    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.rebuild_view();
        self.ensure_selection();
    }

    /// 确保当前 Tab 的选中项在有效范围内
    pub fn ensure_selection(&mut self) {
        let len = self.visible_len();
        let state = self.current_list_state_mut();

        match state.selected() {
            None if len > 0 => state.select(Some(0)),
            Some(_) if len == 0 => state.select(None),
            Some(i) if i >= len => state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }

        let state = self.current_list_state_mut();
        let current = state.selected().unwrap_or(0);
        let next = (current + 1) % len;
        state.select(Some(next));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }

        let state = self.current_list_state_mut();
        let current = state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        state.select(Some(prev));
    }

    /// 跨零点时刷新本地日期
    pub fn check_date_rollover(&mut self) {
        let now = Local::now().date_naive();
        if now != self.today {
            self.today = now;
            self.rebuild_view();
            self.ensure_selection();
        }
    }

    // ========== Task Form ==========

    /// 打开新建任务弹窗
    pub fn open_add_form(&mut self) {
        self.task_form = Some(TaskFormData::add(self.today));
    }

    /// 打开编辑弹窗（编辑当前选中任务）
    pub fn open_edit_form(&mut self) {
        if let Some(task) = self.selected_task() {
            self.task_form = Some(TaskFormData::edit(task));
        }
    }

    /// 关闭任务弹窗
    pub fn close_task_form(&mut self) {
        self.task_form = None;
    }

    /// 提交任务表单，校验失败时在弹窗内提示
    pub fn submit_task_form(&mut self) {
        let Some(mut form) = self.task_form.take() else {
            return;
        };

        let (title, date) = match form.validate(self.today) {
            Ok(parts) => parts,
            Err(message) => {
                form.error = Some(message);
                self.task_form = Some(form);
                return;
            }
        };

        match form.mode {
            TaskFormMode::Add => self.create_task(title, date, form.priority),
            TaskFormMode::Edit { id } => self.update_task(id, title, date),
        }
    }

    /// 创建任务并跳转到对应 Tab（今天到期 -> Today，否则 -> Pending）
    fn create_task(&mut self, title: String, date: NaiveDate, priority: Priority) {
        let new_task = NewTask {
            title,
            date,
            priority,
        };

        match self.client.create(&new_task) {
            Ok(task) => {
                self.show_toast(format!("Created: {}", task.title));
                self.current_tab = if task.date == self.today {
                    Tab::Today
                } else {
                    Tab::Pending
                };
                self.tasks = self.tasks.with_added(task.clone());
                self.rebuild_view();
                self.select_task(task.id);
            }
            Err(err) => {
                warn!("failed to create task: {err}");
            }
        }
    }

    /// 保存编辑结果，只提交有变化的字段；没有变化则静默关闭
    fn update_task(&mut self, id: i64, title: String, date: NaiveDate) {
        let patch = match self.tasks.get(id) {
            Some(current) => TaskPatch {
                title: (title != current.title).then_some(title),
                date: (date != current.date).then_some(date),
                completed: None,
            },
            None => TaskPatch {
                title: Some(title),
                date: Some(date),
                completed: None,
            },
        };
        if patch.is_empty() {
            return;
        }

        match self.client.update(id, &patch) {
            Ok(task) => {
                self.show_toast(format!("Updated: {}", task.title));
                self.tasks = self.tasks.with_replaced(task);
                self.rebuild_view();
                self.select_task(id);
            }
            Err(err) => {
                warn!("failed to update task {id}: {err}");
            }
        }
    }

    /// 切换当前选中任务的完成状态（服务端确认后才应用到本地）
    pub fn toggle_complete(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        let completed = !task.completed;

        let patch = TaskPatch {
            title: None,
            date: None,
            completed: Some(completed),
        };

        match self.client.update(id, &patch) {
            Ok(task) => {
                let message = if task.completed {
                    format!("Done: {}", task.title)
                } else {
                    format!("Reopened: {}", task.title)
                };
                self.show_toast(message);
                self.tasks = self.tasks.with_replaced(task);
                self.rebuild_view();
                self.select_task(id);
            }
            Err(err) => {
                warn!("failed to toggle task {id}: {err}");
            }
        }
    }

    /// 删除当前选中任务（无确认弹窗，立即执行）
    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        let title = task.title.clone();

        match self.client.delete(id) {
            Ok(()) => {
                self.show_toast(format!("Deleted: {}", title));
                self.tasks = self.tasks.with_removed(id);
                self.rebuild_view();
                self.ensure_selection();
            }
            Err(err) => {
                warn!("failed to delete task {id}: {err}");
            }
        }
    }

    /// 选中指定任务所在行
    fn select_task(&mut self, id: i64) {
        let position = self
            .view
            .active
            .iter()
            .position(|t| t.id == id)
            .or_else(|| {
                self.view
                    .completed
                    .iter()
                    .position(|t| t.id == id)
                    .map(|i| self.view.active.len() + i)
            });

        if let Some(i) = position {
            self.current_list_state_mut().select(Some(i));
        } else {
            self.ensure_selection();
        }
    }

    // ========== Theme ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        // 找到当前主题在列表中的索引
        let themes = Theme::all();
        self.theme_selector_index = themes.iter().position(|t| *t == self.theme).unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        // 只在 Auto 模式下检查
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
