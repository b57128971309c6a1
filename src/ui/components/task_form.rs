//! 任务表单弹窗组件（新建 / 编辑共用）

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Priority, Task};
use crate::theme::ThemeColors;

use super::dialog_utils;

/// 表单模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormMode {
    /// 新建任务
    Add,
    /// 编辑已有任务
    Edit { id: i64 },
}

/// 当前聚焦的输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Priority,
}

/// 任务表单状态
#[derive(Debug, Clone)]
pub struct TaskFormData {
    pub mode: TaskFormMode,
    /// 标题输入缓冲
    pub title: String,
    /// 日期输入缓冲（YYYY-MM-DD）
    pub date: String,
    /// 优先级（仅新建时可选，编辑不改优先级）
    pub priority: Priority,
    /// 当前聚焦字段
    pub focus: FormField,
    /// 校验错误信息
    pub error: Option<String>,
}

impl TaskFormData {
    /// 新建表单，日期预填今天
    pub fn add(today: NaiveDate) -> Self {
        Self {
            mode: TaskFormMode::Add,
            title: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            priority: Priority::default(),
            focus: FormField::Title,
            error: None,
        }
    }

    /// 编辑表单，预填任务当前内容
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: TaskFormMode::Edit { id: task.id },
            title: task.title.clone(),
            date: task.date.format("%Y-%m-%d").to_string(),
            priority: task.priority,
            focus: FormField::Title,
            error: None,
        }
    }

    /// 是否包含优先级字段（仅新建）
    pub fn has_priority_field(&self) -> bool {
        matches!(self.mode, TaskFormMode::Add)
    }

    /// 输入字符（按聚焦字段路由）
    pub fn input_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Date => {
                // 日期只接受数字和连字符
                if (c.is_ascii_digit() || c == '-') && self.date.len() < 10 {
                    self.date.push(c);
                }
            }
            FormField::Priority => {}
        }
    }

    /// 删除字符
    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
            FormField::Priority => {}
        }
    }

    /// 聚焦下一个字段
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Date,
            FormField::Date => {
                if self.has_priority_field() {
                    FormField::Priority
                } else {
                    FormField::Title
                }
            }
            FormField::Priority => FormField::Title,
        };
    }

    /// 聚焦上一个字段
    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => {
                if self.has_priority_field() {
                    FormField::Priority
                } else {
                    FormField::Date
                }
            }
            FormField::Date => FormField::Title,
            FormField::Priority => FormField::Date,
        };
    }

    /// 切换到下一个优先级
    pub fn priority_next(&mut self) {
        self.priority = self.priority.next();
    }

    /// 切换到上一个优先级
    pub fn priority_prev(&mut self) {
        self.priority = self.priority.previous();
    }

    /// 校验表单，返回 (标题, 日期)
    ///
    /// 新建任务不允许选择过去的日期，编辑任务保留原日期不受限。
    pub fn validate(&self, today: NaiveDate) -> Result<(String, NaiveDate), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;

        if matches!(self.mode, TaskFormMode::Add) && date < today {
            return Err("Date cannot be in the past".to_string());
        }

        Ok((title.to_string(), date))
    }
}

/// 渲染任务表单弹窗
pub fn render(frame: &mut Frame, form: &TaskFormData, colors: &ThemeColors) {
    let area = frame.area();

    let title = match form.mode {
        TaskFormMode::Add => " New Task ",
        TaskFormMode::Edit { .. } => " Edit Task ",
    };

    // 新建多一行优先级字段
    let popup_height = if form.has_priority_field() { 11 } else { 9 };
    let popup_width = 56u16.min(area.width.saturating_sub(4));
    let popup_area = dialog_utils::center_dialog(area, popup_width, popup_height);

    let inner = dialog_utils::render_dialog_frame(frame, popup_area, title, colors.highlight, colors);

    if form.has_priority_field() {
        let [_, title_area, _, date_area, _, priority_area, _, error_area, hint_area] =
            Layout::vertical([Constraint::Length(1); 9]).areas(inner);

        render_title_row(frame, title_area, form, colors);
        render_date_row(frame, date_area, form, colors);
        render_priority_row(frame, priority_area, form, colors);
        if let Some(ref message) = form.error {
            dialog_utils::render_error(frame, error_area, message, colors);
        }
        dialog_utils::render_hint(
            frame,
            hint_area,
            &[("Enter", "save"), ("Tab", "field"), ("Esc", "cancel")],
            colors,
        );
    } else {
        let [_, title_area, _, date_area, _, error_area, hint_area] =
            Layout::vertical([Constraint::Length(1); 7]).areas(inner);

        render_title_row(frame, title_area, form, colors);
        render_date_row(frame, date_area, form, colors);
        if let Some(ref message) = form.error {
            dialog_utils::render_error(frame, error_area, message, colors);
        }
        dialog_utils::render_hint(
            frame,
            hint_area,
            &[("Enter", "save"), ("Tab", "field"), ("Esc", "cancel")],
            colors,
        );
    }
}

fn render_title_row(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    form: &TaskFormData,
    colors: &ThemeColors,
) {
    let mut spans = vec![
        Span::styled("  Title: ", Style::default().fg(colors.muted)),
        Span::styled(form.title.as_str(), Style::default().fg(colors.text)),
    ];
    if form.focus == FormField::Title {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_date_row(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    form: &TaskFormData,
    colors: &ThemeColors,
) {
    let mut spans = vec![
        Span::styled("  Date:  ", Style::default().fg(colors.muted)),
        Span::styled(form.date.as_str(), Style::default().fg(colors.text)),
    ];
    if form.focus == FormField::Date {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    if form.date.is_empty() {
        spans.push(Span::styled(
            "YYYY-MM-DD",
            Style::default().fg(colors.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_priority_row(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    form: &TaskFormData,
    colors: &ThemeColors,
) {
    let label_style = if form.focus == FormField::Priority {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![Span::styled("  Priority: ", label_style)];

    for (i, p) in [Priority::Low, Priority::Medium, Priority::High]
        .iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let selected = *p == form.priority;
        let bullet = if selected { "●" } else { "○" };
        let color = match p {
            Priority::Low => colors.priority_low,
            Priority::Medium => colors.priority_medium,
            Priority::High => colors.priority_high,
        };
        let style = if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };

        spans.push(Span::styled(format!("{} {}", bullet, p.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
