use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::{Priority, Tab, Task};
use crate::theme::ThemeColors;

/// 渲染任务列表
///
/// 上半部分为当前 Tab 的未完成任务，下方跟随 "Completed (n)" 分区。
/// 未完成列表为空时显示占位提示行（已完成分区保持可见）。
/// `selected_index` 为逻辑索引：先遍历未完成任务，再遍历已完成任务，
/// 占位行和分区标题行不可选中。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_tab: Tab,
    active: &[Task],
    completed: &[Task],
    today: NaiveDate,
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 完成状态
        Cell::from("TASK"),
        Cell::from("DATE"),
        Cell::from("PRIORITY"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    let mut rows: Vec<Row> = Vec::with_capacity(active.len() + completed.len() + 2);

    // 未完成任务行
    for (i, task) in active.iter().enumerate() {
        let is_selected = selected_index == Some(i);
        rows.push(task_row(task, today, is_selected, colors));
    }

    if active.is_empty() {
        rows.push(placeholder_row(current_tab, colors));
    }

    // Completed 分区（为空时隐藏）
    if !completed.is_empty() {
        rows.push(section_row(completed.len(), colors));

        for (i, task) in completed.iter().enumerate() {
            let is_selected = selected_index == Some(active.len() + i);
            rows.push(task_row(task, today, is_selected, colors));
        }
    }

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(4),  // 完成状态
        Constraint::Fill(3),    // TASK (flex)
        Constraint::Length(12), // DATE
        Constraint::Length(10), // PRIORITY
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（逻辑索引换算为表格行索引，跳过占位行和分区标题行）
    let head_rows = if active.is_empty() { 1 } else { active.len() };
    let mut table_state = TableState::default();
    table_state.select(selected_index.map(|i| {
        if i < active.len() {
            i
        } else {
            head_rows + 1 + (i - active.len())
        }
    }));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// 单个任务行
fn task_row<'a>(
    task: &'a Task,
    today: NaiveDate,
    is_selected: bool,
    colors: &ThemeColors,
) -> Row<'a> {
    let selector = if is_selected { "❯" } else { " " };

    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let checkbox_style = if task.completed {
        Style::default().fg(colors.done)
    } else {
        Style::default().fg(colors.muted)
    };

    // 标题：已完成任务显示删除线
    let title_style = if task.completed {
        Style::default()
            .fg(colors.done)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_selected {
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };

    // 日期：到期当天显示 "Today"，逾期未完成标红
    let date_style = if task.completed {
        Style::default().fg(colors.done)
    } else if task.date < today {
        Style::default().fg(colors.overdue)
    } else {
        Style::default().fg(colors.muted)
    };

    let priority_style = if task.completed {
        Style::default().fg(colors.done)
    } else {
        Style::default().fg(priority_color(task.priority, colors))
    };

    Row::new(vec![
        Cell::from(selector).style(Style::default().fg(colors.highlight)),
        Cell::from(checkbox).style(checkbox_style),
        Cell::from(task.title.as_str()).style(title_style),
        Cell::from(date_label(task.date, today)).style(date_style),
        Cell::from(format!("● {}", task.priority.label())).style(priority_style),
    ])
}

/// 未完成列表为空时的占位提示行
fn placeholder_row<'a>(current_tab: Tab, colors: &ThemeColors) -> Row<'a> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(""),
        Cell::from(format!("No tasks found for {}", current_tab.label()))
            .style(Style::default().fg(colors.muted)),
        Cell::from(""),
        Cell::from(""),
    ])
}

/// "Completed (n)" 分区标题行
fn section_row<'a>(count: usize, colors: &ThemeColors) -> Row<'a> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(""),
        Cell::from(format!("Completed ({})", count))
            .style(Style::default().fg(colors.muted).add_modifier(Modifier::BOLD)),
        Cell::from(""),
        Cell::from(""),
    ])
}

/// 日期显示：到期当天显示 "Today"，其余显示 ISO 日期
fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

fn priority_color(priority: Priority, colors: &ThemeColors) -> ratatui::style::Color {
    match priority {
        Priority::High => colors.priority_high,
        Priority::Medium => colors.priority_medium,
        Priority::Low => colors.priority_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(), today),
            "2024-01-12"
        );
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), today),
            "2024-01-05"
        );
    }
}
