//! 任务看板页面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, tabs, task_form, task_list, theme_selector, toast,
};

/// 渲染任务看板
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 背景填充
    let bg = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg, area);

    // 垂直布局
    let [header_area, tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT), // Logo + 信息行
        Constraint::Length(2),                     // Tab 栏
        Constraint::Fill(1),                       // 任务列表
        Constraint::Length(3),                     // 快捷键栏
    ])
    .areas(area);

    // 顶部：Logo + 今天日期 + 任务总数
    header::render(frame, header_area, app.today, app.tasks.len(), colors);

    // Tab 栏（带未完成计数）
    tabs::render(frame, tabs_area, app.current_tab, &app.view.counts, colors);

    // 任务列表 / 空状态（一个任务都没有时才整屏提示，
    // 否则由列表内的占位行提示当前 Tab 为空）
    if app.tasks.is_empty() {
        empty_state::render(frame, list_area, app.current_tab, colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.current_tab,
            &app.view.active,
            &app.view.completed,
            app.today,
            app.current_list_state().selected(),
            colors,
        );
    }

    // 底部快捷键提示
    footer::render(frame, footer_area, app.visible_len() > 0, colors);

    // Toast 提示
    if let Some(ref t) = app.toast {
        toast::render(frame, &t.message, colors);
    }

    // 弹窗（最后渲染，覆盖在最上层）
    if let Some(ref form) = app.task_form {
        task_form::render(frame, form, colors);
    }

    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }
}
