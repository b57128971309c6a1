use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::model::Tab;
use crate::ui::components::task_form::FormField;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 跨零点时刷新本地日期
    app.check_date_rollover();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 任务表单
    if app.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    handle_board_key(app, key);
}

/// 处理任务看板的键盘事件
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // Tab 切换
        KeyCode::Tab => {
            app.next_tab();
        }

        // 数字快捷键切换 Tab
        KeyCode::Char('1') => {
            app.set_tab(Tab::Today);
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Pending);
        }
        KeyCode::Char('3') => {
            app.set_tab(Tab::Overdue);
        }

        // 功能按键 - 新建任务
        KeyCode::Char('n') => {
            app.open_add_form();
        }

        // 功能按键 - 编辑选中任务
        KeyCode::Char('e') | KeyCode::Enter => {
            app.open_edit_form();
        }

        // 功能按键 - 切换完成状态
        KeyCode::Char(' ') => {
            app.toggle_complete();
        }

        // 功能按键 - 删除选中任务
        KeyCode::Char('x') => {
            app.delete_selected();
        }

        // 功能按键 - 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if app.refresh() {
                app.show_toast("Refreshed");
            }
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        _ => {}
    }
}

/// 处理任务表单弹窗的键盘事件
fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    // 提交和取消由 App 处理（提交会消费表单）
    match key.code {
        KeyCode::Enter => {
            app.submit_task_form();
            return;
        }
        KeyCode::Esc => {
            app.close_task_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.task_form.as_mut() else {
        return;
    };

    match key.code {
        // 切换字段
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
        }

        // 调整优先级（仅优先级字段聚焦时）
        KeyCode::Left if form.focus == FormField::Priority => {
            form.priority_prev();
        }
        KeyCode::Right if form.focus == FormField::Priority => {
            form.priority_next();
        }

        // 删除字符
        KeyCode::Backspace => {
            form.backspace();
        }

        // 输入字符
        KeyCode::Char(c) => {
            form.input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}
