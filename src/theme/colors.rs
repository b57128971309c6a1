//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        priority_high: Color::Rgb(231, 76, 60),    // 红色
        priority_medium: Color::Rgb(243, 156, 18), // 橙色
        priority_low: Color::Rgb(46, 204, 113),    // 绿色
        overdue: Color::Rgb(231, 76, 60), // 逾期红
        done: Color::Rgb(100, 100, 100),  // 已完成灰
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 255, 136),
        error: Color::Rgb(255, 85, 85), // 红色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 128, 68),            // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        priority_high: Color::Rgb(231, 76, 60),
        priority_medium: Color::Rgb(243, 156, 18),
        priority_low: Color::Rgb(46, 204, 113),
        overdue: Color::Rgb(200, 50, 50),
        done: Color::Rgb(160, 160, 160),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 128, 68),
        error: Color::Rgb(200, 50, 50),
    }
}
