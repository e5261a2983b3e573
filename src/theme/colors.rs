//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),            // 深灰背景
        logo: Color::Rgb(0, 210, 190),         // 青绿色
        highlight: Color::Rgb(0, 210, 190),    // 青绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),      // 灰色
        border: Color::Rgb(68, 68, 68),        // 深灰边框
        status_done: Color::Rgb(0, 210, 130),  // 绿色
        status_pending: Color::Rgb(128, 128, 128),
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 210, 190),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),         // 浅灰背景
        logo: Color::Rgb(0, 130, 120),         // 深青色
        highlight: Color::Rgb(0, 130, 120),
        text: Color::Rgb(30, 30, 30),          // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        status_done: Color::Rgb(0, 140, 80),
        status_pending: Color::Rgb(140, 140, 140),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 130, 120),
    }
}
