use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{empty_state, footer, header, new_task_dialog, tabs, task_list, toast};

/// 渲染任务页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, tabs_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header
    let slot_path = app
        .store
        .root()
        .map(|root| root.join("tasks.json").to_string_lossy().to_string());
    header::render(
        frame,
        header_area,
        slot_path.as_deref(),
        app.store.len(),
        app.store.completed_count(),
        colors,
    );

    // 渲染 Tabs
    tabs::render(frame, tabs_area, app.filter, colors);

    // 渲染列表或空状态（使用过滤后的数据）
    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        empty_state::render(frame, list_area, app.filter, colors);
    } else {
        let selected = app.list_state.selected();
        task_list::render(frame, list_area, &tasks, selected, colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !tasks.is_empty(), colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 渲染 New Task 弹窗（如果打开）
    if let Some(ref dialog) = app.new_task_dialog {
        new_task_dialog::render(frame, dialog, colors);
    }
}
