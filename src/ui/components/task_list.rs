use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

use super::truncate;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 状态图标
        Cell::from("ID"),
        Cell::from("TITLE"),
        Cell::from("DESCRIPTION"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            // 状态图标样式
            let icon_style = if task.completed {
                Style::default().fg(colors.status_done)
            } else {
                Style::default().fg(colors.status_pending)
            };

            // 已完成任务：划掉 + 置灰（未完成正常显示）
            let mut title_style = Style::default().fg(colors.text);
            if task.completed {
                title_style = Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            if is_selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(task.icon()).style(icon_style),
                Cell::from(task.id.to_string()).style(Style::default().fg(colors.muted)),
                Cell::from(truncate(&task.title, 40)).style(title_style),
                Cell::from(truncate(&task.description, 60))
                    .style(Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(2),  // 状态图标
        Constraint::Length(6),  // ID
        Constraint::Fill(2),    // TITLE (flex)
        Constraint::Fill(3),    // DESCRIPTION (flex)
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(colors.border)),
    );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
