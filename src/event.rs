use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

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
    if app.new_task_dialog.is_some() {
        handle_new_task_dialog_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
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

        // Tab - 切换过滤模式
        KeyCode::Tab => {
            app.next_filter();
        }

        // 翻转选中任务的完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 功能按键 - 新建任务
        KeyCode::Char('n') => {
            app.open_new_task_dialog();
        }

        // 功能按键 - 切换主题
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.cycle_theme();
        }

        // 功能按键 - 重新加载
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reload();
        }

        _ => {}
    }
}

/// 处理 New Task 弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.new_task_dialog.as_mut() else {
        return;
    };

    match key.code {
        // 取消
        KeyCode::Esc => {
            app.close_new_task_dialog();
        }

        // 提交
        KeyCode::Enter => {
            app.submit_new_task();
        }

        // 切换输入框
        KeyCode::Tab => {
            dialog.next_field();
        }

        // 删除字符
        KeyCode::Backspace => {
            dialog.delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            dialog.input_char(c);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DialogField;
    use crate::model::TaskStore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            handle_key(app, key(*code));
        }
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new(TaskStore::in_memory());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_task_via_dialog_keys() {
        let mut app = App::new(TaskStore::in_memory());

        press(&mut app, &[KeyCode::Char('n')]);
        assert!(app.new_task_dialog.is_some());

        press(
            &mut app,
            &[
                KeyCode::Char('B'),
                KeyCode::Char('u'),
                KeyCode::Char('y'),
                KeyCode::Tab,
                KeyCode::Char('2'),
                KeyCode::Char('%'),
                KeyCode::Enter,
            ],
        );

        assert!(app.new_task_dialog.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].title, "Buy");
        assert_eq!(app.store.tasks()[0].description, "2%");
    }

    #[test]
    fn test_esc_discards_dialog_input() {
        let mut app = App::new(TaskStore::in_memory());

        press(
            &mut app,
            &[KeyCode::Char('n'), KeyCode::Char('x'), KeyCode::Esc],
        );

        assert!(app.new_task_dialog.is_none());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_tab_switches_dialog_field_not_filter() {
        let mut app = App::new(TaskStore::in_memory());

        press(&mut app, &[KeyCode::Char('n'), KeyCode::Tab]);

        assert_eq!(
            app.new_task_dialog.as_ref().unwrap().field,
            DialogField::Description
        );
        assert_eq!(app.filter, crate::model::FilterMode::All);
    }

    #[test]
    fn test_space_toggles_selected_task() {
        let mut store = TaskStore::in_memory();
        store.add_task("Task", "");
        let mut app = App::new(store);

        press(&mut app, &[KeyCode::Char(' ')]);
        assert!(app.store.tasks()[0].completed);
    }
}
