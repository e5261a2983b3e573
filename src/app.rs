use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::{FilterMode, Task, TaskStore};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

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

/// New Task 弹窗的输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Title,
    Description,
}

impl DialogField {
    /// 切换到另一个输入框
    pub fn next(&self) -> Self {
        match self {
            DialogField::Title => DialogField::Description,
            DialogField::Description => DialogField::Title,
        }
    }
}

/// New Task 弹窗状态
#[derive(Debug, Default)]
pub struct NewTaskDialog {
    pub title: String,
    pub description: String,
    pub field: DialogField,
}

impl NewTaskDialog {
    /// 当前焦点输入框（可变）
    fn active_input_mut(&mut self) -> &mut String {
        match self.field {
            DialogField::Title => &mut self.title,
            DialogField::Description => &mut self.description,
        }
    }

    /// 输入字符
    pub fn input_char(&mut self, c: char) {
        self.active_input_mut().push(c);
    }

    /// 删除字符
    pub fn delete_char(&mut self) {
        self.active_input_mut().pop();
    }

    /// 切换输入焦点
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务仓库（唯一数据源）
    pub store: TaskStore,
    /// 当前过滤模式
    pub filter: FilterMode,
    /// 列表选择状态（基于过滤后的视图索引）
    pub list_state: ListState,
    /// New Task 弹窗（None 表示未打开）
    pub new_task_dialog: Option<NewTaskDialog>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let theme = Theme::Auto;
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            store,
            filter: FilterMode::All,
            list_state,
            new_task_dialog: None,
            toast: None,
            theme,
            colors,
            last_system_dark,
        }
    }

    /// 当前过滤模式下可见的任务
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.apply_filter(self.filter)
    }

    /// 当前选中任务的 ID
    pub fn selected_task_id(&self) -> Option<u64> {
        let index = self.list_state.selected()?;
        self.visible_tasks().get(index).map(|t| t.id)
    }

    /// 确保选中项在可见范围内（视图收缩后收拢到末尾）
    pub fn ensure_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(index) if index < len => {}
            _ => self.list_state.select(Some(len - 1)),
        }
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 切换到下一个过滤模式
    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        // 视图变了，选中项从头开始
        self.list_state.select(None);
        self.ensure_selection();
    }

    // ========== New Task Dialog ==========

    /// 打开 New Task 弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.new_task_dialog = Some(NewTaskDialog::default());
    }

    /// 关闭 New Task 弹窗（丢弃输入）
    pub fn close_new_task_dialog(&mut self) {
        self.new_task_dialog = None;
    }

    /// 提交 New Task 弹窗
    ///
    /// 标题为空白时弹窗保持打开并提示；成功后关闭弹窗。
    pub fn submit_new_task(&mut self) {
        let Some(dialog) = &self.new_task_dialog else {
            return;
        };

        if dialog.title.trim().is_empty() {
            self.show_toast("Task title cannot be empty");
            return;
        }

        let dialog = self.new_task_dialog.take().unwrap_or_default();
        if self.store.add_task(&dialog.title, &dialog.description).is_some() {
            self.show_toast(format!("Added: {}", dialog.title.trim()));
        }
        self.ensure_selection();
    }

    // ========== 任务操作 ==========

    /// 翻转当前选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.store.toggle_completion(id);
        // Completed/Pending 视图下任务会移出当前列表
        self.ensure_selection();
    }

    /// 重新从磁盘读取任务
    pub fn reload(&mut self) {
        self.store.reload();
        self.ensure_selection();
        self.show_toast("Reloaded");
    }

    // ========== 主题 / Toast ==========

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

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
