use serde::{Deserialize, Serialize};

/// 单个任务
///
/// `completed` 是创建后唯一会被修改的字段；`id` 在集合的整个生命周期内唯一且不变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（单调递增，跨会话唯一）
    pub id: u64,
    /// 标题（校验后非空白）
    pub title: String,
    /// 描述（可为空）
    pub description: String,
    /// 完成状态
    pub completed: bool,
}

impl Task {
    /// 返回状态对应的图标
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

/// 列表视图的过滤模式（进程内 UI 状态，不持久化）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    /// 过滤模式显示名称
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Pending => "Pending",
        }
    }

    /// 所有过滤模式（Tab 栏顺序）
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Completed, FilterMode::Pending]
    }

    /// 切换到下一个过滤模式（循环）
    pub fn next(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Completed => FilterMode::Pending,
            FilterMode::Pending => FilterMode::All,
        }
    }

    /// 从名称创建过滤模式（用于 CLI 参数，大小写不敏感）
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "completed" | "done" => FilterMode::Completed,
            "pending" | "open" => FilterMode::Pending,
            _ => FilterMode::All, // 默认 All
        }
    }

    /// 判断任务是否属于当前视图
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        }
    }
}
