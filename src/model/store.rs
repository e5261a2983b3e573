use std::path::{Path, PathBuf};

use crate::model::{FilterMode, Task};
use crate::storage;

/// 任务集合的唯一持有者
///
/// 在 `main` 中构造后以引用传给表现层（TUI / CLI），集合只通过
/// `add_task` 和 `toggle_completion` 变更，每次变更后同步写回存储槽位。
pub struct TaskStore {
    /// 任务列表（插入序，只追加）
    tasks: Vec<Task>,
    /// 下一个任务 ID（加载时从已有最大 ID + 1 播种）
    next_id: u64,
    /// 数据目录；None 表示无持久化存储，状态只存活于进程内
    root: Option<PathBuf>,
}

impl TaskStore {
    /// 从数据目录加载任务集合
    ///
    /// 槽位不存在或内容损坏时退化为空集合（不向调用方抛错），
    /// 随后立即写回一次，把缺失/损坏的数据规范化为合法状态。
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let tasks = storage::tasks::load_tasks(&root).unwrap_or_default();
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);

        let store = Self {
            tasks,
            next_id,
            root: Some(root),
        };
        store.persist();
        store
    }

    /// 纯内存模式（运行环境没有可用的数据目录时的退化路径）
    pub fn in_memory() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            root: None,
        }
    }

    /// 完整任务列表（插入序）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成任务数量（Header 统计用）
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// 数据目录（None 表示内存模式）
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// 添加任务，返回新任务的 ID
    ///
    /// 唯一的校验规则：标题去除首尾空白后为空时不添加（返回 None，不写存储）。
    /// 标题和描述按原样保存。
    pub fn add_task(&mut self, title: &str, description: &str) -> Option<u64> {
        if title.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        });
        self.persist();

        Some(id)
    }

    /// 翻转指定任务的完成状态，返回是否有任务被更新
    ///
    /// ID 不存在时静默忽略（集合不变，不写存储）。
    pub fn toggle_completion(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// 计算当前过滤模式下的视图子集（纯投影，保持原顺序，不修改集合）
    pub fn apply_filter(&self, mode: FilterMode) -> Vec<&Task> {
        self.tasks.iter().filter(|t| mode.matches(t)).collect()
    }

    /// 重新从磁盘读取（外部进程可能写入了同一槽位）
    pub fn reload(&mut self) {
        let Some(root) = &self.root else { return };
        self.tasks = storage::tasks::load_tasks(root).unwrap_or_default();
        self.next_id = self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
    }

    /// 整体写回存储槽位
    ///
    /// 写入失败只降级为 stderr 警告，内存状态保持不变，不向调用方抛错。
    fn persist(&self) {
        let Some(root) = &self.root else { return };
        if let Err(e) = storage::tasks::save_tasks(root, &self.tasks) {
            eprintln!("Warning: failed to save tasks: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_assigns_distinct_ids() {
        let mut store = TaskStore::in_memory();

        let a = store.add_task("Task 1", "").unwrap();
        let b = store.add_task("Task 2", "details").unwrap();
        let c = store.add_task("Task 3", "").unwrap();

        assert_eq!(store.len(), 3);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut store = TaskStore::in_memory();

        assert_eq!(store.add_task("", "x"), None);
        assert_eq!(store.add_task("   ", "x"), None);
        assert_eq!(store.add_task("\t\n", "x"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_task_keeps_title_verbatim() {
        let mut store = TaskStore::in_memory();

        let id = store.add_task("  Buy milk ", "2%").unwrap();
        let task = store.tasks().iter().find(|t| t.id == id).unwrap();

        // 只校验时去空白，保存原样输入
        assert_eq!(task.title, "  Buy milk ");
        assert_eq!(task.description, "2%");
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_completion_is_involution() {
        let mut store = TaskStore::in_memory();
        let id = store.add_task("Task", "").unwrap();

        assert!(store.toggle_completion(id));
        assert!(store.tasks()[0].completed);

        assert!(store.toggle_completion(id));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TaskStore::in_memory();
        store.add_task("Task", "");
        let before = store.tasks().to_vec();

        assert!(!store.toggle_completion(9999));
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_apply_filter_all_preserves_order_and_contents() {
        let mut store = TaskStore::in_memory();
        let a = store.add_task("A", "").unwrap();
        let b = store.add_task("B", "").unwrap();
        let c = store.add_task("C", "").unwrap();
        store.toggle_completion(b);

        let all: Vec<u64> = store.apply_filter(FilterMode::All).iter().map(|t| t.id).collect();
        assert_eq!(all, vec![a, b, c]);
    }

    #[test]
    fn test_apply_filter_partitions_collection() {
        let mut store = TaskStore::in_memory();
        for i in 0..6 {
            let id = store.add_task(&format!("Task {}", i), "").unwrap();
            if i % 2 == 0 {
                store.toggle_completion(id);
            }
        }

        let completed = store.apply_filter(FilterMode::Completed);
        let pending = store.apply_filter(FilterMode::Pending);

        assert!(completed.iter().all(|t| t.completed));
        assert!(pending.iter().all(|t| !t.completed));
        assert_eq!(completed.len() + pending.len(), store.len());

        // 两个子集不相交
        for task in &completed {
            assert!(!pending.iter().any(|p| p.id == task.id));
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let first_id = {
            let mut store = TaskStore::load(dir.path());
            store.add_task("Buy milk", "2%");
            let id = store.add_task("Call mom", "").unwrap();
            store.toggle_completion(id);
            store.tasks()[0].id
        };

        let store = TaskStore::load(dir.path());
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id, first_id);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert_eq!(store.tasks()[0].description, "2%");
        assert!(!store.tasks()[0].completed);
        assert!(store.tasks()[1].completed);
    }

    #[test]
    fn test_next_id_seeded_from_existing_tasks() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = TaskStore::load(dir.path());
            store.add_task("Task 1", "");
            store.add_task("Task 2", "");
        }

        let mut store = TaskStore::load(dir.path());
        let id = store.add_task("Task 3", "").unwrap();
        assert_eq!(id, 3, "ids must stay unique across sessions");
    }

    #[test]
    fn test_load_recovers_from_garbage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "not valid json").unwrap();

        let store = TaskStore::load(dir.path());
        assert!(store.is_empty());

        // 加载后应已把槽位规范化为合法的空集合
        let content = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = TaskStore::in_memory();

        let id = store.add_task("Buy milk", "2%").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert_eq!(store.tasks()[0].description, "2%");
        assert!(!store.tasks()[0].completed);

        store.toggle_completion(id);
        assert!(store.tasks()[0].completed);

        assert!(store.apply_filter(FilterMode::Pending).is_empty());
        let completed = store.apply_filter(FilterMode::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, id);
    }

    #[test]
    fn test_in_memory_store_never_touches_disk() {
        let mut store = TaskStore::in_memory();
        store.add_task("Task", "");
        store.reload(); // 内存模式下 reload 是 no-op

        assert_eq!(store.len(), 1);
        assert!(store.root().is_none());
    }
}
