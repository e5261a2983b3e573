//! "tasks" 槽位的读写
//!
//! 槽位值是任务对象的 JSON 数组，字段为 `id` / `title` / `description` /
//! `completed`，保持插入顺序。

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Task;

use super::{save_json, slot_path};

/// 槽位名
const TASKS_SLOT: &str = "tasks";

/// 获取 tasks.json 文件路径
fn tasks_file_path(root: &Path) -> PathBuf {
    slot_path(root, TASKS_SLOT)
}

/// 加载任务列表；槽位不存在时返回空列表
pub fn load_tasks(root: &Path) -> Result<Vec<Task>> {
    let path = tasks_file_path(root);

    if !path.exists() {
        return Ok(Vec::new());
    }

    super::load_json(&path)
}

/// 保存任务列表（整体覆盖槽位）
pub fn save_tasks(root: &Path, tasks: &[Task]) -> Result<()> {
    std::fs::create_dir_all(root)?;
    save_json(&tasks_file_path(root), &tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            completed,
        }
    }

    #[test]
    fn test_load_missing_slot_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = load_tasks(dir.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = vec![task(1, "Buy milk", false), task(2, "Call mom", true)];

        save_tasks(dir.path(), &tasks).unwrap();
        let loaded = load_tasks(dir.path()).unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("tick");

        save_tasks(&root, &[task(1, "Task", false)]).unwrap();
        assert_eq!(load_tasks(&root).unwrap().len(), 1);
    }

    #[test]
    fn test_load_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "not valid json").unwrap();

        // 恢复策略在 TaskStore::load，这里如实上报解析失败
        assert!(load_tasks(dir.path()).is_err());
    }

    #[test]
    fn test_slot_layout_matches_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = vec![Task {
            id: 1700000000000,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        }];

        save_tasks(dir.path(), &tasks).unwrap();
        let content = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();

        assert_eq!(
            content,
            r#"[{"id":1700000000000,"title":"Buy milk","description":"2%","completed":false}]"#
        );
    }
}
