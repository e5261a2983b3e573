//! toggle 子命令实现

use crate::model::TaskStore;

pub fn execute(store: &mut TaskStore, id: u64) {
    if store.toggle_completion(id) {
        let completed = store
            .tasks()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .unwrap_or(false);
        let state = if completed { "done" } else { "pending" };
        println!("Task {} marked {}", id, state);
    } else {
        // 未知 ID 静默忽略，只在 stderr 提示
        eprintln!("No task with id {}", id);
    }
}
