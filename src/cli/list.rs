//! list 子命令实现

use crate::model::{FilterMode, TaskStore};

pub fn execute(store: &TaskStore, filter: &str) {
    let mode = FilterMode::from_name(filter);

    for task in store.apply_filter(mode) {
        let mark = if task.completed { "x" } else { " " };
        if task.description.is_empty() {
            println!("{:>6}  [{}] {}", task.id, mark, task.title);
        } else {
            println!("{:>6}  [{}] {}  ({})", task.id, mark, task.title, task.description);
        }
    }
}
