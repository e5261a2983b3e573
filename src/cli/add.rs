//! add 子命令实现

use crate::model::TaskStore;

pub fn execute(store: &mut TaskStore, title: &str, description: &str) {
    match store.add_task(title, description) {
        Some(id) => println!("Added task {}", id),
        // 空白标题静默忽略，只在 stderr 提示
        None => eprintln!("Nothing added: title is blank"),
    }
}
