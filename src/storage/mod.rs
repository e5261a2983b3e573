//! 键值槽位存储
//!
//! 每个槽位对应数据目录下的一个 JSON 文件（槽位名 + `.json`），
//! 整体读、整体覆盖写，无并发写者。

pub mod tasks;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// 默认数据目录：~/.tick/
///
/// 返回 None 表示运行环境没有可用的主目录，调用方应退化为内存模式。
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tick"))
}

/// 槽位名对应的文件路径
pub fn slot_path(root: &Path, slot: &str) -> PathBuf {
    root.join(format!("{}.json", slot))
}

/// 从 JSON 槽位文件加载反序列化数据
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 将数据序列化后覆盖写入 JSON 槽位文件
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
