//! tick 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// tick 错误类型
#[derive(Debug, Error)]
pub enum TickError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 解析/序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// tick Result 类型别名
pub type Result<T> = std::result::Result<T, TickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let tick_err: TickError = io_err.into();
        assert!(matches!(tick_err, TickError::Io(_)));
        assert!(tick_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("not valid json").unwrap_err();
        let tick_err: TickError = json_err.into();
        assert!(matches!(tick_err, TickError::Json(_)));
        assert!(tick_err.to_string().starts_with("JSON error"));
    }
}
