pub mod empty_state;
pub mod footer;
pub mod header;
pub mod logo;
pub mod new_task_dialog;
pub mod tabs;
pub mod task_list;
pub mod toast;

/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very lo…");
        assert_eq!(truncate("exact", 5), "exact");
    }
}
