use crate::models::batch::BatchFile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载批量分析列表
pub async fn load_batch_file(toml_file_path: &Path) -> Result<BatchFile> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut batch: BatchFile = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    batch.file_path = Some(toml_file_path.to_path_buf());

    tracing::info!(
        "成功加载 {} 个待分析条目: {}",
        batch.items.len(),
        toml_file_path.display()
    );

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_batch_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
max_concurrent = 2

[[items]]
label = "first"
text = "Water boils at 100 degrees at sea level."

[[items]]
url = "https://example.com/story"
"#
        )
        .unwrap();

        let batch = load_batch_file(file.path()).await.unwrap();
        assert_eq!(batch.max_concurrent, Some(2));
        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.items[0].label.as_deref(), Some("first"));
        assert_eq!(batch.file_path.as_deref(), Some(file.path()));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = load_batch_file(Path::new("/nonexistent/batch.toml")).await;
        assert!(result.is_err());
    }
}
