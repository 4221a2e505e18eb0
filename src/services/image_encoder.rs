//! 图片编码服务
//!
//! 把本地图片读成 `data:<mime>;base64,<data>` 形式的字符串

use crate::error::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use phf::phf_map;
use std::path::Path;
use tracing::debug;

/// 无法识别扩展名时使用的 MIME 类型
pub const FALLBACK_MIME: &str = "application/octet-stream";

static IMAGE_MIME_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "png" => "image/png",
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    "tif" => "image/tiff",
    "tiff" => "image/tiff",
    "svg" => "image/svg+xml",
    "heic" => "image/heic",
};

/// 根据扩展名判断 MIME 类型
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| IMAGE_MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_MIME)
}

/// 把原始字节编码为 data URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// 读取图片文件并编码为 data URL
pub async fn encode_image_file(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::file(path, e))?;

    let mime = mime_for_path(path);
    debug!(
        "图片已读取: {} ({} 字节, {})",
        path.display(),
        bytes.len(),
        mime
    );

    Ok(to_data_url(mime, &bytes))
}
