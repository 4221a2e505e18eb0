//! 请求体构建服务
//!
//! 根据显式传入的输入模式，从表单输入中取出对应字段并校验

use crate::error::{AppResult, ValidationError};
use crate::models::{InputMode, InputPayload, RawInput};
use crate::services::image_encoder::encode_image_file;
use tracing::debug;

/// 构建请求体
///
/// # 参数
/// - `mode`: 当前输入模式
/// - `raw`: 表单输入，只读取 `mode` 对应的字段
///
/// # 返回
/// 校验通过的请求体；图片模式会先完成编码
///
/// # 错误
/// - 当前模式的字段为空（或只有空白）时返回 `ValidationError`
/// - 图片文件无法读取时返回 `AppError::File`
pub async fn build_payload(mode: InputMode, raw: &RawInput) -> AppResult<InputPayload> {
    let payload = match mode {
        InputMode::Text => {
            if raw.text.trim().is_empty() {
                return Err(ValidationError::EmptyText.into());
            }
            InputPayload::Text(raw.text.clone())
        }
        InputMode::Url => {
            let url = raw.url.trim();
            if url.is_empty() {
                return Err(ValidationError::EmptyUrl.into());
            }
            InputPayload::Url(url.to_string())
        }
        InputMode::Image => {
            let path = raw.image.as_deref().ok_or(ValidationError::NoImage)?;
            InputPayload::Image(encode_image_file(path).await?)
        }
    };

    debug!("请求体已构建: {}", payload.describe());
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let err = assert_err!(build_payload(InputMode::Text, &RawInput::default()).await);
        assert!(matches!(err, AppError::Validation(ValidationError::EmptyText)));

        let raw = RawInput::single(InputMode::Text, "   \n");
        let err = assert_err!(build_payload(InputMode::Text, &raw).await);
        assert!(matches!(err, AppError::Validation(ValidationError::EmptyText)));
    }

    #[tokio::test]
    async fn test_only_active_field_is_used() {
        let raw = RawInput {
            text: "some text".to_string(),
            url: String::new(),
            image: None,
        };
        let err = assert_err!(build_payload(InputMode::Url, &raw).await);
        assert!(matches!(err, AppError::Validation(ValidationError::EmptyUrl)));

        let payload = assert_ok!(build_payload(InputMode::Text, &raw).await);
        assert_eq!(payload, InputPayload::Text("some text".to_string()));
    }

    #[tokio::test]
    async fn test_url_is_trimmed() {
        let raw = RawInput::single(InputMode::Url, "  https://example.com/a  ");
        let payload = assert_ok!(build_payload(InputMode::Url, &raw).await);
        assert_eq!(payload, InputPayload::Url("https://example.com/a".to_string()));
    }

    #[tokio::test]
    async fn test_image_without_file_is_rejected() {
        let err = assert_err!(build_payload(InputMode::Image, &RawInput::default()).await);
        assert!(matches!(err, AppError::Validation(ValidationError::NoImage)));
    }

    #[tokio::test]
    async fn test_image_is_encoded_before_return() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"jpeg-bytes").unwrap();

        let raw = RawInput::single(InputMode::Image, file.path().to_string_lossy());
        let payload = assert_ok!(build_payload(InputMode::Image, &raw).await);
        match payload {
            InputPayload::Image(data) => assert!(data.starts_with("data:image/jpeg;base64,")),
            other => panic!("unexpected payload: {:?}", other),
        }
    }
}
