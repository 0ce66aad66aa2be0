use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::application::ports::{DocumentExtractor, ExtractionError, ObjectStorage, StorageError};
use crate::application::services::IngestionError;
use crate::domain::ValidationError;
use crate::presentation::state::AppState;

use super::envelope::{body_field, failure, parse_body, success};

pub const FILE_ID_FIELD: &str = "fileID";

const MSG_MISSING_FILE_ID: &str = "缺少fileID参数";

/// `POST /api/pdf/parse` with `{"fileID": "cloud://env.bucket/path.pdf"}`.
#[tracing::instrument(skip(state, body), fields(body_bytes = body.len()))]
pub async fn pdf_parse_handler<S, E>(State(state): State<AppState<S, E>>, body: Bytes) -> Response
where
    S: ObjectStorage + ?Sized + 'static,
    E: DocumentExtractor + ?Sized + 'static,
{
    let body = parse_body(&body);

    let file_id = match body_field(&body, FILE_ID_FIELD) {
        None => {
            tracing::warn!("PDF parse request without fileID");
            return failure(MSG_MISSING_FILE_ID);
        }
        Some(value) => match value.as_str() {
            Some(s) => s.to_owned(),
            None => {
                tracing::warn!("PDF parse request with non-string fileID");
                return failure(validation_message(ValidationError::MalformedReference));
            }
        },
    };

    match state.ingestion_service.parse(&file_id).await {
        Ok(document) => success(document),
        Err(e) => {
            tracing::warn!(stage = %e.stage(), error = %e, "PDF parse failed");
            failure(error_message(&e))
        }
    }
}

pub fn error_message(error: &IngestionError) -> &'static str {
    match error {
        IngestionError::Validation(e) => validation_message(*e),
        IngestionError::Storage(e) => storage_message(e),
        IngestionError::Extraction(e) => extraction_message(e),
    }
}

fn extraction_message(error: &ExtractionError) -> &'static str {
    match error {
        ExtractionError::Corrupt(_) => "PDF解析失败: 文件已损坏或不是有效的PDF",
        ExtractionError::Io(_) => "PDF解析失败: 服务器临时文件错误",
    }
}

fn validation_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::MissingScheme => "fileID格式错误，应以cloud://开头",
        ValidationError::MalformedReference => "fileID格式错误",
        ValidationError::UnsupportedFileType => "文件类型错误，不是PDF文件",
    }
}

fn storage_message(error: &StorageError) -> &'static str {
    match error {
        StorageError::MissingCredentials => "缺少腾讯云密钥配置",
        StorageError::NotFound(_) => "PDF解析失败: 文件不存在",
        StorageError::AccessDenied(_) => "PDF解析失败: 无权访问该文件",
        StorageError::Transient(_) => "PDF解析失败: 存储服务暂时不可用",
    }
}
