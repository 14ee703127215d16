//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`], [`FieldError`] and the wire-level [`ErrorEnvelope`]
//! (`{"errors":[{"msg":..}]}`) shared by every HTTP surface.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

/// 汎用 5xx ボディ
///
/// サーバーエラーは詳細を漏らさず、この固定文字列のみを返します。
pub const SERVER_ERROR_BODY: &str = "server error";

/// アプリケーション統一エラー型
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `details` - フィールド単位の検証エラー（空の場合は `message` のみを返す）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, FieldError};
///
/// let err = AppError::not_found("No github profile found");
///
/// let err = AppError::validation(vec![
///     FieldError::new("status", "Status is required"),
///     FieldError::new("skills", "Skills is required"),
/// ]);
/// assert_eq!(err.details().len(), 2);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    details: Vec<FieldError>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

/// フィールド単位のエラー
///
/// `param` は入力フィールド名。リクエスト全体に関わるエラーでは `None`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Cow<'static, str>>,
}

impl FieldError {
    pub fn new(param: impl Into<Cow<'static, str>>, msg: impl Into<Cow<'static, str>>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
        }
    }

    /// フィールドに紐付かないメッセージ
    pub fn message(msg: impl Into<Cow<'static, str>>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            source: None,
        }
    }

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 401 Unauthorized エラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 400 検証エラー（複数フィールド）
    ///
    /// `message` には最初のフィールドエラーを使用します。
    pub fn validation(details: Vec<FieldError>) -> Self {
        let message = details
            .first()
            .map(|d| d.msg.clone())
            .unwrap_or(Cow::Borrowed("Invalid request"));
        Self {
            kind: ErrorKind::BadRequest,
            message,
            details,
            source: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> &[FieldError] {
        &self.details
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// クライアント向けのエラーエンベロープを構築
    pub fn envelope(&self) -> ErrorEnvelope {
        let errors = if self.details.is_empty() {
            vec![FieldError::message(self.message.clone())]
        } else {
            self.details.clone()
        };
        ErrorEnvelope { errors }
    }
}

/// `{"errors":[{"msg":"..."}]}` 形式のレスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<FieldError>,
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if !self.details.is_empty() {
            builder.field("details", &self.details);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
