use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Whether a failed storage call is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Throttling, timeouts, connection failures. Retrying may succeed.
    Transient,
    /// Validation, authorization, missing table. Retrying won't help.
    Permanent,
}

/// A failed DynamoDB call.
///
/// Carries the operation that failed, a transient/permanent classification
/// and the SDK's full error message. An absent item is not an error; `get`
/// reports it as `Ok(None)`.
#[derive(Debug, Error)]
#[error("dynamodb {operation} failed ({kind:?}): {message}")]
pub struct StoreError {
    operation: &'static str,
    kind: StoreErrorKind,
    message: String,
}

impl StoreError {
    pub(crate) fn from_sdk<E, R>(operation: &'static str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug,
    {
        let kind = match &err {
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => StoreErrorKind::Transient,
            SdkError::ServiceError(_) => match err.code() {
                Some(
                    "ProvisionedThroughputExceededException"
                    | "ThrottlingException"
                    | "RequestLimitExceeded"
                    | "InternalServerError",
                ) => StoreErrorKind::Transient,
                _ => StoreErrorKind::Permanent,
            },
            _ => StoreErrorKind::Permanent,
        };
        let message = DisplayErrorContext(&err).to_string();
        Self {
            operation,
            kind,
            message,
        }
    }

    /// The storage operation that failed (`"get_item"`, `"scan"`, ...).
    pub fn operation(&self) -> &str {
        self.operation
    }

    /// Transient or permanent classification of the failure.
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Returns `true` if the failure is worth retrying.
    pub fn is_transient(&self) -> bool {
        self.kind == StoreErrorKind::Transient
    }
}
