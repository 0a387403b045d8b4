use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Every way issuing or checking a code can fail.
///
/// All variants are recoverable: the user can always ask for a fresh code.
/// Backend details are logged where they happen and never carried here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("no verification code was issued for this address")]
    CodeNotFound,
    #[error("verification code has expired")]
    CodeExpired,
    #[error("verification code was already used")]
    CodeAlreadyUsed,
    #[error("verification code is incorrect")]
    CodeIncorrect,
    #[error("verification store is unavailable")]
    StoreUnavailable,
    #[error("verification email could not be delivered")]
    DeliveryFailed,
}

impl OtpError {
    /// Stable tag for API clients.
    pub fn tag(&self) -> &'static str {
        match self {
            OtpError::CodeNotFound => "code_not_found",
            OtpError::CodeExpired => "code_expired",
            OtpError::CodeAlreadyUsed => "code_already_used",
            OtpError::CodeIncorrect => "code_incorrect",
            OtpError::StoreUnavailable => "store_unavailable",
            OtpError::DeliveryFailed => "delivery_failed",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            OtpError::CodeNotFound => "Code not found. Request a new code.",
            OtpError::CodeExpired => "The code has expired. Request a new code.",
            OtpError::CodeAlreadyUsed => "This code was already used. Request a new code.",
            OtpError::CodeIncorrect => "Incorrect code. Check it and try again.",
            OtpError::StoreUnavailable => "We could not verify your code right now. Try again.",
            OtpError::DeliveryFailed => "We could not send the code. Check your email and try again.",
        }
    }
}

impl ResponseError for OtpError {
    fn status_code(&self) -> StatusCode {
        match self {
            OtpError::CodeNotFound => StatusCode::NOT_FOUND,
            OtpError::CodeExpired => StatusCode::GONE,
            OtpError::CodeAlreadyUsed => StatusCode::CONFLICT,
            OtpError::CodeIncorrect => StatusCode::BAD_REQUEST,
            OtpError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            OtpError::DeliveryFailed => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.tag(),
            "message": self.user_message(),
        }))
    }
}
