use std::sync::Arc;

use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;
use validator::Validate;

use crate::service::otp_service::OtpService;
use crate::utils::normalize::{normalize_code, normalize_key};

pub struct OtpController {
    pub otp_service: Arc<OtpService>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "error": "invalid_request",
        "message": message.into(),
    }))
}

impl OtpController {
    pub fn new(otp_service: Arc<OtpService>) -> Self {
        Self { otp_service }
    }

    pub async fn send_code(
        controller: web::Data<OtpController>,
        request: web::Json<SendCodeRequest>,
    ) -> HttpResponse {
        let request = SendCodeRequest {
            email: normalize_key(&request.email),
        };

        if request.email.is_empty() {
            return bad_request("Email is required");
        }
        if request.validate().is_err() {
            return bad_request("Please enter a valid email");
        }

        match controller.otp_service.send_code(&request.email).await {
            Ok(expires_at) => HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Verification code sent. Check your inbox and spam folder.",
                "expiresAt": expires_at,
            })),
            Err(err) => err.error_response(),
        }
    }

    pub async fn verify_code(
        controller: web::Data<OtpController>,
        request: web::Json<VerifyCodeRequest>,
    ) -> HttpResponse {
        let request = VerifyCodeRequest {
            email: normalize_key(&request.email),
            code: normalize_code(&request.code).to_string(),
        };

        if request.email.is_empty() || request.code.is_empty() {
            return bad_request("Email and code are required");
        }
        if request.validate().is_err() {
            return bad_request("Please enter a valid email and code");
        }

        match controller
            .otp_service
            .check_code(&request.email, &request.code)
            .await
        {
            Ok(()) => HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Email verified successfully",
            })),
            Err(err) => err.error_response(),
        }
    }
}
