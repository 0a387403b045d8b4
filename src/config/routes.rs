use actix_web::{web, HttpResponse, Responder};

use crate::controllers::otp_controller::OtpController;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/otp/send", web::post().to(OtpController::send_code))
        .route("/api/otp/verify", web::post().to(OtpController::verify_code));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
