//! HTTP routing configuration.

use actix_web::{HttpResponse, web};

use crate::{shaders, sketches, weather};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/shaders/{name}", web::get().to(shaders::get_shader))
        .route("/api/weather", web::get().to(weather::get_weather))
        .route("/sketches/{file}", web::get().to(sketches::get_sketch));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
