use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use atelier_core::{GameError, SketchError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("shader `{0}` not found")]
    ShaderNotFound(String),
    #[error("failed to read shader `{name}`")]
    ShaderRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown sketch `{0}`")]
    UnknownSketch(String),
    #[error("invalid sketch parameters: {0}")]
    Sketch(#[from] SketchError),
    #[error("invalid game parameters: {0}")]
    Game(#[from] GameError),
}

impl ServerError {
    /// Stable machine-readable code for the JSON error body.
    pub fn code(&self) -> &'static str {
        use ServerError::*;
        match self {
            ShaderNotFound(_) => "SHADER_NOT_FOUND",
            ShaderRead { .. } => "SHADER_READ_FAILED",
            UnknownSketch(_) => "UNKNOWN_SKETCH",
            Sketch(_) => "INVALID_SKETCH",
            Game(_) => "INVALID_GAME",
        }
    }

    fn context(&self) -> Option<&str> {
        use ServerError::*;
        match self {
            ShaderNotFound(name) | ShaderRead { name, .. } | UnknownSketch(name) => Some(name.as_str()),
            Sketch(_) | Game(_) => None,
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        use ServerError::*;
        match self {
            ShaderNotFound(_) | UnknownSketch(_) => StatusCode::NOT_FOUND,
            ShaderRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Sketch(_) | Game(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "context": self.context().unwrap_or(""),
            }
        }))
    }
}
