use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

/// Erreurs renvoyées par les routes.
/// Le détail interne (DbErr) est loggé, jamais renvoyé au client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    // Base vide : le corps utilise "message" au lieu de "error"
    #[error("{0}")]
    Empty(&'static str),

    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    /// Pour `map_err` : logge l'erreur BD et garde un message générique
    pub fn database(context: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| {
            error!(error = %source, "{context}");
            AppError::Database { context, source }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Empty(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Empty(message) => serde_json::json!({ "message": message }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
