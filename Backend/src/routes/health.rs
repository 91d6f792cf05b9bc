use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::models::health::HealthResponse;

/// GET / - Bannière texte
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend API is working!")
}

/// GET /health - État du serveur et de la BD
#[get("/health")]
pub async fn health_check(db: web::Data<DatabaseConnection>) -> HttpResponse {
    let database = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            false
        }
    };

    let response = HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        time: Utc::now(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    use crate::db::test_connection;
    use crate::routes::test_app;
    use crate::services::gateway::stubs::{StubNews, StubQuotes};

    #[actix_web::test]
    async fn test_index_banner() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::failing(), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "Backend API is working!");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::failing(), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], true);
    }
}
