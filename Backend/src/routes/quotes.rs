use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;
use crate::models::dto::QuoteResponse;
use crate::services::company_service::CompanyService;
use crate::services::gateway::QuoteGateway;
use crate::utils::symbol::normalize_symbol;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub symbol: Option<String>,
}

/// GET /random-nse - Company au hasard + cotation NSE
/// Si NSE ne répond pas : 200 quand même, nseData = null et champ "error"
#[get("/random-nse")]
pub async fn random_company(
    db: web::Data<DatabaseConnection>,
    quotes: web::Data<dyn QuoteGateway>,
) -> Result<HttpResponse, AppError> {
    let company = CompanyService::pick_random(db.get_ref())
        .await
        .map_err(AppError::database("Failed to fetch company data"))?
        .ok_or(AppError::Empty("No companies found"))?;

    let response = match quotes.fetch_quote(&company.symbol).await {
        Ok(data) => QuoteResponse::new(&company, Some(data)),
        Err(e) => {
            warn!(symbol = %company.symbol, error = %e, "NSE API error");
            QuoteResponse {
                error: Some("NSE data temporarily unavailable"),
                ..QuoteResponse::new(&company, None)
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /search-nse?symbol= - Find-or-create puis cotation NSE
/// Contrairement à /random-nse, un échec NSE donne un 404
#[get("/search-nse")]
pub async fn search_company(
    query: web::Query<SearchQuery>,
    db: web::Data<DatabaseConnection>,
    quotes: web::Data<dyn QuoteGateway>,
) -> Result<HttpResponse, AppError> {
    let symbol = query
        .symbol
        .as_deref()
        .and_then(normalize_symbol)
        .ok_or(AppError::BadRequest("Symbol parameter is required"))?;

    // La company est enregistrée même si NSE ne la connaît pas
    let company = CompanyService::find_or_create(db.get_ref(), &symbol)
        .await
        .map_err(AppError::database("Failed to search company"))?;

    match quotes.fetch_quote(&symbol).await {
        Ok(data) => Ok(HttpResponse::Ok().json(QuoteResponse::new(&company, Some(data)))),
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "NSE API error");
            Err(AppError::NotFound("Company symbol not found on NSE or API unavailable"))
        }
    }
}

pub fn quotes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(random_company).service(search_company);
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use crate::db::{break_store, test_connection};
    use crate::routes::test_app;
    use crate::services::company_service::CompanyService;
    use crate::services::gateway::stubs::{StubNews, StubQuotes};

    fn sample_quote() -> Value {
        json!({ "info": { "symbol": "TCS", "companyName": "Tata Consultancy Services Limited" },
                "priceInfo": { "lastPrice": 4120.5 } })
    }

    #[actix_web::test]
    async fn test_random_on_empty_store() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/random-nse").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "No companies found" }));
    }

    #[actix_web::test]
    async fn test_random_with_quote() {
        let db = test_connection().await;
        CompanyService::increment_likes(&db, "TCS").await.unwrap();
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/random-nse").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], "TCS");
        assert_eq!(body["nseData"], sample_quote());
        assert_eq!(body["likes"], 1);
        assert_eq!(body["dislikes"], 0);
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_random_degrades_when_gateway_fails() {
        let db = test_connection().await;
        CompanyService::find_or_create(&db, "INFY").await.unwrap();
        let app = test_app!(db, StubQuotes::failing(), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/random-nse").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], "INFY");
        assert!(body["nseData"].is_null());
        assert_eq!(body["error"], "NSE data temporarily unavailable");
    }

    #[actix_web::test]
    async fn test_search_requires_symbol() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());

        for uri in ["/search-nse", "/search-nse?symbol=", "/search-nse?symbol=%20%20"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Symbol parameter is required");
        }
    }

    #[actix_web::test]
    async fn test_search_creates_and_returns_quote() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());

        let req = test::TestRequest::get().uri("/search-nse?symbol=%20tcs%20").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], "TCS");
        assert_eq!(body["nseData"]["priceInfo"]["lastPrice"], 4120.5);
        assert_eq!((body["likes"].as_i64(), body["dislikes"].as_i64()), (Some(0), Some(0)));

        assert!(CompanyService::find_by_symbol(&db, "TCS").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_search_unknown_symbol_is_404_but_persisted() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::failing(), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/search-nse?symbol=ZZZZ").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Company symbol not found on NSE or API unavailable" }));

        let stored = CompanyService::find_by_symbol(&db, "ZZZZ").await.unwrap().unwrap();
        assert_eq!((stored.likes, stored.dislikes), (0, 0));
    }

    #[actix_web::test]
    async fn test_search_keeps_existing_counters() {
        let db = test_connection().await;
        CompanyService::increment_dislikes(&db, "WIPRO").await.unwrap();
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/search-nse?symbol=wipro").to_request()).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["dislikes"], 1);
        assert_eq!(CompanyService::count_all(&db).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_store_failure_is_generic_500() {
        let db = test_connection().await;
        let app = test_app!(db, StubQuotes::ok(sample_quote()), StubNews::failing());
        break_store(&db).await;

        let cases = [
            ("/random-nse", "Failed to fetch company data"),
            ("/search-nse?symbol=TCS", "Failed to search company"),
        ];
        for (uri, message) in cases {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

            // Le détail SQL ("no such table") reste dans les logs
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": message }));
        }
    }
}
