use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;
use tracing::{error, warn};

use crate::error::AppError;
use crate::models::dto::NewsResponse;
use crate::services::company_service::CompanyService;
use crate::services::gateway::{news_query, NewsGateway};
use crate::utils::symbol::normalize_symbol;

const MAX_NEWS_ITEMS: usize = 5;

/// GET /company-news/{symbol} - 5 derniers articles pour un symbole
/// Pas de création de company ici, et un flux en panne donne news = []
#[get("/company-news/{symbol}")]
pub async fn company_news(
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
    news: web::Data<dyn NewsGateway>,
) -> Result<HttpResponse, AppError> {
    let symbol = normalize_symbol(&path).ok_or(AppError::BadRequest("Symbol is required"))?;

    let company = match CompanyService::find_by_symbol(db.get_ref(), &symbol).await {
        Ok(company) => company,
        Err(e) => {
            error!(symbol = %symbol, error = %e, "Error fetching company news");
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch company news",
                "news": []
            })));
        }
    };

    // name n'est jamais rempli pour l'instant : on retombe sur le symbole
    let query = news_query(&symbol, company.as_ref().and_then(|c| c.name.as_deref()));

    let items = match news.fetch_news(&query, MAX_NEWS_ITEMS).await {
        Ok(items) => items,
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "News feed error");
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(NewsResponse { symbol, news: items }))
}

pub fn news_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(company_news);
}
