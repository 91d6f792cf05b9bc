use actix_web::{post, web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::models::dto::VoteResponse;
use crate::services::company_service::{CompanyService, Vote};
use crate::utils::symbol::normalize_symbol;

// DTO pour like / dislike
#[derive(Deserialize)]
pub struct VoteRequest {
    pub symbol: Option<String>,
}

/// POST /like-company - +1 like (crée la company si besoin)
#[post("/like-company")]
pub async fn like_company(
    body: Option<web::Json<VoteRequest>>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    record_vote(body, db.get_ref(), Vote::Like).await
}

/// POST /dislike-company - +1 dislike (crée la company si besoin)
#[post("/dislike-company")]
pub async fn dislike_company(
    body: Option<web::Json<VoteRequest>>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    record_vote(body, db.get_ref(), Vote::Dislike).await
}

async fn record_vote(
    body: Option<web::Json<VoteRequest>>,
    db: &DatabaseConnection,
    vote: Vote,
) -> Result<HttpResponse, AppError> {
    // Corps absent, JSON invalide ou symbole vide : même 400
    let symbol = body
        .and_then(|b| b.into_inner().symbol)
        .as_deref()
        .and_then(normalize_symbol)
        .ok_or(AppError::BadRequest("Symbol is required"))?;

    let company = match vote {
        Vote::Like => CompanyService::increment_likes(db, &symbol)
            .await
            .map_err(AppError::database("Failed to update like"))?,
        Vote::Dislike => CompanyService::increment_dislikes(db, &symbol)
            .await
            .map_err(AppError::database("Failed to update dislike"))?,
    };

    info!(
        symbol = %company.symbol,
        likes = company.likes,
        dislikes = company.dislikes,
        "{vote:?} recorded"
    );

    Ok(HttpResponse::Ok().json(VoteResponse::from(company)))
}

pub fn votes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(like_company).service(dislike_company);
}
