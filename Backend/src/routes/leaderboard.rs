use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::models::dto::LeaderboardResponse;
use crate::services::company_service::CompanyService;

const LEADERBOARD_SIZE: u64 = 10;

/// GET /top-liked - 10 companies les plus likées (likes > 0)
#[get("/top-liked")]
pub async fn top_liked(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let companies = CompanyService::top_by_likes(db.get_ref(), LEADERBOARD_SIZE)
        .await
        .map_err(AppError::database("Failed to fetch top liked companies"))?;

    Ok(HttpResponse::Ok().json(LeaderboardResponse::new(companies)))
}

/// GET /top-disliked - 10 companies les plus dislikées (dislikes > 0)
#[get("/top-disliked")]
pub async fn top_disliked(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let companies = CompanyService::top_by_dislikes(db.get_ref(), LEADERBOARD_SIZE)
        .await
        .map_err(AppError::database("Failed to fetch top disliked companies"))?;

    Ok(HttpResponse::Ok().json(LeaderboardResponse::new(companies)))
}

pub fn leaderboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(top_liked).service(top_disliked);
}
