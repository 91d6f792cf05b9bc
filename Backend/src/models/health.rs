use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str, // "ok" ou "degraded"
    pub database: bool,
    pub time: DateTime<Utc>,
}
