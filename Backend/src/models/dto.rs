//pour les réponses structurées
use serde::Serialize;
use serde_json::Value;

use super::company;

/// Réponse de /random-nse et /search-nse
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub symbol: String,
    #[serde(rename = "nseData")]
    pub nse_data: Option<Value>, // null si l'API NSE ne répond pas
    pub likes: i64,
    pub dislikes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl QuoteResponse {
    pub fn new(company: &company::Model, nse_data: Option<Value>) -> Self {
        Self {
            symbol: company.symbol.clone(),
            nse_data,
            likes: company.likes,
            dislikes: company.dislikes,
            error: None,
        }
    }
}

/// Réponse après un like / dislike
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
    pub symbol: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<company::Model> for VoteResponse {
    fn from(company: company::Model) -> Self {
        Self {
            success: true,
            symbol: company.symbol,
            likes: company.likes,
            dislikes: company.dislikes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub symbol: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<company::Model> for CompanySummary {
    fn from(company: company::Model) -> Self {
        Self {
            symbol: company.symbol,
            likes: company.likes,
            dislikes: company.dislikes,
        }
    }
}

/// Réponse de /top-liked et /top-disliked
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub count: usize,
    pub companies: Vec<CompanySummary>,
}

impl LeaderboardResponse {
    pub fn new(companies: Vec<company::Model>) -> Self {
        let companies: Vec<CompanySummary> = companies.into_iter().map(Into::into).collect();

        Self {
            success: true,
            count: companies.len(),
            companies,
        }
    }
}

/// Un article du flux RSS
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub symbol: String,
    pub news: Vec<NewsItem>,
}
