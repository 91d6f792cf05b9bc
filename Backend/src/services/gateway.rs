use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::models::dto::NewsItem;

/// Échec d'un appel vers une API externe (NSE, flux RSS).
/// Jamais propagé tel quel au client : chaque route décide quoi en faire.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error("invalid feed: {0}")]
    Feed(#[from] quick_xml::DeError),
}

//trait = Interface vers l'API de cotations
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    /// JSON brut renvoyé par le fournisseur pour ce symbole
    async fn fetch_quote(&self, symbol: &str) -> Result<Value, GatewayError>;
}

//trait = Interface vers le flux d'actualités
#[async_trait]
pub trait NewsGateway: Send + Sync {
    /// Au plus `max_items` articles, dans l'ordre du flux
    async fn fetch_news(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>, GatewayError>;
}

/// Requête de recherche : nom complet si connu, sinon symbole + "stock OR business"
pub fn news_query(symbol: &str, name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("{symbol} stock OR business"),
    }
}
