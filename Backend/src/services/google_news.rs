use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::gateway::{GatewayError, NewsGateway};
use crate::models::dto::NewsItem;

const NEWS_TIMEOUT: Duration = Duration::from_secs(10);

/// Client du flux RSS de recherche Google News (édition Inde)
pub struct GoogleNewsClient {
    client: Client,
    feed_url: String,
}

impl GoogleNewsClient {
    pub fn new(feed_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(NEWS_TIMEOUT).build()?;

        Ok(Self {
            client,
            feed_url: feed_url.into(),
        })
    }
}

#[async_trait]
impl NewsGateway for GoogleNewsClient {
    async fn fetch_news(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>, GatewayError> {
        debug!(query, "Fetching news feed");

        let response = self
            .client
            .get(&self.feed_url)
            .query(&[("q", query), ("hl", "en-IN"), ("gl", "IN"), ("ceid", "IN:en")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let body = response.text().await?;
        parse_feed(&body, max_items)
    }
}

// Structure minimale d'un flux RSS 2.0 : rss > channel > item*
#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source: Option<RssSource>,
}

// <source url="https://...">Nom du média</source>
#[derive(Debug, Deserialize)]
struct RssSource {
    #[serde(rename = "$text")]
    name: Option<String>,
}

// Élément absent ou vide : même valeur par défaut
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RssItem> for NewsItem {
    fn from(item: RssItem) -> Self {
        NewsItem {
            title: non_blank(item.title).unwrap_or_else(|| "No title".to_string()),
            link: non_blank(item.link).unwrap_or_else(|| "#".to_string()),
            pub_date: non_blank(item.pub_date).unwrap_or_default(),
            source: non_blank(item.source.and_then(|s| s.name))
                .unwrap_or_else(|| "Unknown Source".to_string()),
        }
    }
}

/// Parse le XML et garde les `max_items` premiers articles
pub fn parse_feed(xml: &str, max_items: usize) -> Result<Vec<NewsItem>, GatewayError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;

    Ok(rss
        .channel
        .items
        .into_iter()
        .take(max_items)
        .map(NewsItem::from)
        .collect())
}
