mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod utils;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use services::gateway::{NewsGateway, QuoteGateway};
use services::google_news::GoogleNewsClient;
use services::nse_quote::NseQuoteClient;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        io::Error::other(e)
    })?;

    info!("🔌 Connecting to database...");
    let db = db::establish_connection(&config.database_url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            io::Error::other(e)
        })?;
    db::ensure_schema(&db).await.map_err(io::Error::other)?;
    info!("✅ Database connected!");

    // Gateways créées une fois, partagées entre les workers
    let quotes: Arc<dyn QuoteGateway> =
        Arc::new(NseQuoteClient::new(&config.quote_api_url).map_err(io::Error::other)?);
    let news: Arc<dyn NewsGateway> =
        Arc::new(GoogleNewsClient::new(&config.news_feed_url).map_err(io::Error::other)?);
    let quotes = web::Data::from(quotes);
    let news = web::Data::from(news);

    let (host, port) = config.bind_address();
    info!("🚀 Starting server on http://{host}:{port}");

    let cors_origin = config.cors_origin.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors_policy(cors_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(web::Data::new(db.clone()))
            .app_data(quotes.clone())
            .app_data(news.clone())
            .configure(routes::configure_routes)
    })
        .bind((host, port))?
        .run()
        .await
}
