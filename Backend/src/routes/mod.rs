pub mod health;
pub mod quotes;
pub mod votes;
pub mod news;
pub mod leaderboard;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index)
        .service(health::health_check)
        .configure(quotes::quotes_routes)
        .configure(votes::votes_routes)
        .configure(news::news_routes)
        .configure(leaderboard::leaderboard_routes);
}

/// App de test : SQLite en mémoire + gateways bouchonnées
#[cfg(test)]
macro_rules! test_app {
    ($db:expr, $quotes:expr, $news:expr) => {{
        let quotes: std::sync::Arc<dyn crate::services::gateway::QuoteGateway> = std::sync::Arc::new($quotes);
        let news: std::sync::Arc<dyn crate::services::gateway::NewsGateway> = std::sync::Arc::new($news);

        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::from(quotes))
                .app_data(actix_web::web::Data::from(news))
                .configure(crate::routes::configure_routes),
        )
        .await
    }};
}

#[cfg(test)]
pub(crate) use test_app;
