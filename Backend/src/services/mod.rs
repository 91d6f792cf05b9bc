pub mod company_service;
pub mod gateway;
pub mod google_news;
pub mod nse_quote;
