use actix_cors::Cors;
use actix_web::http::header;

/// CORS pour le frontend React.
/// Sans origine configurée, toutes les origines sont acceptées.
pub fn cors_policy(origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    match origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}
