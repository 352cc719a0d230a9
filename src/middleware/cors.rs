use crate::config::AppConfig;
use actix_cors::Cors;
use actix_web::http::header;

/// CORS restrito às origens de `FRONTEND_URLS`, com credenciais.
///
/// Origem fora da lista não recebe nenhum header `access-control-*`.
pub fn cors_policy(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
