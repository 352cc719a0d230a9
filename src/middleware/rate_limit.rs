//! Rate limiting em janela fixa por endereço do cliente.
//!
//! Padrão: 100 requests a cada 15 minutos. Os contadores ficam no
//! `InMemoryBackend`, compartilhado entre os workers.

use crate::config::AppConfig;
use crate::utils::ErrorBody;
use actix_extensible_rate_limit::backend::{SimpleInputFunctionBuilder, SimpleOutput};
use actix_web::HttpResponse;

/// Chave = IP do peer (sem confiar em `X-Forwarded-For`)
pub fn api_rate_limit_config(config: &AppConfig) -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(config.rate_limit_window, config.rate_limit_max).peer_ip_key()
}

/// Resposta 429 no mesmo formato dos demais erros da API
pub fn too_many_requests(_output: &SimpleOutput) -> HttpResponse {
    HttpResponse::TooManyRequests().json(ErrorBody {
        error: "Muitas requisições, tente novamente mais tarde.".to_string(),
        message: None,
    })
}
