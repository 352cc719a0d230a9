use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Corpo padrão de erro: `{"error": "..."}` e, só em desenvolvimento, `message`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Todos os campos são obrigatórios")]
    Validation,

    /// Mesma resposta para email desconhecido e senha errada.
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido ou ausente")]
    Unauthorized,

    #[error("Erro ao criar usuário")]
    Creation,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    QueryFailed(&'static str),

    #[error("Erro interno do servidor")]
    Internal { detail: String, expose: bool },

    #[error("Algo deu errado!")]
    Unhandled { detail: String, expose: bool },
}

impl AppError {
    /// Erro inesperado de rota. O detalhe completo vai para o log quando a
    /// resposta é gerada; o cliente só o recebe com `expose` (modo development).
    pub fn internal(detail: impl std::fmt::Display, expose: bool) -> Self {
        AppError::Internal {
            detail: detail.to_string(),
            expose,
        }
    }

    /// Erro que escapou das rotas (ex.: corpo malformado)
    pub fn unhandled(detail: impl std::fmt::Display, expose: bool) -> Self {
        AppError::Unhandled {
            detail: detail.to_string(),
            expose,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let message = match self {
            AppError::Internal { detail, expose } | AppError::Unhandled { detail, expose } => {
                expose.then(|| detail.clone())
            }
            _ => None,
        };

        ErrorBody {
            error: self.to_string(),
            message,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation | AppError::Creation => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::QueryFailed(_) | AppError::Internal { .. } | AppError::Unhandled { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal { detail, .. } => log::error!("❌ Internal error: {}", detail),
            AppError::Unhandled { detail, .. } => log::error!("💥 Unhandled error: {}", detail),
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(self.body())
    }
}
