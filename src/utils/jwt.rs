use crate::models::{RecordId, Role, User};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Validade fixa dos tokens de sessão: 7 dias
pub const TOKEN_TTL_DAYS: i64 = 7;

// JWT Claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: RecordId,
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
    pub iat: i64, // issued at
    pub exp: i64, // expiration
}

/// Assina e verifica tokens HS256 com o segredo carregado no startup.
///
/// Não existe estado de sessão no servidor: um token vale até expirar.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<String, String> {
        let claims = Claims {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| format!("Failed to generate token: {}", e))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Invalid token: {}", e))
    }
}
