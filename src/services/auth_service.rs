use crate::models::{NewUser, RecordId, Role};
use crate::state::AppState;
use crate::utils::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// Request/Response structures
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisteredUser {
    pub id: RecordId,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SessionUser {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: SessionUser,
}

/// Campo presente e não vazio
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// User registration
pub async fn register(
    state: &AppState,
    request: &RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    // Validação: sem checagem de formato, só presença
    let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
        non_empty(&request.email),
        non_empty(&request.password),
        non_empty(&request.first_name),
        non_empty(&request.last_name),
    ) else {
        return Err(AppError::Validation);
    };

    let password_hash = state
        .hasher
        .hash(password)
        .await
        .map_err(|e| AppError::internal(e, state.config.expose_errors()))?;

    let new_user = NewUser {
        email: email.to_string(),
        password_hash,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        company_name: non_empty(&request.company_name).map(str::to_string),
        role: Role::User,
    };

    // Causa real só no log: o cliente recebe sempre a mesma mensagem
    let user = state.users.insert_one(new_user).await.map_err(|e| {
        log::error!("❌ Failed to create user {}: {}", email, e);
        AppError::Creation
    })?;

    log::info!("✅ User registered successfully: {}", user.email);

    Ok(RegisterResponse {
        message: "Usuário criado com sucesso!".to_string(),
        user: RegisteredUser {
            name: user.display_name(),
            id: user.id,
            email: user.email,
        },
    })
}

// User login
pub async fn login(state: &AppState, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let (Some(email), Some(password)) = (
        non_empty(&request.email),
        non_empty(&request.password),
    ) else {
        return Err(AppError::InvalidCredentials);
    };

    let user = match state.users.find_by_email(email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AppError::InvalidCredentials),
        Err(e) => {
            log::warn!("⚠️  User lookup failed: {}", e);
            return Err(AppError::InvalidCredentials);
        }
    };

    // Verify password
    let valid = state
        .hasher
        .verify(password, &user.password_hash)
        .await
        .map_err(|e| AppError::internal(e, state.config.expose_errors()))?;

    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(&user, Utc::now())
        .map_err(|e| AppError::internal(e, state.config.expose_errors()))?;

    Ok(LoginResponse {
        message: "Login realizado com sucesso!".to_string(),
        token,
        user: SessionUser {
            name: user.display_name(),
            id: user.id,
            email: user.email,
            role: user.role,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::{MemoryStore, UserRepository};
    use std::sync::Arc;

    fn state() -> (AppState, Arc<MemoryStore>) {
        let config = AppConfig::from_lookup(|name| match name {
            "SUPABASE_URL" => Some("http://localhost:54321".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon".to_string()),
            "JWT_SECRET" => Some("test-secret".to_string()),
            "BCRYPT_COST" => Some("4".to_string()),
            _ => None,
        })
        .unwrap();

        let store = Arc::new(MemoryStore::new());
        (AppState::new(config, store.clone()), store)
    }

    fn ana() -> RegisterRequest {
        RegisterRequest {
            email: Some("a@x.com".to_string()),
            password: Some("pw123456".to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            company_name: None,
        }
    }

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_builds_display_name() {
        let (state, _) = state();
        let response = register(&state, &ana()).await.unwrap();

        assert_eq!(response.user.name, "Ana Silva");
        assert_eq!(response.user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_register_stores_digest_and_forces_user_role() {
        let (state, store) = state();
        register(&state, &ana()).await.unwrap();

        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw123456");
        assert!(stored.password_hash.starts_with("$2b$04$"));
        assert_eq!(stored.role, Role::User);
        assert_eq!(stored.company_name, None);
    }

    #[tokio::test]
    async fn test_register_missing_field_skips_store() {
        let (state, store) = state();

        for request in [
            RegisterRequest { email: None, ..ana() },
            RegisterRequest { password: Some(String::new()), ..ana() },
            RegisterRequest { first_name: None, ..ana() },
            RegisterRequest { last_name: Some(String::new()), ..ana() },
        ] {
            let result = register(&state, &request).await;
            assert!(matches!(result, Err(AppError::Validation)));
        }

        assert_eq!(store.insert_attempts(), 0);
    }

    #[tokio::test]
    async fn test_register_store_failure_is_generic() {
        let (state, _) = state();
        register(&state, &ana()).await.unwrap();

        let duplicate = register(&state, &ana()).await;
        assert!(matches!(duplicate, Err(AppError::Creation)));
    }

    #[tokio::test]
    async fn test_login_issues_seven_day_token() {
        let (state, store) = state();
        register(&state, &ana()).await.unwrap();

        let response = login(&state, &credentials("a@x.com", "pw123456")).await.unwrap();
        let claims = state.tokens.verify(&response.token).unwrap();
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();

        assert_eq!(claims.user_id, stored.id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
        assert_eq!(response.user.name, "Ana Silva");
        assert_eq!(response.user.role, Role::User);
    }

    #[tokio::test]
    async fn test_login_keeps_role_set_outside_the_api() {
        let (state, store) = state();
        let password_hash = state.hasher.hash("pw123456").await.unwrap();
        store
            .insert_one(NewUser {
                email: "inst@x.com".to_string(),
                password_hash,
                first_name: "Iara".to_string(),
                last_name: "Lima".to_string(),
                company_name: None,
                role: Role::Other("instructor".to_string()),
            })
            .await
            .unwrap();

        let response = login(&state, &credentials("inst@x.com", "pw123456")).await.unwrap();
        let claims = state.tokens.verify(&response.token).unwrap();

        assert_eq!(claims.role, Role::Other("instructor".to_string()));
        assert_eq!(response.user.role, Role::Other("instructor".to_string()));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (state, store) = state();
        register(&state, &ana()).await.unwrap();

        let wrong_password = login(&state, &credentials("a@x.com", "wrong")).await;
        let unknown_email = login(&state, &credentials("b@x.com", "pw123456")).await;
        let wrong_case = login(&state, &credentials("A@X.COM", "pw123456")).await;
        let missing = login(&state, &LoginRequest::default()).await;

        store.set_unavailable(true);
        let store_down = login(&state, &credentials("a@x.com", "pw123456")).await;

        for result in [wrong_password, unknown_email, wrong_case, missing, store_down] {
            assert!(matches!(result, Err(AppError::InvalidCredentials)));
        }
    }
}
