use crate::config::AppConfig;
use crate::database::{CertificateRepository, CourseRepository, UserRepository};
use crate::utils::{PasswordHasher, TokenIssuer};
use std::sync::Arc;

/// Estado compartilhado entre os workers; somente leitura após o startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub certificates: Arc<dyn CertificateRepository>,
    pub tokens: TokenIssuer,
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Usa o mesmo store para as três entidades (Supabase ou memória)
    pub fn new<S>(config: AppConfig, store: Arc<S>) -> Self
    where
        S: UserRepository + CourseRepository + CertificateRepository + 'static,
    {
        Self {
            tokens: TokenIssuer::new(&config.jwt_secret),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            config: Arc::new(config),
            users: store.clone(),
            courses: store.clone(),
            certificates: store,
        }
    }
}
