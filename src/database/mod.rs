//! Acesso ao store externo (Supabase).
//!
//! Cada entidade tem um repositório estreito com apenas as operações que a
//! API usa. `SupabaseClient` implementa os três sobre PostgREST; `MemoryStore`
//! implementa os mesmos contratos em memória para testes e demos locais.

pub mod memory;
pub mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseClient;

use crate::models::{Course, NewUser, User};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode store response: {0}")]
    Decode(String),

    #[error("Duplicate value for unique column: {0}")]
    Conflict(String),

    #[error("Store response missing row count")]
    MissingCount,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insere um usuário e devolve a linha criada (com `id` e `created_at` do store)
    async fn insert_one(&self, user: NewUser) -> Result<User, StoreError>;

    /// Busca exata e case-sensitive por email; no máximo uma linha
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Cursos com status `active`, mais recentes primeiro
    async fn find_active_ordered(&self) -> Result<Vec<Course>, StoreError>;

    /// Curso ativo pelo id; inativo ou inexistente retorna `None`
    async fn find_active_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn count(&self) -> Result<u64, StoreError>;
}
