use super::{CertificateRepository, CourseRepository, StoreError, UserRepository};
use crate::models::{Course, NewUser, RecordId, User};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store em memória com o mesmo contrato do Supabase.
///
/// Email único e case-sensitive; ids de usuário são UUID v4 gerados aqui.
/// `set_unavailable(true)` faz toda chamada falhar como um store fora do ar.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    courses: RwLock<Vec<Course>>,
    certificates: RwLock<u64>,
    insert_attempts: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
            ..Self::default()
        }
    }

    pub async fn add_course(&self, course: Course) {
        self.courses.write().await.push(course);
    }

    pub async fn add_certificates(&self, count: u64) {
        *self.certificates.write().await += count;
    }

    /// Quantas vezes `insert_one` foi chamado, com ou sem sucesso
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Status {
                status: 503,
                body: "store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_one(&self, user: NewUser) -> Result<User, StoreError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!(
                "duplicate key value violates unique constraint \"users_email_key\": {}",
                user.email
            )));
        }

        let row = User {
            id: RecordId::Text(Uuid::new_v4().to_string()),
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            company_name: user.company_name,
            role: user.role,
        };
        users.push(row.clone());

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check_available()?;

        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check_available()?;
        Ok(self.users.read().await.len() as u64)
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn find_active_ordered(&self) -> Result<Vec<Course>, StoreError> {
        self.check_available()?;

        let mut active: Vec<Course> = self
            .courses
            .read()
            .await
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect();

        // Mais recentes primeiro (timestamps ISO 8601 ordenam como texto)
        active.sort_by(|a, b| b.created_at.as_str().cmp(&a.created_at.as_str()));
        Ok(active)
    }

    async fn find_active_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        self.check_available()?;

        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .find(|c| c.is_active() && c.id.to_string() == id)
            .cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check_available()?;
        Ok(self.courses.read().await.len() as u64)
    }
}

#[async_trait]
impl CertificateRepository for MemoryStore {
    async fn count(&self) -> Result<u64, StoreError> {
        self.check_available()?;
        Ok(*self.certificates.read().await)
    }
}
