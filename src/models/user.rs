use super::{null_as_default, RecordId};
use serde::{Deserialize, Serialize};

/// Papel do usuário; o registro público sempre cria `User`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    /// Valor desconhecido gravado direto no banco, repassado como está
    #[serde(untagged)]
    Other(String),
}

/// Linha da tabela `users`.
///
/// Só `Deserialize`: o digest da senha nunca é serializado para fora.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
}

impl User {
    /// Nome de exibição: "Nome Sobrenome"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload de inserção em `users`. `id` e `created_at` ficam a cargo do store.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_from_store() {
        let row = serde_json::json!({
            "id": 1,
            "email": "a@x.com",
            "password_hash": "$2b$12$abc",
            "first_name": "Ana",
            "last_name": "Silva",
            "company_name": null,
            "role": "admin",
            "created_at": "2024-03-01T10:00:00+00:00"
        });

        let user: User = serde_json::from_value(row).unwrap();
        assert_eq!(user.id, RecordId::Int(1));
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.display_name(), "Ana Silva");
    }

    #[test]
    fn test_role_defaults_to_user() {
        let row = serde_json::json!({
            "id": "u-1",
            "email": "a@x.com",
            "password_hash": "h",
            "first_name": "Ana",
            "last_name": "Silva"
        });

        let user: User = serde_json::from_value(row).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(serde_json::to_string(&user.role).unwrap(), "\"user\"");
    }

    #[test]
    fn test_null_role_and_naive_timestamp_decode() {
        let row = serde_json::json!({
            "id": 2,
            "email": "b@x.com",
            "password_hash": "h",
            "first_name": "Bruno",
            "last_name": "Costa",
            "role": null,
            "created_at": "2024-03-01T10:00:00"
        });

        let user: User = serde_json::from_value(row).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_unknown_role_passes_through() {
        let row = serde_json::json!({
            "id": 3,
            "email": "c@x.com",
            "password_hash": "h",
            "first_name": "Carla",
            "last_name": "Dias",
            "role": "instructor"
        });

        let user: User = serde_json::from_value(row).unwrap();
        assert_eq!(user.role, Role::Other("instructor".to_string()));
        assert_eq!(serde_json::to_string(&user.role).unwrap(), "\"instructor\"");
    }
}
