use super::{null_as_default, RecordId};
use serde::{Deserialize, Serialize};

/// Status de um curso. Só `Active` é visível pela API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Inactive,
    Draft,
    Archived,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Linha da tabela `courses`.
///
/// As demais colunas (título, carga horária, NR...) passam intactas em `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CourseStatus,
    /// Como veio do store: com ou sem fuso, ou `null`. A ordenação é feita no banco.
    #[serde(default)]
    pub created_at: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Course {
    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }
}
