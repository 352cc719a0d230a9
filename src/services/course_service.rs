use crate::models::Course;
use crate::state::AppState;
use crate::utils::AppError;

/// Lista os cursos ativos, mais recentes primeiro
pub async fn list_active(state: &AppState) -> Result<Vec<Course>, AppError> {
    state.courses.find_active_ordered().await.map_err(|e| {
        log::error!("❌ Failed to fetch courses: {}", e);
        AppError::QueryFailed("Erro ao buscar cursos")
    })
}

/// Busca um curso ativo.
///
/// Inexistente, inativo ou erro do store (ex.: id com tipo errado) viram o
/// mesmo 404, sem revelar se o registro existe.
pub async fn get_active(state: &AppState, id: &str) -> Result<Course, AppError> {
    match state.courses.find_active_by_id(id).await {
        Ok(Some(course)) => Ok(course),
        Ok(None) => Err(AppError::NotFound("Curso não encontrado")),
        Err(e) => {
            log::warn!("⚠️  Course lookup failed for {}: {}", id, e);
            Err(AppError::NotFound("Curso não encontrado"))
        }
    }
}
