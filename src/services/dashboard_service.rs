use crate::models::{
    CertificateStatusSlice, ChartData, CoursePopularity, DashboardResponse, DashboardStats,
};
use crate::state::AppState;
use crate::utils::AppError;

/// Taxa de conclusão ainda não calculada (placeholder)
pub const COMPLETION_RATE_PLACEHOLDER: u32 = 85;

/// Estatísticas do dashboard.
///
/// As três contagens saem em paralelo; qualquer falha derruba o request.
pub async fn get_stats(state: &AppState) -> Result<DashboardResponse, AppError> {
    let (total_users, total_courses, total_certificates) = tokio::try_join!(
        state.users.count(),
        state.courses.count(),
        state.certificates.count(),
    )
    .map_err(|e| AppError::internal(e, state.config.expose_errors()))?;

    Ok(DashboardResponse {
        stats: DashboardStats {
            total_users,
            total_courses,
            total_certificates,
            completion_rate: COMPLETION_RATE_PLACEHOLDER,
        },
        chart_data: mock_chart_data(),
    })
}

/// Dados fixos dos gráficos (mock), independentes das contagens
pub fn mock_chart_data() -> ChartData {
    ChartData {
        course_popularity: vec![
            CoursePopularity { name: "NR-35", enrollments: 45 },
            CoursePopularity { name: "NR-10", enrollments: 38 },
            CoursePopularity { name: "NR-06", enrollments: 32 },
            CoursePopularity { name: "NR-17", enrollments: 28 },
            CoursePopularity { name: "NR-12", enrollments: 25 },
        ],
        certificate_status: vec![
            CertificateStatusSlice { name: "Válidos", value: 120, color: "#4caf50" },
            CertificateStatusSlice { name: "Vencidos", value: 15, color: "#ff9800" },
            CertificateStatusSlice { name: "Revogados", value: 3, color: "#f44336" },
        ],
    }
}
