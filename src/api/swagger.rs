use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NEXUS SST API",
        version = "1.0.0",
        description = "API administrativa da plataforma NEXUS SST.\n\n**Autenticação:** login devolve um JWT (HS256, 7 dias) com `userId`, `email` e `role`.\n\n**Recursos:**\n- Registro e login de usuários\n- Catálogo de cursos ativos\n- Estatísticas do dashboard"
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::me,

        // Courses
        crate::api::courses::list_courses,
        crate::api::courses::get_course,

        // Dashboard
        crate::api::dashboard::get_stats,

        // Health
        crate::api::health::health_check,
        crate::api::health::test_route,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::RegisterResponse,
            crate::services::auth_service::RegisteredUser,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::services::auth_service::SessionUser,
            crate::utils::Claims,
            crate::models::RecordId,

            // Courses
            crate::models::CourseStatus,

            // Dashboard
            crate::models::DashboardResponse,
            crate::models::DashboardStats,
            crate::models::ChartData,
            crate::models::CoursePopularity,
            crate::models::CertificateStatusSlice,

            // Health & errors
            crate::api::health::HealthResponse,
            crate::api::health::TestResponse,
            crate::utils::ErrorBody,
        )
    ),
    tags(
        (name = "Auth", description = "Registro, login e inspeção do token de sessão."),
        (name = "Courses", description = "Catálogo de cursos ativos."),
        (name = "Dashboard", description = "Contadores e dados de gráficos do painel administrativo."),
        (name = "Health", description = "Health check e rota de teste."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT devolvido por /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
