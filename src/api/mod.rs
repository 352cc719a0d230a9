pub mod auth;
pub mod body;
pub mod courses;
pub mod dashboard;
pub mod health;
pub mod swagger;

use crate::config::AppConfig;
use crate::middleware::{self, rate_limit, AuthMiddleware};
use crate::state::AppState;
use crate::utils::AppError;
use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, ResponseError};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Limite de corpo para JSON e formulários: 10MB
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Parsers de corpo e todas as rotas sob `/api`.
///
/// Usado pelo `main` e pelos testes, com o mesmo `AppConfig`.
pub fn configure(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    let expose = config.expose_errors();

    // Corpo inválido cai no handler final: 500 genérico, detalhe só em development
    let json_config = web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(move |err, _req| AppError::unhandled(err, expose).into());
    let form_config = web::FormConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(move |err, _req| AppError::unhandled(err, expose).into());

    cfg.app_data(json_config)
        .app_data(form_config)
        .app_data(web::PayloadConfig::new(BODY_LIMIT))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/test", web::get().to(health::test_route))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .service(
                            web::resource("/me")
                                .wrap(AuthMiddleware)
                                .route(web::get().to(auth::me)),
                        ),
                )
                .service(
                    web::scope("/courses")
                        .route("", web::get().to(courses::list_courses))
                        .route("/{id}", web::get().to(courses::get_course)),
                )
                .service(
                    web::scope("/dashboard").route("/stats", web::get().to(dashboard::get_stats)),
                ),
        );
}

/// Rota desconhecida
pub async fn not_found() -> HttpResponse {
    AppError::NotFound("Rota não encontrada").error_response()
}

/// App completo de um worker: rotas, Swagger UI e a cadeia de borda.
///
/// Ordem (de fora para dentro): headers de segurança, CORS, rate limit, log.
/// O `rate_limit_backend` é o mesmo para todos os workers.
pub fn build_app(
    state: web::Data<AppState>,
    rate_limit_backend: InMemoryBackend,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = state.config.clone();

    let rate_limiter = RateLimiter::builder(
        rate_limit_backend,
        rate_limit::api_rate_limit_config(&config).build(),
    )
    .add_headers()
    .request_denied_response(rate_limit::too_many_requests)
    .build();

    // Generate OpenAPI specification
    let openapi = swagger::ApiDoc::openapi();

    App::new()
        .app_data(state)
        .wrap(Logger::new(
            r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %Dms"#,
        ))
        .wrap(rate_limiter)
        .wrap(middleware::cors_policy(&config))
        .wrap(middleware::SecurityHeaders)
        .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
        .configure(|cfg| configure(cfg, &config))
        .default_service(web::to(not_found))
}
