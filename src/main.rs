use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_web::{web, HttpServer};
use dotenv::dotenv;
use nexus_sst_api::{api, config::AppConfig, database::SupabaseClient, state::AppState};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let store = SupabaseClient::new(&config.supabase_url, &config.supabase_key).map_err(|e| {
        log::error!("❌ Failed to build Supabase client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let host = config.host.clone();
    let port = config.port;

    log::info!("🚀 NEXUS SST API rodando na porta {}", port);
    log::info!("📊 Environment: {}", config.environment_name());
    log::info!("🗄️  Supabase: {}", config.supabase_url);
    log::info!("🌐 Allowed origins: {}", config.allowed_origins.join(", "));
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let state_data = web::Data::new(AppState::new(config, Arc::new(store)));

    // Contadores compartilhados entre todos os workers
    let rate_limit_backend = InMemoryBackend::builder().build();

    // Start HTTP server
    HttpServer::new(move || api::build_app(state_data.clone(), rate_limit_backend.clone()))
        .bind(format!("{}:{}", host, port))?
        .run()
        .await
}
