#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use nexus_sst_api::config::AppConfig;
use nexus_sst_api::database::MemoryStore;
use nexus_sst_api::models::{Course, CourseStatus, RecordId};
use nexus_sst_api::state::AppState;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Configuração de teste: bcrypt barato e overrides opcionais
pub fn test_config(overrides: &[(&str, &str)]) -> AppConfig {
    AppConfig::from_lookup(|name| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == name) {
            return Some(value.to_string());
        }
        match name {
            "SUPABASE_URL" => Some("http://localhost:54321".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon-key".to_string()),
            "JWT_SECRET" => Some(TEST_SECRET.to_string()),
            "BCRYPT_COST" => Some("4".to_string()),
            _ => None,
        }
    })
    .expect("valid test config")
}

pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(test_config(&[]), store)
}

pub fn created(days_ago: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - chrono::Duration::days(days_ago)
}

pub fn course(id: i64, title: &str, status: CourseStatus, days_ago: i64) -> Course {
    let mut extra = serde_json::Map::new();
    extra.insert("title".to_string(), serde_json::json!(title));

    Course {
        id: RecordId::Int(id),
        status,
        created_at: serde_json::json!(created(days_ago)),
        extra,
    }
}

/// Monta o app com as rotas de `/api` e o handler de 404, sem middlewares de borda
#[allow(unused_macros)]
macro_rules! test_app {
    ($state:expr) => {{
        let state: nexus_sst_api::state::AppState = $state;
        let config = state.config.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(|cfg| nexus_sst_api::api::configure(cfg, &config))
                .default_service(actix_web::web::to(nexus_sst_api::api::not_found)),
        )
        .await
    }};
}
