use super::{CertificateRepository, CourseRepository, StoreError, UserRepository};
use crate::models::{Course, NewUser, User};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

const USERS_TABLE: &str = "users";
const COURSES_TABLE: &str = "courses";
const CERTIFICATES_TABLE: &str = "certificates";

/// Cliente PostgREST do Supabase (`{SUPABASE_URL}/rest/v1/{tabela}`).
///
/// Sem retries e sem timeout: uma chamada que falha derruba o request.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    /// Monta a URL de uma tabela com os parâmetros já codificados
    fn table_url(&self, table: &str, params: &[(&str, &str)]) -> String {
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        if query_string.is_empty() {
            format!("{}/{}", self.rest_url, table)
        } else {
            format!("{}/{}?{}", self.rest_url, table, query_string)
        }
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url).headers(self.auth_headers())
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table, params);
        log::debug!("🔎 Supabase select: {}", url);

        let response = check_status(self.request(Method::GET, &url).send().await?).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn count_rows(&self, table: &str) -> Result<u64, StoreError> {
        let url = self.table_url(table, &[("select", "id")]);

        let response = self
            .request(Method::HEAD, &url)
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = check_status(response).await?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or(StoreError::MissingCount)
    }
}

/// Converte status não-2xx em `StoreError`; 409 vira `Conflict` (unique violation)
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status.as_u16() == 409 {
        return Err(StoreError::Conflict(body));
    }

    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Extrai o total de `Content-Range: 0-24/3573` (ou `*/0` quando vazio)
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait]
impl UserRepository for SupabaseClient {
    async fn insert_one(&self, user: NewUser) -> Result<User, StoreError> {
        let url = self.table_url(USERS_TABLE, &[("select", "*")]);

        let response = self
            .request(Method::POST, &url)
            .header("Prefer", "return=representation")
            .json(&[user])
            .send()
            .await?;
        let response = check_status(response).await?;

        let mut rows = response
            .json::<Vec<User>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        if rows.is_empty() {
            return Err(StoreError::Decode("insert returned no rows".to_string()));
        }
        Ok(rows.swap_remove(0))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let filter = eq(email);
        let rows: Vec<User> = self
            .select(
                USERS_TABLE,
                &[("select", "*"), ("email", filter.as_str()), ("limit", "1")],
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.count_rows(USERS_TABLE).await
    }
}

#[async_trait]
impl CourseRepository for SupabaseClient {
    async fn find_active_ordered(&self) -> Result<Vec<Course>, StoreError> {
        self.select(
            COURSES_TABLE,
            &[
                ("select", "*"),
                ("status", "eq.active"),
                ("order", "created_at.desc"),
            ],
        )
        .await
    }

    async fn find_active_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        let filter = eq(id);
        let rows: Vec<Course> = self
            .select(
                COURSES_TABLE,
                &[
                    ("select", "*"),
                    ("id", filter.as_str()),
                    ("status", "eq.active"),
                    ("limit", "1"),
                ],
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.count_rows(COURSES_TABLE).await
    }
}

#[async_trait]
impl CertificateRepository for SupabaseClient {
    async fn count(&self) -> Result<u64, StoreError> {
        self.count_rows(CERTIFICATES_TABLE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new("https://project.supabase.co/", "anon-key").unwrap()
    }

    #[test]
    fn test_table_url_encodes_filters() {
        let url = client().table_url(
            USERS_TABLE,
            &[("select", "*"), ("email", eq("ana+test@x.com").as_str()), ("limit", "1")],
        );

        assert_eq!(
            url,
            "https://project.supabase.co/rest/v1/users?select=%2A&email=eq.ana%2Btest%40x.com&limit=1"
        );
    }

    #[test]
    fn test_table_url_without_params() {
        assert_eq!(
            client().table_url(CERTIFICATES_TABLE, &[]),
            "https://project.supabase.co/rest/v1/certificates"
        );
    }

    #[test]
    fn test_auth_headers() {
        let headers = client().auth_headers();
        assert_eq!(headers.get("apikey").unwrap(), "anon-key");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon-key");
    }

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("0-24/3573"), Some(3573));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("0-9/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
