use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use std::future::ready;

/// Corpo de formulário aceito em JSON ou url-encoded.
///
/// Sem corpo, ou com um content-type que não seja nenhum dos dois, o request
/// segue com `T::default()` (todos os campos ausentes) e a validação do
/// service decide a resposta. Só um corpo declarado que falha no parse cai
/// no handler final.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<T> RequestBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[derive(Debug, PartialEq)]
enum BodyKind {
    Json,
    Form,
    Absent,
}

fn body_kind(req: &HttpRequest) -> BodyKind {
    let declared_empty = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim() == "0");
    if declared_empty {
        return BodyKind::Absent;
    }

    let mime = match req.mime_type() {
        Ok(Some(mime)) => mime,
        _ => return BodyKind::Absent,
    };

    if mime.subtype() == "json" || mime.suffix().is_some_and(|suffix| suffix == "json") {
        BodyKind::Json
    } else if mime.essence_str() == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Absent
    }
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match body_kind(req) {
            BodyKind::Json => {
                let fut = web::Json::<T>::from_request(req, payload);
                Box::pin(async move { Ok(RequestBody(fut.await?.into_inner())) })
            }
            BodyKind::Form => {
                let fut = web::Form::<T>::from_request(req, payload);
                Box::pin(async move { Ok(RequestBody(fut.await?.into_inner())) })
            }
            BodyKind::Absent => Box::pin(ready(Ok(RequestBody(T::default())))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_body_kind_from_headers() {
        let json = TestRequest::post()
            .insert_header(("content-type", "application/json; charset=utf-8"))
            .to_http_request();
        let problem_json = TestRequest::post()
            .insert_header(("content-type", "application/merge-patch+json"))
            .to_http_request();
        let form = TestRequest::post()
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .to_http_request();
        let text = TestRequest::post()
            .insert_header(("content-type", "text/plain"))
            .to_http_request();
        let bare = TestRequest::post().to_http_request();
        let empty_json = TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .insert_header(("content-length", "0"))
            .to_http_request();

        assert_eq!(body_kind(&json), BodyKind::Json);
        assert_eq!(body_kind(&problem_json), BodyKind::Json);
        assert_eq!(body_kind(&form), BodyKind::Form);
        assert_eq!(body_kind(&text), BodyKind::Absent);
        assert_eq!(body_kind(&bare), BodyKind::Absent);
        assert_eq!(body_kind(&empty_json), BodyKind::Absent);
    }
}
