use crate::error::{Error, ErrorResponseBody, RestError, Result};
use crate::types::{AuthorizationToken, Header, RestRequest};
use http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

/// An abstract HTTP client.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<
        Output = core::result::Result<
            Response<Vec<u8>>,
            Box<dyn std::error::Error + Send + Sync + 'static>,
        >,
    >;
}

/// An abstract client for the REST service.
///
/// [`send_rest()`](RestClient::send_rest) has a default implementation which
/// wraps [`HttpClient::send_http()`] to handle a request as JSON in, JSON out.
#[trait_variant::make(Send)]
pub trait RestClient: HttpClient {
    /// The base URI of the service.
    fn base_uri(&self) -> String;
    /// Get the credential to attach to outgoing requests, if any.
    fn authorization_token(&self) -> impl Future<Output = Option<AuthorizationToken>> {
        async { None }
    }
    /// Send a REST request and decode the JSON response.
    fn send_rest<P, I, O>(&self, request: &RestRequest<P, I>) -> impl Future<Output = Result<O>>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
        // `Self` has to be `Sync` for the returned `Future` to be `Send`.
        Self: Sync,
    {
        send_rest(self, request)
    }
}

#[inline(always)]
async fn send_rest<P, I, O, C: RestClient + ?Sized>(
    client: &C,
    request: &RestRequest<P, I>,
) -> Result<O>
where
    P: Serialize + Send + Sync,
    I: Serialize + Send + Sync,
    O: DeserializeOwned + Send + Sync,
{
    let mut uri = client.base_uri();
    if !request.path.is_empty() {
        uri += "/";
        uri += &request.path;
    }
    // Query parameters
    if let Some(p) = &request.parameters {
        serde_html_form::to_string(p).map(|qs| {
            uri += "?";
            uri += &qs;
        })?;
    };
    let mut builder =
        Request::builder().method(&request.method).uri(&uri).header(Header::Accept, "application/json");
    // Headers
    if let Some(encoding) = &request.encoding {
        builder = builder.header(Header::ContentType, encoding);
    }
    if let Some(token) = client.authorization_token().await {
        builder = builder.header(token.header(), token);
    }
    // Body
    let body = if let Some(input) = &request.input {
        serde_json::to_vec(input)?
    } else {
        Vec::new()
    };
    // Send
    let (parts, body) =
        client.send_http(builder.body(body)?).await.map_err(Error::HttpClient)?.into_parts();
    if parts.status.is_success() {
        if parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |content_type| content_type.starts_with("application/json"))
        {
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(Error::UnexpectedContentType)
        }
    } else {
        Err(Error::RestResponse(RestError {
            status: parts.status,
            error: serde_json::from_slice::<ErrorResponseBody>(&body).ok(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, Method, StatusCode};
    use std::sync::Mutex;

    struct DummyClient {
        status: StatusCode,
        json: bool,
        body: Vec<u8>,
        token: Option<fn() -> AuthorizationToken>,
        requests: Mutex<Vec<(String, HeaderMap<HeaderValue>, Vec<u8>)>>,
    }

    impl DummyClient {
        fn new(status: StatusCode, json: bool, body: &str) -> Self {
            Self {
                status,
                json,
                body: body.as_bytes().to_vec(),
                token: None,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpClient for DummyClient {
        async fn send_http(
            &self,
            request: Request<Vec<u8>>,
        ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
        {
            self.requests.lock().expect("requests lock poisoned").push((
                request.uri().to_string(),
                request.headers().clone(),
                request.body().clone(),
            ));
            let mut builder = Response::builder().status(self.status);
            if self.json {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
            }
            Ok(builder.body(self.body.clone())?)
        }
    }

    impl RestClient for DummyClient {
        fn base_uri(&self) -> String {
            "https://api.example.com/api".into()
        }
        async fn authorization_token(&self) -> Option<AuthorizationToken> {
            self.token.map(|token| token())
        }
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
    struct Parameters {
        query: String,
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
    struct Input {
        address_line: String,
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
    struct Output {
        status_flag: String,
    }

    async fn run_procedure(client: &DummyClient, path: &str) -> Result<Output> {
        client
            .send_rest(&RestRequest::<(), _> {
                method: Method::POST,
                path: path.into(),
                parameters: None,
                input: Some(Input { address_line: "123 main st".into() }),
                encoding: Some(String::from("application/json")),
            })
            .await
    }

    #[tokio::test]
    async fn response_ok() {
        let client = DummyClient::new(StatusCode::OK, true, r#"{"status_flag":"V"}"#);
        let output = run_procedure(&client, "ca/correction").await.expect("must be ok");
        assert_eq!(output.status_flag, "V");
        let requests = client.requests.lock().expect("requests lock poisoned");
        let (uri, headers, body) = &requests[0];
        assert_eq!(uri, "https://api.example.com/api/ca/correction");
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(
            headers.get(http::header::ACCEPT),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(body.as_slice(), br#"{"address_line":"123 main st"}"#);
    }

    #[tokio::test]
    async fn empty_path_addresses_base_uri() {
        let client = DummyClient::new(StatusCode::OK, true, r#"{"status_flag":"V"}"#);
        let _ = client
            .send_rest::<(), (), Output>(&RestRequest {
                method: Method::GET,
                path: String::new(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await
            .expect("must be ok");
        let requests = client.requests.lock().expect("requests lock poisoned");
        assert_eq!(requests[0].0, "https://api.example.com/api");
    }

    #[tokio::test]
    async fn query_parameters_are_encoded() {
        let client = DummyClient::new(StatusCode::OK, true, r#"{"status_flag":"V"}"#);
        let _ = client
            .send_rest::<_, (), Output>(&RestRequest {
                method: Method::GET,
                path: "ca/query".into(),
                parameters: Some(Parameters { query: "main & king".into() }),
                input: None,
                encoding: None,
            })
            .await
            .expect("must be ok");
        let requests = client.requests.lock().expect("requests lock poisoned");
        assert_eq!(requests[0].0, "https://api.example.com/api/ca/query?query=main+%26+king");
    }

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let mut client = DummyClient::new(StatusCode::OK, true, r#"{"status_flag":"V"}"#);
        client.token = Some(|| AuthorizationToken::Bearer(String::from("jwt")));
        let _ = run_procedure(&client, "ca/correction").await.expect("must be ok");
        let requests = client.requests.lock().expect("requests lock poisoned");
        assert_eq!(
            requests[0].1.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer jwt"))
        );
    }

    #[tokio::test]
    async fn api_key_is_attached() {
        let mut client = DummyClient::new(StatusCode::OK, true, r#"{"status_flag":"V"}"#);
        client.token = Some(|| AuthorizationToken::ApiKey(String::from("secret-key")));
        let _ = run_procedure(&client, "ca/correction").await.expect("must be ok");
        let requests = client.requests.lock().expect("requests lock poisoned");
        assert_eq!(
            requests[0].1.get("x-api-key"),
            Some(&HeaderValue::from_static("secret-key"))
        );
        assert_eq!(requests[0].1.get(http::header::AUTHORIZATION), None);
    }

    #[tokio::test]
    async fn response_error_with_body() {
        let client = DummyClient::new(
            StatusCode::BAD_REQUEST,
            true,
            r#"{"error":"InvalidRequest","message":"postal code is malformed"}"#,
        );
        let error = run_procedure(&client, "ca/correction").await.expect_err("must be error");
        match &error {
            Error::RestResponse(err) => {
                assert_eq!(err.status, StatusCode::BAD_REQUEST);
                assert_eq!(
                    err.error,
                    Some(ErrorResponseBody {
                        error: Some(String::from("InvalidRequest")),
                        message: Some(String::from("postal code is malformed")),
                    })
                );
            }
            _ => panic!("must be Error::RestResponse, got {error:?}"),
        }
    }

    #[tokio::test]
    async fn response_error_without_body() {
        let client = DummyClient::new(StatusCode::INTERNAL_SERVER_ERROR, false, "");
        let error = run_procedure(&client, "ca/correction").await.expect_err("must be error");
        match &error {
            Error::RestResponse(err) => {
                assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(err.error, None);
            }
            _ => panic!("must be Error::RestResponse, got {error:?}"),
        }
    }

    #[tokio::test]
    async fn response_unexpected_content_type() {
        let client = DummyClient::new(StatusCode::OK, false, "<html></html>");
        let error = run_procedure(&client, "ca/correction").await.expect_err("must be error");
        match &error {
            Error::UnexpectedContentType => {}
            _ => panic!("must be Error::UnexpectedContentType, got {error:?}"),
        }
    }
}
