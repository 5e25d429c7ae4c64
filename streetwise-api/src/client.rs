#![doc = "Service namespaces for the address API."]
use crate::{ca, info, us};
use http::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use streetwise_rest::{Error, RestClient, RestRequest};

/// Standalone client struct for the service.
///
/// Requests issued through this client are only authenticated if the
/// underlying [`RestClient`] attaches a credential itself; most applications
/// want the [`Agent`](crate::agent::Agent) instead, which manages the token
/// lifecycle.
pub struct ServiceClient<T>
where
    T: RestClient + Send + Sync,
{
    pub service: Service<T>,
}

impl<T> ServiceClient<T>
where
    T: RestClient + Send + Sync,
{
    pub fn new(rest: T) -> Self {
        Self { service: Service::new(Arc::new(rest)) }
    }
}

/// The service namespaces.
pub struct Service<T>
where
    T: RestClient + Send + Sync,
{
    /// Canadian address operations.
    pub ca: CaService<T>,
    /// US address operations.
    pub us: UsService<T>,
    rest: Arc<T>,
}

impl<T> Service<T>
where
    T: RestClient + Send + Sync,
{
    pub fn new(rest: Arc<T>) -> Self {
        Self { ca: CaService::new(Arc::clone(&rest)), us: UsService::new(Arc::clone(&rest)), rest }
    }
    /// Build, license and database date information for the service.
    pub async fn info(&self) -> Result<info::Output, Error> {
        self.rest
            .send_rest(&RestRequest::<(), ()> {
                method: Method::GET,
                path: info::PATH.into(),
                parameters: None,
                input: None,
                encoding: None,
            })
            .await
    }
}

async fn procedure<T, I, O>(rest: &Arc<T>, path: &str, input: I) -> Result<O, Error>
where
    T: RestClient + Send + Sync,
    I: Serialize + Send + Sync,
    O: DeserializeOwned + Send + Sync,
{
    rest.send_rest(&RestRequest::<(), _> {
        method: Method::POST,
        path: path.into(),
        parameters: None,
        input: Some(input),
        encoding: Some(String::from("application/json")),
    })
    .await
}

/// Canadian address operations.
pub struct CaService<T>
where
    T: RestClient + Send + Sync,
{
    rest: Arc<T>,
}

impl<T> CaService<T>
where
    T: RestClient + Send + Sync,
{
    fn new(rest: Arc<T>) -> Self {
        Self { rest }
    }
    /// Correct an address against the Canada Post database.
    pub async fn correction(&self, input: ca::correction::Input) -> Result<ca::correction::Output, Error> {
        procedure(&self.rest, ca::correction::PATH, input).await
    }
    /// Parse an address into its discrete components.
    pub async fn parse(&self, input: ca::parse::Input) -> Result<ca::parse::Output, Error> {
        procedure(&self.rest, ca::parse::PATH, input).await
    }
    /// Search for address records matching the input.
    pub async fn search(&self, input: ca::search::Input) -> Result<ca::search::Output, Error> {
        procedure(&self.rest, ca::search::PATH, input).await
    }
    /// Validate an address without correcting it.
    pub async fn validate(&self, input: ca::validate::Input) -> Result<ca::validate::Output, Error> {
        procedure(&self.rest, ca::validate::PATH, input).await
    }
    /// Fetch a single address by postal code and street number.
    pub async fn fetch(&self, input: ca::fetch::Input) -> Result<ca::fetch::Output, Error> {
        procedure(&self.rest, ca::fetch::PATH, input).await
    }
    /// Format an address into mailing-label lines.
    pub async fn format(&self, input: ca::format::Input) -> Result<ca::format::Output, Error> {
        procedure(&self.rest, ca::format::PATH, input).await
    }
    /// Run a low-level database query function.
    pub async fn query(&self, input: ca::query::Input) -> Result<ca::query::Output, Error> {
        procedure(&self.rest, ca::query::PATH, input).await
    }
    /// Suggest addresses for a partial input line.
    pub async fn typeahead(&self, input: ca::typeahead::Input) -> Result<ca::typeahead::Output, Error> {
        procedure(&self.rest, ca::typeahead::PATH, input).await
    }
    /// Typeahead variant returning full data records.
    pub async fn typeahead_rec(&self, input: ca::typeahead::Input) -> Result<ca::typeahead::Output, Error> {
        procedure(&self.rest, ca::typeahead::REC_PATH, input).await
    }
    /// Fetch the full address behind a typeahead suggestion.
    pub async fn typeahead_fetch(
        &self,
        input: ca::typeahead::fetch::Input,
    ) -> Result<ca::typeahead::fetch::Output, Error> {
        procedure(&self.rest, ca::typeahead::fetch::PATH, input).await
    }
}

/// US address operations.
pub struct UsService<T>
where
    T: RestClient + Send + Sync,
{
    rest: Arc<T>,
}

impl<T> UsService<T>
where
    T: RestClient + Send + Sync,
{
    fn new(rest: Arc<T>) -> Self {
        Self { rest }
    }
    /// Correct an address against the USPS database.
    pub async fn correction(&self, input: us::correction::Input) -> Result<us::correction::Output, Error> {
        procedure(&self.rest, us::correction::PATH, input).await
    }
    /// Parse an address into its discrete components.
    pub async fn parse(&self, input: us::parse::Input) -> Result<us::parse::Output, Error> {
        procedure(&self.rest, us::parse::PATH, input).await
    }
    /// Search for address records matching the input.
    pub async fn search(&self, input: us::search::Input) -> Result<us::search::Output, Error> {
        procedure(&self.rest, us::search::PATH, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Request, Response, StatusCode};
    use streetwise_rest::HttpClient;

    struct DummyClient;

    impl HttpClient for DummyClient {
        async fn send_http(
            &self,
            _request: Request<Vec<u8>>,
        ) -> Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>> {
            Ok(Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&streetwise_rest::ErrorResponseBody {
                    error: Some(String::from("Unauthorized")),
                    message: Some(String::from("Authorization has been denied for this request.")),
                })?)?)
        }
    }

    impl RestClient for DummyClient {
        fn base_uri(&self) -> String {
            "http://localhost:8080/api/1".into()
        }
    }

    #[test]
    fn test_new() {
        let _ = ServiceClient::new(DummyClient);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = ServiceClient::new(DummyClient);
        let result = client
            .service
            .ca
            .correction(ca::AddressRequest {
                address_line: Some(String::from("123 main st")),
                ..Default::default()
            })
            .await
            .expect_err("response should be error");
        match &result {
            Error::RestResponse(err) => {
                assert_eq!(err.status, StatusCode::UNAUTHORIZED);
                assert_eq!(
                    err.error,
                    Some(streetwise_rest::ErrorResponseBody {
                        error: Some(String::from("Unauthorized")),
                        message: Some(String::from(
                            "Authorization has been denied for this request."
                        )),
                    })
                );
            }
            _ => panic!("unexpected error type"),
        }
    }
}
