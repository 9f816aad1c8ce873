//! Travis CI HTTP client.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use travis_core::error::{Error, InvalidInputError, ProtocolError, TransportError};
use travis_core::{ApiToken, ApiUrl};

use crate::endpoints::TravisErrorResponse;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "TravisActivate/1.0";

const TRAVIS_API_VERSION: HeaderName = HeaderName::from_static("travis-api-version");

/// Which header set a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// `Travis-API-Version: 3`, used for everything but settings.
    V3,
    /// `application/vnd.travis-ci.2+json`, required by the settings endpoint.
    Legacy,
}

/// HTTP client bound to one API base URL and one token.
#[derive(Clone)]
pub struct TravisClient {
    client: reqwest::Client,
    api: ApiUrl,
    v3_headers: HeaderMap,
    legacy_headers: HeaderMap,
}

impl TravisClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Fails if the token or user agent contain characters that are not
    /// allowed in an HTTP header, or if the TLS backend cannot initialise.
    pub fn new(api: ApiUrl, token: &ApiToken, user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            api,
            v3_headers: v3_headers(token)?,
            legacy_headers: legacy_headers(token)?,
        })
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET a JSON resource.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<Q, R>(&self, path: &str, query: Option<&Q>) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");
        trace!(?query, "query parameters");

        let mut request = self.request(Method::GET, &url, ApiVersion::V3);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Send a request whose response body is not needed.
    ///
    /// Any 2xx status is success; the body is read only to report errors.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        version: ApiVersion,
    ) -> Result<(), Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.api.endpoint(path);
        debug!(%method, %url, ?version, "send");
        trace!(?body, "request body");

        let mut request = self.request(method, &url, version);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    fn request(&self, method: Method, url: &str, version: ApiVersion) -> reqwest::RequestBuilder {
        let headers = match version {
            ApiVersion::V3 => self.v3_headers.clone(),
            ApiVersion::Legacy => self.legacy_headers.clone(),
        };
        self.client.request(method, url).headers(headers)
    }

    /// Decode a success body or turn a failure into a [`ProtocolError`].
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let text = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&text).map_err(|e| {
            TransportError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Keep the raw body, and lift `error_type`/`error_message` out of it
    /// when it is a Travis error document.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let error = match serde_json::from_str::<TravisErrorResponse>(&text) {
            Ok(body) => ProtocolError::new(status, body.error_type, body.error_message),
            Err(_) => ProtocolError::new(status, None, None),
        };
        error.with_body(text)
    }
}

impl std::fmt::Debug for TravisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravisClient")
            .field("api", &self.api)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

fn v3_headers(token: &ApiToken) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(TRAVIS_API_VERSION, HeaderValue::from_static("3"));
    headers.insert(AUTHORIZATION, auth_value(&format!("token {}", token.as_str()))?);
    Ok(headers)
}

/// The v2 surface expects the token quoted.
fn legacy_headers(token: &ApiToken) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.travis-ci.2+json"),
    );
    headers.insert(
        AUTHORIZATION,
        auth_value(&format!("token \"{}\"", token.as_str()))?,
    );
    Ok(headers)
}

fn auth_value(value: &str) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(value).map_err(|_| InvalidInputError::Other {
        message: "API token contains characters not allowed in an HTTP header".to_string(),
    })?;
    value.set_sensitive(true);
    Ok(value)
}

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}
