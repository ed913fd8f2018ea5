//! Client layer: sends [`ApiRequest`]s and classifies 5sim responses.

mod endpoints;
#[cfg(test)]
mod fake;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use url::Url;

use crate::domain::{ApiToken, ValidationError};
use crate::transport::{
    ApiRequest, HttpMethod, SmsCheckStatus, decode_sms_check_status, is_sms_check,
};

const DEFAULT_BASE_URL: &str = "https://5sim.net/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const SUCCESS_BODY: &str = "success";
const NO_FREE_PHONES_BODY: &str = "no free phones";

const TOKEN_ENV: &str = "FIVESIM_API_TOKEN";
const BASE_URL_ENV: &str = "FIVESIM_BASE_URL";
const TIMEOUT_ENV: &str = "FIVESIM_TIMEOUT_SECS";
const PROXY_ENV: &str = "FIVESIM_PROXY";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpRequest<'a> {
    method: HttpMethod,
    url: Url,
    token: &'a str,
    body: Option<&'a Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug)]
enum TransportFailure {
    Timeout(BoxError),
    Other(BoxError),
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(err) => write!(f, "timed out: {err}"),
            Self::Other(err) => err.fmt(f),
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(Box::new(err))
        } else {
            Self::Other(Box::new(err))
        }
    }
}

impl From<TransportFailure> for FiveSimError {
    fn from(value: TransportFailure) -> Self {
        match value {
            TransportFailure::Timeout(err) => Self::Timeout(err),
            TransportFailure::Other(err) => Self::Transport(err),
        }
    }
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    timeout: Duration,
    proxy: Option<reqwest::Proxy>,
    user_agent: Option<String>,
}

impl ReqwestTransport {
    /// Fresh HTTP session for a single call; idle connections are not kept.
    fn session(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0);
        builder = match &self.proxy {
            Some(proxy) => builder.proxy(proxy.clone()),
            // Environment proxy variables are ignored unless a proxy is configured.
            None => builder.no_proxy(),
        };
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder.build()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let session = self.session()?;
            let mut builder = match request.method {
                HttpMethod::Get => session.get(request.url),
                HttpMethod::Post => session.post(request.url),
                HttpMethod::Delete => session.delete(request.url),
            }
            .bearer_auth(request.token);
            if let Some(body) = request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`FiveSimClient`].
///
/// Besides transport and parse failures, several variants are ordinary business
/// outcomes (`NoSmsYet`, `OrderCancelled`, ...). Match on the ones you handle and
/// propagate the rest.
pub enum FiveSimError {
    /// HTTP client / transport failure (DNS, TLS, connect, body read, client setup).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The configured request timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// Server answered with a status other than 200.
    #[error("request failed with HTTP status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Body was the literal `no free phones`.
    #[error("no free phones")]
    NoNumbersAvailable,

    /// Body was neither a known literal nor the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// Order is waiting for an SMS (`PENDING`, or `RECEIVED` with no messages yet).
    #[error("no SMS received yet")]
    NoSmsYet,

    #[error("order was cancelled")]
    OrderCancelled,

    #[error("order timed out")]
    OrderTimedOut,

    #[error("order is finished")]
    OrderFinished,

    #[error("order number was banned")]
    OrderBanned,

    /// Any other order status.
    #[error("SMS not received (order status {status})")]
    SmsNotReceived { status: String },

    /// Base URL plus resource did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl FiveSimError {
    /// `true` when polling the order again later may yield an SMS.
    pub fn is_sms_pending(&self) -> bool {
        matches!(self, Self::NoSmsYet)
    }

    /// `true` for orders that reached a terminal state.
    pub fn is_order_closed(&self) -> bool {
        matches!(
            self,
            Self::OrderCancelled | Self::OrderTimedOut | Self::OrderFinished | Self::OrderBanned
        )
    }
}

#[derive(Debug, Clone)]
/// Builder for [`FiveSimClient`].
///
/// Use this to customize the base URL, timeout, proxy, user-agent or request logging.
pub struct FiveSimClientBuilder {
    token: ApiToken,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    user_agent: Option<String>,
    request_logging: bool,
}

impl FiveSimClientBuilder {
    /// Create a builder with the default base URL and a 15 second timeout.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: None,
            request_logging: true,
        }
    }

    /// Read settings from the environment.
    ///
    /// - `FIVESIM_API_TOKEN` (required)
    /// - `FIVESIM_BASE_URL`
    /// - `FIVESIM_TIMEOUT_SECS` (whole seconds)
    /// - `FIVESIM_PROXY`
    pub fn from_env() -> Result<Self, FiveSimError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FiveSimError> {
        let token = ApiToken::new(lookup(TOKEN_ENV).unwrap_or_default())?;
        let mut builder = Self::new(token);

        if let Some(base_url) = non_blank(lookup(BASE_URL_ENV)) {
            builder = builder.base_url(base_url);
        }
        if let Some(raw) = non_blank(lookup(TIMEOUT_ENV)) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidTimeout { input: raw.clone() })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(proxy) = non_blank(lookup(PROXY_ENV)) {
            builder = builder.proxy(proxy);
        }
        Ok(builder)
    }

    /// Override the API base URL. Resources are appended to it verbatim,
    /// so it normally ends with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Route every request through this HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Emit a `tracing` DEBUG event per request/response pair (on by default).
    pub fn request_logging(mut self, enabled: bool) -> Self {
        self.request_logging = enabled;
        self
    }

    /// Build a [`FiveSimClient`], validating the base URL and proxy.
    pub fn build(self) -> Result<FiveSimClient, FiveSimError> {
        Url::parse(&self.base_url).map_err(FiveSimError::InvalidUrl)?;
        let proxy = self
            .proxy
            .as_deref()
            .map(reqwest::Proxy::all)
            .transpose()
            .map_err(|err| FiveSimError::Transport(Box::new(err)))?;

        Ok(FiveSimClient {
            token: self.token,
            base_url: self.base_url,
            request_logging: self.request_logging,
            http: Arc::new(ReqwestTransport {
                timeout: self.timeout,
                proxy,
                user_agent: self.user_agent,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level 5sim client.
///
/// Every call opens its own HTTP session, sends one request with
/// `Authorization: Bearer <token>` and classifies the response. There is no
/// retry; failures, including business states such as [`FiveSimError::NoSmsYet`],
/// are returned to the caller as-is.
pub struct FiveSimClient {
    token: ApiToken,
    base_url: String,
    request_logging: bool,
    http: Arc<dyn HttpTransport>,
}

impl FiveSimClient {
    /// Create a client with default settings (`https://5sim.net/v1/`, 15 s timeout).
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_logging: true,
            http: Arc::new(ReqwestTransport {
                timeout: DEFAULT_TIMEOUT,
                proxy: None,
                user_agent: None,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ApiToken) -> FiveSimClientBuilder {
        FiveSimClientBuilder::new(token)
    }

    /// Send one request and classify the response.
    ///
    /// Errors:
    /// - [`FiveSimError::RequestFailed`] for any HTTP status other than 200,
    /// - [`FiveSimError::NoNumbersAvailable`] for the `no free phones` body,
    /// - [`FiveSimError::MalformedResponse`] when the body is not JSON,
    /// - order-state variants for `user/check/{id}` resources.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, FiveSimError> {
        let url = request
            .url(&self.base_url)
            .map_err(FiveSimError::InvalidUrl)?;
        let sent = self
            .http
            .send(HttpRequest {
                method: request.method(),
                url,
                token: self.token.as_str(),
                body: request.body(),
            })
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(failure) => {
                if self.request_logging {
                    tracing::debug!(
                        method = request.method().as_str(),
                        resource = request.resource(),
                        query = ?request.query(),
                        body = request.body().map(tracing::field::display),
                        error = %failure,
                        "5sim request failed"
                    );
                }
                return Err(failure.into());
            }
        };

        if self.request_logging {
            tracing::debug!(
                method = request.method().as_str(),
                resource = request.resource(),
                query = ?request.query(),
                body = request.body().map(tracing::field::display),
                status = response.status,
                text = %response.body,
                "5sim request"
            );
        }

        classify_response(request.resource(), response)
    }
}

fn classify_response(resource: &str, response: HttpResponse) -> Result<Value, FiveSimError> {
    if response.status != 200 {
        return Err(FiveSimError::RequestFailed {
            status: response.status,
            body: response.body,
        });
    }

    let value = match response.body.as_str() {
        SUCCESS_BODY => return Ok(json!({ "success": true })),
        NO_FREE_PHONES_BODY => return Err(FiveSimError::NoNumbersAvailable),
        text => serde_json::from_str::<Value>(text).map_err(FiveSimError::MalformedResponse)?,
    };

    if !is_sms_check(resource) {
        return Ok(value);
    }

    match decode_sms_check_status(&value).map_err(FiveSimError::MalformedResponse)? {
        SmsCheckStatus::Pending => Err(FiveSimError::NoSmsYet),
        SmsCheckStatus::Canceled => Err(FiveSimError::OrderCancelled),
        SmsCheckStatus::Timeout => Err(FiveSimError::OrderTimedOut),
        SmsCheckStatus::Finished => Err(FiveSimError::OrderFinished),
        SmsCheckStatus::Banned => Err(FiveSimError::OrderBanned),
        SmsCheckStatus::Other(status) => Err(FiveSimError::SmsNotReceived { status }),
        SmsCheckStatus::Received { has_sms: false } => Err(FiveSimError::NoSmsYet),
        SmsCheckStatus::Received { has_sms: true } => Ok(value),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
