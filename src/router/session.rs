//! Authenticated SOAP client for the router.

use std::fmt;
use std::net::Ipv6Addr;

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use url::Url;

use super::soap::{Envelope, SoapAction, TemplateData, parse_envelope, render_request};
use super::{DeviceSource, EnvelopeError, HttpClient, HttpError, HttpRequest, ReqwestClient, RouterError};
use crate::device::{AttachedDevice, decode_devices};

/// Session identifier accepted by every known firmware.
///
/// The router never issues per-login tokens, so this fixed value is used
/// unless the caller overrides it.
pub const DEFAULT_SESSION_ID: &str = "A7D88AE69687E58D9A00";

/// Port the router's SOAP service listens on.
pub const DEFAULT_PORT: u16 = 5000;

const SOAP_PATH: &str = "/soap/server_sa";
const SOAP_ACTION: HeaderName = HeaderName::from_static("soapaction");
const XML_CONTENT_TYPE: HeaderValue = HeaderValue::from_static("text/xml; charset=\"utf-8\"");

/// Builds the SOAP endpoint URL for a router.
///
/// IPv6 literals are bracketed automatically.
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if `host` cannot be used as a URL host.
pub fn endpoint_url(host: &str, port: u16) -> Result<Url, HttpError> {
    let authority = if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]")
    } else {
        host.to_string()
    };

    let url = Url::parse(&format!("http://{authority}:{port}{SOAP_PATH}"))
        .map_err(|e| HttpError::InvalidUrl(format!("{host}:{port}: {e}")))?;

    // Hosts like "router/x" parse, but change the request path
    if url.path() != SOAP_PATH || url.query().is_some() || url.fragment().is_some() {
        return Err(HttpError::InvalidUrl(format!(
            "{host}:{port}: host must not contain a path"
        )));
    }

    Ok(url)
}

/// Client for the router's SOAP management interface.
///
/// Holds the connection parameters and session credentials. No connection
/// is kept open between calls; every operation is a single HTTP POST.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use netgear_presence::router::RouterClient;
///
/// # async fn example() -> Result<(), netgear_presence::router::RouterError> {
/// let client = RouterClient::new("192.168.1.1", "admin", "password");
/// client.login().await?;
/// for device in client.fetch_devices().await? {
///     println!("{device}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct RouterClient<H = ReqwestClient> {
    http: H,
    session_id: String,
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl RouterClient<ReqwestClient> {
    /// Creates a client with the default port, session id, and HTTP client.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_http_client(ReqwestClient::new(), host, username, password)
    }
}

impl<H> RouterClient<H> {
    /// Creates a client using the given HTTP client.
    #[must_use]
    pub fn with_http_client(
        http: H,
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http,
            session_id: DEFAULT_SESSION_ID.to_string(),
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Sets the SOAP service port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the session identifier sent with every request.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Returns the router host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the SOAP service port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the login username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the SOAP endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the host is not a valid URL host.
    pub fn endpoint(&self) -> Result<Url, HttpError> {
        endpoint_url(&self.host, self.port)
    }
}

impl<H: HttpClient> RouterClient<H> {
    /// Authenticates the session with the stored credentials.
    ///
    /// Logging in again is harmless; the session id does not change.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] when:
    /// - The request cannot be delivered ([`RouterError::Transport`])
    /// - The response is not a valid envelope ([`RouterError::Envelope`])
    /// - The router answers with a nonzero code ([`RouterError::AuthFailed`])
    pub async fn login(&self) -> Result<(), RouterError> {
        let data = TemplateData {
            session_id: &self.session_id,
            username: Some(&self.username),
            password: Some(&self.password),
        };

        let envelope = self.soap(SoapAction::Authenticate, &data).await?;
        if envelope.response_code != 0 {
            return Err(RouterError::AuthFailed {
                code: envelope.response_code,
            });
        }

        Ok(())
    }

    /// Fetches the devices currently attached to the router.
    ///
    /// The router only answers this for an authenticated session, so call
    /// [`Self::login`] first.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] when:
    /// - The request cannot be delivered ([`RouterError::Transport`])
    /// - The response is not a valid envelope ([`RouterError::Envelope`])
    /// - The router answers with a nonzero code ([`RouterError::FetchFailed`])
    /// - The device list is malformed ([`RouterError::Records`])
    pub async fn fetch_devices(&self) -> Result<Vec<AttachedDevice>, RouterError> {
        let data = TemplateData {
            session_id: &self.session_id,
            username: None,
            password: None,
        };

        let envelope = self.soap(SoapAction::GetAttachDevice, &data).await?;
        if envelope.response_code != 0 {
            return Err(RouterError::FetchFailed {
                code: envelope.response_code,
            });
        }

        let devices = envelope
            .attached_devices
            .ok_or(EnvelopeError::MissingElement("NewAttachDevice"))?;

        Ok(decode_devices(&devices)?)
    }

    /// Renders, sends, and decodes one SOAP exchange.
    async fn soap(
        &self,
        action: SoapAction,
        data: &TemplateData<'_>,
    ) -> Result<Envelope, RouterError> {
        let body = render_request(action, data)?;
        let request = HttpRequest::post(self.endpoint()?)
            .with_header(SOAP_ACTION, HeaderValue::from_static(action.urn()))
            .with_header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .with_body(body.into_bytes());

        tracing::debug!(%action, host = %self.host, port = self.port, "Sending SOAP request");
        let response = self.http.request(request).await?;

        if !response.is_success() {
            tracing::debug!(%action, status = %response.status, "Router answered with non-success HTTP status");
        }

        Ok(parse_envelope(&response.body_text())?)
    }
}

impl<H: HttpClient> DeviceSource for RouterClient<H> {
    async fn login(&self) -> Result<(), RouterError> {
        Self::login(self).await
    }

    async fn fetch_devices(&self) -> Result<Vec<AttachedDevice>, RouterError> {
        Self::fetch_devices(self).await
    }
}

impl<H> fmt::Debug for RouterClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterClient")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("session_id", &self.session_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
