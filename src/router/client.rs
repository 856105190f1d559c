//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. No request timeout is configured by default;
/// use [`ReqwestClient::from_client`] to supply one.
///
/// # Example
///
/// ```no_run
/// use netgear_presence::router::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("http://192.168.1.1:5000/soap/server_sa")?;
/// let request = HttpRequest::post(url).with_body(b"<envelope/>".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else {
                    HttpError::Connection(Box::new(e))
                }
            })?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_creates_client() {
        let client = ReqwestClient::default();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_closed_port_returns_connection_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ReqwestClient::from_client(
            reqwest::Client::builder().no_proxy().build().unwrap(),
        );
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/soap/server_sa")).unwrap();

        let result = client.request(HttpRequest::post(url)).await;

        assert!(matches!(result, Err(HttpError::Connection(_))));
    }
}
