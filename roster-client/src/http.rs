//! HTTP implementation of [`StudentApi`].
//!
//! Uses a pooled hyper client. The connector speaks both `http://` and
//! `https://` so the same client works against the public API and a local
//! mock server.

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use roster_core::{decode_student, decode_student_list, Student, StudentDraft, StudentId};

use crate::{ClientConfig, ClientError, StudentApi};

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Student API client over HTTP(S).
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpStudentApi {
    client: HttpsClient,
    config: ClientConfig,
}

impl HttpStudentApi {
    /// Create a client for the API described by `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self { client, config }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the body of a 2xx response.
    ///
    /// The whole exchange, body included, is bounded by the configured timeout.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Bytes, ClientError> {
        let uri: Uri = url
            .parse()
            .map_err(|e| ClientError::Transport(format!("invalid URI {url}: {e}")))?;

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header(ACCEPT, "application/json");

        let body_bytes = body.map(Bytes::from).unwrap_or_default();
        if !body_bytes.is_empty() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }

        let req = builder
            .body(Full::new(body_bytes))
            .map_err(|e| ClientError::Transport(format!("build request: {e}")))?;

        let started = Instant::now();
        let exchange = async {
            let resp = self
                .client
                .request(req)
                .await
                .map_err(|e| ClientError::Transport(format!("send request: {e}")))?;
            let status = resp.status();
            let bytes = resp
                .into_body()
                .collect()
                .await
                .map_err(|e| ClientError::Transport(format!("read response body: {e}")))?
                .to_bytes();
            Ok::<(StatusCode, Bytes), ClientError>((status, bytes))
        };

        let (status, bytes) = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| {
                tracing::warn!(%method, %url, "student api request timed out");
                ClientError::Timeout(self.config.timeout)
            })??;

        tracing::info!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "student api request"
        );

        if !status.is_success() {
            return Err(ClientError::from_status(status));
        }

        Ok(bytes)
    }

    fn encode(draft: &StudentDraft) -> Result<Vec<u8>, ClientError> {
        serde_json::to_vec(draft).map_err(|e| ClientError::Transport(format!("encode body: {e}")))
    }
}

impl fmt::Debug for HttpStudentApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpStudentApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let body = self.send(Method::GET, &self.config.students_url(), None).await?;
        Ok(decode_student_list(&body)?)
    }

    async fn get(&self, id: &StudentId) -> Result<Student, ClientError> {
        let body = self.send(Method::GET, &self.config.student_url(id)?, None).await?;
        Ok(decode_student(&body)?)
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ClientError> {
        let payload = Self::encode(draft)?;
        let body = self
            .send(Method::POST, &self.config.students_url(), Some(payload))
            .await?;
        Ok(decode_student(&body)?)
    }

    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> Result<Student, ClientError> {
        let payload = Self::encode(draft)?;
        let body = self
            .send(Method::PUT, &self.config.student_url(id)?, Some(payload))
            .await?;
        Ok(decode_student(&body)?)
    }

    async fn delete(&self, id: &StudentId) -> Result<(), ClientError> {
        self.send(Method::DELETE, &self.config.student_url(id)?, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn unreachable_api() -> HttpStudentApi {
        // Port 9 (discard) on loopback is closed on any sane test host.
        let config = match ClientConfig::new("http://127.0.0.1:9") {
            Ok(c) => c.with_timeout(Duration::from_secs(2)),
            Err(e) => panic!("unexpected config error: {e}"),
        };
        HttpStudentApi::new(config)
    }

    #[tokio::test]
    async fn list_against_closed_port_is_transport_error() {
        let api = unreachable_api();
        let result = api.list().await;
        assert!(
            matches!(result, Err(ClientError::Transport(_) | ClientError::Timeout(_))),
            "connection failure must surface as a transport error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn dot_segment_id_never_reaches_the_network() {
        let api = unreachable_api();
        let dots: StudentId = match serde_json::from_str("\"..\"") {
            Ok(id) => id,
            Err(e) => panic!("wire id must decode: {e}"),
        };
        let result = api.delete(&dots).await;
        assert!(matches!(result, Err(ClientError::InvalidId { .. })), "got {result:?}");
    }

    #[test]
    fn debug_output_shows_config_only() {
        let api = HttpStudentApi::new(ClientConfig::default());
        let debug = format!("{api:?}");
        assert!(debug.contains("proweb.leoproti.com.br"), "debug must show the base url: {debug}");
    }
}
