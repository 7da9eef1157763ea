use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Proxy, StatusCode,
};
use thiserror::Error;

use crate::{
    aoe4::{
        response::{Envelope, PlayerRecord},
        MatchType,
    },
    query::QueryDescriptor,
};

// transport failures are kept apart from protocol failures

#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(value)
    }
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to encode request payload: {0}")]
    Encode(serde_json::Error),
    #[error("Failed to reach the leaderboard service: {0}")]
    Transport(#[from] TransportError),
    #[error("unexpected status from remote service: {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(serde_json::Error, String),
    #[error("No response within {0:?}")]
    Timeout(Duration),
    #[error("no rating found for this match type and player: {match_type} / {player:?}")]
    NoRating { match_type: MatchType, player: String },
}

#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends one HTTP POST and hands back the status and body.
///
/// Implementations are shared between concurrent lookups and must be safe to
/// call from many tasks at once.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

/// Transport used by every request built without one, so they share a pool.
static SHARED_TRANSPORT: OnceLock<Arc<HttpTransport>> = OnceLock::new();

impl HttpTransport {
    pub fn shared() -> Result<Arc<Self>, reqwest::Error> {
        if let Some(transport) = SHARED_TRANSPORT.get() {
            return Ok(transport.clone());
        }
        let transport = Arc::new(Self::new()?);
        // a concurrent caller may have won the race, keep whichever got stored
        Ok(SHARED_TRANSPORT.get_or_init(|| transport).clone())
    }

    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Routes every request through `proxy` (http, https or socks5 url).
    pub fn with_proxy(proxy: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .proxy(Proxy::all(proxy)?)
            .build()?;
        Ok(Self { client })
    }
}

impl From<reqwest::Client> for HttpTransport {
    fn from(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .post(request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok(RawResponse { status, body })
    }
}

/// Connection settings shared by every query issued from one [`Request`].
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    endpoint: String,
    user_agent: Option<HeaderValue>,
    timeout: Option<Duration>,
}

impl Client {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        endpoint: String,
        user_agent: Option<HeaderValue>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            transport,
            endpoint,
            user_agent,
            timeout,
        }
    }

    pub fn encode(query: &QueryDescriptor) -> Result<Bytes, RequestError> {
        serde_json::to_vec(&query.to_payload())
            .map(Bytes::from)
            .map_err(RequestError::Encode)
    }

    pub async fn fetch(&self, query: &QueryDescriptor) -> Result<Envelope, RequestError> {
        let body = Self::encode(query)?;
        log::debug!(
            "querying {} {} for {:?}",
            query.match_type,
            query.team_size.map_or("-", |ts| ts.as_str()),
            query.search_player
        );
        self.send(body).await
    }

    /// Sends an already encoded payload, honouring the configured deadline.
    pub async fn send(&self, body: Bytes) -> Result<Envelope, RequestError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(body))
                .await
                .map_err(|_| RequestError::Timeout(limit))?,
            None => self.exchange(body).await,
        }
    }

    async fn exchange(&self, body: Bytes) -> Result<Envelope, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(user_agent) = &self.user_agent {
            headers.insert(USER_AGENT, user_agent.clone());
        }
        let request = OutgoingRequest {
            url: self.endpoint.clone(),
            headers,
            body,
        };

        let resp = self.transport.send(request).await?;
        log::debug!("leaderboard service answered {}", resp.status);
        match resp.status {
            StatusCode::OK => serde_json::from_slice(&resp.body).map_err(|err| {
                RequestError::Decode(err, String::from_utf8_lossy(&resp.body).into_owned())
            }),
            // the service answers 204 when nothing matches
            StatusCode::NO_CONTENT => Ok(Envelope::default()),
            other => Err(RequestError::Status(other)),
        }
    }
}

/// A validated leaderboard query bound to the client that will send it.
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) client: Client,
    pub(crate) query: QueryDescriptor,
}

impl Request {
    pub(crate) fn new(client: Client, query: QueryDescriptor) -> Self {
        Self { client, query }
    }

    pub fn query_descriptor(&self) -> &QueryDescriptor {
        &self.query
    }

    /// Leaderboard rows matching this query, empty when the service has none.
    pub async fn query(&self) -> Result<Vec<PlayerRecord>, RequestError> {
        let envelope = self.client.fetch(&self.query).await?;
        Ok(envelope.items)
    }

    /// Rating of the first row whose user id contains `user_id`.
    pub async fn query_elo(&self, user_id: &str) -> Result<i64, RequestError> {
        let envelope = self.client.fetch(&self.query).await?;
        if envelope.count > 0 {
            if let Some(player) = envelope.find_user(user_id) {
                return Ok(player.elo);
            }
        }
        Err(RequestError::NoRating {
            match_type: self.query.match_type,
            player: self.query.search_player.clone(),
        })
    }
}
