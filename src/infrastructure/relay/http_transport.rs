//! HTTP transport to a remote relay endpoint.

use async_trait::async_trait;
use reqwest::Response;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

use crate::application::relay_protocol::{RelayRequest, RelayResponse};
use crate::domain::entities::Submission;
use crate::domain::ports::{RelayOutcome, RelayTransport, TransportError};

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}/{} (contact form client)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
});

/// How the submission is carried to the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayMode {
    /// `GET` with query parameters; the response is never read and every
    /// dispatched request is reported as delivered.
    Get,
    /// `POST` with a JSON body; the relay's `{ success, message }` answer is
    /// read and returned.
    #[default]
    Post,
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayMode::Get => f.write_str("get"),
            RelayMode::Post => f.write_str("post"),
        }
    }
}

impl FromStr for RelayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(RelayMode::Get),
            "post" => Ok(RelayMode::Post),
            other => Err(format!("relay mode must be 'get' or 'post', got '{other}'")),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Http(e.to_string())
    }
}

/// Sends submissions to a relay over HTTP.
///
/// One request per [`RelayTransport::deliver`] call. No timeout beyond the
/// client's defaults and no retry.
pub struct HttpRelayTransport {
    client: reqwest::Client,
    endpoint: Url,
    mode: RelayMode,
}

impl HttpRelayTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, mode: RelayMode) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint,
            mode,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    /// Asks the relay for its status with a parameterless `GET`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the relay is unreachable or answers
    /// with something other than a status payload.
    pub async fn ping(&self) -> Result<RelayResponse, TransportError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        read_relay_response(response).await
    }

    fn query_url(&self, request: &RelayRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn deliver(&self, submission: &Submission) -> Result<RelayOutcome, TransportError> {
        let request = RelayRequest::from(submission);

        match self.mode {
            RelayMode::Get => {
                match self.client.get(self.query_url(&request)).send().await {
                    Ok(response) => {
                        debug!(status = %response.status(), "Relay request dispatched");
                    }
                    Err(e) => {
                        // Without a readable response a failed request looks the same as a
                        // delivered one to the user.
                        warn!(error = %e, "Relay request failed in GET mode, reporting as dispatched");
                    }
                }
                Ok(RelayOutcome::Dispatched)
            }
            RelayMode::Post => {
                let response = self
                    .client
                    .post(self.endpoint.clone())
                    .json(&request)
                    .send()
                    .await?;

                let RelayResponse { success, message } = read_relay_response(response).await?;
                Ok(RelayOutcome::Confirmed { success, message })
            }
        }
    }
}

/// Reads a `{ success, message }` body whatever the HTTP status.
async fn read_relay_response(response: Response) -> Result<RelayResponse, TransportError> {
    let status = response.status();
    let body = response.bytes().await?;

    serde_json::from_slice::<RelayResponse>(&body).map_err(|e| {
        debug!(status = %status, error = %e, "Relay body is not a status payload");
        TransportError::UnreadableResponse {
            status: status.as_u16(),
        }
    })
}
