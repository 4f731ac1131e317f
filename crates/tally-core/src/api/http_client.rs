use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CoreError;
use crate::types::{Address, Transaction, TxId};

use super::types::{RawTransaction, TransactionCount};
use super::SpectreApi;

/// Spectre indexer REST client over HTTP(S).
///
/// Calls are strictly sequential. The client sets a connect and an overall
/// request timeout so a hung endpoint fails the run instead of blocking it
/// indefinitely; there are no automatic retries — the first transport
/// failure is fatal to the run.
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for an indexer base URL such as
    /// `https://api.spectre-network.org`.
    ///
    /// Only http/https schemes are accepted; a trailing slash is stripped.
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        let base_url = parse_base_url(base_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u64)],
    ) -> Result<T, CoreError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, query_params = query.len(), "api get");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(CoreError::Transport)?;
        decode(url, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "api post");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(CoreError::Transport)?;
        decode(url, response).await
    }
}

/// `POST /transactions/search` request body.
#[derive(serde::Serialize)]
struct SearchRequest<'a> {
    #[serde(rename = "transactionIds")]
    transaction_ids: &'a [TxId],
}

#[async_trait]
impl SpectreApi for HttpApiClient {
    async fn transaction_count(&self, address: &Address) -> Result<u64, CoreError> {
        let count: TransactionCount = self
            .get_json(&format!("addresses/{address}/transactions-count"), &[])
            .await?;
        Ok(count.total)
    }

    async fn transactions_page(
        &self,
        address: &Address,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, CoreError> {
        let raw: Vec<RawTransaction> = self
            .get_json(
                &format!("addresses/{address}/full-transactions"),
                &[("offset", offset), ("limit", limit)],
            )
            .await?;
        Ok(raw.into_iter().map(Transaction::from).collect())
    }

    async fn transactions_by_ids(&self, ids: &[TxId]) -> Result<Vec<Transaction>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<RawTransaction> = self
            .post_json(
                "transactions/search",
                &SearchRequest {
                    transaction_ids: ids,
                },
            )
            .await?;
        Ok(raw.into_iter().map(Transaction::from).collect())
    }
}

async fn decode<T: DeserializeOwned>(
    url: String,
    response: reqwest::Response,
) -> Result<T, CoreError> {
    let status = response.status();
    let body = response.text().await.map_err(CoreError::Transport)?;
    debug!(%url, %status, body_len = body.len(), "api response");

    if !status.is_success() {
        return Err(CoreError::Status { status, url, body });
    }

    serde_json::from_str(&body).map_err(|e| CoreError::InvalidResponse(format!("decode {url}: {e}")))
}

fn parse_base_url(base_url: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(base_url)
        .map_err(|e| CoreError::InvalidConfig(format!("invalid api base url `{base_url}`: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(base_url.trim_end_matches('/').to_owned()),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported api url scheme `{other}`; expected http or https"
        ))),
    }
}
