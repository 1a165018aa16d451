//! Exchange API client implementation
//!
//! Every operation goes through [ExchangeClient::execute], which reads the
//! verb and path from the [Endpoint] table, attaches the authorization and
//! JSON body and decodes the response.

use {
    crate::{
        models::{
            ExchangeRates,
            GraphDataPoints,
            InsightsData,
            ListingsData,
            Token,
            Transaction,
            User,
        },
        AuthRequirement,
        Authorization,
        Endpoint,
        ExchangeApi,
        ExchangeError,
    },
    log::{debug, warn},
    reqwest::{header::AUTHORIZATION, Client, Url},
    serde::{de::DeserializeOwned, Serialize},
    serde_json::Value,
};

/// Address of a locally running exchange backend.
pub const DEFAULT_EXCHANGE_URL: &str = "http://127.0.0.1:5000";

/// Builder for [ExchangeClient] configuration
pub struct ExchangeClientBuilder {
    client: Client,
    base_url: String,
}

impl Default for ExchangeClientBuilder {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_EXCHANGE_URL.to_string(),
        }
    }
}

impl ExchangeClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the base URL every endpoint path is appended to
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Build the [ExchangeClient]. Fails if the base URL is not an absolute
    /// `http` or `https` URL, or if it carries a query or fragment that the
    /// endpoint paths could not be appended to.
    pub fn build(self) -> Result<ExchangeClient, ExchangeError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ExchangeError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExchangeError::InvalidBaseUrl(format!(
                "{}: unsupported scheme '{}'",
                self.base_url,
                url.scheme()
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ExchangeError::InvalidBaseUrl(format!(
                "{}: query and fragment are not supported",
                self.base_url
            )));
        }

        Ok(ExchangeClient {
            client: self.client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Client for the currency exchange backend. Cloning is cheap, the
/// underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ExchangeClient {
    client: Client,
    base_url: String,
}

impl Default for ExchangeClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_EXCHANGE_URL.to_string(),
        }
    }
}

impl ExchangeClient {
    /// Create a client bound to [DEFAULT_EXCHANGE_URL].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ExchangeClientBuilder {
        ExchangeClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the given endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Send a request to `endpoint` and decode the response into `T`.
    ///
    /// The `Authorization` header is attached whenever `authorization` is
    /// present, regardless of the endpoint's [AuthRequirement]; the backend
    /// decides what to do with it. Errors are never recovered here.
    pub async fn execute<B, T>(
        &self,
        endpoint: Endpoint,
        authorization: Option<&Authorization>,
        body: Option<&B>,
    ) -> Result<T, ExchangeError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        if endpoint.auth() == AuthRequirement::Required && authorization.is_none() {
            warn!("{} called without authorization", endpoint.name());
        }

        let mut request = self.client.request(endpoint.method(), self.url(endpoint));

        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization.header_value());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(
            "{} -> {endpoint} (authorized: {})",
            endpoint.name(),
            authorization.is_some()
        );

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} <- {status}", endpoint.name());

        if !status.is_success() {
            warn!("{} failed with status {status}", endpoint.name());

            return Err(ExchangeError::Status { status, body: text });
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }

    /// [ExchangeClient::execute] for operations without a request body.
    async fn fetch<T>(
        &self,
        endpoint: Endpoint,
        authorization: Option<&Authorization>,
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        self.execute::<(), T>(endpoint, authorization, None).await
    }
}

impl ExchangeApi for ExchangeClient {
    async fn get_exchange_rates(&self) -> Result<ExchangeRates, ExchangeError> {
        self.fetch(Endpoint::GetExchangeRates, None).await
    }

    async fn add_transaction(
        &self,
        transaction: &Transaction,
        authorization: Option<&Authorization>,
    ) -> Result<Value, ExchangeError> {
        self.execute(Endpoint::AddTransaction, authorization, Some(transaction))
            .await
    }

    async fn add_user(&self, user: &User) -> Result<User, ExchangeError> {
        self.execute(Endpoint::AddUser, None, Some(user)).await
    }

    async fn authenticate(&self, user: &User) -> Result<Token, ExchangeError> {
        let token: Token = self.execute(Endpoint::Authenticate, None, Some(user)).await?;

        if token.is_empty() {
            return Err(ExchangeError::EmptyToken);
        }

        Ok(token)
    }

    async fn get_transactions(
        &self,
        authorization: &Authorization,
    ) -> Result<Vec<Transaction>, ExchangeError> {
        self.fetch(Endpoint::GetTransactions, Some(authorization))
            .await
    }

    async fn get_graph_data_points(&self) -> Result<GraphDataPoints, ExchangeError> {
        self.fetch(Endpoint::GetGraphDataPoints, None).await
    }

    async fn get_insights(&self) -> Result<InsightsData, ExchangeError> {
        self.fetch(Endpoint::GetInsights, None).await
    }

    async fn get_listings(&self) -> Result<Vec<ListingsData>, ExchangeError> {
        self.fetch(Endpoint::GetListings, None).await
    }

    async fn add_listing(
        &self,
        listing: &ListingsData,
        authorization: Option<&Authorization>,
    ) -> Result<Value, ExchangeError> {
        self.execute(Endpoint::AddListing, authorization, Some(listing))
            .await
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ExchangeClient::builder()
            .with_base_url("http://10.0.2.2:5000/")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://10.0.2.2:5000");
        assert_eq!(
            client.url(Endpoint::GetExchangeRates),
            "http://10.0.2.2:5000/exchangeRate"
        );
    }

    #[test]
    fn test_builder_rejects_invalid_urls() {
        let result = ExchangeClient::builder().with_base_url("not a url").build();
        assert_matches!(result, Err(ExchangeError::InvalidBaseUrl(_)));

        let result = ExchangeClient::builder()
            .with_base_url("ftp://example.com")
            .build();
        assert_matches!(result, Err(ExchangeError::InvalidBaseUrl(e)) if e.contains("ftp"));

        for url in ["http://10.0.2.2:5000/api?x=1", "http://10.0.2.2:5000/api#top"] {
            let result = ExchangeClient::builder().with_base_url(url).build();
            assert_matches!(result, Err(ExchangeError::InvalidBaseUrl(_)));
        }
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let client = ExchangeClient::builder()
            .with_base_url("http://10.0.2.2:5000/api/")
            .build()
            .unwrap();

        assert_eq!(
            client.url(Endpoint::GetGraphDataPoints),
            "http://10.0.2.2:5000/api/graph"
        );
    }

    #[test]
    fn test_default_client() {
        assert_eq!(ExchangeClient::new().base_url(), DEFAULT_EXCHANGE_URL);
    }
}
