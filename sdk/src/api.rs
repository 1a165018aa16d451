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
        Authorization,
        ExchangeError,
    },
    serde_json::Value,
    std::future::Future,
};

/// This trait declares the remote operations of the exchange backend. See
/// [crate::Endpoint] for the verb, path and authorization requirement of
/// each of them.
///
/// Operations that accept an anonymous caller take an
/// `Option<&Authorization>`; operations that need a signed in user take an
/// `&Authorization`.
pub trait ExchangeApi: Send + Sync {
    /// `GET /exchangeRate`
    fn get_exchange_rates(
        &self,
    ) -> impl Future<Output = Result<ExchangeRates, ExchangeError>> + Send;

    /// `POST /transaction`. The backend does not guarantee the shape of the
    /// response so it is returned untyped.
    fn add_transaction(
        &self,
        transaction: &Transaction,
        authorization: Option<&Authorization>,
    ) -> impl Future<Output = Result<Value, ExchangeError>> + Send;

    /// `POST /user`
    fn add_user(&self, user: &User) -> impl Future<Output = Result<User, ExchangeError>> + Send;

    /// `POST /authentication`. Fails with [ExchangeError::EmptyToken] if the
    /// backend answers with an empty token.
    fn authenticate(
        &self,
        user: &User,
    ) -> impl Future<Output = Result<Token, ExchangeError>> + Send;

    /// `GET /transaction`
    fn get_transactions(
        &self,
        authorization: &Authorization,
    ) -> impl Future<Output = Result<Vec<Transaction>, ExchangeError>> + Send;

    /// `GET /graph`
    fn get_graph_data_points(
        &self,
    ) -> impl Future<Output = Result<GraphDataPoints, ExchangeError>> + Send;

    /// `GET /insights`
    fn get_insights(&self) -> impl Future<Output = Result<InsightsData, ExchangeError>> + Send;

    /// `GET /listings`
    fn get_listings(
        &self,
    ) -> impl Future<Output = Result<Vec<ListingsData>, ExchangeError>> + Send;

    /// `POST /listing`. Returned untyped like [ExchangeApi::add_transaction].
    fn add_listing(
        &self,
        listing: &ListingsData,
        authorization: Option<&Authorization>,
    ) -> impl Future<Output = Result<Value, ExchangeError>> + Send;
}
