use {reqwest::Method, std::fmt};

/// Whether an operation carries the `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRequirement {
    /// The header is never sent.
    None,
    /// The header is sent only when the caller is signed in. Anonymous calls
    /// are accepted by the backend.
    Optional,
    /// The backend answers `403` when the header is missing.
    Required,
}

/// Every remote operation exposed by the exchange backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetExchangeRates,
    AddTransaction,
    AddUser,
    Authenticate,
    GetTransactions,
    GetGraphDataPoints,
    GetInsights,
    GetListings,
    AddListing,
}

impl Endpoint {
    /// All operations in declaration order.
    pub const ALL: [Endpoint; 9] = [
        Endpoint::GetExchangeRates,
        Endpoint::AddTransaction,
        Endpoint::AddUser,
        Endpoint::Authenticate,
        Endpoint::GetTransactions,
        Endpoint::GetGraphDataPoints,
        Endpoint::GetInsights,
        Endpoint::GetListings,
        Endpoint::AddListing,
    ];

    /// HTTP verb used on the wire.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::AddTransaction
            | Endpoint::AddUser
            | Endpoint::Authenticate
            | Endpoint::AddListing => Method::POST,
            Endpoint::GetExchangeRates
            | Endpoint::GetTransactions
            | Endpoint::GetGraphDataPoints
            | Endpoint::GetInsights
            | Endpoint::GetListings => Method::GET,
        }
    }

    /// Path relative to the base URL, always starting with `/`.
    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::GetExchangeRates => "/exchangeRate",
            Endpoint::AddTransaction | Endpoint::GetTransactions => "/transaction",
            Endpoint::AddUser => "/user",
            Endpoint::Authenticate => "/authentication",
            Endpoint::GetGraphDataPoints => "/graph",
            Endpoint::GetInsights => "/insights",
            Endpoint::GetListings => "/listings",
            Endpoint::AddListing => "/listing",
        }
    }

    pub const fn auth(&self) -> AuthRequirement {
        match self {
            Endpoint::AddTransaction | Endpoint::AddListing => AuthRequirement::Optional,
            Endpoint::GetTransactions => AuthRequirement::Required,
            _ => AuthRequirement::None,
        }
    }

    /// Whether the operation sends a JSON request body.
    pub const fn has_body(&self) -> bool {
        matches!(
            self,
            Endpoint::AddTransaction
                | Endpoint::AddUser
                | Endpoint::Authenticate
                | Endpoint::AddListing
        )
    }

    /// Operation name as used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Endpoint::GetExchangeRates => "getExchangeRates",
            Endpoint::AddTransaction => "addTransaction",
            Endpoint::AddUser => "addUser",
            Endpoint::Authenticate => "authenticate",
            Endpoint::GetTransactions => "getTransactions",
            Endpoint::GetGraphDataPoints => "getGraphDataPoints",
            Endpoint::GetInsights => "getInsights",
            Endpoint::GetListings => "getListings",
            Endpoint::AddListing => "addListing",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest(
        endpoint,
        method,
        path,
        auth,
        has_body,
        case(Endpoint::GetExchangeRates, Method::GET, "/exchangeRate", AuthRequirement::None, false),
        case(Endpoint::AddTransaction, Method::POST, "/transaction", AuthRequirement::Optional, true),
        case(Endpoint::AddUser, Method::POST, "/user", AuthRequirement::None, true),
        case(Endpoint::Authenticate, Method::POST, "/authentication", AuthRequirement::None, true),
        case(Endpoint::GetTransactions, Method::GET, "/transaction", AuthRequirement::Required, false),
        case(Endpoint::GetGraphDataPoints, Method::GET, "/graph", AuthRequirement::None, false),
        case(Endpoint::GetInsights, Method::GET, "/insights", AuthRequirement::None, false),
        case(Endpoint::GetListings, Method::GET, "/listings", AuthRequirement::None, false),
        case(Endpoint::AddListing, Method::POST, "/listing", AuthRequirement::Optional, true)
    )]
    fn test_endpoint_table(
        endpoint: Endpoint,
        method: Method,
        path: &str,
        auth: AuthRequirement,
        has_body: bool,
    ) {
        assert_eq!(endpoint.method(), method);
        assert_eq!(endpoint.path(), path);
        assert_eq!(endpoint.auth(), auth);
        assert_eq!(endpoint.has_body(), has_body);
    }

    #[test]
    fn test_all_endpoints_are_distinct() {
        let mut seen = std::collections::HashSet::new();

        for endpoint in Endpoint::ALL {
            assert!(seen.insert(endpoint));
            assert!(endpoint.path().starts_with('/'));
        }

        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_only_post_endpoints_have_bodies() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.has_body(), endpoint.method() == Method::POST);
        }
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::GetTransactions.to_string(), "GET /transaction");
        assert_eq!(Endpoint::AddListing.to_string(), "POST /listing");
    }
}
