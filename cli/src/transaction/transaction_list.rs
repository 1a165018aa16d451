use {
    crate::{command_title, display::json_output, item, loading, prelude::*},
    exchange_sdk::models::Transaction,
};

/// List the transactions recorded by the signed in user.
pub(crate) async fn list_transactions(
    api: &impl ExchangeApi,
    authorization: Option<&Authorization>,
) -> AnyResult<Vec<Transaction>, ExchangeCliError> {
    command_title!("Listing your transactions");

    let Some(authorization) = authorization else {
        return Err(ExchangeCliError::NotSignedIn(format!(
            "Sign in with {} to list your transactions",
            "exchange user login".bold()
        )));
    };

    let list_handle = loading!("Fetching transactions...");

    let transactions = match api.get_transactions(authorization).await {
        Ok(transactions) => {
            list_handle.success();

            transactions
        }
        Err(e) => {
            list_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    if transactions.is_empty() {
        item!("No transactions yet");
    }

    for transaction in &transactions {
        let date = transaction
            .added_date
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        item!(
            "{date} {amount} {source} -> {target} ({usd} USD / {lbp} LBP)",
            amount = transaction.amount().to_string().bold(),
            source = transaction.source(),
            target = transaction.target(),
            usd = transaction.usd_amount,
            lbp = transaction.lbp_amount,
        );
    }

    json_output(&transactions)?;

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, serde_json::json};

    #[tokio::test]
    async fn test_list_transactions() {
        let mut server = mockito::Server::new_async().await;
        let client = ExchangeClient::builder()
            .with_base_url(&server.url())
            .build()
            .unwrap();

        let mock = server
            .mock("GET", "/transaction")
            .match_header("authorization", "Bearer jwt")
            .with_status(200)
            .with_body(
                json!([{
                    "id": 1,
                    "usd_amount": 1.0,
                    "lbp_amount": 26000.0,
                    "usd_to_lbp": true,
                    "user_id": 1,
                    "added_date": "2022-04-24T10:11:12"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let auth = Authorization::bearer("jwt");
        let transactions = list_transactions(&client, Some(&auth)).await.unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].rate(), Some(26000.0));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_transactions_requires_sign_in() {
        let client = ExchangeClient::new();

        let result = list_transactions(&client, None).await;

        assert_matches!(result, Err(ExchangeCliError::NotSignedIn(_)));
    }

    #[tokio::test]
    async fn test_list_transactions_expired_token() {
        let mut server = mockito::Server::new_async().await;
        let client = ExchangeClient::builder()
            .with_base_url(&server.url())
            .build()
            .unwrap();

        let mock = server
            .mock("GET", "/transaction")
            .with_status(403)
            .create_async()
            .await;

        let auth = Authorization::bearer("expired");
        let result = list_transactions(&client, Some(&auth)).await;

        assert_matches!(result, Err(ExchangeCliError::Api(e)) if e.is_auth());

        mock.assert_async().await;
    }
}
