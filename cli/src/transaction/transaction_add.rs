use {
    crate::{command_title, display::json_output, loading, notify_success, prelude::*},
    exchange_sdk::models::{Direction, Transaction},
    serde_json::Value,
};

/// Record a transaction, on behalf of the signed in user when an
/// authorization is given.
pub(crate) async fn add_transaction(
    api: &impl ExchangeApi,
    usd_amount: f64,
    lbp_amount: f64,
    direction: Direction,
    authorization: Option<&Authorization>,
) -> AnyResult<Value, ExchangeCliError> {
    command_title!(
        "Recording a {} transaction of {usd_amount} USD for {lbp_amount} LBP",
        direction
    );

    if !(is_positive_amount(usd_amount) && is_positive_amount(lbp_amount)) {
        return Err(ExchangeCliError::Any(anyhow!(
            "Both amounts must be positive finite numbers"
        )));
    }

    let transaction = Transaction::new(usd_amount, lbp_amount, direction);

    let tx_handle = loading!("Sending transaction...");

    let response = match api.add_transaction(&transaction, authorization).await {
        Ok(response) => {
            tx_handle.success();

            response
        }
        Err(e) => {
            tx_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    match (authorization, transaction.rate()) {
        (Some(_), Some(rate)) => notify_success!("Transaction recorded at {rate:.2} LBP/USD"),
        (None, Some(rate)) => notify_success!("Anonymous transaction recorded at {rate:.2} LBP/USD"),
        _ => notify_success!("Transaction recorded"),
    }

    json_output(&response)?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, mockito::Matcher, serde_json::json};

    #[tokio::test]
    async fn test_add_transaction_signed_in() {
        let mut server = mockito::Server::new_async().await;
        let client = ExchangeClient::builder()
            .with_base_url(&server.url())
            .build()
            .unwrap();

        let mock = server
            .mock("POST", "/transaction")
            .match_header("authorization", "Bearer jwt")
            .match_body(Matcher::Json(json!({
                "usd_amount": 100.0,
                "lbp_amount": 2600000.0,
                "usd_to_lbp": true
            })))
            .with_status(200)
            .with_body(json!({ "id": 4 }).to_string())
            .create_async()
            .await;

        let auth = Authorization::bearer("jwt");
        let response = add_transaction(&client, 100.0, 2_600_000.0, Direction::UsdToLbp, Some(&auth))
            .await
            .unwrap();

        assert_eq!(response, json!({ "id": 4 }));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_transaction_anonymous() {
        let mut server = mockito::Server::new_async().await;
        let client = ExchangeClient::builder()
            .with_base_url(&server.url())
            .build()
            .unwrap();

        let mock = server
            .mock("POST", "/transaction")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let result = add_transaction(&client, 1.0, 25_000.0, Direction::LbpToUsd, None).await;

        assert_matches!(result, Ok(_));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_transaction_rejects_non_positive_amounts() {
        let client = ExchangeClient::new();

        let result = add_transaction(&client, 0.0, 25_000.0, Direction::UsdToLbp, None).await;
        assert_matches!(result, Err(ExchangeCliError::Any(_)));

        let result = add_transaction(&client, 1.0, f64::NAN, Direction::UsdToLbp, None).await;
        assert_matches!(result, Err(ExchangeCliError::Any(_)));

        let result =
            add_transaction(&client, f64::INFINITY, 25_000.0, Direction::UsdToLbp, None).await;
        assert_matches!(result, Err(ExchangeCliError::Any(_)));
    }
}
