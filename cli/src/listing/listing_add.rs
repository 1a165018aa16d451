use {
    crate::{command_title, display::json_output, loading, notify_success, prelude::*},
    exchange_sdk::models::ListingsData,
    serde_json::Value,
};

/// Post a listing, owned by the signed in user when an authorization is
/// given.
pub(crate) async fn add_listing(
    api: &impl ExchangeApi,
    listing: ListingsData,
    authorization: Option<&Authorization>,
) -> AnyResult<Value, ExchangeCliError> {
    let (sold, bought) = listing.currency_pair();

    command_title!(
        "Posting a listing selling {} {sold} for {} {bought}",
        listing.selling_amount,
        listing.buying_amount
    );

    if listing.user_phone_number.trim().is_empty() {
        return Err(ExchangeCliError::Any(anyhow!(
            "A phone number is required so buyers can reach you"
        )));
    }

    let amounts = [listing.selling_amount, listing.buying_amount];

    if !amounts.into_iter().all(is_positive_amount) {
        return Err(ExchangeCliError::Any(anyhow!(
            "Both amounts must be positive finite numbers"
        )));
    }

    let listing_handle = loading!("Posting listing...");

    let response = match api.add_listing(&listing, authorization).await {
        Ok(response) => {
            listing_handle.success();

            response
        }
        Err(e) => {
            listing_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    match listing.price() {
        Some(price) => notify_success!("Listing posted at {price:.2} LBP/USD"),
        None => notify_success!("Listing posted"),
    }

    json_output(&response)?;

    Ok(response)
}
