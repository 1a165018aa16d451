use {
    crate::{command_title, display::*, item, loading, prelude::*},
    exchange_sdk::models::ListingsData,
};

/// List the open listings.
pub(crate) async fn list_listings(
    api: &impl ExchangeApi,
) -> AnyResult<Vec<ListingsData>, ExchangeCliError> {
    command_title!("Listing open offers");

    let list_handle = loading!("Fetching listings...");

    let listings = match api.get_listings().await {
        Ok(listings) => {
            list_handle.success();

            listings
        }
        Err(e) => {
            list_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    if listings.is_empty() {
        item!("No open listings");
    }

    for listing in &listings {
        let (sold, bought) = listing.currency_pair();

        item!(
            "Selling {} {sold} for {} {bought} at {}, call {}",
            listing.selling_amount,
            listing.buying_amount,
            format_rate(listing.price()),
            listing.user_phone_number.bold()
        );
    }

    json_output(&listings)?;

    Ok(listings)
}
