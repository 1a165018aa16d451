use {
    crate::{command_title, display::*, item, loading, prelude::*},
    exchange_sdk::models::{Direction, ExchangeRates},
};

/// Fetch and print the current buy and sell rates.
pub(crate) async fn market_rates(
    api: &impl ExchangeApi,
) -> AnyResult<ExchangeRates, ExchangeCliError> {
    command_title!("Fetching exchange rates");

    let rates_handle = loading!("Fetching rates...");

    let rates = match api.get_exchange_rates().await {
        Ok(rates) => {
            rates_handle.success();

            rates
        }
        Err(e) => {
            rates_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    item!(
        "Sell USD ({}): {}",
        Direction::UsdToLbp,
        format_rate(rates.rate(Direction::UsdToLbp)).bold()
    );
    item!(
        "Buy USD ({}): {}",
        Direction::LbpToUsd,
        format_rate(rates.rate(Direction::LbpToUsd)).bold()
    );

    json_output(&rates)?;

    Ok(rates)
}
