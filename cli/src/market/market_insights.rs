use {
    crate::{command_title, display::*, item, loading, prelude::*},
    exchange_sdk::models::InsightsData,
};

/// Fetch and print the two week market insights.
pub(crate) async fn market_insights(
    api: &impl ExchangeApi,
) -> AnyResult<InsightsData, ExchangeCliError> {
    command_title!("Fetching market insights");

    let insights_handle = loading!("Fetching insights...");

    let insights = match api.get_insights().await {
        Ok(insights) => {
            insights_handle.success();

            insights
        }
        Err(e) => {
            insights_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    item!("Trades: {}", insights.total_trades().to_string().bold());
    item!("Volume: {:.2} USD", insights.total_volume_usd());

    print_series("Average sell rate", &insights.usd_to_lbp_avg);
    print_series("Average buy rate", &insights.lbp_to_usd_avg);
    print_series("Opening sell rate", &insights.usd_to_lbp_open);
    print_series("Opening buy rate", &insights.lbp_to_usd_open);
    print_series("Closing sell rate", &insights.usd_to_lbp_close);
    print_series("Closing buy rate", &insights.lbp_to_usd_close);
    print_series("Trades per day", &insights.volume_in_trxs);
    print_series("USD volume per day", &insights.volume_in_usd);

    json_output(&insights)?;

    Ok(insights)
}
