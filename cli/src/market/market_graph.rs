use {
    crate::{command_title, display::*, loading, prelude::*},
    exchange_sdk::models::GraphDataPoints,
};

/// Fetch and print the daily rates plotted by the graph screen.
pub(crate) async fn market_graph(
    api: &impl ExchangeApi,
) -> AnyResult<GraphDataPoints, ExchangeCliError> {
    command_title!("Fetching daily rates");

    let graph_handle = loading!("Fetching graph data points...");

    let graph = match api.get_graph_data_points().await {
        Ok(graph) => {
            graph_handle.success();

            graph
        }
        Err(e) => {
            graph_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    print_series("Sell USD", &graph.sell);
    print_series("Buy USD", &graph.buy);

    json_output(&graph)?;

    Ok(graph)
}
