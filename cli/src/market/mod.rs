mod market_graph;
mod market_insights;
mod market_rates;

use {crate::prelude::*, market_graph::*, market_insights::*, market_rates::*};

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum MarketCommand {
    #[command(about = "Average exchange rates over the last three days")]
    Rates,
    #[command(about = "Daily average rates over the last ten days")]
    Graph,
    #[command(about = "Averages, open, close and volume over the last two weeks")]
    Insights,
}

/// Handle the provided market command. The [MarketCommand] instance is passed
/// from [crate::main].
pub(crate) async fn handle(
    command: MarketCommand,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    let client = load_conf(&conf_path).await?.client()?;

    match command {
        // == `$ exchange market rates` ==
        MarketCommand::Rates => market_rates(&client).await.map(|_| ()),

        // == `$ exchange market graph` ==
        MarketCommand::Graph => market_graph(&client).await.map(|_| ()),

        // == `$ exchange market insights` ==
        MarketCommand::Insights => market_insights(&client).await.map(|_| ()),
    }
}
