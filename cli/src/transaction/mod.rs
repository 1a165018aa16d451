mod transaction_add;
mod transaction_list;

use {
    crate::prelude::*,
    exchange_sdk::models::Direction,
    transaction_add::*,
    transaction_list::*,
};

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum TransactionCommand {
    #[command(about = "Record a new transaction")]
    Add {
        #[arg(long = "usd-amount", help = "Amount of USD traded", value_name = "AMOUNT")]
        usd_amount: f64,
        #[arg(long = "lbp-amount", help = "Amount of LBP traded", value_name = "AMOUNT")]
        lbp_amount: f64,
        #[arg(
            long = "direction",
            short = 'd',
            help = "Either 'usd-to-lbp' (selling USD) or 'lbp-to-usd' (buying USD)",
            value_name = "DIRECTION"
        )]
        direction: Direction,
        #[arg(
            long = "anonymous",
            help = "Do not attach the stored token even when signed in"
        )]
        anonymous: bool,
    },

    #[command(about = "List the transactions of the signed in user")]
    List,
}

/// Handle the provided transaction command. The [TransactionCommand] instance
/// is passed from [crate::main].
pub(crate) async fn handle(
    command: TransactionCommand,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    let conf = load_conf(&conf_path).await?;
    let client = conf.client()?;

    match command {
        // == `$ exchange transaction add` ==
        TransactionCommand::Add {
            usd_amount,
            lbp_amount,
            direction,
            anonymous,
        } => {
            let authorization = conf.authorization().filter(|_| !anonymous);

            add_transaction(
                &client,
                usd_amount,
                lbp_amount,
                direction,
                authorization.as_ref(),
            )
            .await
            .map(|_| ())
        }

        // == `$ exchange transaction list` ==
        TransactionCommand::List => list_transactions(&client, conf.authorization().as_ref())
            .await
            .map(|_| ()),
    }
}
