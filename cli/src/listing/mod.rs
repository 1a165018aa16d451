mod listing_add;
mod listing_list;

use {
    crate::prelude::*,
    exchange_sdk::models::{Direction, ListingsData},
    listing_add::*,
    listing_list::*,
};

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum ListingCommand {
    #[command(about = "Post a new listing")]
    Add {
        #[arg(
            long = "phone",
            help = "Phone number buyers can reach you on",
            value_name = "PHONE"
        )]
        phone: String,
        #[arg(
            long = "selling-amount",
            help = "Amount offered, in the source currency",
            value_name = "AMOUNT"
        )]
        selling_amount: f64,
        #[arg(
            long = "buying-amount",
            help = "Amount asked for, in the target currency",
            value_name = "AMOUNT"
        )]
        buying_amount: f64,
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

    #[command(about = "List open listings")]
    List,
}

/// Handle the provided listing command. The [ListingCommand] instance is
/// passed from [crate::main].
pub(crate) async fn handle(
    command: ListingCommand,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    let conf = load_conf(&conf_path).await?;
    let client = conf.client()?;

    match command {
        // == `$ exchange listing add` ==
        ListingCommand::Add {
            phone,
            selling_amount,
            buying_amount,
            direction,
            anonymous,
        } => {
            let listing = ListingsData::new(phone, selling_amount, buying_amount, direction);
            let authorization = conf.authorization().filter(|_| !anonymous);

            add_listing(&client, listing, authorization.as_ref())
                .await
                .map(|_| ())
        }

        // == `$ exchange listing list` ==
        ListingCommand::List => list_listings(&client).await.map(|_| ()),
    }
}
