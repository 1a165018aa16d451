mod conf;
mod display;
mod error;
mod listing;
mod market;
mod prelude;
mod transaction;
mod user;

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about = "Exchange CLI")]
struct Cli {
    #[arg(
        long = "json",
        global = true,
        help = "Print the command result as JSON"
    )]
    json: bool,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        global = true,
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    conf_path: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(subcommand, about = "Manage Exchange CLI configuration")]
    Conf(conf::ConfCommand),
    #[command(subcommand, about = "Exchange rates, graph and insights")]
    Market(market::MarketCommand),
    #[command(subcommand, about = "Register, sign in and sign out")]
    User(user::UserCommand),
    #[command(subcommand, about = "Record and list transactions")]
    Transaction(transaction::TransactionCommand),
    #[command(subcommand, about = "Post and browse listings")]
    Listing(listing::ListingCommand),
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = ExchangeCliError::SyntaxError(e)
            );

            std::process::exit(1);
        }
    };

    JSON_MODE.store(cli.json, Ordering::Relaxed);

    log::debug!("Using configuration at {}", cli.conf_path.display());

    // Send each sub-command to the respective handler.
    let result = match cli.command {
        Command::Conf(conf) => conf::handle(conf, cli.conf_path).await,
        Command::Market(market) => market::handle(market, cli.conf_path).await,
        Command::User(user) => user::handle(user, cli.conf_path).await,
        Command::Transaction(transaction) => {
            transaction::handle(transaction, cli.conf_path).await
        }
        Command::Listing(listing) => listing::handle(listing, cli.conf_path).await,
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = result {
        eprintln!("{ballot} {e}", ballot = "✘".red().bold());

        std::process::exit(1);
    }
}
