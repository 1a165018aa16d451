mod conf_get;
mod conf_set;

use {crate::prelude::*, conf_get::*, conf_set::*};

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum ConfCommand {
    #[command(about = "Print the current Exchange CLI configuration")]
    Get,

    #[command(about = "Update the Exchange CLI configuration")]
    Set {
        #[arg(
            long = "url",
            help = "Set the URL of the exchange server",
            value_name = "URL",
            value_parser = ValueParser::from(parse_server_url)
        )]
        url: Option<reqwest::Url>,
    },
}

/// Handle the provided conf command. The [ConfCommand] instance is passed from
/// [crate::main].
pub(crate) async fn handle(
    command: ConfCommand,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    match command {
        // == `$ exchange conf get` ==
        ConfCommand::Get => get_exchange_conf(conf_path).await.map(|_| ()),

        // == `$ exchange conf set` ==
        ConfCommand::Set { url } => set_exchange_conf(url, conf_path).await,
    }
}

/// Only absolute `http(s)` URLs can be used as the exchange server.
fn parse_server_url(url: &str) -> AnyResult<reqwest::Url> {
    let url = reqwest::Url::parse(url)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(anyhow!("Unsupported URL scheme '{scheme}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_url() {
        assert!(parse_server_url("http://10.0.2.2:5000").is_ok());
        assert!(parse_server_url("https://exchange.example.com").is_ok());
        assert!(parse_server_url("ftp://exchange.example.com").is_err());
        assert!(parse_server_url("exchange").is_err());
    }
}
