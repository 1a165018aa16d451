use crate::{command_title, display::json_output, item, prelude::*};

/// Print the current Exchange CLI configuration. A missing configuration
/// file is reported as the defaults.
pub(crate) async fn get_exchange_conf(conf_path: PathBuf) -> AnyResult<CliConf, ExchangeCliError> {
    let conf = load_conf(&conf_path).await?;

    command_title!("Current Exchange CLI Configuration");

    item!("Server: {}", conf.server.url.bold());

    match &conf.auth.user_name {
        Some(user_name) => item!("Signed in as: {}", user_name.bold()),
        None if conf.auth.token.is_some() => item!("Signed in"),
        None => item!("Not signed in"),
    }

    json_output(&conf)?;

    Ok(conf)
}
