use crate::{command_title, display::json_output, loading, prelude::*};

/// Set the Exchange CLI configuration from the provided arguments.
pub(crate) async fn set_exchange_conf(
    url: Option<reqwest::Url>,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    let mut conf = load_conf(&conf_path).await?;

    command_title!("Updating Exchange CLI Configuration");

    let conf_handle = loading!("Updating configuration...");

    if let Some(url) = url {
        // A token issued by another server is useless.
        if conf.server.url != url.as_str().trim_end_matches('/') {
            conf.auth = AuthConf::default();
        }

        conf.server.url = url.as_str().trim_end_matches('/').to_string();
    }

    match conf.save_to_path(&conf_path).await {
        Ok(()) => {
            conf_handle.success();

            json_output(&conf)
        }
        Err(e) => {
            conf_handle.error();

            Err(ExchangeCliError::Any(e))
        }
    }
}
