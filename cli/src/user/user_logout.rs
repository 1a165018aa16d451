use crate::{command_title, notify_success, prelude::*};

/// Forget the stored token. Signing out while signed out is not an error.
pub(crate) async fn logout_user(conf_path: PathBuf) -> AnyResult<(), ExchangeCliError> {
    command_title!("Signing out");

    let mut conf = load_conf(&conf_path).await?;

    if conf.auth == AuthConf::default() {
        notify_success!("Not signed in");

        return Ok(());
    }

    conf.auth = AuthConf::default();

    conf.save_to_path(&conf_path)
        .await
        .map_err(ExchangeCliError::Any)?;

    notify_success!("Signed out");

    Ok(())
}
