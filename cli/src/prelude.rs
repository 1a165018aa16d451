pub(crate) use {
    crate::error::ExchangeCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::{builder::ValueParser, Args, Parser, Subcommand},
    colored::Colorize,
    exchange_sdk::{Authorization, ExchangeApi, ExchangeClient, DEFAULT_EXCHANGE_URL},
    serde::{Deserialize, Serialize},
    std::{
        path::PathBuf,
        sync::atomic::{AtomicBool, Ordering},
    },
};

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.exchange/conf.toml";

/// When set, commands print their result as JSON and suppress all other
/// output.
pub(crate) static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) server: ServerConf,
    #[serde(default)]
    pub(crate) auth: AuthConf,
}

impl CliConf {
    pub(crate) async fn load_from_path(path: &PathBuf) -> AnyResult<Self> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub(crate) async fn save_to_path(&self, path: &PathBuf) -> AnyResult<()> {
        let parent_folder = path
            .parent()
            .ok_or_else(|| anyhow!("Config path {} has no parent", path.display()))?;
        let conf = toml::to_string_pretty(&self)?;

        tokio::fs::create_dir_all(parent_folder).await?;
        tokio::fs::write(path, conf).await?;

        Ok(())
    }

    /// Build an exchange client bound to the configured server URL.
    pub(crate) fn client(&self) -> AnyResult<ExchangeClient, ExchangeCliError> {
        ExchangeClient::builder()
            .with_base_url(&self.server.url)
            .build()
            .map_err(ExchangeCliError::Api)
    }

    /// Authorization of the signed in user, if any.
    pub(crate) fn authorization(&self) -> Option<Authorization> {
        self.auth.token.as_deref().map(Authorization::bearer)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ServerConf {
    #[serde(default = "default_server_url")]
    pub(crate) url: String,
}

impl Default for ServerConf {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthConf {
    /// Token of the signed in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) user_name: Option<String>,
}

/// Load the configuration at `conf_path`, falling back to defaults when the
/// file does not exist yet. A file that exists but cannot be read or parsed
/// is an error so that it is never overwritten with defaults.
pub(crate) async fn load_conf(conf_path: &PathBuf) -> AnyResult<CliConf, ExchangeCliError> {
    match CliConf::load_from_path(conf_path).await {
        Ok(conf) => Ok(conf),
        Err(e)
            if e.downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound) =>
        {
            Ok(CliConf::default())
        }
        Err(e) => Err(ExchangeCliError::Any(
            e.context(format!("Invalid configuration at {}", conf_path.display())),
        )),
    }
}

/// Amounts sent to the server must be strictly positive and finite; JSON has
/// no representation for infinities.
pub(crate) fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

// == Used by serde ==

fn default_server_url() -> String {
    DEFAULT_EXCHANGE_URL.to_string()
}
