mod user_login;
mod user_logout;
mod user_register;

use {crate::prelude::*, user_login::*, user_logout::*, user_register::*};

/// Credentials shared by `register` and `login`.
#[derive(Args, Clone, Debug)]
pub(crate) struct Credentials {
    #[arg(long = "username", short = 'u', help = "The user name", value_name = "NAME")]
    pub(crate) user_name: String,
    #[arg(long = "password", short = 'p', help = "The password", value_name = "PASSWORD")]
    pub(crate) password: String,
}

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum UserCommand {
    #[command(about = "Create a new account")]
    Register {
        #[command(flatten)]
        credentials: Credentials,
    },

    #[command(about = "Sign in and store the token in the configuration")]
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },

    #[command(about = "Forget the stored token")]
    Logout,
}

/// Handle the provided user command. The [UserCommand] instance is passed from
/// [crate::main].
pub(crate) async fn handle(
    command: UserCommand,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    match command {
        // == `$ exchange user register` ==
        UserCommand::Register { credentials } => {
            let client = load_conf(&conf_path).await?.client()?;

            register_user(&client, credentials).await.map(|_| ())
        }

        // == `$ exchange user login` ==
        UserCommand::Login { credentials } => login_user(credentials, conf_path).await,

        // == `$ exchange user logout` ==
        UserCommand::Logout => logout_user(conf_path).await,
    }
}
