use {
    crate::{
        command_title,
        display::json_output,
        loading,
        notify_success,
        prelude::*,
        user::Credentials,
    },
    exchange_sdk::models::User,
};

/// Authenticate against the configured server and store the token so that
/// later commands act on behalf of the user.
pub(crate) async fn login_user(
    Credentials {
        user_name,
        password,
    }: Credentials,
    conf_path: PathBuf,
) -> AnyResult<(), ExchangeCliError> {
    command_title!("Signing in as '{user_name}'");

    let mut conf = load_conf(&conf_path).await?;
    let client = conf.client()?;

    let auth_handle = loading!("Authenticating...");

    let token = match client.authenticate(&User::new(&user_name, password)).await {
        Ok(token) => {
            auth_handle.success();

            token
        }
        Err(e) => {
            auth_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    conf.auth = AuthConf {
        token: Some(token.token),
        user_name: Some(user_name.clone()),
    };

    conf.save_to_path(&conf_path)
        .await
        .map_err(ExchangeCliError::Any)?;

    notify_success!("Signed in as {}", user_name.bold());

    json_output(&serde_json::json!({ "user_name": user_name }))
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, serde_json::json};

    async fn conf_for(server: &mockito::ServerGuard, path: &PathBuf) {
        let conf = CliConf {
            server: ServerConf { url: server.url() },
            auth: AuthConf::default(),
        };

        conf.save_to_path(path).await.unwrap();
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut server = mockito::Server::new_async().await;
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("conf.toml");

        conf_for(&server, &path).await;

        let mock = server
            .mock("POST", "/authentication")
            .with_status(200)
            .with_body(json!({ "token": "header.payload.signature" }).to_string())
            .create_async()
            .await;

        let credentials = Credentials {
            user_name: "user123".to_string(),
            password: "pass123".to_string(),
        };

        let result = login_user(credentials, path.clone()).await;

        assert_matches!(result, Ok(()));

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.auth.token.as_deref(), Some("header.payload.signature"));
        assert_eq!(conf.auth.user_name.as_deref(), Some("user123"));
        assert_eq!(conf.server.url, server.url());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_login_keeps_conf() {
        let mut server = mockito::Server::new_async().await;
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("conf.toml");

        conf_for(&server, &path).await;

        let mock = server
            .mock("POST", "/authentication")
            .with_status(403)
            .create_async()
            .await;

        let credentials = Credentials {
            user_name: "user123".to_string(),
            password: "wrong".to_string(),
        };

        let result = login_user(credentials, path.clone()).await;

        assert_matches!(result, Err(ExchangeCliError::Api(e)) if e.is_auth());

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.auth, AuthConf::default());

        mock.assert_async().await;
    }
}
