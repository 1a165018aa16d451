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

/// Register a new account on the exchange.
pub(crate) async fn register_user(
    api: &impl ExchangeApi,
    Credentials {
        user_name,
        password,
    }: Credentials,
) -> AnyResult<User, ExchangeCliError> {
    command_title!("Registering user '{user_name}'");

    if user_name.is_empty() || password.is_empty() {
        return Err(ExchangeCliError::Any(anyhow!(
            "Both user name and password must be non-empty"
        )));
    }

    let register_handle = loading!("Creating account...");

    let user = match api.add_user(&User::new(user_name, password)).await {
        Ok(user) => {
            register_handle.success();

            user
        }
        Err(e) => {
            register_handle.error();

            return Err(ExchangeCliError::Api(e));
        }
    };

    notify_success!(
        "Account {name} created, sign in with {command}",
        name = user.user_name.bold(),
        command = "exchange user login".bold()
    );

    json_output(&user)?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, mockito::Matcher, serde_json::json};

    fn credentials(user_name: &str, password: &str) -> Credentials {
        Credentials {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_user() {
        let mut server = mockito::Server::new_async().await;
        let client = ExchangeClient::builder()
            .with_base_url(&server.url())
            .build()
            .unwrap();

        let mock = server
            .mock("POST", "/user")
            .match_body(Matcher::Json(
                json!({ "user_name": "user123", "password": "pass123" }),
            ))
            .with_status(200)
            .with_body(json!({ "id": 1, "user_name": "user123" }).to_string())
            .create_async()
            .await;

        let user = register_user(&client, credentials("user123", "pass123"))
            .await
            .unwrap();

        assert_eq!(user.id, Some(1));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_rejects_empty_credentials() {
        let client = ExchangeClient::new();

        let result = register_user(&client, credentials("user123", "")).await;

        assert_matches!(result, Err(ExchangeCliError::Any(_)));
    }
}
