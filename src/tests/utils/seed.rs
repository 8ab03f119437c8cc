use crate::domain::models::account::Account;
use ::surrealdb::{Surreal, engine::any::Any};

pub async fn seed_account(conn: &Surreal<Any>, username: &str, password: &str) -> Account {
    let mut res = conn
        .query(
            r#"
            LET $id = rand::int(1, 9223372036854775807);
            CREATE ONLY type::thing('account', $id) CONTENT {
                username: $username,
                password: $password
            };
            RETURN $id;
            "#,
        )
        .bind(("username", username.to_owned()))
        .bind(("password", password.to_owned()))
        .await
        .unwrap();

    let id: Option<i64> = res.take(2).unwrap();

    Account {
        id: id.unwrap(),
        username: username.to_string(),
        password: password.to_string(),
    }
}
