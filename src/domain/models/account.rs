#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
