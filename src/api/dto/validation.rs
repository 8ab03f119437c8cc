use std::borrow::Cow;

use validator::ValidationError;

// Column widths of the accounts table.
const USERNAME_MAX_CHARS: usize = 80;
const PASSWORD_MAX_CHARS: usize = 120;

fn length_between(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    let len = value.chars().count();

    if len == 0 || len > max {
        return Err(ValidationError::new("length").with_message(Cow::from(message)));
    }

    Ok(())
}

pub fn is_username(username: &str) -> Result<(), ValidationError> {
    length_between(
        username,
        USERNAME_MAX_CHARS,
        "Username must contain between 1 and 80 characters",
    )
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    length_between(
        password,
        PASSWORD_MAX_CHARS,
        "Password must contain between 1 and 120 characters",
    )
}
