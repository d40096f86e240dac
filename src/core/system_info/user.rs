use crate::error::{FetchError, Result};

pub fn username() -> Result<String> {
    whoami::fallible::username()
        .map_err(|e| FetchError::identity(format!("cannot read current username: {}", e)))
}

pub fn hostname() -> Result<String> {
    whoami::fallible::hostname()
        .map_err(|e| FetchError::identity(format!("cannot read host name: {}", e)))
}
