use serde::Deserialize;

pub mod error;
pub mod ledger;
pub mod model;

pub use error::{Error, Result};
pub use ledger::Ledger;

/// Application-supplied configuration. The embedding application decides
/// where the values come from; the ledger only reads them.
#[derive(Clone, Deserialize)]
pub struct Config {
    // secrets
    hmac_secret: String,
}

impl Config {
    pub fn new(hmac_secret: impl Into<String>) -> Self {
        Self {
            hmac_secret: hmac_secret.into(),
        }
    }

    /// Secret key used to digest VINs before storage.
    pub fn hmac_secret(&self) -> &[u8] {
        self.hmac_secret.as_bytes()
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Config {
        pub fn example() -> Self {
            Self::new("test-hmac-secret")
        }
    }
}
