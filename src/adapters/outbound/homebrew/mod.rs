mod brew_cli_client;

pub use brew_cli_client::{BrewCliClient, DEFAULT_TIMEOUT_SECS};
