//! Server configuration

use std::env;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub struct Config {
    /// Address the HTTP listener binds to
    pub addr: String,
}

impl Config {
    /// Reads `CHESSBOARD_ADDR`, falling back to localhost:3000.
    pub fn from_env() -> Self {
        Self::with_addr(env::var("CHESSBOARD_ADDR").ok())
    }

    fn with_addr(addr: Option<String>) -> Self {
        let addr = addr
            .map(|addr| addr.trim().to_string())
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        Self { addr }
    }
}
