//! Serve command - load the dataset and run the dashboard server.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::DEFAULT_BIND_ADDR;
use crate::data::{load_dataset, LoadOptions};
use crate::server::{self, AppState};
use crate::visualization::Theme;


/// Run the serve command.
pub fn run(data: &Path, bind: &str, strict: bool) -> Result<()> {
    let bind = parse_bind(bind)?;
    let dataset = load_dataset(data, LoadOptions { strict })?;
    let state = AppState::new(dataset, Theme::dark());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::serve(bind, state))
}


fn parse_bind(bind: &str) -> Result<SocketAddr> {
    bind.parse()
        .with_context(|| format!("invalid bind address '{bind}', expected HOST:PORT such as {DEFAULT_BIND_ADDR}"))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind() {
        assert_eq!(parse_bind("0.0.0.0:9000").unwrap(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());

        let err = parse_bind("localhost").unwrap_err();
        assert!(err.to_string().contains("invalid bind address 'localhost'"));
    }

    #[test]
    fn test_bad_bind_fails_before_loading_data() {
        let err = run(Path::new("/nonexistent/salary.csv"), "not-an-address", false).unwrap_err();
        assert!(err.to_string().contains("invalid bind address"));
    }
}
