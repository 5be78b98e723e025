mod logging;

pub use logging::init_logging;

use anyhow::Context;
use doh_proxy_domain::{CliOverrides, Config};

pub fn load_config(cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(cli_overrides).context("Invalid configuration")
}
