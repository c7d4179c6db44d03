// Entrypoint for the deploy CLI.
// - Keeps `main` small: resolve the config location, build a Deployer and
//   hand it the CSS path from the command line.
// - Returns `anyhow::Result` so any deploy error prints once and exits
//   nonzero.

use anyhow::Context;
use std::path::Path;
use themepush::{config::ConfigStore, deploy::Deployer};

fn main() -> anyhow::Result<()> {
    let css_file = std::env::args()
        .nth(1)
        .context("Usage: themepush <css-file>")?;

    // Config lives at `THEMEPUSH_CONFIG` if set, otherwise a dotfile in the
    // home directory. See `ConfigStore::from_env`.
    let store = ConfigStore::from_env();
    let mut deployer = Deployer::new(store);
    deployer.deploy(Path::new(&css_file))?;

    println!("CSS deployed");
    Ok(())
}
