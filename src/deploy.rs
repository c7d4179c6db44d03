// Deployment flow: resolve connection config, authenticate if the cached
// credentials are missing, then push the CSS file to the server's theme
// setting. One invocation runs straight through to success or the first
// error; there are no retries and no re-login on an expired token (the
// operator clears the config file instead).

use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::prompt::{Prompt, TermPrompt};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub struct Deployer<P: Prompt> {
    store: ConfigStore,
    prompt: P,
}

impl Deployer<TermPrompt> {
    pub fn new(store: ConfigStore) -> Self {
        Deployer {
            store,
            prompt: TermPrompt,
        }
    }
}

impl<P: Prompt> Deployer<P> {
    pub fn with_prompt(store: ConfigStore, prompt: P) -> Self {
        Deployer { store, prompt }
    }

    /// Deploy the CSS file at `css_file`. Prompts for whatever the config
    /// file doesn't already hold: the URL if the store is unconfigured, and
    /// username/password if no credential pair is cached. A successful login
    /// is persisted before the upload, so the next run is silent.
    pub fn deploy(&mut self, css_file: &Path) -> Result<()> {
        let (mut url, cached) = self.store.load()?;
        if url.is_empty() {
            url = self.prompt.ask("URL")?;
        }
        let api = ApiClient::new(&url);

        let creds = match cached {
            Some(creds) => creds,
            None => {
                let username = self.prompt.ask("Username")?;
                let password = self.prompt.ask_hidden("Password")?;

                let spin = spinner("Logging in...");
                let login = api.login(&username, &password);
                spin.finish_and_clear();
                let creds = login?;

                self.store.save(&url, &creds)?;
                creds
            }
        };

        let css = fs::read_to_string(css_file)
            .with_context(|| format!("Failed to read CSS file {}", css_file.display()))?;

        let spin = spinner("Deploying CSS...");
        let result = api.set_custom_css(&css, &creds);
        spin.finish_and_clear();
        result
    }
}

fn spinner(msg: &'static str) -> ProgressBar {
    let spin = ProgressBar::new_spinner();
    spin.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spin.set_message(msg);
    spin.enable_steady_tick(Duration::from_millis(80));
    spin
}
