// Library root
// -----------
// This crate deploys a CSS theme to a running chat-server instance through
// its administrative HTTP API. The binary (`main.rs`) is a thin wrapper
// around `deploy::Deployer`, the single public entry point.
//
// Module responsibilities:
// - `config`: the persisted connection config (server URL plus cached
//   auth token/user id) at an injectable path.
// - `api`: blocking HTTP client for the two endpoints we use (`login`,
//   `settings/theme-custom-css`) and the response-envelope decoding.
// - `prompt`: operator input behind a trait, so tests can script answers.
// - `deploy`: the orchestration — load config, prompt for what's missing,
//   authenticate once and cache the result, push the stylesheet.
pub mod api;
pub mod config;
pub mod deploy;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testutil;
