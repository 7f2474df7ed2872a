use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

// parse env variables and init Config
pub fn init_config() -> anyhow::Result<Config> {
    config_from(|key| std::env::var(key).ok())
}

fn config_from(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
    let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match var("PORT") {
        Some(port) => port
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a port number, got {:?}", port))?,
        None => DEFAULT_PORT,
    };

    Ok(Config { host, port })
}
