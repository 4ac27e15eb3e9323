use std::{env, fs, ops::Deref, path::Path, sync::Arc};

use crate::{
    error::Error,
    helpers::{formatter, Formatter},
    provider::{ChainApi, ReputationSource},
};

const DEFAULT_HIVE_NODES: &str = concat!(
    "https://api.hive.blog,",
    "https://api.openhive.network,",
    "https://api.deathwing.me,",
    "https://hive-api.arcange.eu,",
    "https://anyx.io,",
    "https://techcoderx.com",
);

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

pub struct State {
    pub config: Config,
    pub chain: Arc<dyn ChainApi>,
    pub reputation: Arc<dyn ReputationSource>,
}

impl State {
    pub fn new(
        config: Config,
        chain: Arc<dyn ChainApi>,
        reputation: Arc<dyn ReputationSource>,
    ) -> State {
        Self {
            config,
            chain,
            reputation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub hive_nodes: Vec<String>,
    pub timeout: u64,
    pub rpc_attempts: usize,
    pub server_host: String,
    pub port: u16,
    pub reputation_url: Option<String>,
    pub profile_url: String,
    pub avatar_url: String,
}

impl Config {
    pub fn get_profile_url(&self, account: &str) -> String {
        formatter(
            self.profile_url.to_owned(),
            &[Formatter::Str(account.to_owned())],
        )
    }

    pub fn get_avatar_url(&self, account: &str) -> String {
        formatter(
            self.avatar_url.to_owned(),
            &[Formatter::Str(account.to_owned())],
        )
    }

    pub fn get_reputation_url(&self, account: &str) -> Option<String> {
        self.reputation_url.as_ref().map(|url| {
            formatter(url.to_owned(), &[Formatter::Str(account.to_owned())])
        })
    }

    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        match header.and_then(|value| value.strip_prefix("Bot ")) {
            Some(token) => {
                !self.bot_token.is_empty() && token == self.bot_token
            },
            None => false,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

pub fn get_configuration() -> Result<Config, Error> {
    let bot_token = env::var("BOT_TOKEN").map_err(|_| {
        Error::ConfigurationError(String::from("BOT_TOKEN is required"))
    })?;
    let hive_nodes = var_or("HIVE_NODES", DEFAULT_HIVE_NODES)
        .split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect::<Vec<String>>();
    let timeout = var_or("TIMEOUT", "30").parse()?;
    let rpc_attempts = var_or("RPC_ATTEMPTS", "2").parse()?;
    let server_host = var_or("SERVER_HOST", "127.0.0.1");
    let port: u16 = var_or("PORT", "8080").parse()?;
    let reputation_url = env::var("REPUTATION_URL")
        .ok()
        .filter(|item| !item.is_empty());
    let profile_url = var_or("PROFILE_URL", "https://peakd.com/@$0");
    let avatar_url =
        var_or("AVATAR_URL", "https://images.hive.blog/u/$0/avatar");

    let config = Config {
        bot_token,
        hive_nodes,
        timeout,
        rpc_attempts,
        server_host,
        port,
        reputation_url,
        profile_url,
        avatar_url,
    };

    Ok(config)
}

/// Loads `.env` and `scout.conf` from the crate directory into the process
/// environment. Both files are optional and never override variables that
/// are already set.
pub fn set_configuration() -> Result<(), Error> {
    let directory = env!("CARGO_MANIFEST_DIR");

    for file in [".env", "scout.conf"] {
        let path = format!("{}/{}", directory, file);
        if !Path::new(&path).exists() {
            continue;
        }

        let config_string = fs::read_to_string(path)?;
        for (key, value) in parse_config_string(&config_string) {
            if env::var_os(key).is_none() {
                env::set_var(key, value);
            }
        }
    }

    Ok(())
}

fn parse_config_string(config: &str) -> Vec<(&str, &str)> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let index = line.find('=')?;
            let (key, value) = line.split_at(index);
            Some((key.trim(), &value[1..]))
        })
        .collect()
}
