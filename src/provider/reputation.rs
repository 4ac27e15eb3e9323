use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::{
    configuration::Config,
    error::{self, Error},
    types::ReputationScore,
};

/// Score of an account over the same trailing window the scanner uses.
#[async_trait]
pub trait ReputationSource: Send + Sync {
    async fn score(&self, account: &str) -> Option<f64>;
}

#[derive(Debug)]
pub struct Reputation {
    pub config: Config,
    pub http: Client,
}

impl Reputation {
    pub fn new(config: Config) -> Result<Reputation, Error> {
        let http = match Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                return Err(error::Error::REQWEST(e));
            },
        };

        Ok(Reputation { config, http })
    }

    async fn fetch(&self, url: String) -> Result<Option<f64>, Error> {
        let json = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ReputationScore>()
            .await?;

        Ok(json.csi)
    }
}

#[async_trait]
impl ReputationSource for Reputation {
    async fn score(&self, account: &str) -> Option<f64> {
        let url = self.config.get_reputation_url(account)?;

        match self.fetch(url).await {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    "Failed to fetch reputation score for @{}: {}",
                    account, e
                );
                None
            },
        }
    }
}
