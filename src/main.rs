use std::sync::Arc;

use tracing::{error, Level};

use scout::{
    configuration::{get_configuration, set_configuration, AppState, State},
    error::Error,
    provider::{Hive, Reputation},
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level({
            #[cfg(debug_assertions)]
            {
                Level::DEBUG
            }

            #[cfg(not(debug_assertions))]
            {
                Level::INFO
            }
        })
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    set_configuration()?;
    let config = match get_configuration() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let hive = Hive::new(&config)?;
    let reputation = Reputation::new(config.clone())?;

    let state = State::new(config, Arc::new(hive), Arc::new(reputation));
    let app_state = AppState::new(state);

    server::server_task(&app_state).await
}
