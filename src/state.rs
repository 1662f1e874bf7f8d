use crate::config::Config;
use crate::error::Error;
use crate::omdb::OmdbClient;
use crate::{Pool, PooledConnection};
use ring::rand::SystemRandom;

/// Shared application context, constructed once in `main` and handed to
/// every handler through `web::Data`. Read-mostly after startup.
pub struct AppState {
    pub pool: Pool,
    pub config: Config,
    pub rng: SystemRandom,
    pub omdb: OmdbClient,
}

impl AppState {
    pub fn new(pool: Pool, config: Config) -> AppState {
        let omdb = OmdbClient::new(config.omdb_url.clone(), config.omdb_api_key.clone());
        AppState {
            pool,
            config,
            rng: SystemRandom::new(),
            omdb,
        }
    }

    /// Check a connection out of the pool.
    pub fn conn(&self) -> Result<PooledConnection, Error> {
        self.pool.get().map_err(|e| Error::Pool(e.to_string()))
    }
}
