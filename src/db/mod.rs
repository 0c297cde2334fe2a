use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 2;
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Reachability of the backing store, as reported by `/health/ready`.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

/// Handle on the summer-school database. Clones share the driver's pool.
#[derive(Clone)]
pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    /// Connects and pings once, so a bad connection string or an unreachable
    /// deployment fails startup instead of the first request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let options = client_options(&config.mongo_conn_string).await?;

        let database = Self {
            client: Client::with_options(options)?,
            name: config.mongo_db_name.clone(),
        };
        database.ping().await?;

        log::info!("Connected to MongoDB database '{}'", database.name);
        Ok(database)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client.database(&self.name).collection(collection_name)
    }

    pub fn db_name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl StoreHealth for Database {
    async fn ping(&self) -> AppResult<()> {
        self.client
            .database(&self.name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

async fn client_options(conn_string: &str) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(conn_string).await?;

    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.min_pool_size = Some(MIN_POOL_SIZE);
    options.connect_timeout = Some(STORE_TIMEOUT);
    options.server_selection_timeout = Some(STORE_TIMEOUT);

    Ok(options)
}
