use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use tracing::info;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle to the document store. Constructed once at process start and
/// injected into repositories; the driver multiplexes concurrent operations
/// over its own pool, so no application-level locking sits on top of it.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(database_name);

        info!(database = database_name, "MongoDB client initialized");

        Ok(Self { database })
    }

    /// Typed handle to a named collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Round-trip to the server, used by the readiness probe.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
