//! Todo Web Server binary.

use std::net::SocketAddr;

use todo_server::{
    config::{Config, StorageBackend},
    create_app, create_state, init_tracing,
};
use todo_store::{MySqlTodoStore, SqliteTodoStore, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    init_tracing(&config.log_level);

    // Connect the configured backend; connecting ensures the schema exists
    // before the server accepts requests.
    match &config.backend {
        StorageBackend::Sqlite { path } => {
            tracing::info!(path = %path, "Using embedded SQLite database");
            let store = SqliteTodoStore::connect(&config.backend.connection_url()).await?;
            run(config, store).await
        }
        StorageBackend::MySql { host, database, .. } => {
            tracing::info!(host = %host, database = %database, "Using external MySQL database");
            let store = MySqlTodoStore::connect(&config.backend.connection_url()).await?;
            run(config, store).await
        }
    }
}

/// Serves the application over the given store until shutdown.
async fn run<S: TodoStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = create_state(config, store);
    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
