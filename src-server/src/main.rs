use perfbook_server::config::ServerConfig;
use perfbook_server::main_lib::{app, build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let state = build_state(&config);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        stale_cutoff_day = config.stale_cutoff_day,
        "perfbook server listening"
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
