use docroot::config::Config;
use docroot::server::{Server, shutdown};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut server = match Server::bind(&cfg).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    tokio::select! {
        _ = server.run() => {}

        res = shutdown::signal() => {
            let signal = res?;
            tracing::info!(signal, "Shutdown signal received");
        }
    }

    Ok(())
}
