use ridecompare::config::Config;
use ridecompare::engine::Engine;
use ridecompare::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let addr = config.listen_addr;
    let engine = Engine::new(config);

    if let Err(err) = serve(engine, addr).await {
        tracing::error!("server stopped: {}", err);
        std::process::exit(1);
    }
}
