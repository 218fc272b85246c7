use std::sync::Arc;

use tokio::net::TcpListener;

use banterserver::chat::jokes::JokeList;
use banterserver::chat::registry::RoomRegistry;
use banterserver::config::Config;
use banterserver::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banterserver=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    let jokes = config.load_jokes().expect("failed to load joke list");
    print_banner(&config, &jokes);

    let state = AppState {
        registry: Arc::new(RoomRegistry::new(jokes)),
        public_dir: config.public_dir.clone(),
    };

    let app = banterserver::routes::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    eprintln!("  \x1b[32m→ listening on 0.0.0.0:{actual_port}\x1b[0m");
    eprintln!();

    axum::serve(listener, app).await.expect("server error");
}

fn print_banner(config: &Config, jokes: &JokeList) {
    let version = env!("CARGO_PKG_VERSION");
    let joke_source = match &config.jokes_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };

    eprintln!();
    eprintln!("  \x1b[1;36mbanter\x1b[0m \x1b[2mv{version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!("  \x1b[2mjokes\x1b[0m        {joke_source} ({} loaded)", jokes.len());
    eprintln!("  \x1b[2mclient\x1b[0m       {}", config.public_dir.display());
    eprintln!();
}
