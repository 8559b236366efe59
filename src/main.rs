use custdesk::config::AppConfig;
use custdesk::ui_dioxus::App;

fn main() {
    // Initialize logging
    init_logging();

    let config = load_config();
    tracing::info!(endpoint = %config.endpoint, quantity = config.quantity, "Starting customer desk");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt::init();
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> AppConfig {
    AppConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> AppConfig {
    let path = std::path::Path::new("custdesk.json");
    let mut config = match AppConfig::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "Could not load configuration, using defaults");
            AppConfig::default()
        }
    };
    if config.cache_dir.is_none() {
        config.cache_dir = Some(std::path::PathBuf::from(".custdesk"));
    }
    config
}
