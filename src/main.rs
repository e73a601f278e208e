use std::sync::Arc;

use tracing::error;

use wayguard::config::{load_config, print_schema};
use wayguard::startup;
use wayguard::utils::logger::init_logging;

fn main() {
    // `wayguard --schema` prints the config JSON schema and exits.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config) {
        error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}
