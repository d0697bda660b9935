use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

pub fn init_logging(debug_logging: bool) {
    let directive = if debug_logging {
        "windsite=debug"
    } else {
        "windsite=info"
    };

    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive(directive.parse().expect("invalid logging directive"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}
