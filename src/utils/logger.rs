use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging() {
    // Compact stdout logging, INFO and up
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set default tracing subscriber");
}
