use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once at `level`. `RUST_LOG` directives, when
/// set, are layered on top so single modules can be tuned.
///
/// Subsequent calls are ignored.
pub fn init_logging(level: log::LevelFilter) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level);
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        }
        builder.init();

        log::debug!("logging initialized at {level}");
    });
}
