mod container;
pub use container::Container;

mod geometry_error;
pub use geometry_error::{Axis, GeometryError};

use std::ops::Add;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub type OkOrMessage = Result<(), String>;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Installs a `tracing` subscriber once per test binary.
/// Respects `RUST_LOG` when set, otherwise logs at `info`.
pub fn init_test_logging() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
