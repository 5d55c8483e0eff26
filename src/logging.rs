//! Logs en nativo: los `log::` del crate salen por stderr a través de tracing-subscriber.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "geoquest=info,warn";

/// Instala el subscriber global. `RUST_LOG` manda sobre el filtro por defecto.
/// Si ya hay uno instalado no hace nada.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
