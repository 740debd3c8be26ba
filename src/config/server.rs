/// Server configuration constants.
///
/// Network binding and routing for the HTTP/WebSocket server.
/// Log verbosity is controlled at runtime through `RUST_LOG`.
pub const BIND_HOST: &str = "127.0.0.1";

/// TCP port the HTTP server listens on.
pub const BIND_PORT: u16 = 8080;

/// Path of the WebSocket endpoint clients connect to.
pub const WS_PATH: &str = "/ws";

/// Default log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
