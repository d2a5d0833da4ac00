//! # Observability & Tracing
//!
//! Registry operations are logged with the `tracing` crate using structured fields:
//!
//! - **Registration**: `info` with `key`, `type_name`, `replaced` and the registry `size`
//! - **Clones**: `debug` with `key` and `type_name`
//! - **Failures**: `warn` for missing keys, type mismatches and rejected keys
//! - **Actor lifecycle**: `info` on startup and shutdown
//!
//! ```bash
//! # Registrations and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every clone and client request
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=prototype_framework=debug cargo run
//! ```

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`. Module paths are hidden; the `key` and
/// `type_name` fields already say which template a line is about.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
