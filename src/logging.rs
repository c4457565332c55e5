//! Crate-internal logging macros. Events are forwarded to [`tracing`] when the `tracing` feature is enabled and
//! compile to nothing otherwise.

#[allow(unused_macros)]
macro_rules! trace {
	($($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)+);
	}}
}
macro_rules! debug {
	($($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		tracing::debug!($($arg)+);
	}}
}
macro_rules! info {
	($($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		tracing::info!($($arg)+);
	}}
}
macro_rules! warning {
	($($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		tracing::warn!($($arg)+);
	}}
}
pub(crate) use debug;
pub(crate) use info;
#[allow(unused_imports)]
pub(crate) use trace;
pub(crate) use warning;

/// Installs a `tracing` subscriber that writes to stderr, filtered by `RUST_LOG` (default: `warn`).
///
/// Stdout is left untouched so that it only ever carries the report.
#[cfg(feature = "tracing")]
pub fn init_stderr_subscriber() {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	// a subscriber may already be installed by the embedding application
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
