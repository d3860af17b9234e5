/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Errors should continue using
/// `leptos::logging::error!` directly so they are never dropped.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use bike_traffic_map::log;
///
/// log!("Loaded {} stations", 412);
/// log!("Pipeline pass: {:.2}ms", 1.25);
/// ```
/// Conditionally log to console in development builds
///
/// This macro expands to `web_sys::console::log_1()` in debug builds or when
/// the `console_logging` feature is enabled. Native builds (tests, benches)
/// write to stderr instead. In production release builds it compiles to
/// nothing.
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), any(debug_assertions, feature = "console_logging")))]
        {
            eprintln!("{}", format!($($arg),+));
        }
    };
}
