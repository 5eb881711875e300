//! Logging and profiling macros
//!
//! The macros are the intended entry points: they capture the call site
//! (file, line, enclosing function) at the expansion point and `format!`
//! the message parts before handing off to [`Logger::log`], so the record
//! always reflects where the call was issued.
//!
//! # Examples
//!
//! ```
//! use profilog::prelude::*;
//! use profilog::{info, warn};
//!
//! let logger = Logger::builder()
//!     .config(LogConfig::new().with_console_output(false))
//!     .build();
//!
//! info!(logger, "server started");
//!
//! let port = 8080;
//! warn!(logger, "port {} already in use", port);
//! ```
//!
//! [`Logger::log`]: crate::core::Logger::log

/// Name of the enclosing function, as a `&'static str`.
///
/// Resolves the type name of a local item, which carries the full module
/// path of the surrounding function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f"
        &name[..name.len() - 3]
    }};
}

/// Log a message at an explicit level, capturing the call site implicitly.
///
/// ```
/// # use profilog::prelude::*;
/// # let logger = Logger::builder()
/// #     .config(LogConfig::new().with_console_output(false))
/// #     .build();
/// use profilog::log;
/// log!(logger, LogLevel::Error, "exit code {}", 1);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            format!($($arg)+),
            $crate::CallSite::new(file!(), line!(), $crate::function_name!()),
        )
    };
}

/// Log an info-level message (`[+]`).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message (`[!]`).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message (`[-]`).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a debug-level message (`[*]`).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Time a block and emit the duration as a Debug record.
///
/// ```
/// # use profilog::prelude::*;
/// # let logger = Logger::builder()
/// #     .config(LogConfig::new().with_console_output(false))
/// #     .build();
/// use profilog::profile;
/// let total = profile!(logger, "sum", {
///     (1..=100).sum::<u32>()
/// });
/// assert_eq!(total, 5050);
/// ```
#[macro_export]
macro_rules! profile {
    ($logger:expr, $tag:expr, $body:block) => {
        $logger.profile_fn($tag, || $body)
    };
}
