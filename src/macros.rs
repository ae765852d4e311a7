//! Logging macros over [`bridge::Handler`](crate::bridge::Handler).
//!
//! Attributes are written as `key => value` pairs after the message.
//!
//! # Examples
//!
//! ```
//! use rust_log_bridge::prelude::*;
//! use rust_log_bridge::info;
//!
//! let exporter = InMemoryExporter::new();
//! let producer = Producer::builder()
//!     .processor(SimpleProcessor::new(exporter.clone()))
//!     .build()
//!     .unwrap();
//! let handler = Handler::new(producer.logger("macros", Vec::new()));
//! let ctx = Context::background();
//!
//! info!(handler, &ctx, "Server started");
//! info!(handler, &ctx, "Listening", "port" => 8080, "tls" => true);
//!
//! assert_eq!(exporter.len(), 2);
//! ```

/// Build a `Vec<Attr>` from `key => value` pairs.
///
/// ```
/// use rust_log_bridge::attrs;
///
/// let attrs = attrs!["example" => "String", "number" => 123];
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::bridge::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::bridge::Attr::new($key, $value)),+]
    };
}

/// Log at an explicit foreign level.
///
/// ```
/// # use rust_log_bridge::prelude::*;
/// # let producer = Producer::builder()
/// #     .processor(SimpleProcessor::new(InMemoryExporter::new()))
/// #     .build()
/// #     .unwrap();
/// # let handler = Handler::new(producer.logger("doc", Vec::new()));
/// use rust_log_bridge::log;
/// log!(handler, &Context::background(), Level(2), "Between info and warn", "step" => 2);
/// ```
#[macro_export]
macro_rules! log {
    ($handler:expr, $ctx:expr, $level:expr, $msg:expr $(, $key:expr => $value:expr)*) => {
        $handler.log($ctx, $level, $msg, $crate::attrs![$($key => $value),*])
    };
}

#[macro_export]
macro_rules! debug {
    ($handler:expr, $ctx:expr, $msg:expr $(, $key:expr => $value:expr)*) => {
        $crate::log!($handler, $ctx, $crate::bridge::Level::DEBUG, $msg $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! info {
    ($handler:expr, $ctx:expr, $msg:expr $(, $key:expr => $value:expr)*) => {
        $crate::log!($handler, $ctx, $crate::bridge::Level::INFO, $msg $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($handler:expr, $ctx:expr, $msg:expr $(, $key:expr => $value:expr)*) => {
        $crate::log!($handler, $ctx, $crate::bridge::Level::WARN, $msg $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! error {
    ($handler:expr, $ctx:expr, $msg:expr $(, $key:expr => $value:expr)*) => {
        $crate::log!($handler, $ctx, $crate::bridge::Level::ERROR, $msg $(, $key => $value)*)
    };
}
