//! 日志宏，仅在启用`tracing`特性时产生事件，否则展开为空。

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }};
}

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}
