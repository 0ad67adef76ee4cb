use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// True when `QR_DEBUG` is set in the environment.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// `eprintln!` that only fires in debug builds with `QR_DEBUG` set.
macro_rules! qr_debug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && $crate::debug::debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use qr_debug;
