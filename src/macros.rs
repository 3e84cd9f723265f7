//! Logging shims for library code.
//!
//! With the `defmt` feature these forward to the matching `defmt` macro.
//! Without it (host builds and tests) the arguments are still type-checked
//! through `format_args!` but nothing is emitted, so only `{}` and `{:?}`
//! placeholders may be used.

#[cfg(feature = "defmt")]
mod with_defmt {
    macro_rules! debug {
        ($($arg:tt)*) => {
            defmt::debug!($($arg)*)
        };
    }

    macro_rules! info {
        ($($arg:tt)*) => {
            defmt::info!($($arg)*)
        };
    }

    macro_rules! warn_ {
        ($($arg:tt)*) => {
            defmt::warn!($($arg)*)
        };
    }

    macro_rules! error {
        ($($arg:tt)*) => {
            defmt::error!($($arg)*)
        };
    }

    pub(crate) use {debug, error, info, warn_ as warn};
}

#[cfg(not(feature = "defmt"))]
mod without_defmt {
    macro_rules! debug {
        ($($arg:tt)*) => {{
            let _ = format_args!($($arg)*);
        }};
    }

    macro_rules! info {
        ($($arg:tt)*) => {{
            let _ = format_args!($($arg)*);
        }};
    }

    macro_rules! warn_ {
        ($($arg:tt)*) => {{
            let _ = format_args!($($arg)*);
        }};
    }

    macro_rules! error {
        ($($arg:tt)*) => {{
            let _ = format_args!($($arg)*);
        }};
    }

    pub(crate) use {debug, error, info, warn_ as warn};
}

#[cfg(feature = "defmt")]
pub(crate) use with_defmt::{debug, error, info, warn};
#[cfg(not(feature = "defmt"))]
pub(crate) use without_defmt::{debug, error, info, warn};
