// entropysort/src/logger.rs
//! Logger initialisation for the `entropysort` binary.
//!
//! All log records go to stderr so they never interleave with the sorted
//! output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither a CLI override nor `RUST_LOG` is present.
const DEFAULT_FILTER: &str = "warn";

/// Log targets that belong to this workspace.
const OWN_MODULES: [&str; 2] = ["entropysort", "entropysort_core"];

/// Initialises `env_logger`.
///
/// `None` defers to `RUST_LOG`, falling back to warnings only. `Some(level)`
/// ignores `RUST_LOG` entirely: `Off` silences every target, any other level
/// applies to the entropysort modules while other crates stay at `warn`.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
        Some(LevelFilter::Off) => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Warn);
            for module in OWN_MODULES {
                builder.filter_module(module, level);
            }
            builder
        }
    };

    builder.target(Target::Stderr);

    // A logger may already be installed (tests call this repeatedly).
    let _ = builder.try_init();
}
