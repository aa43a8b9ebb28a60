//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Distinguish between a loaded connection config and commands that need none.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - `Placeholder` never reaches a command that talks to the server.

use inventory_config::Config;

/// Context for command execution.
pub(crate) enum ConfigCommandContext {
    /// Config merged from profile, environment and CLI flags.
    Real {
        config: Box<Config>,
        /// Record request metrics (set when `--metrics-bind` started an exporter).
        metrics: bool,
    },
    /// Used by `config` subcommands, which manage the profile file directly.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<(Config, bool)> {
        match self {
            ConfigCommandContext::Real { config, metrics } => Ok((*config, metrics)),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}
