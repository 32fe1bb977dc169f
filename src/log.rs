//! The `log` module defines the interface to the engine's logging facilities. Log messages describe
//! the internal behavior of the engine (construction, resets, day steps, model runs). They are not
//! the simulation output, which is read through `Population` and `Model` accessors.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`, `info!`, `debug!` and
//! `trace!`, where `error!` has the highest priority and `trace!` the lowest.
//!
//! ```rust
//! use ixa_grid::log::info;
//!
//! pub fn do_a_thing() {
//!     info!("A thing is being done.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. It is controlled with:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with priority at least `level`
//!
//! Per-module filters are set with `set_module_filter()` and removed with
//! `remove_module_filter()`:
//!
//! ```rust
//! use ixa_grid::log::{set_module_filter, set_log_level, LevelFilter};
//!
//! pub fn setup_logging() {
//!     set_log_level(LevelFilter::Info);
//!     // Per-day messages from the engine.
//!     set_module_filter("ixa_grid::population", LevelFilter::Debug);
//! }
//! ```

pub use log::{debug, error, info, trace, warn, LevelFilter};

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use std::collections::BTreeMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

const APPENDER: &str = "console";
// Wall-clock time, padded level tag, emitting module
const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} [{M}] {m}{n}";

static LOG_CONFIGURATION: LazyLock<Mutex<LogConfiguration>> = LazyLock::new(Mutex::default);

/// Root level, per-module levels, and the handle of the installed `log4rs` logger.
struct LogConfiguration {
    /// Level for modules without their own filter. Starts `Off`.
    global_log_level: LevelFilter,
    module_levels: BTreeMap<String, LevelFilter>,
    handle: Option<Handle>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        LogConfiguration {
            global_log_level: LevelFilter::Off,
            module_levels: BTreeMap::new(),
            handle: None,
        }
    }
}

impl LogConfiguration {
    fn set_log_level(&mut self, level: LevelFilter) {
        self.global_log_level = level;
        self.apply();
    }

    fn set_module_filter(&mut self, module: &str, level: LevelFilter) {
        if self.module_levels.insert(module.to_string(), level) != Some(level) {
            self.apply();
        }
    }

    fn remove_module_filter(&mut self, module: &str) {
        if self.module_levels.remove(module).is_some() {
            self.apply();
        }
    }

    /// One console appender shared by the root and a logger per filtered module.
    fn build_config(&self) -> Result<Config, log4rs::config::runtime::ConfigErrors> {
        let console = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        let loggers = self
            .module_levels
            .iter()
            .map(|(module, &level)| Logger::builder().build(module.as_str(), level));

        Config::builder()
            .appender(Appender::builder().build(APPENDER, Box::new(console)))
            .loggers(loggers)
            .build(Root::builder().appender(APPENDER).build(self.global_log_level))
    }

    /// Installs the current configuration, initializing the global logger on first use. If
    /// `log4rs` cannot be installed (another logger owns the facade, or the configuration is
    /// rejected) only the facade's maximum level is adjusted.
    fn apply(&mut self) {
        let config = match self.build_config() {
            Ok(config) => config,
            Err(errors) => {
                log::set_max_level(self.global_log_level);
                eprintln!("ixa_grid: invalid log configuration: {errors}");
                return;
            }
        };
        if let Some(handle) = &self.handle {
            handle.set_config(config);
        } else if let Ok(handle) = log4rs::init_config(config) {
            self.handle = Some(handle);
        } else {
            log::set_max_level(self.global_log_level);
        }
    }
}

/// Enables the logger with no global level filter / full logging. Equivalent to
/// `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A global filter level of `LevelFilter::Off` disables logging.
pub fn set_log_level(level: LevelFilter) {
    get_log_configuration().set_log_level(level);
}

/// Sets a level filter for the given module path, e.g. `"ixa_grid::model"`.
pub fn set_module_filter(module_path: &str, level_filter: LevelFilter) {
    get_log_configuration().set_module_filter(module_path, level_filter);
}

/// Removes a module-specific level filter. The global level filter will apply to the module.
pub fn remove_module_filter(module_path: &str) {
    get_log_configuration().remove_module_filter(module_path);
}

// A panic while logging must not leave the filters unusable.
fn get_log_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Force logging tests to run serially for consistent behavior.
    static TEST_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

    #[test]
    fn set_log_level_updates_configuration() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_log_level(LevelFilter::Error);
        assert_eq!(get_log_configuration().global_log_level, LevelFilter::Error);
        error!("set_log_level_updates_configuration: global set to error");
        trace!("set_log_level_updates_configuration: NOT EMITTED");

        enable_logging();
        assert_eq!(get_log_configuration().global_log_level, LevelFilter::Trace);

        disable_logging();
        assert_eq!(get_log_configuration().global_log_level, LevelFilter::Off);
    }

    #[test]
    fn set_and_remove_module_filters() {
        let _guard = TEST_MUTEX.lock().expect("Mutex poisoned");
        set_module_filter("ixa_grid::population", LevelFilter::Debug);
        assert_eq!(
            get_log_configuration().module_levels.get("ixa_grid::population"),
            Some(&LevelFilter::Debug)
        );

        remove_module_filter("ixa_grid::population");
        assert!(
            !get_log_configuration()
                .module_levels
                .contains_key("ixa_grid::population")
        );
        disable_logging();
    }

    #[test]
    fn module_filters_become_loggers() {
        let mut configuration = LogConfiguration::default();
        configuration
            .module_levels
            .insert("ixa_grid::population".to_string(), LevelFilter::Debug);
        configuration
            .module_levels
            .insert("ixa_grid::model".to_string(), LevelFilter::Warn);
        configuration.global_log_level = LevelFilter::Info;

        let config = configuration.build_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        let loggers: Vec<(&str, LevelFilter)> = config
            .loggers()
            .iter()
            .map(|logger| (logger.name(), logger.level()))
            .collect();
        assert_eq!(
            loggers,
            vec![
                ("ixa_grid::model", LevelFilter::Warn),
                ("ixa_grid::population", LevelFilter::Debug),
            ]
        );
    }
}
