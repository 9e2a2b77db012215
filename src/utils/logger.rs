use once_cell::sync::OnceCell;
use tracing_subscriber::{
    fmt, fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::error::{ScheduleError, ScheduleResult};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_LOG_DIRECTIVES: &str = "info,scheduler=debug";

/// Opt-in `tracing` bootstrap for binaries and tests embedding the engine.
/// The engine itself only emits events; hosts that already install their own
/// subscriber should skip this. Safe to call more than once.
pub fn init_logging() -> ScheduleResult<()> {
    LOGGER_INIT
        .get_or_try_init(|| {
            let env_filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES))
                .map_err(|err| ScheduleError::other(format!("invalid log directives: {err}")))?;

            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(UtcTime::rfc_3339()),
                )
                .try_init()
                .map_err(|err| ScheduleError::other(format!("logger already initialized: {err}")))?;

            Ok(())
        })
        .map(|_| ())
}
