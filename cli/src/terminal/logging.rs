use std::io;

use colored::*;
use portcheck_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

/// Stays quiet unless asked: stderr is reserved for the elapsed time line.
const QUIET_FILTER: &str = "error";
const DEBUG_FILTER: &str = "portcheck_core=debug,portcheck_cli=debug,warn";
const TRACE_FILTER: &str = "portcheck_core=trace,portcheck_cli=trace,info";

/// Prefixes every event with a level marker such as `[?]` and drops the
/// timestamp and target.
pub struct LevelMarkFormatter;

/// Marker printed in front of an event of the given level.
fn level_mark(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".color(colors::LOG_TRACE),
        Level::DEBUG => "[?]".color(colors::LOG_DEBUG),
        Level::INFO => "[+]".color(colors::LOG_INFO),
        Level::WARN => "[*]".color(colors::LOG_WARN).bold(),
        Level::ERROR => "[-]".color(colors::LOG_ERROR).bold(),
    }
}

impl<S, N> FormatEvent<S, N> for LevelMarkFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_mark(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(QUIET_FILTER)),
        1 => EnvFilter::new(DEBUG_FILTER),
        _ => EnvFilter::new(TRACE_FILTER),
    }
}

/// Installs the stderr subscriber.
///
/// `-v` flags win over `RUST_LOG`; without them `RUST_LOG` is honoured and
/// only errors are shown by default.
pub fn init_logging(cfg: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(cfg.verbose))
        .with_writer(io::stderr)
        .event_format(LevelMarkFormatter)
        .try_init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
