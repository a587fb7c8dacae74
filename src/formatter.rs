//! Log line layout for the simulation: wall-clock time, simulation tick, level, target, fields.
//!
//! ```text
//! 14:02:07.31542 0x01A4  INFO munch_maze::systems::telemetry: Ghost mode changed from=SCATTER to=CHASE
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits of the tick are printed.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Event formatter that stamps every line with the current simulation tick.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        styled(&mut writer, ansi, DIM, timestamp)?;
        writer.write_char(' ')?;
        styled(&mut writer, ansi, DIM, format_args!("0x{:04X}", get_tick_count() & TICK_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        let (color, label) = level_style(meta.level());
        styled(&mut writer, ansi, color, label)?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                styled(&mut writer, ansi, BOLD, span.metadata().name())?;
                if let Some(fields) = span.extensions().get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                writer.write_char(':')?;
            }
            writer.write_char(' ')?;
        }

        styled(&mut writer, ansi, DIM, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// ANSI color and right-aligned label for a level.
fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}

fn styled(writer: &mut Writer<'_>, ansi: bool, style: &str, value: impl fmt::Display) -> fmt::Result {
    if ansi {
        write!(writer, "{style}{value}{RESET}")
    } else {
        write!(writer, "{value}")
    }
}

/// Advances the tick shown in log lines. Called once per simulation tick.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
