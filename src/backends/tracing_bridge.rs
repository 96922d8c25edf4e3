//! Bridge to the `tracing` ecosystem
//!
//! Each [`TracingLogger`] owns a private `tracing-subscriber` fmt subscriber
//! writing to its sink, and emits every call as a `tracing` event inside that
//! subscriber's scope. Severities collapse onto tracing's five levels:
//! `PANIC`, `FATAL` and `ERROR` all become `ERROR`; the original severity is
//! kept in the `severity` field.
//!
//! Keyed fields travel on the event as a single `data` field. The text
//! formatter prints it as `data=k=v k=v`. The json formatter splices it back
//! into the line, so `{"@time":..,"@level":"info","@msg":"login","user":"bob"}`
//! carries every field as a typed JSON value. A field named like one of the
//! fixed keys is written as `fields.<name>`.
//!
//! Recognized options:
//!
//! | key                | type    | default                                    |
//! |--------------------|---------|--------------------------------------------|
//! | `formatter`        | string  | `text` (or `json`)                         |
//! | `timestampFormat`  | string  | `%Y/%m/%d %H:%M:%S %Z`, `rfc3339` for json |
//! | `disableTimestamp` | bool    | `false`                                    |
//! | `forceColors`      | bool    | `false`                                    |
//! | `showTarget`       | bool    | `false`                                    |
//! | `fieldMap`         | options | renames of `time`, `level`, `msg` (json)   |
//! | `dataKey`          | string  | nest fields under this key (json)          |

use crate::core::output_format::{LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
use crate::core::{
    as_string_quoted, process_exit, ActiveLevel, Constructor, ExitHook, Field, Level, LoggerError,
    Logger, Options, Result, Sink, TimestampFormat, DEFAULT_TIMESTAMP_FORMAT,
};
use parking_lot::{Mutex, MutexGuard};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::field::{Field as EventField, Visit};
use tracing::{dispatcher, Dispatch, Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Registry name of the tracing bridge
pub const TRACING_NAME: &str = "tracing";

pub const OPT_FORMATTER: &str = "formatter";
pub const OPT_TIMESTAMP_FORMAT: &str = "timestampFormat";
pub const OPT_DISABLE_TIMESTAMP: &str = "disableTimestamp";
pub const OPT_FORCE_COLORS: &str = "forceColors";
pub const OPT_SHOW_TARGET: &str = "showTarget";
pub const OPT_FIELD_MAP: &str = "fieldMap";
pub const OPT_DATA_KEY: &str = "dataKey";

/// Event field carrying the rendered keyed fields
const DATA_FIELD: &str = "data";

/// Target of every bridged event
const TARGET: &str = "rust_level_logger";

/// Map the most verbose severity in `level` onto a tracing level
pub fn to_tracing_level(level: Level) -> Option<tracing::Level> {
    level.most_verbose().map(|verbose| match verbose {
        Level::TRACE => tracing::Level::TRACE,
        Level::DEBUG => tracing::Level::DEBUG,
        Level::INFO => tracing::Level::INFO,
        Level::WARN => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    })
}

pub struct TracingConstructor;

impl Constructor for TracingConstructor {
    fn new_with_options(&self, sink: Sink, level: Level, options: &Options) -> Result<Box<dyn Logger>> {
        Ok(Box::new(TracingLogger::with_options(sink, level, options)?))
    }
}

/// Hands the fmt subscriber exclusive access to the sink for one event
#[derive(Clone)]
struct SinkWriter {
    sink: Arc<Mutex<Sink>>,
}

struct SinkGuard<'a>(MutexGuard<'a, Sink>);

impl io::Write for SinkGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for SinkWriter {
    type Writer = SinkGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkGuard(self.sink.lock())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgeFormat {
    Text,
    Json,
}

impl BridgeFormat {
    fn from_option(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(BridgeFormat::Text),
            "json" => Ok(BridgeFormat::Json),
            other => Err(LoggerError::config(
                "TracingLogger",
                format!("unknown formatter '{}'", other),
            )),
        }
    }
}

/// Pulls the bridge's own fields back out of an event
#[derive(Default)]
struct EventParts {
    message: String,
    severity: String,
    data: Option<String>,
}

impl Visit for EventParts {
    fn record_str(&mut self, field: &EventField, value: &str) {
        self.record_text(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &EventField, value: &dyn fmt::Debug) {
        self.record_text(field.name(), format!("{:?}", value));
    }
}

impl EventParts {
    fn record_text(&mut self, name: &str, text: String) {
        match name {
            "message" => self.message = text,
            "severity" => self.severity = text,
            DATA_FIELD => self.data = Some(text),
            _ => {}
        }
    }
}

/// One JSON object per event with the keyed fields as real JSON values
struct JsonEventFormat {
    timestamp: Option<TimestampFormat>,
    time_key: String,
    level_key: String,
    message_key: String,
    data_key: Option<String>,
    show_target: bool,
}

impl JsonEventFormat {
    fn from_options(options: &Options) -> Result<Self> {
        let timestamp = if options.get_bool(OPT_DISABLE_TIMESTAMP, false) {
            None
        } else {
            Some(TimestampFormat::from_option(
                &options.get_string(OPT_TIMESTAMP_FORMAT, "rfc3339"),
            )?)
        };
        let renames = options.get_options(OPT_FIELD_MAP);
        let key = |name: &str, def: &str| renames.map_or_else(|| def.to_string(), |m| m.get_string(name, def));
        let data_key = options.get_string(OPT_DATA_KEY, "");

        Ok(Self {
            timestamp,
            time_key: key("time", TIME_KEY),
            level_key: key("level", LEVEL_KEY),
            message_key: key("msg", MESSAGE_KEY),
            data_key: (!data_key.is_empty()).then_some(data_key),
            show_target: options.get_bool(OPT_SHOW_TARGET, false),
        })
    }

    fn render(&self, target: &str, parts: EventParts) -> Map<String, Value> {
        let mut object = Map::new();
        if let Some(format) = &self.timestamp {
            let text = format.format(&chrono::Local::now());
            let value = if format.is_numeric() {
                text.parse::<i64>().map(Value::from).unwrap_or(Value::Null)
            } else {
                Value::String(text)
            };
            object.insert(self.time_key.clone(), value);
        }
        object.insert(self.level_key.clone(), Value::String(parts.severity));
        object.insert(self.message_key.clone(), Value::String(parts.message));
        if self.show_target {
            object.insert("target".to_string(), Value::String(target.to_string()));
        }

        let Some(data) = parts.data else {
            return object;
        };
        let fields = match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(fields)) => fields,
            _ => {
                let mut fields = Map::new();
                fields.insert(DATA_FIELD.to_string(), Value::String(data));
                fields
            }
        };

        match &self.data_key {
            Some(key) => {
                object.insert(key.clone(), Value::Object(fields));
            }
            None => {
                for (key, value) in fields {
                    let key = if object.contains_key(&key) {
                        format!("fields.{}", key)
                    } else {
                        key
                    };
                    object.insert(key, value);
                }
            }
        }
        object
    }
}

impl<S, N> FormatEvent<S, N> for JsonEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut parts = EventParts::default();
        event.record(&mut parts);
        if parts.severity.is_empty() {
            parts.severity = event.metadata().level().to_string().to_ascii_lowercase();
        }

        let object = self.render(event.metadata().target(), parts);
        writeln!(writer, "{}", Value::Object(object))
    }
}

/// `tracing::event!` needs its level as a constant
macro_rules! bridge_event {
    ($native:expr, $($rest:tt)+) => {
        if $native == tracing::Level::ERROR {
            tracing::event!(target: TARGET, tracing::Level::ERROR, $($rest)+)
        } else if $native == tracing::Level::WARN {
            tracing::event!(target: TARGET, tracing::Level::WARN, $($rest)+)
        } else if $native == tracing::Level::INFO {
            tracing::event!(target: TARGET, tracing::Level::INFO, $($rest)+)
        } else if $native == tracing::Level::DEBUG {
            tracing::event!(target: TARGET, tracing::Level::DEBUG, $($rest)+)
        } else {
            tracing::event!(target: TARGET, tracing::Level::TRACE, $($rest)+)
        }
    };
}

pub struct TracingLogger {
    level: ActiveLevel,
    dispatch: Dispatch,
    format: BridgeFormat,
    exit_hook: ExitHook,
}

impl TracingLogger {
    pub fn new(sink: Sink, level: Level) -> Result<Self> {
        Self::with_options(sink, level, &Options::new())
    }

    pub fn with_options(sink: Sink, level: Level, options: &Options) -> Result<Self> {
        if to_tracing_level(level).is_none() {
            return Err(LoggerError::unmappable_level(
                TRACING_NAME,
                format!("{:#x}", level.bits()),
            ));
        }

        let format = BridgeFormat::from_option(&options.get_string(OPT_FORMATTER, "text"))?;

        let builder = tracing_subscriber::fmt()
            .with_writer(SinkWriter {
                sink: Arc::new(Mutex::new(sink)),
            })
            .with_max_level(LevelFilter::TRACE)
            .with_ansi(options.get_bool(OPT_FORCE_COLORS, false))
            .with_target(options.get_bool(OPT_SHOW_TARGET, false));

        let dispatch = match format {
            BridgeFormat::Json => {
                Dispatch::new(builder.event_format(JsonEventFormat::from_options(options)?).finish())
            }
            BridgeFormat::Text if options.get_bool(OPT_DISABLE_TIMESTAMP, false) => {
                Dispatch::new(builder.without_time().finish())
            }
            BridgeFormat::Text => {
                let layout = options.get_string(OPT_TIMESTAMP_FORMAT, DEFAULT_TIMESTAMP_FORMAT);
                // reject layouts chrono cannot render before handing them to the subscriber
                TimestampFormat::custom(&layout)?;
                Dispatch::new(builder.with_timer(ChronoUtc::new(layout)).finish())
            }
        };

        Ok(Self {
            level: ActiveLevel::new(level),
            dispatch,
            format,
            exit_hook: process_exit,
        })
    }

    /// Run `hook` before the process exits on a fatal call
    #[must_use]
    pub fn with_exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }

    /// Render fields for the `data` event field, sorted by name, last value
    /// winning on repeated names. The json formatter expects a JSON object here.
    fn render_fields(&self, fields: &[Field]) -> String {
        let map: BTreeMap<&str, _> = fields
            .iter()
            .map(|f| (f.key.as_str(), &f.value))
            .collect();

        match self.format {
            BridgeFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = map
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_json_value()))
                    .collect();
                serde_json::Value::Object(object).to_string()
            }
            BridgeFormat::Text => map
                .into_iter()
                .map(|(k, v)| format!("{}={}", k, as_string_quoted(v)))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    fn emit(&self, level: Level, message: &str, data: Option<&str>) {
        let Some(native) = to_tracing_level(level) else {
            return;
        };
        let message = message.trim_end_matches('\n');

        dispatcher::with_default(&self.dispatch, || match data {
            Some(data) => bridge_event!(native, severity = %level, data = %data, "{}", message),
            None => bridge_event!(native, severity = %level, "{}", message),
        });
    }
}


impl Logger for TracingLogger {
    fn has_level(&self, level: Level) -> bool {
        self.level.has(level)
    }

    /// Levels with no tracing counterpart are ignored
    fn set_level(&self, level: Level) {
        if to_tracing_level(level).is_some() {
            self.level.set(level);
        }
    }

    fn output(&self, level: Level, message: &str) {
        self.emit(level, message, None);
    }

    fn output_fields(&self, level: Level, message: &str, fields: &[Field]) {
        if fields.is_empty() {
            self.emit(level, message, None);
        } else {
            self.emit(level, message, Some(&self.render_fields(fields)));
        }
    }

    fn exit(&self, code: i32) -> ! {
        (self.exit_hook)(code);
        std::process::exit(code)
    }
}
