use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::trace::trace::TraceEvent;

type Sink = Box<dyn Write + Send>;

/// Append-only JSONL sink for synthesis runs, one event per line.
///
/// Write failures never reach the caller; a lost event is only reported
/// through `tracing`.
pub struct TraceLogger {
    sink: Option<Mutex<Sink>>,
}

impl TraceLogger {
    /// Append to the file at `path`. An unopenable path yields a disabled logger.
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::from_writer(file),
            Err(e) => {
                warn!(path, error = %e, "trace file unavailable, run tracing disabled");
                Self::disabled()
            }
        }
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Mutex::new(Box::new(writer))),
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        if let Err(e) = Self::append(sink, event) {
            warn!(error = %e, "dropped trace event");
            return;
        }
        debug!(actions = event.actions, "trace event appended");
    }

    fn append(sink: &Mutex<Sink>, event: &TraceEvent) -> io::Result<()> {
        let line = serde_json::to_string(event)?;
        let mut writer = sink
            .lock()
            .map_err(|_| io::Error::other("trace sink lock poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}
