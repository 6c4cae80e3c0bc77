/// Logger that captures records to a memory buffer instead of stdout,
/// so they do not corrupt the terminal while the picker is drawn
use log::{Level, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

const MAX_LOG_LINES: usize = 5_000;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe log buffer
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap();
        if logs.len() >= self.capacity {
            logs.pop_front();
        }
        logs.push_back(entry);
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.logs
            .read()
            .unwrap()
            .iter()
            .map(|entry| entry.format())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs.read().unwrap().len()
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
                level: record.level().to_string(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Install the buffered logger and return the buffer for reading logs.
/// If a logger is already installed the buffer simply stays empty.
pub fn init_memory_logger() -> LogBuffer {
    let buffer = LogBuffer::new();
    let logger = BufferedLogger::new(buffer.clone());
    // printing the failure would corrupt the TUI
    let _ = log::set_boxed_logger(Box::new(logger));
    log::set_max_level(log::LevelFilter::Debug);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = LogBuffer::with_capacity(2);
        let logger = BufferedLogger::new(buffer.clone());
        for message in ["one", "two", "three"] {
            logger.log(
                &Record::builder()
                    .args(format_args!("{}", message))
                    .level(Level::Info)
                    .target("calendr")
                    .build(),
            );
        }
        let logs = buffer.get_logs();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].ends_with("INFO calendr: two"));
        assert!(logs[1].ends_with("INFO calendr: three"));
    }

    #[test]
    fn test_trace_is_filtered() {
        let buffer = LogBuffer::new();
        let logger = BufferedLogger::new(buffer.clone());
        logger.log(
            &Record::builder()
                .args(format_args!("noisy"))
                .level(Level::Trace)
                .build(),
        );
        assert_eq!(buffer.len(), 0);
    }
}
