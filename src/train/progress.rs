use std::sync::mpsc;

/// Receives the human-readable status lines emitted while training and
/// running. Implementations must not block or fail; nothing they do can
/// abort the computation.
pub trait ProgressSink {
    fn display(&mut self, line: &str);
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn display(&mut self, _line: &str) {}
}

/// Forwards every line to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn display(&mut self, line: &str) {
        tracing::debug!("{line}");
    }
}

/// Collects lines in memory.
impl ProgressSink for Vec<String> {
    fn display(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Sends lines to another thread. A dropped receiver is ignored.
impl ProgressSink for mpsc::Sender<String> {
    fn display(&mut self, line: &str) {
        let _ = self.send(line.to_owned());
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn display(&mut self, line: &str) {
        (**self).display(line);
    }
}
