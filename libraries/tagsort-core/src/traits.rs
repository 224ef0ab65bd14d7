/// Capability traits injected into the engine
use crate::types::Identity;
use std::path::Path;

/// Looks up the music identity of a file
///
/// Implementations never fail: anything that cannot be read or lacks a
/// required field is reported as `None` ("unrecognized").
pub trait IdentityExtractor {
    /// Inspect a file and return its identity, if recognized
    fn inspect(&self, path: &Path) -> Option<Identity>;
}

impl<T: IdentityExtractor + ?Sized> IdentityExtractor for &T {
    fn inspect(&self, path: &Path) -> Option<Identity> {
        (**self).inspect(path)
    }
}

impl<T: IdentityExtractor + ?Sized> IdentityExtractor for Box<T> {
    fn inspect(&self, path: &Path) -> Option<Identity> {
        (**self).inspect(path)
    }
}

/// Sink for informational messages
///
/// Passed into the engine explicitly; there is no process-wide logger.
pub trait LogSink {
    /// Record an informational message
    fn info(&self, message: &str);
}

/// Sink that discards every message (verbosity disabled)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLog;

impl LogSink for NoopLog {
    fn info(&self, _message: &str) {}
}

/// Sink backed by a closure
pub struct FnLog<F>(pub F);

impl<F> LogSink for FnLog<F>
where
    F: Fn(&str),
{
    fn info(&self, message: &str) {
        (self.0)(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
