use super::error::CacheError;

/// Receives the failures the queue cache swallows.
pub trait CacheDiagnostics {
    fn report(&self, error: &CacheError);
}

impl<T: CacheDiagnostics + ?Sized> CacheDiagnostics for &T {
    fn report(&self, error: &CacheError) {
        (**self).report(error)
    }
}

/// Forwards failures to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl CacheDiagnostics for LogDiagnostics {
    fn report(&self, error: &CacheError) {
        log::warn!("queue cache {}: {}", error.code(), error);
    }
}
