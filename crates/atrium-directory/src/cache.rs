/// Post-save hook for a process-wide cache of directory data.
///
/// Flushes are fire-and-forget: implementations swallow their own failures,
/// and an unconfigured hook is simply never called.
pub trait CacheInvalidator: Send + Sync {
    fn flush_all(&self);
}
