/// Logging port. Use cases and view-models only log through this trait so the
/// catalog core never depends on a concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
