/// WarningNotifier port for non-fatal, user-facing warnings
///
/// Used when part of an analysis could not be completed (for example one
/// provider failed) but a partial result is still returned. Emitting a
/// warning must never abort the operation that raised it.
pub trait WarningNotifier: Send + Sync {
    /// Delivers a human-readable warning to the user
    fn warn(&self, message: &str);
}

impl<T: WarningNotifier + ?Sized> WarningNotifier for std::sync::Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
