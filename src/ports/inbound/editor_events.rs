/// EditorEvents - Inbound port for text document lifecycle notifications
///
/// Implementations decide whether and when a notification leads to a
/// re-analysis of the document. All methods are called from the single
/// event-handling task and must return quickly; analyses run in the
/// background.
pub trait EditorEvents {
    /// A document was opened with the given full text
    fn did_open(&self, uri: &str, text: &str);

    /// A document was saved; the last known text is used
    fn did_save(&self, uri: &str);

    /// The full text of a document changed
    fn did_change(&self, uri: &str, text: &str);

    /// A document was closed
    fn did_close(&self, uri: &str);
}
