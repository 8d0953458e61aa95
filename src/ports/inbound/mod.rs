/// Inbound ports (Driving ports) - Interfaces driven by the editor
///
/// These ports define the interfaces that inbound adapters (the event
/// reader in `serve` mode, an LSP transport) use to drive the application core.
pub mod editor_events;

pub use editor_events::EditorEvents;
