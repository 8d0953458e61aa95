/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the editor, the scanning
/// engine, the file system and the console.
pub mod inbound;
pub mod outbound;
