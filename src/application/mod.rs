/// Application layer - Use cases, event dispatch and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dispatch;
pub mod dto;
pub mod use_cases;
