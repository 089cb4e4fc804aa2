/// Application layer - Use cases and DTOs
///
/// This layer drives the materializer through the ports and hands the
/// results to the formatter and presenter adapters.
pub mod dto;
pub mod factories;
pub mod use_cases;
