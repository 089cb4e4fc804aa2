/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: payload reading,
/// output writing and record rendering.
pub mod outbound;
