/// Numeric presentation helpers.
///
/// Formats evaluation results so they read back as source literals.
pub mod num;
