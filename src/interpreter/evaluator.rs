/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// comparisons, and the logical connectives.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the execution context, the nonlocal-exit channel used by
/// `return`, and the tree-walking dispatch over AST nodes.
pub mod core;
