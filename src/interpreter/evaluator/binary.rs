/// Arithmetic operations.
///
/// Implements addition, subtraction, multiplication, and truncating division
/// on numbers, string concatenation, and the `__add__` hook on instances.
pub mod arithmetic;

/// Comparison operations.
///
/// Implements the six comparators over primitive values, with delegation to
/// the `__eq__` and `__lt__` hooks on instances. The negated comparators are
/// derived from equality and ordering.
pub mod comparison;

/// Operator dispatch.
///
/// Routes a binary operator and two evaluated operands to the matching
/// arithmetic, comparison, or logic routine.
pub mod core;

/// Logical connectives.
///
/// Implements `and`, `or`, and `not` over truthiness-coerced operands.
pub mod logic;
