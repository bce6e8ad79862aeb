use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Holder, Value},
    },
};

/// Combines two operands with `and` or `or`.
///
/// Both operands are already evaluated; the connectives do not
/// short-circuit. Each operand is coerced to a boolean with truthiness
/// rules.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperands`] when either operand is the
/// empty holder.
pub fn combine(op: BinaryOperator, lhs: &Holder, rhs: &Holder) -> EvalResult<Holder> {
    let operation = match op {
        BinaryOperator::And => "and",
        BinaryOperator::Or => "or",
        _ => unreachable!("combine used with a non-logical operator"),
    };
    if lhs.is_none() || rhs.is_none() {
        return Err(RuntimeError::InvalidOperands { operation });
    }

    let result = match op {
        BinaryOperator::And => lhs.is_true() && rhs.is_true(),
        _ => lhs.is_true() || rhs.is_true(),
    };
    Ok(Holder::own(Value::Bool(result)))
}

/// Logically negates an operand, coercing it with truthiness rules.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperands`] when the operand is the empty
/// holder.
pub fn not(value: &Holder) -> EvalResult<Holder> {
    if value.is_none() {
        return Err(RuntimeError::InvalidOperands { operation: "not" });
    }
    Ok(Holder::own(Value::Bool(!value.is_true())))
}
