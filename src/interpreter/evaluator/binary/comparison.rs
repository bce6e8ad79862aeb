use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{ClassInstance, EQ_METHOD, LT_METHOD},
            core::{Holder, Value},
        },
    },
};

/// Compares two values for equality.
///
/// Two booleans, two numbers, or two strings compare by their underlying
/// values. An instance on the left delegates to its `__eq__` hook, whose
/// result is coerced with truthiness rules. Two empty holders are equal.
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] for any other combination.
///
/// # Example
/// ```
/// use minipy::interpreter::{
///     evaluator::{binary::comparison::equal, core::Context},
///     value::core::{Holder, Value},
/// };
///
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut output);
///
/// let four = Holder::own(Value::Number(4));
/// assert!(equal(&four, &four.share(), &mut context).unwrap());
/// assert!(equal(&Holder::none(), &Holder::none(), &mut context).unwrap());
/// ```
pub fn equal(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a == b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a == b),
        (Some(Value::String(a)), Some(Value::String(b))) => Ok(a == b),
        (Some(Value::Instance(instance)), _) if instance.has_method(EQ_METHOD, 1) => {
            Ok(ClassInstance::call(instance, EQ_METHOD, &[rhs.share()], context)?.is_true())
        },
        (None, None) => Ok(true),
        _ => Err(RuntimeError::CannotCompare { operation: "equality" }),
    }
}

/// Compares two values for strict ordering.
///
/// Two booleans, two numbers, or two strings compare by their underlying
/// values. An instance on the left delegates to its `__lt__` hook, whose
/// result is coerced with truthiness rules.
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] for any other combination.
pub fn less(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a < b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a < b),
        (Some(Value::String(a)), Some(Value::String(b))) => Ok(a < b),
        (Some(Value::Instance(instance)), _) if instance.has_method(LT_METHOD, 1) => {
            Ok(ClassInstance::call(instance, LT_METHOD, &[rhs.share()], context)?.is_true())
        },
        _ => Err(RuntimeError::CannotCompare { operation: "ordering" }),
    }
}

/// The negation of [`equal`].
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] when equality is undefined for
/// the operands.
pub fn not_equal(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    Ok(!equal(lhs, rhs, context)?)
}

/// `true` when `lhs` is neither less than nor equal to `rhs`.
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] when ordering or equality is
/// undefined for the operands.
pub fn greater(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    Ok(!(less(lhs, rhs, context)? || equal(lhs, rhs, context)?))
}

/// The negation of [`greater`].
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] when ordering or equality is
/// undefined for the operands.
pub fn less_or_equal(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    Ok(!greater(lhs, rhs, context)?)
}

/// The negation of [`less`].
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] when ordering is undefined for
/// the operands.
pub fn greater_or_equal(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context)?)
}

/// Routes a comparison operator to the matching comparator.
///
/// # Errors
/// Returns [`RuntimeError::CannotCompare`] when the operands do not admit
/// the comparison.
pub fn compare(op: BinaryOperator,
               lhs: &Holder,
               rhs: &Holder,
               context: &mut Context<'_>)
               -> EvalResult<bool> {
    match op {
        BinaryOperator::Equal => equal(lhs, rhs, context),
        BinaryOperator::NotEqual => not_equal(lhs, rhs, context),
        BinaryOperator::Less => less(lhs, rhs, context),
        BinaryOperator::Greater => greater(lhs, rhs, context),
        BinaryOperator::LessEqual => less_or_equal(lhs, rhs, context),
        BinaryOperator::GreaterEqual => greater_or_equal(lhs, rhs, context),
        _ => unreachable!("compare used with a non-comparison operator"),
    }
}
