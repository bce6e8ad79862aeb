use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{ClassInstance, ADD_METHOD},
            core::{Holder, Value},
        },
    },
};

/// Adds two values.
///
/// Numbers add arithmetically, strings concatenate, and an instance on the
/// left dispatches to its `__add__` hook with the right operand as the
/// argument.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperands`] for any other combination and
/// [`RuntimeError::Overflow`] when the numeric sum does not fit.
pub fn add(lhs: &Holder, rhs: &Holder, context: &mut Context<'_>) -> EvalResult<Holder> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.checked_add(*b)
                                                             .map(|n| Holder::own(Value::Number(n)))
                                                             .ok_or(RuntimeError::Overflow),
        (Some(Value::String(a)), Some(Value::String(b))) => {
            Ok(Holder::own(Value::String(format!("{a}{b}").into())))
        },
        (Some(Value::Instance(instance)), Some(_)) if instance.has_method(ADD_METHOD, 1) => {
            ClassInstance::call(instance, ADD_METHOD, &[rhs.share()], context)
        },
        _ => Err(RuntimeError::InvalidOperands { operation: "add" }),
    }
}

/// Subtracts two numbers.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperands`] when either operand is not a
/// number and [`RuntimeError::Overflow`] when the difference does not fit.
pub fn sub(lhs: &Holder, rhs: &Holder) -> EvalResult<Holder> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.checked_sub(*b)
                                                             .map(|n| Holder::own(Value::Number(n)))
                                                             .ok_or(RuntimeError::Overflow),
        _ => Err(RuntimeError::InvalidOperands { operation: "sub" }),
    }
}

/// Multiplies two numbers.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperands`] when either operand is not a
/// number and [`RuntimeError::Overflow`] when the product does not fit.
pub fn mul(lhs: &Holder, rhs: &Holder) -> EvalResult<Holder> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.checked_mul(*b)
                                                             .map(|n| Holder::own(Value::Number(n)))
                                                             .ok_or(RuntimeError::Overflow),
        _ => Err(RuntimeError::InvalidOperands { operation: "mul" }),
    }
}

/// Divides two numbers, truncating toward zero.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] for a zero divisor,
/// [`RuntimeError::InvalidOperands`] when either operand is not a number,
/// and [`RuntimeError::Overflow`] when the quotient does not fit.
pub fn div(lhs: &Holder, rhs: &Holder) -> EvalResult<Holder> {
    match (lhs.get(), rhs.get()) {
        (Some(Value::Number(_)), Some(Value::Number(0))) => Err(RuntimeError::DivisionByZero),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.checked_div(*b)
                                                             .map(|n| Holder::own(Value::Number(n)))
                                                             .ok_or(RuntimeError::Overflow),
        _ => Err(RuntimeError::InvalidOperands { operation: "div" }),
    }
}
