use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison, logic},
            core::{Context, EvalResult},
        },
        value::core::{Holder, Value},
    },
};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic operators produce numbers (or strings and instances, for
/// `+`); comparison operators always produce a boolean; the logical
/// connectives coerce both operands with truthiness rules.
///
/// # Errors
/// Returns a [`crate::error::RuntimeError`] when the operands do not admit
/// the operation.
pub fn apply(op: BinaryOperator,
             lhs: &Holder,
             rhs: &Holder,
             context: &mut Context<'_>)
             -> EvalResult<Holder> {
    match op {
        BinaryOperator::Add => arithmetic::add(lhs, rhs, context),
        BinaryOperator::Sub => arithmetic::sub(lhs, rhs),
        BinaryOperator::Mul => arithmetic::mul(lhs, rhs),
        BinaryOperator::Div => arithmetic::div(lhs, rhs),

        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => {
            let result = comparison::compare(op, lhs, rhs, context)?;
            Ok(Holder::own(Value::Bool(result)))
        },

        BinaryOperator::And | BinaryOperator::Or => logic::combine(op, lhs, rhs),
    }
}
