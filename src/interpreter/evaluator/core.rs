use std::{io, rc::Rc};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::binary,
        value::{
            class::{ClassInstance, INIT_METHOD},
            core::{Closure, Holder, Value},
        },
    },
};

/// Result type used by evaluation routines that cannot unwind.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A nonlocal exit travelling up the tree during execution.
///
/// `Return` is caught by the enclosing method-body frame; `Error` propagates
/// to the embedder. Carrying both on the error channel lets every execution
/// site forward them with `?`.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` on its way to the enclosing method-body frame.
    Return(Holder),
    /// A runtime failure on its way to the embedder.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result of executing one AST node.
pub type ExecResult = Result<Holder, Unwind>;

/// The execution environment threaded through the tree.
///
/// Holds the output stream all `print` statements write to, and the
/// assignment-target hint consumed by new-instance expressions. There is no
/// interpreter state outside of this context and the closures.
pub struct Context<'out> {
    output:    &'out mut dyn io::Write,
    self_name: Option<String>,
}

impl<'out> Context<'out> {
    /// Creates a context writing program output to `output`.
    pub fn new(output: &'out mut dyn io::Write) -> Self {
        Self { output,
               self_name: None }
    }

    /// Writes a chunk of program output.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Output`] when the stream rejects the write.
    pub fn write(&mut self, text: &str) -> EvalResult<()> {
        io::Write::write_all(self.output, text.as_bytes()).map_err(RuntimeError::Output)
    }

    /// Plants the name an assignment is about to bind. The first
    /// new-instance expression of the same statement consumes it.
    pub(crate) fn set_self_name(&mut self, name: &str) {
        self.self_name = Some(name.to_string());
    }

    /// Consumes the planted assignment-target name, if any.
    pub(crate) fn take_self_name(&mut self) -> Option<String> {
        self.self_name.take()
    }
}

/// Executes one AST node against a closure and a context.
///
/// Nodes that exist for their side effects yield the empty holder;
/// expressions yield their computed value. Operands evaluate left to right.
/// The only nonlocal control flow produced here is the `Return` unwind,
/// which the method-body node catches.
///
/// # Errors
/// Returns an [`Unwind`] carrying either an in-flight `return` or a
/// [`RuntimeError`].
pub fn execute(statement: &Statement, closure: &mut Closure, context: &mut Context<'_>) -> ExecResult {
    match statement {
        Statement::Constant { value } => Ok(value.share()),

        Statement::Variable { dotted_ids } => Ok(resolve_path(dotted_ids, closure)?),

        Statement::Assignment { name, value } => {
            context.set_self_name(name);
            let result = execute(value, closure, context);
            let _ = context.take_self_name();
            let result = result?;
            closure.insert(name.clone(), result.share());
            Ok(result)
        },

        Statement::FieldAssignment { object, field, value } => {
            let target = resolve_path(object, closure)?;
            let Some(instance) = target.as_instance() else {
                return Err(RuntimeError::NotAnInstance { name: object.join(".") }.into());
            };
            let instance = Rc::clone(instance);
            let result = execute(value, closure, context)?;
            instance.set_field(field.clone(), result.share());
            Ok(result)
        },

        Statement::Print { args } => {
            for (index, arg) in args.iter().enumerate() {
                let holder = execute(arg, closure, context)?;
                let text = holder.stringify(context)?;
                if index > 0 {
                    context.write(" ")?;
                }
                context.write(&text)?;
            }
            context.write("\n")?;
            Ok(Holder::none())
        },

        Statement::Stringify { value } => {
            let holder = execute(value, closure, context)?;
            let text = holder.stringify(context)?;
            Ok(Holder::own(Value::String(text.into())))
        },

        Statement::MethodCall { receiver, method, args } => {
            let holder = execute(receiver, closure, context)?;
            match holder.as_instance() {
                Some(instance) if instance.has_method(method, args.len()) => {
                    let instance = Rc::clone(instance);
                    let mut actual = Vec::with_capacity(args.len());
                    for arg in args {
                        actual.push(execute(arg, closure, context)?);
                    }
                    Ok(ClassInstance::call(&instance, method, &actual, context)?)
                },
                // A missing receiver or method makes the call yield None.
                _ => Ok(Holder::none()),
            }
        },

        Statement::BinaryOp { op, left, right } => {
            let lhs = execute(left, closure, context)?;
            let rhs = execute(right, closure, context)?;
            Ok(binary::core::apply(*op, &lhs, &rhs, context)?)
        },

        Statement::Not { value } => {
            let holder = execute(value, closure, context)?;
            Ok(binary::logic::not(&holder)?)
        },

        Statement::IfElse { condition,
                            then_body,
                            else_body, } => {
            let condition = execute(condition, closure, context)?;
            if condition.is_true() {
                execute(then_body, closure, context)
            } else if let Some(else_body) = else_body {
                execute(else_body, closure, context)
            } else {
                Ok(Holder::none())
            }
        },

        Statement::Compound { statements } => {
            for statement in statements {
                execute(statement, closure, context)?;
            }
            Ok(Holder::none())
        },

        Statement::Return { value } => {
            let result = execute(value, closure, context)?;
            Err(Unwind::Return(result))
        },

        Statement::MethodBody { body } => match execute(body, closure, context) {
            Err(Unwind::Return(result)) => Ok(result),
            other => other,
        },

        Statement::ClassDefinition { class } => {
            let holder = Holder::own(Value::Class(Rc::clone(class)));
            closure.insert(class.name().to_string(), holder.share());
            Ok(holder)
        },

        Statement::NewInstance { class, args } => {
            let instance = Rc::new(ClassInstance::new(Rc::clone(class)));
            let holder = Holder::own(Value::Instance(Rc::clone(&instance)));
            // Pre-bind the instance under the assignment target so the
            // constructor arguments already see the new object.
            if let Some(name) = context.take_self_name() {
                closure.insert(name, holder.share());
            }
            if instance.has_method(INIT_METHOD, args.len()) {
                let mut actual = Vec::with_capacity(args.len());
                for arg in args {
                    actual.push(execute(arg, closure, context)?);
                }
                ClassInstance::call(&instance, INIT_METHOD, &actual, context)?;
            }
            Ok(holder)
        },
    }
}

/// Executes a complete program, a top-level compound.
///
/// # Errors
/// Returns the runtime error that aborted execution. A `return` reaching the
/// top level, where no method frame exists to catch it, is reported as
/// [`RuntimeError::ReturnOutsideMethod`].
pub fn execute_program(program: &Statement,
                       closure: &mut Closure,
                       context: &mut Context<'_>)
                       -> EvalResult<Holder> {
    match execute(program, closure, context) {
        Ok(result) => Ok(result),
        Err(Unwind::Return(_)) => Err(RuntimeError::ReturnOutsideMethod),
        Err(Unwind::Error(error)) => Err(error),
    }
}

/// Resolves a dotted identifier chain: the first identifier in the closure,
/// every following one in the fields of the instance found so far.
fn resolve_path(dotted_ids: &[String], closure: &Closure) -> EvalResult<Holder> {
    let Some((first, rest)) = dotted_ids.split_first() else {
        return Err(RuntimeError::UnknownVariable { name: String::new() });
    };

    let mut holder = closure.get(first)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone() })?;
    for id in rest {
        let Some(instance) = holder.as_instance() else {
            return Err(RuntimeError::NotAnInstance { name: dotted_ids.join(".") });
        };
        let field =
            instance.field(id)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: dotted_ids.join(".") })?;
        holder = field;
    }
    Ok(holder)
}
