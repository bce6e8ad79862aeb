#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable or field that is not bound.
    UnknownVariable {
        /// The dotted name that failed to resolve.
        name: String,
    },
    /// A dotted path stepped through a value that is not a class instance.
    NotAnInstance {
        /// The dotted name whose prefix was not an instance.
        name: String,
    },
    /// Called a method that the receiver's class hierarchy does not define
    /// with the given arity.
    UnknownMethod {
        /// The name of the method.
        method:         String,
        /// The number of arguments the call supplied.
        argument_count: usize,
    },
    /// An operation was applied to values it is not defined for.
    InvalidOperands {
        /// The name of the operation.
        operation: &'static str,
    },
    /// Two values admit no comparison of the requested kind.
    CannotCompare {
        /// The kind of comparison, either `equality` or `ordering`.
        operation: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
    /// A `return` executed outside of any method body.
    ReturnOutsideMethod,
    /// The output stream rejected a write.
    Output(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Runtime error: Unknown variable name '{name}'.")
            },
            Self::NotAnInstance { name } => {
                write!(f, "Runtime error: '{name}' is not a class instance.")
            },
            Self::UnknownMethod { method,
                                  argument_count, } => {
                write!(f,
                       "Runtime error: No method '{method}' taking {argument_count} argument(s).")
            },
            Self::InvalidOperands { operation } => {
                write!(f, "Runtime error: Invalid operands for '{operation}'.")
            },
            Self::CannotCompare { operation } => {
                write!(f, "Runtime error: Values cannot be compared for {operation}.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::Overflow => {
                write!(f, "Runtime error: Integer overflow while computing the result.")
            },
            Self::ReturnOutsideMethod => {
                write!(f, "Runtime error: 'return' outside of a method body.")
            },
            Self::Output(e) => write!(f, "Runtime error: Failed to write output: {e}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
