use std::{collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        value::class::{Class, ClassInstance, STR_METHOD},
    },
};

/// A name-to-holder map serving as one lexical scope frame.
///
/// Closures back both the global scope of a program and the field storage of
/// every class instance. Insertion order carries no meaning.
pub type Closure = HashMap<String, Holder>;

/// Represents a runtime value.
///
/// The set of value kinds is closed. Strings, classes, and instances are
/// reference-shared, so cloning a `Value` never copies their payload; for
/// instances in particular, every clone refers to the same object and
/// observes the same fields.
#[derive(Debug, Clone)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Number(i64),
    /// An immutable string.
    String(Rc<str>),
    /// A class, as bound by a class definition.
    Class(Rc<Class>),
    /// An instance of a class.
    Instance(Rc<ClassInstance>),
}

/// A possibly-empty shared reference to a runtime value.
///
/// The empty holder is the language's `None`. Non-empty holders share their
/// underlying value: binding the same instance into several closure slots
/// aliases one object, and a field written through one slot is read through
/// every other.
#[derive(Debug, Clone, Default)]
pub struct Holder(Option<Value>);

impl Holder {
    /// The empty holder.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// A holder owning a freshly produced value.
    #[must_use]
    pub const fn own(value: Value) -> Self {
        Self(Some(value))
    }

    /// Another reference to the same underlying value.
    #[must_use]
    pub fn share(&self) -> Self {
        self.clone()
    }

    /// The contained value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// Returns `true` for the empty holder.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// The contained class instance, if the holder holds one.
    #[must_use]
    pub const fn as_instance(&self) -> Option<&Rc<ClassInstance>> {
        match self.get() {
            Some(Value::Instance(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Coerces the holder to a boolean.
    ///
    /// `None` is false; booleans are themselves; numbers are true when
    /// nonzero; strings are true when non-empty; classes and instances are
    /// always false, since the language defines no truthiness on objects.
    ///
    /// # Example
    /// ```
    /// use minipy::interpreter::value::core::{Holder, Value};
    ///
    /// assert!(!Holder::none().is_true());
    /// assert!(Holder::own(Value::Number(7)).is_true());
    /// assert!(!Holder::own(Value::String("".into())).is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self.get() {
            None => false,
            Some(Value::Bool(value)) => *value,
            Some(Value::Number(value)) => *value != 0,
            Some(Value::String(value)) => !value.is_empty(),
            Some(Value::Class(_) | Value::Instance(_)) => false,
        }
    }

    /// Renders the value the way `print` would, without the trailing
    /// newline.
    ///
    /// Booleans render as `True`/`False`, numbers in decimal, strings as
    /// their raw text, classes as `Class <name>`, and the empty holder as
    /// `None`. An instance whose class defines `__str__` with no parameters
    /// renders as the result of that call; otherwise it renders as an
    /// address-like token that is stable for the instance's lifetime.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when a `__str__` call fails.
    pub fn stringify(&self, context: &mut Context<'_>) -> Result<String, RuntimeError> {
        match self.get() {
            None => Ok("None".to_string()),
            Some(Value::Bool(value)) => Ok(if *value { "True" } else { "False" }.to_string()),
            Some(Value::Number(value)) => Ok(value.to_string()),
            Some(Value::String(value)) => Ok(value.to_string()),
            Some(Value::Class(class)) => Ok(format!("Class {}", class.name())),
            Some(Value::Instance(instance)) => {
                if instance.has_method(STR_METHOD, 0) {
                    ClassInstance::call(instance, STR_METHOD, &[], context)?.stringify(context)
                } else {
                    Ok(format!("{:p}", Rc::as_ptr(instance)))
                }
            },
        }
    }
}
