use std::{
    cell::{Ref, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{execute, Context, Unwind},
        value::core::{Closure, Holder, Value},
    },
};

/// Name of the constructor hook.
pub const INIT_METHOD: &str = "__init__";
/// Name of the print-rendering hook.
pub const STR_METHOD: &str = "__str__";
/// Name of the equality hook.
pub const EQ_METHOD: &str = "__eq__";
/// Name of the ordering hook.
pub const LT_METHOD: &str = "__lt__";
/// Name of the addition hook.
pub const ADD_METHOD: &str = "__add__";

/// A method attached to a class.
#[derive(Debug, Clone)]
pub struct Method {
    /// The name the method is looked up under.
    pub name:          String,
    /// The formal parameter names, in declaration order. `self` is not
    /// listed; it is bound implicitly on every call.
    pub formal_params: Vec<String>,
    /// The method body, a [`Statement::MethodBody`] so that `return`
    /// unwinds no further than this frame.
    pub body:          Statement,
}

/// A user-defined class: a name, its own methods in declaration order, and
/// an optional parent for single inheritance.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Method>,
    by_name: HashMap<String, usize>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a class from its declaration parts.
    ///
    /// When two methods share a name, the later declaration wins, matching
    /// the source-order overwrite of a redefinition.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        let by_name = methods.iter()
                             .enumerate()
                             .map(|(index, method)| (method.name.clone(), index))
                             .collect();
        Self { name,
               methods,
               by_name,
               parent }
    }

    /// The name the class was declared under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent class, if the declaration named one.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Resolves `name` on this class or on the nearest ancestor defining it.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        match self.by_name.get(name) {
            Some(&index) => self.methods.get(index),
            None => self.parent.as_ref().and_then(|parent| parent.method(name)),
        }
    }

    /// Resolves `name` like [`method`](Self::method), but only when the
    /// found definition takes exactly `argument_count` formals.
    #[must_use]
    pub fn method_with_arity(&self, name: &str, argument_count: usize) -> Option<&Method> {
        self.method(name)
            .filter(|method| method.formal_params.len() == argument_count)
    }
}

/// A runtime object: a reference to its class plus a closure of fields.
///
/// Fields spring into existence on first assignment. The instance is always
/// handled through an `Rc`, so every holder aliasing it reads and writes the
/// same field closure.
#[derive(Debug)]
pub struct ClassInstance {
    cls:    Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    /// A fresh instance of `cls` with no fields.
    #[must_use]
    pub fn new(cls: Rc<Class>) -> Self {
        Self { cls,
               fields: RefCell::new(Closure::new()) }
    }

    /// The class the instance was created from.
    #[must_use]
    pub const fn class(&self) -> &Rc<Class> {
        &self.cls
    }

    /// Reads a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Holder> {
        self.fields.borrow().get(name).cloned()
    }

    /// Creates or overwrites a field.
    pub fn set_field(&self, name: String, value: Holder) {
        self.fields.borrow_mut().insert(name, value);
    }

    /// The full field closure, for embedders and tests.
    #[must_use]
    pub fn fields(&self) -> Ref<'_, Closure> {
        self.fields.borrow()
    }

    /// Whether the class hierarchy defines `method` taking exactly
    /// `argument_count` arguments.
    #[must_use]
    pub fn has_method(&self, method: &str, argument_count: usize) -> bool {
        self.cls.method_with_arity(method, argument_count).is_some()
    }

    /// Calls `method` on `instance` with the given argument holders.
    ///
    /// The method is resolved through the class hierarchy, arity included.
    /// Execution happens in a fresh frame closure holding `self` bound to a
    /// shared holder of the receiver and each formal parameter bound to the
    /// corresponding actual argument holder; the method definition itself is
    /// never touched, so repeated calls see identical formals.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownMethod`] when no definition matches
    /// the name and arity, or whatever error the body raises.
    pub fn call(instance: &Rc<Self>,
                method: &str,
                args: &[Holder],
                context: &mut Context<'_>)
                -> Result<Holder, RuntimeError> {
        let Some(found) = instance.cls.method_with_arity(method, args.len()) else {
            return Err(RuntimeError::UnknownMethod { method:         method.to_string(),
                                                     argument_count: args.len(), });
        };

        let mut frame = Closure::new();
        frame.insert("self".to_string(),
                     Holder::own(Value::Instance(Rc::clone(instance))));
        for (param, arg) in found.formal_params.iter().zip(args) {
            frame.insert(param.clone(), arg.share());
        }

        match execute(&found.body, &mut frame, context) {
            Ok(result) | Err(Unwind::Return(result)) => Ok(result),
            Err(Unwind::Error(error)) => Err(error),
        }
    }
}
