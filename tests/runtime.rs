use std::rc::Rc;

use minipy::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::comparison,
            core::{execute_program, Context},
        },
        value::{
            class::{Class, ClassInstance, Method},
            core::{Closure, Holder, Value},
        },
    },
};

/// A method whose body immediately returns `value`.
fn constant_method(name: &str, formal_params: Vec<String>, value: Holder) -> Method {
    Method { name: name.to_string(),
             formal_params,
             body:
                 Statement::MethodBody { body: Box::new(Statement::Return { value: Box::new(Statement::Constant { value }) }) } }
}

fn number(value: i64) -> Holder {
    Holder::own(Value::Number(value))
}

fn instance_of(class: &Rc<Class>) -> Rc<ClassInstance> {
    Rc::new(ClassInstance::new(Rc::clone(class)))
}

#[test]
fn truthiness_table() {
    assert!(!Holder::none().is_true());
    assert!(Holder::own(Value::Bool(true)).is_true());
    assert!(!Holder::own(Value::Bool(false)).is_true());
    assert!(number(7).is_true());
    assert!(!number(0).is_true());
    assert!(Holder::own(Value::String("x".into())).is_true());
    assert!(!Holder::own(Value::String("".into())).is_true());

    let class = Rc::new(Class::new("Thing".to_string(), Vec::new(), None));
    assert!(!Holder::own(Value::Class(Rc::clone(&class))).is_true());
    assert!(!Holder::own(Value::Instance(instance_of(&class))).is_true());
}

#[test]
fn primitive_equality_and_ordering() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    assert!(comparison::equal(&number(4), &number(4), &mut context).unwrap());
    assert!(!comparison::equal(&number(4), &number(5), &mut context).unwrap());
    assert!(comparison::equal(&Holder::none(), &Holder::none(), &mut context).unwrap());
    assert!(comparison::less(&number(4), &number(5), &mut context).unwrap());

    let hello = Holder::own(Value::String("hello".into()));
    let world = Holder::own(Value::String("world".into()));
    assert!(comparison::less(&hello, &world, &mut context).unwrap());
    assert!(!comparison::equal(&hello, &world, &mut context).unwrap());

    assert!(comparison::equal(&number(1), &Holder::own(Value::Bool(true)), &mut context).is_err());
    assert!(comparison::less(&Holder::none(), &Holder::none(), &mut context).is_err());
}

#[test]
fn negated_comparators_match_their_definitions() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    for (a, b) in [(1, 2), (2, 2), (3, 2)] {
        let (a, b) = (number(a), number(b));
        let equal = comparison::equal(&a, &b, &mut context).unwrap();
        let less = comparison::less(&a, &b, &mut context).unwrap();
        assert_eq!(comparison::not_equal(&a, &b, &mut context).unwrap(), !equal);
        assert_eq!(comparison::greater(&a, &b, &mut context).unwrap(),
                   !(less || equal));
        assert_eq!(comparison::less_or_equal(&a, &b, &mut context).unwrap(),
                   less || equal);
        assert_eq!(comparison::greater_or_equal(&a, &b, &mut context).unwrap(),
                   !less);
    }
}

#[test]
fn instances_alias_their_fields() {
    let class = Rc::new(Class::new("Counter".to_string(), Vec::new(), None));
    let instance = instance_of(&class);

    let first = Holder::own(Value::Instance(Rc::clone(&instance)));
    let second = first.share();

    instance.set_field("value".to_string(), number(1));
    let seen = second.as_instance()
                     .expect("not an instance")
                     .field("value")
                     .expect("field missing");
    assert!(matches!(seen.get(), Some(Value::Number(1))));
}

#[test]
fn method_lookup_walks_the_parent_chain() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    let base =
        Rc::new(Class::new("Base".to_string(),
                           vec![constant_method("describe",
                                                Vec::new(),
                                                Holder::own(Value::String("base".into()))),
                                constant_method("kind", Vec::new(), number(1))],
                           None));
    let derived =
        Rc::new(Class::new("Derived".to_string(),
                           vec![constant_method("describe",
                                                Vec::new(),
                                                Holder::own(Value::String("derived".into())))],
                           Some(Rc::clone(&base))));

    let instance = instance_of(&derived);
    let described = ClassInstance::call(&instance, "describe", &[], &mut context).unwrap();
    assert_eq!(described.stringify(&mut context).unwrap(), "derived");

    // The inherited method still runs against the derived receiver.
    let kind = ClassInstance::call(&instance, "kind", &[], &mut context).unwrap();
    assert_eq!(kind.stringify(&mut context).unwrap(), "1");

    // Lookup is deterministic across repeated calls.
    for _ in 0..3 {
        let again = ClassInstance::call(&instance, "describe", &[], &mut context).unwrap();
        assert_eq!(again.stringify(&mut context).unwrap(), "derived");
    }
}

#[test]
fn method_lookup_is_arity_sensitive() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    let class = Rc::new(Class::new("Thing".to_string(),
                                   vec![constant_method("get", Vec::new(), number(7))],
                                   None));
    let instance = instance_of(&class);

    assert!(instance.has_method("get", 0));
    assert!(!instance.has_method("get", 1));
    assert!(!instance.has_method("missing", 0));

    let error = ClassInstance::call(&instance, "get", &[number(1)], &mut context);
    assert!(matches!(error,
                     Err(RuntimeError::UnknownMethod { argument_count: 1, .. })));
}

#[test]
fn later_declaration_wins_within_one_class() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    let class = Rc::new(Class::new("Twice".to_string(),
                                   vec![constant_method("m", Vec::new(), number(1)),
                                        constant_method("m", Vec::new(), number(2))],
                                   None));
    let instance = instance_of(&class);

    let result = ClassInstance::call(&instance, "m", &[], &mut context).unwrap();
    assert_eq!(result.stringify(&mut context).unwrap(), "2");
}

#[test]
fn call_frames_leave_the_method_definition_intact() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    let echo = Method { name:          "echo".to_string(),
                        formal_params: vec!["value".to_string()],
                        body:
                            Statement::MethodBody { body: Box::new(Statement::Return { value: Box::new(Statement::Variable { dotted_ids: vec!["value".to_string()] }) }) }, };
    let class = Rc::new(Class::new("Echo".to_string(), vec![echo], None));
    let instance = instance_of(&class);

    for expected in ["1", "2", "3"] {
        let argument = number(expected.parse().unwrap());
        let result = ClassInstance::call(&instance, "echo", &[argument], &mut context).unwrap();
        assert_eq!(result.stringify(&mut context).unwrap(), expected);
    }
}

#[test]
fn equality_delegates_to_the_eq_hook() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    let class = Rc::new(Class::new("Always".to_string(),
                                   vec![constant_method("__eq__",
                                                        vec!["other".to_string()],
                                                        Holder::own(Value::Bool(true)))],
                                   None));
    let a = Holder::own(Value::Instance(instance_of(&class)));
    let b = Holder::own(Value::Instance(instance_of(&class)));

    assert!(comparison::equal(&a, &b, &mut context).unwrap());
    assert!(!comparison::not_equal(&a, &b, &mut context).unwrap());

    // Without an __eq__ of arity one, instances admit no equality.
    let plain = Rc::new(Class::new("Plain".to_string(), Vec::new(), None));
    let c = Holder::own(Value::Instance(instance_of(&plain)));
    assert!(comparison::equal(&c, &c.share(), &mut context).is_err());
}

#[test]
fn stringify_renders_print_forms() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    assert_eq!(Holder::none().stringify(&mut context).unwrap(), "None");
    assert_eq!(Holder::own(Value::Bool(true)).stringify(&mut context).unwrap(),
               "True");
    assert_eq!(number(-42).stringify(&mut context).unwrap(), "-42");
    assert_eq!(Holder::own(Value::String("raw text".into())).stringify(&mut context)
                                                            .unwrap(),
               "raw text");

    let plain = Rc::new(Class::new("Plain".to_string(), Vec::new(), None));
    assert_eq!(Holder::own(Value::Class(Rc::clone(&plain))).stringify(&mut context)
                                                           .unwrap(),
               "Class Plain");
    assert!(Holder::own(Value::Instance(instance_of(&plain))).stringify(&mut context)
                                                             .unwrap()
                                                             .starts_with("0x"));

    let pretty = Rc::new(Class::new("Pretty".to_string(),
                                    vec![constant_method("__str__",
                                                         Vec::new(),
                                                         Holder::own(Value::String("pretty".into())))],
                                    None));
    assert_eq!(Holder::own(Value::Instance(instance_of(&pretty))).stringify(&mut context)
                                                                 .unwrap(),
               "pretty");
}

#[test]
fn stringified_numbers_round_trip() {
    let mut output = Vec::new();
    let mut context = Context::new(&mut output);

    for value in [i64::MIN, -1, 0, 7, i64::MAX] {
        let rendered = number(value).stringify(&mut context).unwrap();
        assert_eq!(rendered.parse::<i64>().expect("not a number"), value);
    }
}

#[test]
fn programs_execute_against_an_embedder_context() {
    let program = Statement::Compound { statements: vec![
        Statement::Assignment { name:  "x".to_string(),
                                value: Box::new(Statement::Constant { value: number(4) }), },
        Statement::Print { args: vec![Statement::Variable { dotted_ids: vec!["x".to_string()] }] },
    ], };

    let mut output = Vec::new();
    let mut globals = Closure::new();
    let mut context = Context::new(&mut output);
    execute_program(&program, &mut globals, &mut context).unwrap();

    assert_eq!(output, b"4\n");
    assert!(globals.contains_key("x"));
}

#[test]
fn top_level_return_is_an_error() {
    let program = Statement::Return { value: Box::new(Statement::Constant { value: number(1) }) };

    let mut output = Vec::new();
    let mut globals = Closure::new();
    let mut context = Context::new(&mut output);
    let result = execute_program(&program, &mut globals, &mut context);

    assert!(matches!(result, Err(RuntimeError::ReturnOutsideMethod)));
}
