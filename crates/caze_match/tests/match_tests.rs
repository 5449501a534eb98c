//! Behavioural tests for case resolution.
//!
//! Each test builds a matcher the way a caller would and checks which case
//! a runtime value resolves to.

use caze_match::{
    init_tracing, Boxed, Class, FunctionValue, MatchError, Matcher, Primitive, Ty, Value, ValueError,
};
use pretty_assertions::assert_eq;

// Null handling

#[test]
fn null_matches_null_prototype() {
    init_tracing();
    let matcher = Matcher::builder()
        .of(|s: String| i32::try_from(s.len()).unwrap_or(i32::MAX))
        .value(Value::Null, |_| 1)
        .build();
    assert_eq!(matcher.apply(&Value::Null), Ok(1));
}

#[test]
fn null_does_not_match_declared_types() {
    let matcher = Matcher::builder()
        .of(|_: i32| false)
        .of(|_: Boxed<i32>| true)
        .build();
    let err = matcher.apply(&Value::Null);
    assert_eq!(err, Err(MatchError::new(Value::Null, 2)));
}

#[test]
fn null_does_not_match_object() {
    let matcher = Matcher::builder().of(|_: Value| 1).build();
    assert!(matcher.apply(&Value::Null).is_err());
}

#[test]
fn null_prototype_is_not_a_default() {
    let matcher = Matcher::builder()
        .value(Value::Null, |_| 1)
        .of(|_: Value| 2)
        .build();
    assert_eq!(matcher.apply(&Value::string("default")), Ok(2));
    assert_eq!(matcher.apply(&Value::Null), Ok(1));
}

#[test]
fn null_prototype_alone_rejects_values() {
    let matcher = Matcher::builder().value(Value::Null, |_| 1).build();
    assert!(matcher.apply(&Value::string("null")).is_err());
    assert!(matcher.apply(&Value::None).is_err());
}

#[test]
fn otherwise_matches_null() {
    let matcher = Matcher::builder()
        .of(|_: Value| "object")
        .otherwise(|_| "anything")
        .build();
    assert_eq!(matcher.apply(&Value::Null), Ok("anything"));
    assert_eq!(matcher.apply(&Value::Int(1)), Ok("object"));
}

// Value cases

#[test]
fn matches_by_value() {
    let matcher = Matcher::builder()
        .value("1", |v| v.as_str().map_or(0, str::len))
        .build();
    assert_eq!(matcher.apply(&Value::string("1")), Ok(1));
}

#[test]
fn no_match_by_value_is_an_error() {
    let matcher = Matcher::builder().value("1", |_| 1).build();
    let err = matcher.apply(&Value::string("2"));
    assert!(err.is_err());
    if let Err(err) = err {
        assert_eq!(err.value(), &Value::string("2"));
        assert_eq!(err.to_string(), "no case matches \"2\"");
    }
}

#[test]
fn matches_by_value_on_multiple_cases() {
    let matcher = Matcher::builder()
        .value("1", |_| 1)
        .value("2", |_| 2)
        .value("3", |_| 3)
        .build();
    assert_eq!(matcher.apply(&Value::string("2")), Ok(2));
}

#[test]
fn value_case_for_bool_first_registration_wins() {
    let matcher = Matcher::builder()
        .value(true, |_| 1)
        .value(Value::Bool(true), |_| 2)
        .build();
    assert_eq!(matcher.apply(&Value::Bool(true)), Ok(1));

    let matcher = Matcher::builder()
        .value(Value::Bool(true), |_| 1)
        .value(true, |_| 2)
        .build();
    assert_eq!(matcher.apply(&Value::Bool(true)), Ok(1));
}

#[test]
fn value_case_does_not_cross_numeric_kinds() {
    let matcher = Matcher::builder().value(1, |_| "int one").build();
    assert!(matcher.apply(&Value::Long(1)).is_err());
    assert!(matcher.apply(&Value::Double(1.0)).is_err());
    assert_eq!(matcher.apply(&Value::Int(1)), Ok("int one"));
}

// Typed cases

#[test]
fn matches_double_among_boxed_types() {
    let matcher = Matcher::builder()
        .of(|_: Boxed<i8>| 1)
        .of(|_: Boxed<f64>| 2)
        .of(|_: Boxed<i32>| 3)
        .build();
    assert_eq!(matcher.apply(&Value::Double(1.0)), Ok(2));
}

#[test]
fn matches_int_among_boxed_types() {
    let matcher = Matcher::builder()
        .of(|Boxed(b): Boxed<i8>| i32::from(b))
        .of(|_: Boxed<f64>| -1)
        .of(|Boxed(i): Boxed<i32>| i)
        .build();
    assert_eq!(matcher.apply(&Value::Int(i32::MAX)), Ok(i32::MAX));
}

#[test]
fn matches_by_assignable_type() {
    let matcher = Matcher::builder()
        .value(1, |_| 'a')
        .typed(Class::number(), |_| 'b')
        .of(|_: Value| 'c')
        .build();
    assert_eq!(matcher.apply(&Value::Double(2.0)), Ok('b'));
}

#[test]
fn general_case_shadows_specific_case() {
    let matcher = Matcher::builder()
        .typed(Class::number(), |_| "number")
        .of(|_: f64| "double")
        .build();
    assert_eq!(matcher.apply(&Value::Double(2.0)), Ok("number"));
}

#[test]
fn matches_default_case() {
    let matcher = Matcher::builder()
        .value(Value::Null, |_| 1)
        .of(|_: Value| 2)
        .build();
    assert_eq!(matcher.apply(&Value::string("default")), Ok(2));
}

#[test]
fn option_classes_are_matched_without_type_arguments() {
    // Both cases declare `Some`; what it wraps plays no part.
    let matcher = Matcher::builder()
        .typed(Class::some(), |_| 1)
        .typed(Class::some(), |v| {
            v.as_some()
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .unwrap_or(-1)
        })
        .build();
    assert_eq!(matcher.apply(&Value::some(Value::string("123"))), Ok(1));
}

#[test]
fn option_is_an_ordinary_class() {
    let matcher = Matcher::builder()
        .typed(Class::none(), |_| "none")
        .typed(Class::option(), |_| "option")
        .build();
    assert_eq!(matcher.apply(&Value::None), Ok("none"));
    assert_eq!(matcher.apply(&Value::some(Value::Int(1))), Ok("option"));
    assert!(matcher.apply(&Value::Null).is_err());
}

// Primitive and boxed duality

#[test]
fn primitive_int_registered_first_wins() {
    let matcher = Matcher::builder()
        .of(|_: i32| true)
        .of(|_: Boxed<i32>| false)
        .build();
    assert_eq!(matcher.apply(&Value::Int(1)), Ok(true));
}

#[test]
fn boxed_integer_registered_first_wins() {
    let matcher = Matcher::builder()
        .of(|_: Boxed<i32>| true)
        .of(|_: i32| false)
        .build();
    assert_eq!(matcher.apply(&Value::Int(1)), Ok(true));
}

#[test]
fn primitive_int_rejects_other_numeric_kinds() {
    let matcher = Matcher::builder().of(|n: i32| n).build();
    assert!(matcher.apply(&Value::Long(1)).is_err());
    assert!(matcher.apply(&Value::Double(1.0)).is_err());
    assert!(matcher.apply(&Value::Byte(1)).is_err());
}

#[test]
fn every_primitive_matches_its_boxed_value() {
    let samples = [
        Value::Bool(false),
        Value::Byte(-1),
        Value::Short(300),
        Value::Char('c'),
        Value::Int(7),
        Value::Long(1 << 40),
        Value::Float(0.5),
        Value::Double(2.5),
    ];
    for (prim, sample) in Primitive::ALL.into_iter().zip(samples) {
        let matcher = Matcher::builder()
            .typed(Ty::Prim(prim), |_| "primitive")
            .typed(Ty::boxed(prim), |_| "boxed")
            .build();
        assert_eq!(matcher.apply(&sample), Ok("primitive"), "{prim}");

        let matcher = Matcher::builder()
            .typed(Ty::boxed(prim), |_| "boxed")
            .typed(Ty::Prim(prim), |_| "primitive")
            .build();
        assert_eq!(matcher.apply(&sample), Ok("boxed"), "{prim}");
    }
}

#[test]
fn plain_object_matches_only_object_case() -> Result<(), ValueError> {
    let thing = Class::declare("Thing", &[]);
    let matcher = Matcher::builder()
        .typed(Class::number(), |_| "number")
        .typed(Class::string(), |_| "string")
        .of(|_: Value| "object")
        .build();
    assert_eq!(matcher.apply(&Value::object(thing, vec![])?), Ok("object"));
    Ok(())
}

// Arrays

#[test]
fn matches_boolean_array() -> Result<(), ValueError> {
    let matcher = Matcher::builder().of(|_: Vec<bool>| 1).build();
    let input = Value::array(Ty::Prim(Primitive::Bool), vec![Value::Bool(true)])?;
    assert_eq!(matcher.apply(&input), Ok(1));
    Ok(())
}

#[test]
fn boolean_array_handler_receives_elements() -> Result<(), ValueError> {
    let matcher = Matcher::builder()
        .of(|flags: Vec<bool>| flags.iter().filter(|f| **f).count())
        .build();
    let input = Value::array(
        Ty::Prim(Primitive::Bool),
        vec![Value::Bool(true), Value::Bool(false), Value::Bool(true)],
    )?;
    assert_eq!(matcher.apply(&input), Ok(2));
    Ok(())
}

#[test]
fn primitive_array_is_not_an_object_array() -> Result<(), ValueError> {
    let matcher = Matcher::builder()
        .typed(Ty::array(Ty::object()), |_| "objects")
        .of(|_: Value| "object")
        .build();
    let flags = Value::array(Ty::Prim(Primitive::Bool), vec![Value::Bool(true)])?;
    let names = Value::array(Ty::Class(Class::string()), vec![Value::string("a")])?;
    assert_eq!(matcher.apply(&flags), Ok("object"));
    assert_eq!(matcher.apply(&names), Ok("objects"));
    Ok(())
}

#[test]
fn reference_array_with_nulls_matches_its_own_case() -> Result<(), ValueError> {
    let matcher = Matcher::builder()
        .of(|flags: Vec<Option<Boxed<bool>>>| format!("{flags:?}"))
        .build();
    let flags = Value::array(
        Ty::boxed(Primitive::Bool),
        vec![Value::Bool(true), Value::Null],
    )?;
    assert!(matcher.is_defined_at(&flags));
    assert_eq!(
        matcher.apply(&flags),
        Ok("[Some(Boxed(true)), None]".to_string())
    );

    let matcher = Matcher::builder()
        .of(|names: Vec<Option<String>>| names.len())
        .of(|_: Value| usize::MAX)
        .build();
    let names = Value::array(Ty::Class(Class::string()), vec![Value::Null])?;
    assert_eq!(matcher.apply(&names), Ok(1));
    Ok(())
}

#[test]
fn primitive_array_rejects_null_elements() {
    let err = Value::array(
        Ty::Prim(Primitive::Bool),
        vec![Value::Bool(true), Value::Null],
    );
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("element 1 of boolean[] cannot hold null".to_string())
    );
}

#[test]
fn builtin_classes_cannot_be_faked() {
    assert!(Value::object(Class::integer(), vec![]).is_err());
    assert!(Value::object(Class::string(), vec![]).is_err());
    assert!(Value::object(Class::function(), vec![]).is_err());
    assert!(Value::function(Class::integer(), |_| Ok(Value::Null)).is_err());
}

// Functional values

#[test]
fn matches_lambda_by_runtime_class() -> Result<(), ValueError> {
    let special = Class::declare("SpecialFunction", &[&Class::function()]);
    let same_signature = Class::declare("SameSignatureAsSpecialFunction", &[&Class::function()]);

    let lambda = Value::function(special, |args| match args {
        [Value::Int(i)] => Ok(Value::string(i.to_string())),
        _ => Err("expected one int".to_string()),
    })?;

    let matcher = Matcher::builder()
        .typed(same_signature, |f| {
            f.as_function()
                .and_then(|f| f.call(&[Value::Int(1)]).ok())
        })
        .typed(Class::function(), |f| {
            f.as_function()
                .and_then(|f| f.call(&[Value::Int(2)]).ok())
        })
        .build();
    assert_eq!(matcher.apply(&lambda), Ok(Some(Value::string("2"))));
    Ok(())
}

#[test]
fn lambda_matches_its_own_class_first() -> Result<(), ValueError> {
    let special = Class::declare("SpecialFunction", &[&Class::function()]);
    let lambda = Value::function(special.clone(), |_| Ok(Value::Null))?;
    let matcher = Matcher::builder()
        .typed(special, |_| "special")
        .of(|_: FunctionValue| "function")
        .build();
    assert_eq!(matcher.apply(&lambda), Ok("special"));
    Ok(())
}

// Predicates

#[test]
fn predicate_cases_take_part_in_ordering() {
    let matcher = Matcher::builder()
        .when(|v| v.as_int().is_some_and(|n| n < 0), |_| "negative")
        .of(|_: i32| "int")
        .build();
    assert_eq!(matcher.apply(&Value::Int(-3)), Ok("negative"));
    assert_eq!(matcher.apply(&Value::Int(3)), Ok("int"));
}
