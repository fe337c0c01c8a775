//! Tests for the type representation.

use fern_types::{Type, TypeSession, TypeVar};

// ============================================================================
// Equality
// ============================================================================

#[test]
fn primitives_equal_themselves() {
    assert_eq!(Type::Int, Type::Int);
    assert_eq!(Type::Unit, Type::Unit);
    assert_ne!(Type::Int, Type::Float);
    assert_ne!(Type::String, Type::Bool);
}

#[test]
fn free_vars_compare_by_id() {
    let mut session = TypeSession::new();
    let a = session.fresh_var("a");
    let b = session.fresh_var("a");

    // Same display name, different IDs
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn bound_var_compares_as_its_binding() {
    let bound = Type::Var(TypeVar::bound_to("a".into(), 0, Type::Int));

    assert_eq!(bound, Type::Int);
    assert_ne!(bound, Type::Float);
}

#[test]
fn binding_chains_resolve_transitively() {
    let inner = Type::Var(TypeVar::bound_to("b".into(), 1, Type::Bool));
    let outer = Type::Var(TypeVar::bound_to("a".into(), 0, inner));

    assert_eq!(outer, Type::Bool);
    assert!(matches!(outer.resolved(), Type::Bool));
}

#[test]
fn ctor_equality_is_structural() {
    let a = Type::ctor("List", vec![Type::Int]);
    let b = Type::ctor("List", vec![Type::Int]);
    let c = Type::ctor("List", vec![Type::Float]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Type::ctor("Set", vec![Type::Int]));
}

#[test]
fn function_equality_covers_params_and_result() {
    let f = Type::function(vec![Type::Int, Type::Int], Type::Bool);
    let g = Type::function(vec![Type::Int, Type::Int], Type::Bool);
    let h = Type::function(vec![Type::Int], Type::Bool);

    assert_eq!(f, g);
    assert_ne!(f, h);
}

#[test]
fn error_types_never_compare_equal() {
    let e = Type::error("mismatch");

    assert_ne!(e, Type::error("mismatch"));
    assert_ne!(e, Type::Int);
}

// ============================================================================
// Assignability
// ============================================================================

#[test]
fn assignability_is_currently_equality() {
    let list_int = Type::ctor("List", vec![Type::Int]);

    assert!(Type::Int.is_assignable_to(&Type::Int));
    assert!(list_int.is_assignable_to(&Type::ctor("List", vec![Type::Int])));
    assert!(!Type::Int.is_assignable_to(&Type::Float));
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn session_ids_are_monotonic() {
    let mut session = TypeSession::new();

    for expected in 0..5u32 {
        let Type::Var(var) = session.fresh_var("t") else {
            panic!("fresh_var must produce a variable")
        };
        assert_eq!(var.id, expected);
        assert!(var.bound.is_none());
    }

    assert_eq!(session.var_count(), 5);
}

#[test]
fn sessions_are_independent() {
    let mut first = TypeSession::new();
    let mut second = TypeSession::new();

    let Type::Var(a) = first.fresh_var("a") else { panic!("expected a variable") };
    let Type::Var(b) = second.fresh_var("b") else { panic!("expected a variable") };

    // Each session starts its counter at zero
    assert_eq!(a.id, b.id);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn display_renders_surface_syntax() {
    assert_eq!(Type::Int.to_string(), "Int");
    assert_eq!(Type::ctor("List", vec![Type::String]).to_string(), "List[String]");
    assert_eq!(
        Type::ctor("Result", vec![Type::Int, Type::String]).to_string(),
        "Result[Int, String]"
    );
    assert_eq!(
        Type::function(vec![Type::Int, Type::Int], Type::Bool).to_string(),
        "(Int, Int) -> Bool"
    );
    assert_eq!(Type::Tuple(vec![Type::Int, Type::String]).to_string(), "(Int, String)");
}

#[test]
fn display_follows_bindings() {
    let bound = Type::Var(TypeVar::bound_to("a".into(), 0, Type::ctor("List", vec![Type::Int])));

    assert_eq!(bound.to_string(), "List[Int]");
}

#[test]
fn deep_clone_preserves_structure() {
    let original = Type::function(
        vec![Type::ctor("List", vec![Type::Var(TypeVar::new("a".into(), 7))])],
        Type::Tuple(vec![Type::Int, Type::Unit]),
    );
    let copy = original.clone();

    assert_eq!(original, copy);
    assert_eq!(original.to_string(), copy.to_string());
}

#[test]
fn contains_error_finds_nested_poison() {
    let poisoned = Type::function(vec![Type::Int], Type::ctor("List", vec![Type::error("bad")]));

    assert!(poisoned.contains_error());
    assert!(!Type::function(vec![Type::Int], Type::Int).contains_error());
}
