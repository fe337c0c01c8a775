//! The core type representation.

use std::fmt;

/// A type variable introduced during inference.
///
/// Identity is the integer `id`: two free variables with different IDs are
/// distinct even if they share a display name. A bound variable behaves as
/// its binding for both equality and rendering.
#[derive(Debug, Clone)]
pub struct TypeVar {
    /// Display name of the variable (e.g. `a`, `b`)
    pub name: String,
    /// Unique identifier within a [`crate::TypeSession`]
    pub id: u32,
    /// The binding, once the variable has been unified with a type
    pub bound: Option<Box<Type>>,
}

impl TypeVar {
    /// Creates a new unbound type variable.
    #[must_use]
    pub const fn new(name: String, id: u32) -> Self { Self { name, id, bound: None } }

    /// Creates a type variable already bound to the given type.
    #[must_use]
    pub fn bound_to(name: String, id: u32, ty: Type) -> Self {
        Self { name, id, bound: Some(Box::new(ty)) }
    }
}

/// Represents a type in the Fern type system.
///
/// This is the post-inference IR: primitives, type variables, constructor
/// applications, function types, tuples, and a poisoned error type carrying
/// the message that produced it.
#[derive(Debug, Clone)]
pub enum Type {
    /// The `Int` type
    Int,
    /// The `Float` type
    Float,
    /// The `String` type
    String,
    /// The `Bool` type
    Bool,
    /// The unit type (value of blocks without a trailing expression)
    Unit,
    /// A type variable
    Var(TypeVar),
    /// A type constructor application (e.g. `List[Int]`, `Result[a, e]`)
    Ctor {
        /// The constructor name
        name: String,
        /// The type arguments, empty for nullary constructors
        args: Vec<Type>,
    },
    /// A function type
    Function {
        /// The parameter types, in order
        params: Vec<Type>,
        /// The result type
        ret: Box<Type>,
    },
    /// A tuple type
    Tuple(Vec<Type>),
    /// A type that failed to check, carrying the diagnostic message
    Error(String),
}

impl Type {
    /// Creates a constructor application.
    #[must_use]
    pub fn ctor(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Ctor { name: name.into(), args }
    }

    /// Creates a function type.
    #[must_use]
    pub fn function(params: Vec<Self>, ret: Self) -> Self {
        Self::Function { params, ret: Box::new(ret) }
    }

    /// Creates an error type with the given message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self { Self::Error(message.into()) }

    /// Follows variable bindings until reaching a non-bound type.
    ///
    /// A free variable resolves to itself.
    #[must_use]
    pub fn resolved(&self) -> &Self {
        let mut current = self;
        while let Self::Var(TypeVar { bound: Some(inner), .. }) = current {
            current = inner;
        }
        current
    }

    /// Returns true if this type (after resolution) is a free type variable.
    #[must_use]
    pub fn is_free_var(&self) -> bool {
        matches!(self.resolved(), Self::Var(TypeVar { bound: None, .. }))
    }

    /// Returns true if this type or any component of it is an error type.
    #[must_use]
    pub fn contains_error(&self) -> bool {
        match self.resolved() {
            Self::Error(_) => true,
            Self::Ctor { args, .. } | Self::Tuple(args) => args.iter().any(Self::contains_error),
            Self::Function { params, ret } => {
                params.iter().any(Self::contains_error) || ret.contains_error()
            }
            Self::Int | Self::Float | Self::String | Self::Bool | Self::Unit | Self::Var(_) => {
                false
            }
        }
    }

    /// Returns true if a value of this type may be assigned where the other
    /// type is expected.
    ///
    /// Currently structural equality; the hook where subtyping would slot in.
    #[must_use]
    pub fn is_assignable_to(&self, other: &Self) -> bool { self == other }
}

/// Structural equality following variable bindings.
///
/// Two free variables are equal iff their IDs are equal; a bound variable
/// compares as its binding. Error types never compare equal, so a poisoned
/// type cannot accidentally satisfy a check.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self.resolved(), other.resolved()) {
            (Self::Int, Self::Int)
            | (Self::Float, Self::Float)
            | (Self::String, Self::String)
            | (Self::Bool, Self::Bool)
            | (Self::Unit, Self::Unit) => true,

            (Self::Var(a), Self::Var(b)) => a.id == b.id,

            (Self::Ctor { name: a_name, args: a_args }, Self::Ctor { name: b_name, args: b_args }) => {
                a_name == b_name && a_args == b_args
            }

            (
                Self::Function { params: a_params, ret: a_ret },
                Self::Function { params: b_params, ret: b_ret },
            ) => a_params == b_params && a_ret == b_ret,

            (Self::Tuple(a), Self::Tuple(b)) => a == b,

            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved() {
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::String => write!(f, "String"),
            Self::Bool => write!(f, "Bool"),
            Self::Unit => write!(f, "Unit"),
            Self::Var(var) => write!(f, "{}", var.name),
            Self::Ctor { name, args } => {
                if args.is_empty() {
                    write!(f, "{name}")
                } else {
                    write!(f, "{name}[")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, "]")
                }
            }
            Self::Function { params, ret } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {ret}")
            }
            Self::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
            Self::Error(message) => write!(f, "<error: {message}>"),
        }
    }
}
