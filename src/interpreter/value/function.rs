use std::{fmt, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{environment::EnvRef, evaluator::function::core::BuiltinDef},
};

/// A callable value.
///
/// Functions are always handled through an `Rc`, and two function objects
/// are equal only when they are the same allocation.
pub enum Function {
    /// A native function from the builtin table.
    Builtin(&'static BuiltinDef),
    /// A function defined with `def`.
    UserDefined(UserFunction),
}

/// A function defined in the program, together with its closure.
pub struct UserFunction {
    /// Name given in the `def`.
    pub name:    String,
    /// Parameter names, in order.
    pub params:  Vec<String>,
    /// The body, shared with the definition in the AST.
    pub body:    Rc<[Statement]>,
    /// The environment active where the function was defined.
    pub closure: EnvRef,
}

impl UserFunction {
    /// Creates a function value for a definition, capturing `closure`.
    ///
    /// The body is shared with `def`, never copied.
    #[must_use]
    pub fn new(def: &FunctionDef, closure: EnvRef) -> Self {
        Self { name: def.name.clone(),
               params: def.params.clone(),
               body: Rc::clone(&def.body),
               closure }
    }
}

impl Function {
    /// Returns the name the function was defined or registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(def) => def.name,
            Self::UserDefined(func) => &func.name,
        }
    }
}

// The closure usually contains this very function, so a derived `Debug`
// would never terminate.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(def) => write!(f, "Builtin({})", def.name),
            Self::UserDefined(func) => {
                f.debug_struct("UserDefined")
                 .field("name", &func.name)
                 .field("params", &func.params)
                 .finish_non_exhaustive()
            },
        }
    }
}
