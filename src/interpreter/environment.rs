use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Object;

/// Shared handle to a scope.
///
/// Scopes are shared between the running interpreter and every closure
/// created in them, and stay alive as long as any of those holds a handle.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope: local bindings plus an optional enclosing scope.
///
/// Two write disciplines exist:
/// - [`Environment::declare`] always writes into this scope, creating or
///   overwriting the local binding;
/// - [`Environment::update`] searches outward and overwrites the first
///   existing binding, failing if there is none.
#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Object>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty scope with no parent.
    #[must_use]
    pub fn new_global() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope enclosed by `parent`.
    #[must_use]
    pub fn new_child(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { values: HashMap::new(),
                                    parent: Some(Rc::clone(parent)), }))
    }

    /// Looks `name` up through the chain of scopes.
    ///
    /// # Returns
    /// A handle to the bound object, or `None` if no scope binds the name.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::{environment::Environment, value::core::Object};
    ///
    /// let globals = Environment::new_global();
    /// globals.borrow_mut().declare("x", Object::from(1.0));
    ///
    /// let local = Environment::new_child(&globals);
    /// assert_eq!(local.borrow().get("x"), Some(Object::from(1.0)));
    /// assert_eq!(local.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.values.get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref()?.borrow().get(name),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn declare(&mut self, name: impl Into<String>, value: Object) {
        self.values.insert(name.into(), value);
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// # Returns
    /// `false` if no scope in the chain binds the name; nothing is written
    /// in that case.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::{environment::Environment, value::core::Object};
    ///
    /// let globals = Environment::new_global();
    /// globals.borrow_mut().declare("x", Object::from(1.0));
    ///
    /// let local = Environment::new_child(&globals);
    /// assert!(local.borrow_mut().update("x", Object::from(2.0)));
    /// assert!(!local.borrow_mut().update("y", Object::from(2.0)));
    ///
    /// assert_eq!(globals.borrow().get("x"), Some(Object::from(2.0)));
    /// assert!(!local.borrow().has("y"));
    /// ```
    pub fn update(&mut self, name: &str, value: Object) -> bool {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return true;
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().update(name, value),
            None => false,
        }
    }

    /// Returns `true` if any scope in the chain binds `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name) || self.parent.as_ref().is_some_and(|p| p.borrow().has(name))
    }
}

// Bindings may hold closures that point back at this scope; only the names
// are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.values.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
