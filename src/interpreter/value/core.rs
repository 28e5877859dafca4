use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            function::Function,
            iterator::{IteratorObject, ListIterator, RangeIterator, StringIterator},
        },
    },
    util::num::usize_to_f64_checked,
};

/// A list shared between every object that refers to it.
pub type ListRef = Rc<RefCell<Vec<Object>>>;

/// Represents a runtime value in the interpreter.
///
/// Cloning an `Object` never copies a list, a function or an iterator: the
/// clone is another handle to the same shared value. Mutating a list through
/// one handle is visible through all of them.
#[derive(Debug, Clone)]
pub enum Object {
    /// A double precision number. Also used for truth values: comparisons
    /// and logical operators produce `1` or `0`.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A mutable, shared list of objects.
    List(ListRef),
    /// An arithmetic progression produced by `range`.
    Range(Range),
    /// A builtin or user-defined function.
    Function(Rc<Function>),
    /// A single-pass cursor over a list, string or range.
    Iterator(Rc<RefCell<IteratorObject>>),
}

/// The bounds of a `range` object.
///
/// The direction is given by the sign of `step`: a positive step counts up
/// while below `stop`, a negative one counts down while above it. A zero
/// step is rejected by the `range` builtin before a `Range` is ever built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// First value produced.
    pub start: f64,
    /// Exclusive bound.
    pub stop:  f64,
    /// Distance between consecutive values.
    pub step:  f64,
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<Range> for Object {
    fn from(v: Range) -> Self {
        Self::Range(v)
    }
}

impl From<Function> for Object {
    fn from(v: Function) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Object {
    /// Returns the user-facing name of the object's type, as used in error
    /// messages.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::value::core::Object;
    ///
    /// assert_eq!(Object::from(1.5).type_name(), "number");
    /// assert_eq!(Object::from("hi").type_name(), "string");
    /// assert_eq!(Object::from(vec![]).type_name(), "list");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Range(_) => "range",
            Self::Function(_) => "function",
            Self::Iterator(_) => "iterator",
        }
    }

    /// Converts the object to a boolean for control flow.
    ///
    /// Numbers are true iff non-zero (so NaN is true), strings iff
    /// non-empty. Every other kind of object is always true, including an
    /// empty list.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::value::core::Object;
    ///
    /// assert!(Object::from(-2.0).is_truthy());
    /// assert!(!Object::from(0.0).is_truthy());
    /// assert!(!Object::from("").is_truthy());
    /// assert!(Object::from(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Returns the number, or a type error naming `context`.
    ///
    /// # Parameters
    /// - `context`: What the number was needed for, e.g. `"range() argument"`.
    /// - `line`: Source code line number for error reporting.
    pub fn as_number(&self, context: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("{context} must be a number, \
                                                                     found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Returns the length of a string (in characters) or a list.
    ///
    /// Returns `None` for every other kind of object.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::List(items) => Some(items.borrow().len()),
            _ => None,
        }
    }

    /// Like [`Object::length`], but as a number object.
    ///
    /// # Errors
    /// `TypeError` when the object has no length.
    pub fn length_object(&self, line: usize) -> EvalResult<Self> {
        let length = self.length().ok_or_else(|| RuntimeError::TypeError {
                                      details: format!("object of type {} has no length",
                                                       self.type_name()),
                                      line,
                                  })?;
        let too_large = RuntimeError::TypeError { details: "length too large to represent".into(),
                                                  line };

        Ok(Self::Number(usize_to_f64_checked(length, too_large)?))
    }

    /// Creates a fresh iterator over a list, string or range.
    ///
    /// Each call returns an independent cursor positioned at the start.
    ///
    /// # Errors
    /// `NotIterable` for any other kind of object.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::value::core::{Object, Range};
    ///
    /// let range = Object::from(Range { start: 0.0,
    ///                                  stop:  3.0,
    ///                                  step:  1.0, });
    /// let values = range.iter(1)
    ///                   .unwrap()
    ///                   .map(|o| o.to_string())
    ///                   .collect::<Vec<_>>();
    ///
    /// assert_eq!(values, ["0", "1", "2"]);
    /// ```
    pub fn iter(&self, line: usize) -> EvalResult<IteratorObject> {
        match self {
            Self::List(items) => Ok(IteratorObject::List(ListIterator::new(&items.borrow()))),
            Self::String(s) => Ok(IteratorObject::String(StringIterator::new(s))),
            Self::Range(range) => Ok(IteratorObject::Range(RangeIterator::new(*range))),
            other => Err(RuntimeError::NotIterable { type_name: other.type_name(),
                                                     line }),
        }
    }
}

/// Compares by value for numbers, strings and ranges, and by identity for
/// lists, functions and iterators.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Range(a), Self::Range(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Iterator(a), Self::Iterator(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Renders the object the way `print` shows it.
///
/// Integral numbers have no fractional part (`7`, not `7.0`), other numbers
/// use the shortest decimal that reads back to the same value, and the
/// special values are `inf`, `-inf` and `nan`. Strings are written raw.
/// Every other object renders as an opaque placeholder such as `<list>`.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt_number(*n, f),
            Self::String(s) => f.write_str(s),
            Self::List(_) => f.write_str("<list>"),
            Self::Range(_) => f.write_str("<range>"),
            Self::Function(func) => write!(f, "<function {}>", func.name()),
            Self::Iterator(_) => f.write_str("<iterator>"),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("nan")
    } else {
        // `Display` for `f64` already prints `7` for `7.0` and `inf` for infinity.
        write!(f, "{n}")
    }
}
