use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Object,
    },
    util::num::{f64_to_i64_truncated, wrap_index},
};

impl Interpreter {
    /// Looks a variable up through the scope chain.
    ///
    /// # Errors
    /// `UndefinedVariable` if no scope binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Object> {
        self.env
            .borrow()
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Unlike the assignment statement, this never creates a binding.
    ///
    /// # Errors
    /// `UndefinedVariable` if no scope binds `name`.
    pub fn assign_existing(&mut self, name: &str, value: Object, line: usize) -> EvalResult<()> {
        if self.env.borrow_mut().update(name, value) {
            Ok(())
        } else {
            Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                  line })
        }
    }

    /// Evaluates the elements of a list literal from left to right into a new
    /// list.
    pub fn eval_list_literal(&mut self, elements: &[Expr]) -> EvalResult<Object> {
        let items = elements.iter()
                            .map(|element| self.eval_expr(element))
                            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Object::from(items))
    }

    /// Evaluates `collection[index]`.
    ///
    /// A list yields the stored element itself (shared, not copied); a string
    /// yields a new one-character string.
    ///
    /// # Errors
    /// - `NotSubscriptable` for anything but a list or a string.
    /// - The errors of [`resolve_index`].
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::{evaluator::core::Interpreter, value::core::Object};
    ///
    /// let list = Object::from(vec![10.0.into(), 20.0.into(), 30.0.into()]);
    ///
    /// let last = Interpreter::eval_index(&list, &Object::from(-1.0), 1).unwrap();
    /// assert_eq!(last, Object::from(30.0));
    ///
    /// assert!(Interpreter::eval_index(&list, &Object::from(-4.0), 1).is_err());
    /// ```
    pub fn eval_index(collection: &Object, index: &Object, line: usize) -> EvalResult<Object> {
        match collection {
            Object::List(items) => {
                let items = items.borrow();
                let position = resolve_index(index, items.len(), line)?;
                Ok(items[position].clone())
            },
            Object::String(text) => {
                let chars = text.chars().collect::<Vec<_>>();
                let position = resolve_index(index, chars.len(), line)?;
                Ok(Object::from(chars[position].to_string()))
            },
            other => Err(RuntimeError::NotSubscriptable { type_name: other.type_name(),
                                                          line }),
        }
    }

    /// Replaces `target[index]` in place.
    ///
    /// Only lists can be assigned into; every alias of the list sees the new
    /// element.
    ///
    /// # Errors
    /// - `NotSubscriptable` for anything but a list.
    /// - The errors of [`resolve_index`].
    pub fn assign_index(target: &Object,
                        index: &Object,
                        value: Object,
                        line: usize)
                        -> EvalResult<()> {
        match target {
            Object::List(items) => {
                let mut items = items.borrow_mut();
                let position = resolve_index(index, items.len(), line)?;
                items[position] = value;
                Ok(())
            },
            other => Err(RuntimeError::NotSubscriptable { type_name: other.type_name(),
                                                          line }),
        }
    }

    /// Evaluates `object.member`.
    ///
    /// Only `length` on strings and lists is defined.
    ///
    /// # Errors
    /// `MemberNotFound` for any other member or object.
    pub fn eval_member(object: &Object, member: &str, line: usize) -> EvalResult<Object> {
        match (object, member) {
            (Object::String(_) | Object::List(_), "length") => object.length_object(line),
            _ => Err(RuntimeError::MemberNotFound { member: member.to_string(),
                                                    type_name: object.type_name(),
                                                    line }),
        }
    }
}

/// Turns an index object into a position within a collection of `length`
/// elements.
///
/// The index must be a number; it is truncated toward zero, and negative
/// values count from the end.
///
/// # Errors
/// - `IndexNotNumber` if `index` is not a number.
/// - `IndexOutOfRange` if the position is outside the collection after
///   wrapping.
///
/// # Example
/// ```
/// use pylite::interpreter::{evaluator::utils::resolve_index, value::core::Object};
///
/// assert_eq!(resolve_index(&Object::from(1.9), 3, 1).unwrap(), 1);
/// assert_eq!(resolve_index(&Object::from(-3.0), 3, 1).unwrap(), 0);
/// assert!(resolve_index(&Object::from(3.0), 3, 1).is_err());
/// ```
pub fn resolve_index(index: &Object, length: usize, line: usize) -> EvalResult<usize> {
    let Object::Number(n) = index else {
        return Err(RuntimeError::IndexNotNumber { type_name: index.type_name(),
                                                  line });
    };

    let out_of_range = |index| RuntimeError::IndexOutOfRange { index, length, line };

    let index = f64_to_i64_truncated(*n, out_of_range(i64::MAX))?;
    wrap_index(index, length).ok_or_else(|| out_of_range(index))
}
