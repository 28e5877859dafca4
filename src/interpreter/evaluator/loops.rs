use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{EvalResult, Flow, Interpreter},
};

/// What a loop does after running its body once.
enum Step {
    Next,
    Exit(Flow),
}

/// Maps the body's result to the loop's next step.
///
/// `break` ends the loop normally, `continue` and normal completion move on
/// to the next iteration, and `return` propagates to the enclosing call.
fn step(flow: Flow) -> Step {
    match flow {
        Flow::Normal | Flow::Continue { .. } => Step::Next,
        Flow::Break { .. } => Step::Exit(Flow::Normal),
        Flow::Return { .. } => Step::Exit(flow),
    }
}

impl Interpreter {
    /// Executes a `while` loop.
    ///
    /// The condition is evaluated before every iteration and tested for
    /// truthiness.
    ///
    /// # Parameters
    /// - `condition`: The loop condition.
    /// - `body`: The loop body.
    ///
    /// # Returns
    /// `Flow::Normal` when the loop ends, or the `Return` signal raised in
    /// the body.
    pub fn exec_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.eval_expr(condition)?.is_truthy() {
            if let Step::Exit(flow) = step(self.exec_block(body)?) {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a `for` loop.
    ///
    /// The iterable must be a range, a string or a list. A fresh iterator is
    /// obtained from it, and for every value the loop variable is bound in
    /// the current scope before the body runs. The variable keeps its last
    /// value after the loop.
    ///
    /// # Parameters
    /// - `var`: Name of the loop variable.
    /// - `iterable`: Expression producing the iterable.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// `Flow::Normal` when the loop ends, or the `Return` signal raised in
    /// the body.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Object},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// // for c in "abc": last = c
    /// let body = [Statement::Assign { name:  "last".into(),
    ///                                 value: Expr::Variable { name: "c".into(),
    ///                                                         line: 2, },
    ///                                 line:  2, }];
    /// let iterable = Expr::String { value: "abc".into(),
    ///                               line:  1, };
    ///
    /// interpreter.exec_for("c", &iterable, &body, 1).unwrap();
    ///
    /// let last = interpreter.globals().borrow().get("last");
    /// assert_eq!(last, Some(Object::from("c")));
    /// ```
    pub fn exec_for(&mut self,
                    var: &str,
                    iterable: &Expr,
                    body: &[Statement],
                    line: usize)
                    -> EvalResult<Flow> {
        let mut iterator = self.eval_expr(iterable)?.iter(line)?;

        while iterator.has_next() {
            let Some(value) = iterator.next() else { break };
            self.env.borrow_mut().declare(var, value);

            if let Step::Exit(flow) = step(self.exec_block(body)?) {
                return Ok(flow);
            }
        }

        Ok(Flow::Normal)
    }
}
