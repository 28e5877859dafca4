use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::function::core::install_builtins,
        value::{
            core::Object,
            function::{Function, UserFunction},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Destination of `print` output.
pub type Output = Rc<RefCell<dyn Write>>;

/// How a statement finished.
///
/// Anything other than `Normal` unwinds the enclosing statements until a
/// construct that handles it: loops consume `Break` and `Continue`, calls
/// consume `Return`. Each signal remembers where it was raised so that one
/// escaping its handler can be reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break {
        /// Line of the `break`.
        line: usize,
    },
    /// Start the next iteration of the innermost loop.
    Continue {
        /// Line of the `continue`.
        line: usize,
    },
    /// Leave the current function with a value.
    Return {
        /// The returned object.
        value: Object,
        /// Line of the `return`.
        line:  usize,
    },
}

/// The tree-walking interpreter.
///
/// Holds the global scope (seeded with the builtins), the scope currently
/// executing, the call depth and the `print` destination.
///
/// ## Usage
///
/// An `Interpreter` is created once and can run several programs in a row;
/// globals defined by one run stay visible to the next.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use pylite::interpreter::{
///     evaluator::core::Interpreter, parser::core::parse_program, tokenizer::tokenize,
/// };
///
/// let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let mut interpreter = Interpreter::with_output(buffer.clone());
///
/// let program = parse_program(&tokenize("print(1 + 2 * 3)").unwrap()).unwrap();
/// interpreter.run(&program).unwrap();
///
/// assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), "7\n");
/// ```
pub struct Interpreter {
    pub(crate) globals: EnvRef,
    pub(crate) env:     EnvRef,
    pub(crate) depth:   usize,
    pub(crate) config:  Config,
    pub(crate) output:  Output,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Rc::new(RefCell::new(io::stdout())))
    }

    /// Creates an interpreter that prints to `output`.
    #[must_use]
    pub fn with_output(output: Output) -> Self {
        let globals = Environment::new_global();
        install_builtins(&mut globals.borrow_mut());

        Self { env: Rc::clone(&globals),
               globals,
               depth: 0,
               config: Config::default(),
               output }
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the global scope.
    #[must_use]
    pub const fn globals(&self) -> &EnvRef {
        &self.globals
    }

    /// Runs a parsed program in the global scope.
    ///
    /// # Errors
    /// The first runtime error raised, or a `break`, `continue` or `return`
    /// that reached the top level without a matching loop or call.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        self.env = Rc::clone(&self.globals);
        self.depth = 0;

        let flow = self.exec_block(program)?;
        self.output
            .borrow_mut()
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line:    0, })?;

        match flow {
            Flow::Normal => {
                debug!("program finished");
                Ok(())
            },
            Flow::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Flow::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
            Flow::Return { line, .. } => Err(RuntimeError::ReturnOutsideFunction { line }),
        }
    }

    /// Executes statements in order in the current scope.
    ///
    /// Stops at the first statement that does not finish normally and
    /// returns its signal.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// No statement other than a call opens a new scope: assignments in
    /// `if`, `while` and `for` bodies write into the enclosing scope.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// How the statement finished.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval_expr(expr)?;
            },
            Statement::Assign { name, value, .. } => {
                let value = self.eval_expr(value)?;
                self.env.borrow_mut().declare(name.as_str(), value);
            },
            Statement::CompoundAssign { name,
                                        op,
                                        value,
                                        line, } => {
                let current = self.lookup(name, *line)?;
                let rhs = self.eval_expr(value)?;
                let result = Self::eval_binary(*op, &current, &rhs, *line)?;
                self.assign_existing(name, result, *line)?;
            },
            Statement::IndexAssign { target,
                                     index,
                                     value,
                                     line, } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                let value = self.eval_expr(value)?;
                Self::assign_index(&target, &index, value, *line)?;
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let branch = if self.eval_expr(condition)?.is_truthy() {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_block(branch);
            },
            Statement::While { condition, body, .. } => return self.exec_while(condition, body),
            Statement::For { var,
                             iterable,
                             body,
                             line, } => return self.exec_for(var, iterable, body, *line),
            Statement::Block { statements, .. } => return self.exec_block(statements),
            Statement::Break { line } => return Ok(Flow::Break { line: *line }),
            Statement::Continue { line } => return Ok(Flow::Continue { line: *line }),
            Statement::Function(def) => {
                let function = UserFunction::new(def, Rc::clone(&self.env));
                self.env
                    .borrow_mut()
                    .declare(def.name.as_str(), Object::from(Function::UserDefined(function)));
            },
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Object::Number(0.0),
                };
                return Ok(Flow::Return { value, line: *line });
            },
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting object.
    ///
    /// Operands are always evaluated left to right, and both operands of
    /// `and`/`or` are evaluated.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Object> {
        match expr {
            Expr::Number { value, .. } => Ok(Object::Number(*value)),
            Expr::String { value, .. } => Ok(Object::from(value.as_str())),
            Expr::Variable { name, line } => self.lookup(name, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Unary { op, operand, line } => {
                let operand = self.eval_expr(operand)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Assign { name, value, line } => {
                let value = self.eval_expr(value)?;
                self.assign_existing(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::List { elements, .. } => self.eval_list_literal(elements),
            Expr::Index { collection,
                          index,
                          line, } => {
                let collection = self.eval_expr(collection)?;
                let index = self.eval_expr(index)?;
                Self::eval_index(&collection, &index, *line)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::Member { object, member, line } => {
                let object = self.eval_expr(object)?;
                Self::eval_member(&object, member, *line)
            },
        }
    }
}
