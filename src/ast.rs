use std::{fmt, rc::Rc};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication or string repetition (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Remainder (`%`).
    Mod,
    /// Exponentiation (`**`).
    Pow,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// Logical conjunction (`and`), evaluated eagerly.
    And,
    /// Logical disjunction (`or`), evaluated eagerly.
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Mod => "%",
                        Self::Pow => "**",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::LessEqual => "<=",
                        Self::GreaterEqual => ">=",
                        Self::And => "and",
                        Self::Or => "or",
                    })
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Numeric negation (`-`).
    Negate,
    /// Logical complement of truthiness (`not`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "not",
                    })
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it starts on so that runtime
/// errors can point back at the code.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal such as `3.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, already unescaped.
    String {
        /// The literal contents.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Assignment used as an expression (`(x = 1)`). Updates an existing
    /// binding and yields the assigned value.
    Assign {
        /// Name being assigned.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal (`[a, b, c]`).
    List {
        /// Elements, evaluated left to right.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Subscript (`collection[index]`).
    Index {
        /// The indexed expression.
        collection: Box<Self>,
        /// The index expression.
        index:      Box<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Function call (`callee(args...)`).
    Call {
        /// Expression producing the function.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Member access (`object.member`).
    Member {
        /// The accessed expression.
        object: Box<Self>,
        /// Name of the member.
        member: String,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use pylite::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::String { line, .. }
            | Self::Variable { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Assign { line, .. }
            | Self::List { line, .. }
            | Self::Index { line, .. }
            | Self::Call { line, .. }
            | Self::Member { line, .. } => *line,
        }
    }
}

/// A user-defined function as written in the source.
///
/// The body is shared: every function value created from this definition
/// points at the same statements.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function name.
    pub name:   String,
    /// Parameter names, in order.
    pub params: Vec<String>,
    /// The body statements.
    pub body:   Rc<[Statement]>,
    /// Line of the `def` keyword.
    pub line:   usize,
}

/// An AST node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value`, always writing into the current scope.
    Assign {
        /// Name being bound.
        name:  String,
        /// The assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name += value` or `name -= value`; the name must already be bound.
    CompoundAssign {
        /// Name being updated.
        name:  String,
        /// `Add` or `Sub`.
        op:    BinaryOperator,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `target[index] = value`, replacing a list element in place.
    IndexAssign {
        /// Expression producing the list.
        target: Expr,
        /// The index expression.
        index:  Expr,
        /// The assigned expression.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if` with an optional `else`. Either branch may be empty.
    If {
        /// The condition.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while condition:` loop.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for var in iterable:` loop.
    For {
        /// The loop variable.
        var:      String,
        /// Expression producing a range, string or list.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A sequence of statements run in the enclosing scope.
    Block {
        /// The statements.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `break`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `def name(params):` definition.
    Function(FunctionDef),
    /// `return [value]`
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assign { line, .. }
            | Self::CompoundAssign { line, .. }
            | Self::IndexAssign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Block { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}
