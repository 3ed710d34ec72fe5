use std::rc::Rc;

/// A 1-based source location.
///
/// Every token and AST node records the position of the first character of
/// its production so that faults raised much later (during evaluation of a
/// deeply nested sub-expression, say) can still point back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The source line, starting at 1.
    pub line:   usize,
    /// The source column, starting at 1. A tab advances the column by 4.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. String literals lex and parse but carry no evaluation semantics yet;
/// they surface as an unimplemented fault when reached by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Int(i64),
    /// A boolean literal, `true` or `false`.
    Bool(bool),
    /// The unit literal `()`.
    Unit,
    /// A string literal with escapes already resolved.
    Str(String),
}

/// An abstract syntax tree node representing an expression.
///
/// The whole language is expression-shaped: declarations only occur inside a
/// `let ... in ... end` header, so `Expr` together with [`Declaration`] is the
/// complete parse result. Each variant carries the [`Position`] captured at
/// the start of its production.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Position of the literal in the source.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the name in the source.
        position: Position,
    },
    /// A prefix operation: `not`, `print`, `fst` or `snd`.
    UnaryOp {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator in the source.
        position: Position,
    },
    /// A binary operation, including the short-circuiting connectives.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source.
        position: Position,
    },
    /// Conditional expression: `if c then t else e`. Both branches are
    /// mandatory; exactly one is ever evaluated.
    IfExpr {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated when the condition is false.
        else_branch: Box<Self>,
        /// Position of the `if` keyword.
        position:    Position,
    },
    /// A `let <decl> in <body> end` expression.
    Let {
        /// The declaration introduced for the body.
        decl:     Declaration,
        /// The body evaluated in the extended environment.
        body:     Box<Self>,
        /// Position of the `let` keyword.
        position: Position,
    },
    /// A function literal: `fn x => body`.
    ///
    /// The body is reference-counted because closures created at evaluation
    /// time share it with the program tree.
    Lambda {
        /// The parameter name.
        param:    String,
        /// The function body.
        body:     Rc<Self>,
        /// Position of the `fn` keyword.
        position: Position,
    },
    /// Function application by juxtaposition: `f x`.
    Apply {
        /// The expression evaluating to a closure.
        function: Box<Self>,
        /// The argument expression.
        argument: Box<Self>,
        /// Position where the argument begins.
        position: Position,
    },
    /// Pair construction: `(a, b)`.
    PairUp {
        /// The first component.
        first:    Box<Self>,
        /// The second component.
        second:   Box<Self>,
        /// Position of the separating comma.
        position: Position,
    },
    /// Sequencing: `(a; b)` evaluates `a` for effect, then returns `b`.
    Seq {
        /// The expression evaluated for its effect.
        first:    Box<Self>,
        /// The expression whose value is returned.
        second:   Box<Self>,
        /// Position of the separating semicolon.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position recorded for this node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::IfExpr { position, .. }
            | Self::Let { position, .. }
            | Self::Lambda { position, .. }
            | Self::Apply { position, .. }
            | Self::PairUp { position, .. }
            | Self::Seq { position, .. } => *position,
        }
    }
}

/// A declaration inside a `let` header.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A non-recursive value binding: `val x = e`. The right-hand side is
    /// evaluated in the outer environment, so it cannot see `x`.
    Val {
        /// The bound name.
        name:     String,
        /// The right-hand side expression.
        value:    Box<Expr>,
        /// Position of the bound name.
        position: Position,
    },
    /// A group of one or more function bindings:
    /// `fun f x = e and g y = e' and ...`, in declaration order.
    ///
    /// Every function in the group may refer to itself and to every other
    /// member, which the evaluator arranges with a two-phase environment
    /// patch.
    Fun(Vec<FunctionDef>),
}

/// Represents a single function binding inside a `fun ... and ...` group.
///
/// A function binds exactly one parameter name to an expression body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:     String,
    /// The parameter name.
    pub param:    String,
    /// The body expression evaluated when the function is called. Shared
    /// with the closures created for this definition.
    pub body:     Rc<Expr>,
    /// Position of the function name.
    pub position: Position,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Short-circuiting disjunction (`orelse`)
    Or,
    /// Short-circuiting conjunction (`andalso`)
    And,
    /// Less than (`<`)
    Less,
    /// Equality on integers (`=`)
    Equals,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`div`)
    Div,
    /// Remainder with the sign of the dividend (`mod`)
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Or => "orelse",
            Self::And => "andalso",
            Self::Less => "<",
            Self::Equals => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "div",
            Self::Mod => "mod",
        };
        write!(f, "{operator}")
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Boolean negation (`not`)
    Not,
    /// Print the operand's default rendering, returning unit (`print`)
    Print,
    /// First projection of a pair (`fst`)
    Fst,
    /// Second projection of a pair (`snd`)
    Snd,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "not",
            Self::Print => "print",
            Self::Fst => "fst",
            Self::Snd => "snd",
        };
        write!(f, "{operator}")
    }
}
