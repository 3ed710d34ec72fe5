/// The environment module stores variable bindings for evaluation.
///
/// An environment is a persistent chain of frames mapping names to values.
/// Extension shares structure with the parent environment, which is what
/// lets closures keep the exact scope they were created in alive at no
/// copying cost.
///
/// # Responsibilities
/// - Binds names to values, with shadowing.
/// - Resolves variable references during evaluation.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST eagerly, applies operators, manages
/// environments, builds and calls closures, and produces the final value
/// of a program. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Arranges mutual recursion for `fun` groups.
/// - Reports runtime faults such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens paired
/// with source positions: keywords, literals, names, operators, and
/// delimiters. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Resolves string escapes and skips comments and whitespace.
/// - Reports lexical faults for malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream by recursive descent, one
/// function per precedence level, and constructs the AST the evaluator
/// walks. A program is a single expression; leftover tokens after it are
/// a fault.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the grammar, reporting faults with positions.
/// - Flattens `fun ... and ...` groups into declaration order.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program can compute: integers,
/// booleans, unit, pairs, and closures. It also provides the two
/// renderings every value has, the default form and the type-tagged form.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Closure` type.
/// - Implements the default and `[Tag, value]` renderings.
pub mod value;
