/// Atomic expressions.
///
/// Handles the leaves of the grammar: literals, variable references, and
/// the three parenthesized forms (grouping, pairing, sequencing) plus the
/// unit literal `()`.
pub mod atom;
/// Binary operator levels.
///
/// One function per precedence level, from `orelse` at the bottom through
/// `andalso`, the non-associative comparisons, the additive level and the
/// multiplicative level, down to function application.
pub mod binary;
/// Entry point and special forms.
///
/// Contains the top-level [`core::parse`] function and the parsers for the
/// `if`, `let` and `fn` forms, whose bodies extend as far right as they
/// can.
pub mod core;
/// Prefix operators.
///
/// `not`, `print`, `fst` and `snd` each bind a single atom.
pub mod unary;
/// Shared helpers for token consumption.
pub mod utils;

pub use self::core::parse;
