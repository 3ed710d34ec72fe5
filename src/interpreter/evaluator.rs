/// Binary operator evaluation.
///
/// Short-circuiting connectives, comparisons, and checked integer
/// arithmetic.
pub mod binary;
/// `let` declaration evaluation, including recursive `fun` groups.
pub mod binding;
/// The main evaluation dispatch.
pub mod core;
/// Prefix operator evaluation: `not`, `print`, `fst`, `snd`.
pub mod unary;
/// Value coercion helpers shared by the evaluation modules.
pub mod utils;

pub use self::core::evaluate;
