//! Named untyped lambda calculus: free variables, capture-avoiding substitution,
//! and an outermost beta-reducer that stops once the printed term stops changing.

#[cfg(test)]
#[macro_use]
mod macros;

pub mod error;
pub mod eval;
pub mod free;
pub mod subst;
pub mod term;

pub use error::{Error, Result};
pub use eval::{eval, eval_with_limit, reduce};
pub use free::{free, fresh, NameSet};
pub use subst::substitute;
pub use term::{vars, Kind, Term};
