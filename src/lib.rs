//! Exact arithmetic on algebraic integers of quadratic fields `Q(√d)`.
//!
//! [QuadraticInteger] stores `(a + b√d)/denom` with machine integer components
//! and denominator 1 or 2. Operations return `Result`, failing when a quotient
//! leaves the ring of integers, when two fields would have to be joined, or
//! when a component overflows. [Number] collapses rational results so they can
//! be combined across rings.

pub mod error;
pub mod number;
pub mod quadratic;
pub mod traits;
pub mod util;

pub use error::{AlgebraicDegreeOverflow, NotDivisible, QuadraticError, UnsupportedNumberDomain};
pub use number::Number;
pub use quadratic::{QuadraticInteger, QuadraticRing};
pub use traits::AlgebraicInteger;
