//! Data structures and algorithms implementations related to
//! quadratic integers (algebraic integers of quadratic fields).

mod cross;
pub mod integer;
mod numeric;
pub mod ring;

pub use integer::QuadraticInteger;
pub use ring::QuadraticRing;
