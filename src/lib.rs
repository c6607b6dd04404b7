//! The `Quine-McCluskey Minimization Kit (qmkit)` crate provides data structures and algorithms
//! to compute minimal sums of products of Boolean functions defined by their truth table.

#[macro_use]
extern crate pest_derive;
extern crate thiserror;

pub mod command;
pub mod func;
pub mod helper;
pub mod model;
