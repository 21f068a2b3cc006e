//! Calculatrice RPN : moteur d’expressions arithmétiques (f64).
//!
//! `calculate("3 + 4 * 2")` => `Ok(11.0)`.

pub mod noyau;

pub use noyau::{calculate, calculate_with_steps, CalcError, Demarche};
