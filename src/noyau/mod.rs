//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées par étape + enveloppe CalcError
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - format.rs   : affichage des résultats (forme courte / arrondi)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{CalcError, EvalError, LexError, SyntaxError};
pub use eval::{calculate, calculate_with_steps, Demarche};
