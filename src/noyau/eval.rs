//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur
//!
//! Chaque étape échoue indépendamment ; la première erreur arrête tout
//! (pas de résultat partiel).

use log::debug;

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Trace du pipeline, pour le panneau “Démarche”.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression arithmétique.
pub fn calculate(expr: &str) -> Result<f64, CalcError> {
    calculate_with_steps(expr).map(|(v, _)| v)
}

/// Comme `calculate`, mais rend aussi la démarche (jetons + RPN en texte).
pub fn calculate_with_steps(expr: &str) -> Result<(f64, Demarche), CalcError> {
    // 1) Jetons
    let jetons = tokenize(expr)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Valeur
    let v = eval_rpn(&rpn)?;
    debug!("résultat: {v}");

    Ok((
        v,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}
