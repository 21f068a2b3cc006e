// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile d’opérandes f64
//
// Règles:
// - Priorités: + - => 1, * / => 2, neg => 3 (associativité gauche, comparaison >=)
// - Moins/plus unaire:
//    - '-' ou '+' en tête, après un opérateur ou après '(' est unaire
//    - '-' unaire devient Tok::Neg (un seul opérande), '+' unaire est ignoré

use log::trace;
use num_traits::Zero;

use super::erreur::{EvalError, SyntaxError};
use super::jetons::Tok;

/// Priorité d’un opérateur (0 pour tout le reste).
pub fn priority(t: Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(5), Plus, Num(3)]
///   rpn:    [Num(5), Neg, Num(3), Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, SyntaxError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai quand le prochain jeton doit commencer une opérande.
    // Sert à détecter le moins/plus unaire.
    let mut attend_operande = true;

    for &tok in tokens {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                attend_operande = false;
            }

            Tok::LPar => {
                ops.push(tok);
                attend_operande = true;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' (jetée, jamais émise)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(SyntaxError::MismatchedParentheses),
                    }
                }
                attend_operande = false;
            }

            Tok::Minus if attend_operande => {
                // préfixe : rien à sa gauche ne peut être dépilé
                trace!("moins unaire -> neg");
                ops.push(Tok::Neg);
            }

            Tok::Plus if attend_operande => {
                trace!("plus unaire ignoré");
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(&top) = ops.last() {
                    if !top.est_operateur() || priority(top) < priority(tok) {
                        break;
                    }
                    ops.pop();
                    out.push(top);
                }

                ops.push(tok);
                attend_operande = true;
            }

            Tok::Neg => return Err(SyntaxError::UnknownToken(tok)),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(SyntaxError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// - binaire : droite dépilée d’abord, puis gauche => `gauche op droite`
/// - neg : un seul opérande
/// - en fin de parcours, la pile doit contenir exactement une valeur
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Neg => {
                let x = pile.pop().ok_or(EvalError::InsufficientOperands(tok))?;
                pile.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if pile.len() < 2 {
                    return Err(EvalError::InsufficientOperands(tok));
                }
                let (Some(b), Some(a)) = (pile.pop(), pile.pop()) else {
                    return Err(EvalError::InsufficientOperands(tok));
                };

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        // 0.0 et -0.0
                        if b.is_zero() {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                };
                trace!("{a} {tok} {b} = {r}");
                pile.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::MalformedExpression),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}
