// src/noyau/erreur.rs
//
// Taxonomie fermée des erreurs du noyau.
// Une famille par étape du pipeline + une enveloppe pour la façade.
// Les textes Display sont ceux affichés tels quels par l’UI.

use thiserror::Error;

use super::jetons::Tok;

/// Erreurs de lecture (tokenisation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// Caractère hors alphabet, avec sa position (index de code point, base 0).
    #[error("unknown character: {0}")]
    UnknownCharacter(char, usize),

    /// Nombre mal formé (ex: deux points décimaux). Texte lu + position fautive.
    #[error("invalid number at position {1}")]
    InvalidNumber(String, usize),
}

/// Erreurs de structure (conversion infixe -> RPN).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("unknown token: {0}")]
    UnknownToken(Tok),
}

/// Erreurs d’évaluation (pile d’opérandes).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("not enough operands for operator {0}")]
    InsufficientOperands(Tok),

    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed expression")]
    MalformedExpression,
}

/// Erreur unifiée renvoyée par la façade `calculate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Position fautive dans l’entrée, quand l’erreur en porte une.
    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::Lex(LexError::UnknownCharacter(_, pos))
            | CalcError::Lex(LexError::InvalidNumber(_, pos)) => Some(*pos),
            _ => None,
        }
    }
}
