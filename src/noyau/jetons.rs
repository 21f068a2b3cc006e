// src/noyau/jetons.rs

use std::fmt;

use log::trace;

use super::erreur::LexError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Négation unaire : jamais produite par tokenize, seulement par to_rpn.
    Neg,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur (binaire ou unaire), par opposition aux nombres et parenthèses.
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Neg)
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Neg => f.write_str("neg"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Numéral en cours de lecture (chiffres + au plus un point).
struct Numeral {
    texte: String,
    debut: usize,
    point_vu: bool,
}

impl Numeral {
    fn new() -> Self {
        Self {
            texte: String::new(),
            debut: 0,
            point_vu: false,
        }
    }

    fn push(&mut self, c: char, pos: usize) -> Result<(), LexError> {
        if self.texte.is_empty() {
            self.debut = pos;
        }
        if c == '.' {
            if self.point_vu {
                // "3.14.15" : on rejette au second point, sans tronquer
                let mut lu = std::mem::take(&mut self.texte);
                lu.push(c);
                return Err(LexError::InvalidNumber(lu, pos));
            }
            self.point_vu = true;
        }
        self.texte.push(c);
        Ok(())
    }

    /// Vide le tampon dans `out` (rien à faire s’il est vide).
    fn flush(&mut self, out: &mut Vec<Tok>) -> Result<(), LexError> {
        if self.texte.is_empty() {
            return Ok(());
        }
        let texte = std::mem::take(&mut self.texte);
        self.point_vu = false;

        // "5." et ".5" passent ; "." seul non ; hors plage f64 non plus
        let v = match texte.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err(LexError::InvalidNumber(texte, self.debut)),
        };
        trace!("numéral {texte:?} -> {v}");
        out.push(Tok::Num(v));
        Ok(())
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés, mais séparent les nombres)
///
/// Les positions d’erreur comptent des caractères (code points), pas des octets.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out = Vec::new();
    let mut num = Numeral::new();

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            num.push(c, i)?;
            continue;
        }

        num.flush(&mut out)?;

        if c.is_whitespace() {
            continue;
        }

        let tok = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => return Err(LexError::UnknownCharacter(c, i)),
        };
        out.push(tok);
    }

    // si un nombre reste en tampon
    num.flush(&mut out)?;

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
