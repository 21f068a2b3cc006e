//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence, calculée
//!   pendant la génération dans le même ordre que la RPN (donc bit à bit)

use std::time::{Duration, Instant};

use super::erreur::{CalcError, EvalError};
use super::calculate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression texte + valeur attendue (None => division par zéro quelque part).
struct Genere {
    texte: String,
    valeur: Option<f64>,
}

fn gen_nombre(rng: &mut Rng) -> Genere {
    // entiers et décimaux courts, 0 inclus (utile pour les divisions)
    let texte = match rng.pick(4) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(20), rng.pick(10)),
        _ => format!("{}", rng.pick(100)),
    };
    let valeur = texte.parse::<f64>().ok();
    Genere { texte, valeur }
}

fn espaces(rng: &mut Rng) -> &'static str {
    match rng.pick(3) {
        0 => "",
        1 => " ",
        _ => "  ",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Genere {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => {
            // négation : "-(x)" ou "(-x)"
            let x = gen_expr(rng, depth - 1);
            let texte = if rng.coin() {
                format!("-({})", x.texte)
            } else {
                format!("(-{})", x.texte)
            };
            Genere {
                texte,
                valeur: x.valeur.map(|v| -v),
            }
        }
        k => {
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            let (op, valeur) = match k {
                2 => ('+', a.valeur.zip(b.valeur).map(|(x, y)| x + y)),
                3 => ('-', a.valeur.zip(b.valeur).map(|(x, y)| x - y)),
                4 => ('*', a.valeur.zip(b.valeur).map(|(x, y)| x * y)),
                _ => (
                    '/',
                    a.valeur
                        .zip(b.valeur)
                        .and_then(|(x, y)| if y == 0.0 { None } else { Some(x / y) }),
                ),
            };
            let sp = espaces(rng);
            Genere {
                texte: format!("({}{sp}{op}{sp}{})", a.texte, b.texte),
                valeur,
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_de_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 5);
        match (calculate(&g.texte), g.valeur) {
            (Ok(v), Some(attendu)) => {
                assert_eq!(v.to_bits(), attendu.to_bits(), "expr={:?}", g.texte);
                seen_ok += 1;
            }
            (Err(CalcError::Eval(EvalError::DivisionByZero)), None) => seen_err += 1,
            (obtenu, attendu) => {
                panic!("expr={:?} obtenu={obtenu:?} attendu={attendu:?}", g.texte)
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let a = gen_expr(&mut r1, 4);
        let b = gen_expr(&mut r2, 4);
        assert_eq!(a.texte, b.texte);
        assert_eq!(calculate(&a.texte), calculate(&b.texte));
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Alphabet du noyau + quelques intrus : aucune entrée ne doit paniquer,
    // et un Ok doit toujours être un nombre (jamais de valeur partielle).
    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', 'é',
    ];

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let n = rng.pick(12) as usize;
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        if let Ok(v) = calculate(&s) {
            assert!(!v.is_nan(), "NaN pour {s:?}");
        }
    }
}
