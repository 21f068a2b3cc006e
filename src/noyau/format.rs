// src/noyau/format.rs
//
// Affichage des résultats f64.

/// -0 s’affiche 0.
fn sans_zero_negatif(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Forme la plus courte qui relit la même valeur (ex: 1.5, -2, 3.3333333333333335).
pub fn format_resultat(v: f64) -> String {
    format!("{}", sans_zero_negatif(v))
}

/// Arrondi à `decimales` chiffres après la virgule (ex: 3.33 pour 10/3 à 2 décimales).
pub fn format_arrondi(v: f64, decimales: usize) -> String {
    let s = format!("{:.*}", decimales, sans_zero_negatif(v));

    // "-0.00" (petit négatif arrondi) => "0.00"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}
