//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::Demarche;

/// Décimales de l’arrondi par défaut (comme un printf "%.2f").
const DECIMALES_DEFAUT: usize = 2;

/// Au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // forme courte (relit la même valeur)
    pub valeur: Option<f64>,
    pub erreur: String,
    pub position_erreur: Option<usize>, // caractère fautif dans l’entrée évaluée
    pub entree_evaluee: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            valeur: None,
            erreur: String::new(),
            position_erreur: None,
            entree_evaluee: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_erreur(&mut self) {
        self.erreur.clear();
        self.position_erreur = None;
        self.entree_evaluee.clear();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.valeur = None;
        self.clear_erreur();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    /// - La démarche est effacée (pipeline interrompu).
    pub fn set_erreur(&mut self, msg: impl Into<String>, position: Option<usize>) {
        self.erreur = msg.into();
        self.position_erreur = position;
        self.entree_evaluee = self.entree.trim_end().to_string();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, texte: impl Into<String>, demarche: Demarche) {
        self.clear_erreur();
        self.valeur = Some(valeur);
        self.resultat = texte.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }

    /// Ligne “^” sous le caractère fautif (monospace), si la position est connue.
    /// Le décalage recopie le préfixe : tabulations gardées, tout le reste en espaces.
    pub fn marqueur_erreur(&self) -> Option<String> {
        let pos = self.position_erreur?;
        let decalage: String = self
            .entree_evaluee
            .chars()
            .take(pos)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        Some(format!("{}\n{decalage}^", self.entree_evaluee))
    }
}
