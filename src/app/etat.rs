//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_bedmas::{DemarcheNoyau, Options};

/// Garde-fou : longueur maximale de l’entrée (anti-abus / anti-gel).
pub const ENTREE_MAX: usize = 512;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat valide
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub options: Options,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            options: Options::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui l’entourent).
    pub fn backspace_entree(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.entree.pop();
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.focus_entree = true;
    }

    /// Ajoute du texte à l’entrée, dans la limite de `ENTREE_MAX` caractères
    /// (même unité que `TextEdit::char_limit`).
    pub fn inserer(&mut self, texte: &str) {
        if self.entree.chars().count() + texte.chars().count() <= ENTREE_MAX {
            self.entree.push_str(texte);
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
