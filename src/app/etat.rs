//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, type choisi, résultat, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Le seul appel au noyau passe par `evaluer()`.
//! - En mode “vif”, chaque modification de l’entrée relance l’évaluation :
//!   une saisie incomplète affiche la valeur par défaut, jamais une erreur bloquante.

use calculatrice_vive::noyau::{Demarche, Evaluation, TypeNumerique};

/// Type numérique au démarrage.
const TYPE_DEFAUT: TypeNumerique = TypeNumerique::F64;

/// Évaluation à chaque frappe par défaut.
const EVALUATION_VIVE_DEFAUT: bool = true;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur affichée (défaut du type si échec)
    pub erreur: String,   // raison de l’échec (discrète, n’empêche pas l’affichage)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub type_numerique: TypeNumerique,
    pub evaluation_vive: bool,

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
            demarche: Demarche::default(),
            type_numerique: TYPE_DEFAUT,
            evaluation_vive: EVALUATION_VIVE_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.type_numerique = TYPE_DEFAUT;
        self.evaluation_vive = EVALUATION_VIVE_DEFAUT;
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
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Change le type ; réévalue aussitôt si l’entrée n’est pas vide.
    pub fn set_type(&mut self, t: TypeNumerique) {
        if self.type_numerique == t {
            return;
        }
        self.type_numerique = t;
        if !self.entree.trim().is_empty() {
            self.evaluer();
        }
    }

    /// Appelé par la vue à chaque modification de l’entrée.
    pub fn entree_modifiee(&mut self) {
        if !self.evaluation_vive {
            return;
        }
        if self.entree.trim().is_empty() {
            self.clear_resultats();
        } else {
            self.evaluer();
        }
    }

    /// Évalue l’entrée courante dans le type choisi.
    pub fn evaluer(&mut self) {
        let e = self.type_numerique.evaluer(&self.entree);
        self.set_evaluation(e);
    }

    /// Utilitaire : déposer un résultat complet (valeur + erreur éventuelle + démarche).
    pub fn set_evaluation(&mut self, e: Evaluation) {
        self.resultat = e.valeur;
        self.erreur = e.erreur.map(|err| err.to_string()).unwrap_or_default();
        self.demarche = e.demarche;
    }
}
