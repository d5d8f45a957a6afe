//! Noyau — évaluation (pipeline réel)
//!
//! lecture directe (chemin rapide)
//!   sinon : préformatage -> jetons -> moins unaires -> RPN -> valeur
//!
//! Contrat de `evaluate` : ne panique jamais, ne remonte aucune erreur.
//! Toute entrée mal formée (y compris une saisie en cours) donne `T::default()`.

use log::{debug, trace};

use super::erreur::ErreurEval;
use super::jetons::{format_jetons, preformat, tokenize};
use super::nombre::{Nombre, TypeNumerique};
use super::rpn::{eval_rpn, to_rpn};
use super::unaire::marquer_unaires;

/// Trace lisible du pipeline (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub preformat: String,
    pub jetons: String,
    pub unaires: String,
    pub rpn: String,
    pub note: String,
}

const NOTE_DIRECTE: &str = "Lecture directe : l’entrée est déjà un nombre.";
const NOTE_PIPELINE: &str =
    "Pipeline: préformatage → jetons → moins unaires (u) → RPN → évaluation.";

/// API publique : évalue `expression` dans le type `T`.
///
/// ```
/// use calculatrice_vive::evaluate;
///
/// assert_eq!(evaluate::<i32>("2+3*4"), 14);
/// assert_eq!(evaluate::<f64>("7/2"), 3.5);
/// assert_eq!(evaluate::<i32>("(2+3"), 0);
/// ```
pub fn evaluate<T: Nombre>(expression: &str) -> T {
    match try_evaluate(expression) {
        Ok(v) => v,
        Err(e) => {
            debug!("{expression:?} ({}) => défaut: {e}", T::NOM);
            T::default()
        }
    }
}

/// Même pipeline que `evaluate`, mais l’échec est explicite.
pub fn try_evaluate<T: Nombre>(expression: &str) -> Result<T, ErreurEval> {
    evaluate_with_steps(expression).0
}

/// Évalue et retourne la démarche (jetons, RPN…) en plus du résultat.
pub fn evaluate_with_steps<T: Nombre>(expression: &str) -> (Result<T, ErreurEval>, Demarche) {
    let mut d = Demarche::default();

    // 0) Chemin rapide : un nombre seul
    if let Some(v) = T::lire(expression) {
        trace!("{expression:?} lu directement en {}", T::NOM);
        d.preformat = expression.trim().to_string();
        d.note = NOTE_DIRECTE.into();
        return (Ok(v), d);
    }

    d.note = NOTE_PIPELINE.into();

    // 1) Préformatage
    let s = preformat(expression);
    d.preformat = s.to_string();
    if s.trim().is_empty() {
        return (Err(ErreurEval::EntreeVide), d);
    }

    // 2) Jetons
    let mut jetons = tokenize(s);
    d.jetons = format_jetons(&jetons);

    // 3) Moins unaires
    marquer_unaires(&mut jetons);
    d.unaires = format_jetons(&jetons);

    // 4) RPN
    let rpn = match to_rpn(&jetons) {
        Ok(r) => r,
        Err(e) => return (Err(e), d),
    };
    d.rpn = format_jetons(&rpn);
    debug!("{expression:?} => rpn [{}]", d.rpn);

    // 5) Valeur
    (eval_rpn(&rpn), d)
}

/// Résultat prêt à afficher (interface).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Valeur affichée : la valeur par défaut du type en cas d’échec.
    pub valeur: String,
    pub erreur: Option<ErreurEval>,
    pub demarche: Demarche,
}

impl Evaluation {
    fn depuis<T: Nombre>((res, demarche): (Result<T, ErreurEval>, Demarche)) -> Self {
        match res {
            Ok(v) => Self {
                valeur: v.to_string(),
                erreur: None,
                demarche,
            },
            Err(e) => Self {
                valeur: T::default().to_string(),
                erreur: Some(e),
                demarche,
            },
        }
    }
}

impl TypeNumerique {
    /// Aiguillage vers `evaluate_with_steps::<T>` selon le type choisi.
    pub fn evaluer(self, expression: &str) -> Evaluation {
        match self {
            TypeNumerique::I32 => Evaluation::depuis(evaluate_with_steps::<i32>(expression)),
            TypeNumerique::I64 => Evaluation::depuis(evaluate_with_steps::<i64>(expression)),
            TypeNumerique::F32 => Evaluation::depuis(evaluate_with_steps::<f32>(expression)),
            TypeNumerique::F64 => Evaluation::depuis(evaluate_with_steps::<f64>(expression)),
        }
    }
}
