// src/noyau/erreur.rs
//
// Erreurs internes du pipeline.
// L’API `evaluate` les écrase toutes en valeur par défaut ; `try_evaluate` les expose.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("opérande manquant pour '{0}'")]
    OperandesManquants(char),

    #[error("expression invalide ({0} valeurs restantes)")]
    PileInvalide(usize),

    #[error("résultat indéfini pour '{0}'")]
    Indefini(char),
}
