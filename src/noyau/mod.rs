//! Noyau — évaluateur infixe générique
//!
//! Organisation interne :
//! - operateurs.rs : table statique (symbole, précédence, arité, associativité)
//! - nombre.rs     : arithmétique fermée i32 / i64 / f32 / f64 + choix du type
//! - jetons.rs     : préformatage + tokenisation
//! - unaire.rs     : marquage des moins unaires
//! - rpn.rs        : shunting-yard + évaluation RPN
//! - eval.rs       : pipeline complet + démarche
//! - erreur.rs     : erreurs internes (jamais remontées par `evaluate`)

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nombre;
pub mod operateurs;
pub mod rpn;
pub mod unaire;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, evaluate_with_steps, try_evaluate, Demarche, Evaluation};
pub use nombre::{Nombre, TypeNumerique};
