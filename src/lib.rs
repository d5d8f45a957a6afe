//! Calculatrice vive — évaluateur d’expressions infixes “au fil de la frappe”.
//!
//! `+ - * / % ^`, moins unaire, parenthèses ; résultat en `i32`, `i64`, `f32` ou `f64`.
//! Une entrée incomplète ou invalide ne provoque jamais d’erreur : on obtient la valeur
//! par défaut du type.

pub mod noyau;

pub use noyau::{evaluate, evaluate_with_steps, try_evaluate, ErreurEval, Nombre, TypeNumerique};
