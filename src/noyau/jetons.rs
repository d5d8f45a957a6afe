// src/noyau/jetons.rs
//
// Préformatage + tokenisation.
// - préformatage : trim + retrait d’UN opérateur final (saisie en cours : "5+" => "5")
// - tokenisation : opérateurs/parenthèses isolés, tout le reste accumulé en littéral
//   (espaces ignorés partout, y compris au milieu d’un littéral : "1 2" => "12")

use std::fmt;

use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Littéral brut, pas encore lu (la lecture dépend du type cible).
    Nombre(String),
    Op(Operateur),
    ParOuvrante,
    ParFermante,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(txt) => f.write_str(txt),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
            Jeton::ParOuvrante => f.write_str("("),
            Jeton::ParFermante => f.write_str(")"),
        }
    }
}

/// Trim + retrait d’un seul opérateur final (les 7 symboles, `u` compris).
pub fn preformat(s: &str) -> &str {
    let s = s.trim();
    match s.chars().last() {
        Some(c) if Operateur::depuis_symbole(c).is_some() => &s[..s.len() - c.len_utf8()],
        _ => s,
    }
}

/// Découpe une chaîne préformatée en jetons.
///
/// Ne peut pas échouer : tout caractère inconnu finit dans un littéral,
/// et c’est la lecture numérique (plus tard) qui le refusera.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let mut litteral = String::new();

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        let jeton = match c {
            '(' => Jeton::ParOuvrante,
            ')' => Jeton::ParFermante,
            _ => match Operateur::depuis_saisie(c) {
                Some(op) => Jeton::Op(op),
                None => {
                    litteral.push(c);
                    continue;
                }
            },
        };

        if !litteral.is_empty() {
            out.push(Jeton::Nombre(std::mem::take(&mut litteral)));
        }
        out.push(jeton);
    }

    if !litteral.is_empty() {
        out.push(Jeton::Nombre(litteral));
    }

    out
}

/// Format utilitaire (démarche) : jetons séparés par un espace.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
