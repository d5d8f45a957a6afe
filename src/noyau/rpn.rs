// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton (moins unaires déjà marqués) en RPN (postfix)
// - Puis évaluer la RPN avec une pile de valeurs du type cible
//
// Règles de dépilement : voir `Operateur::doit_depiler`
// (gauche : <= ; droite : < strict).

use log::trace;

use super::erreur::ErreurEval;
use super::jetons::Jeton;
use super::nombre::Nombre;
use super::operateurs::Operateur;

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::ParOuvrante => ops.push(jeton),

            Jeton::ParFermante => loop {
                match ops.pop() {
                    Some(Jeton::ParOuvrante) => break,
                    Some(op) => out.push(op),
                    None => return Err(ErreurEval::ParentheseNonOuverte),
                }
            },

            Jeton::Op(nouveau) => {
                // dépile tant que le sommet est un opérateur qui doit sortir
                // (une '(' bloque toujours)
                while let Some(Jeton::Op(sommet)) = ops.last() {
                    if !nouveau.doit_depiler(*sommet) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Jeton::ParOuvrante {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN dans le type `T`.
///
/// Un littéral illisible fait échouer toute l’évaluation : lu plus tôt ou plus tard,
/// il n’aurait jamais produit de résultat.
pub fn eval_rpn<T: Nombre>(rpn: &[Jeton]) -> Result<T, ErreurEval> {
    let mut pile: Vec<T> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(txt) => {
                let v = T::lire(txt).ok_or_else(|| ErreurEval::NombreInvalide(txt.clone()))?;
                pile.push(v);
            }

            Jeton::Op(op) => {
                let d = op.descripteur();
                if pile.len() < d.arite {
                    return Err(ErreurEval::OperandesManquants(d.symbole));
                }
                // split_off garde l’ordre gauche -> droite
                let operandes = pile.split_off(pile.len() - d.arite);
                let v = appliquer(*op, &operandes).ok_or(ErreurEval::Indefini(d.symbole))?;
                trace!("{:?} {} => {}", operandes, d.symbole, v);
                pile.push(v);
            }

            Jeton::ParOuvrante => return Err(ErreurEval::ParentheseNonFermee),
            Jeton::ParFermante => return Err(ErreurEval::ParentheseNonOuverte),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::PileInvalide(pile.len())),
    }
}

fn appliquer<T: Nombre>(op: Operateur, operandes: &[T]) -> Option<T> {
    match (op, operandes) {
        (Operateur::MoinsUnaire, &[a]) => a.oppose(),
        (Operateur::Plus, &[a, b]) => a.somme(b),
        (Operateur::Moins, &[a, b]) => a.difference(b),
        (Operateur::Fois, &[a, b]) => a.produit(b),
        (Operateur::Divise, &[a, b]) => a.quotient(b),
        (Operateur::Modulo, &[a, b]) => a.reste(b),
        (Operateur::Puissance, &[a, b]) => a.puissance(b),
        _ => None,
    }
}
