// src/noyau/unaire.rs
//
// Passe “moins unaire” : réécrit les '-' qui sont des négations en `u`.
//
// Règle (comportement figé, voir tests) :
// - '-' en tête => unaire
// - sinon, '-' précédé d’un opérateur OU d’une parenthèse (ouvrante comme fermante) => unaire
// - '-' précédé d’un littéral => binaire
// - le dernier jeton n’est jamais réécrit (sauf s’il est aussi le premier)
//
// Conséquence : "(2)-1" donne "( 2 ) u 1", qui ne s’évalue pas.

use super::jetons::Jeton;
use super::operateurs::Operateur;

const MOINS: Jeton = Jeton::Op(Operateur::Moins);
const UNAIRE: Jeton = Jeton::Op(Operateur::MoinsUnaire);

pub fn marquer_unaires(jetons: &mut [Jeton]) {
    if jetons.first() == Some(&MOINS) {
        jetons[0] = UNAIRE;
    }

    for i in 1..jetons.len().saturating_sub(1) {
        if jetons[i] != MOINS {
            continue;
        }
        if !matches!(jetons[i - 1], Jeton::Nombre(_)) {
            jetons[i] = UNAIRE;
        }
    }
}
