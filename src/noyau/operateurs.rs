// src/noyau/operateurs.rs
//
// Table des opérateurs (statique, lecture seule).
// - 6 binaires : + - * / % ^
// - 1 unaire   : moins unaire, noté `u` (symbole interne, jamais tapé par l’utilisateur)
//
// Règle de précédence : plus grand = lie plus fort.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// L’ordre des variantes suit l’ordre de `TABLE` (indexée par `self as usize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Moins,
    Plus,
    Divise,
    Fois,
    Modulo,
    Puissance,
    MoinsUnaire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descripteur {
    pub operateur: Operateur,
    pub symbole: char,
    pub precedence: u8,
    pub arite: usize,
    pub associativite: Associativite,
}

/// Symbole interne du moins unaire.
pub const SYMBOLE_UNAIRE: char = 'u';

static TABLE: [Descripteur; 7] = [
    Descripteur {
        operateur: Operateur::Moins,
        symbole: '-',
        precedence: 2,
        arite: 2,
        associativite: Associativite::Gauche,
    },
    Descripteur {
        operateur: Operateur::Plus,
        symbole: '+',
        precedence: 2,
        arite: 2,
        associativite: Associativite::Gauche,
    },
    Descripteur {
        operateur: Operateur::Divise,
        symbole: '/',
        precedence: 3,
        arite: 2,
        associativite: Associativite::Gauche,
    },
    Descripteur {
        operateur: Operateur::Fois,
        symbole: '*',
        precedence: 3,
        arite: 2,
        associativite: Associativite::Gauche,
    },
    Descripteur {
        operateur: Operateur::Modulo,
        symbole: '%',
        precedence: 3,
        arite: 2,
        associativite: Associativite::Gauche,
    },
    Descripteur {
        operateur: Operateur::Puissance,
        symbole: '^',
        precedence: 4,
        arite: 2,
        associativite: Associativite::Droite,
    },
    // NOTE: associatif à gauche (et non à droite) : "--3" ne s’évalue donc pas.
    Descripteur {
        operateur: Operateur::MoinsUnaire,
        symbole: SYMBOLE_UNAIRE,
        precedence: 4,
        arite: 1,
        associativite: Associativite::Gauche,
    },
];

impl Operateur {
    pub fn descripteur(self) -> &'static Descripteur {
        &TABLE[self as usize]
    }

    pub fn symbole(self) -> char {
        self.descripteur().symbole
    }

    /// Recherche dans les 7 symboles (y compris `u`).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        TABLE.iter().find(|d| d.symbole == c).map(|d| d.operateur)
    }

    /// Opérateurs reconnus au clavier par le tokenizer (`u` exclu).
    pub fn depuis_saisie(c: char) -> Option<Self> {
        if c == SYMBOLE_UNAIRE {
            return None;
        }
        Self::depuis_symbole(c)
    }

    /// Faut-il sortir `sommet` de la pile avant d’y poser `self` ?
    pub fn doit_depiler(self, sommet: Operateur) -> bool {
        let nouveau = self.descripteur();
        let haut = sommet.descripteur();
        match nouveau.associativite {
            Associativite::Gauche => nouveau.precedence <= haut.precedence,
            Associativite::Droite => nouveau.precedence < haut.precedence,
        }
    }
}
