// src/noyau/nombre.rs
//
// Arithmétique générique sur un ensemble FERMÉ de types : i32, i64, f32, f64.
//
// Contrats :
// - Aucune opération ne panique : entiers en arithmétique “wrapping”,
//   division / modulo par zéro => None.
// - Flottants : tout résultat NaN ou infini => None (indéfini).
// - Puissance : calculée en f64 puis reconvertie (troncature pour les entiers,
//   None si hors bornes).

use std::fmt;
use std::str::FromStr;

use num_traits::{Float, NumCast, ToPrimitive};

/// Nombre manipulable par l’évaluateur.
///
/// `Default` fournit la valeur “silencieuse” rendue en cas d’échec.
pub trait Nombre:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Nom court du type (affichage).
    const NOM: &'static str;

    fn oppose(self) -> Option<Self>;
    fn somme(self, autre: Self) -> Option<Self>;
    fn difference(self, autre: Self) -> Option<Self>;
    fn produit(self, autre: Self) -> Option<Self>;
    fn quotient(self, autre: Self) -> Option<Self>;
    fn reste(self, autre: Self) -> Option<Self>;
    fn puissance(self, autre: Self) -> Option<Self>;

    /// Une valeur lue ou calculée est-elle acceptable ?
    fn est_valide(self) -> bool {
        true
    }

    /// Lecture tolérante : espaces ignorés aux bords, ',' accepté comme séparateur décimal.
    fn lire(texte: &str) -> Option<Self> {
        let normalise = texte.trim().replace(',', ".");
        normalise
            .parse::<Self>()
            .ok()
            .filter(|v| v.est_valide())
    }
}

fn puissance_via_f64<T: ToPrimitive + NumCast>(base: T, exposant: T) -> Option<T> {
    let p = base.to_f64()?.powf(exposant.to_f64()?);
    num_traits::cast(p)
}

fn fini<T: Float>(x: T) -> Option<T> {
    if x.is_finite() {
        Some(x)
    } else {
        None
    }
}

macro_rules! nombre_entier {
    ($t:ty, $nom:expr) => {
        impl Nombre for $t {
            const NOM: &'static str = $nom;

            fn oppose(self) -> Option<Self> {
                Some(self.wrapping_neg())
            }
            fn somme(self, autre: Self) -> Option<Self> {
                Some(self.wrapping_add(autre))
            }
            fn difference(self, autre: Self) -> Option<Self> {
                Some(self.wrapping_sub(autre))
            }
            fn produit(self, autre: Self) -> Option<Self> {
                Some(self.wrapping_mul(autre))
            }
            fn quotient(self, autre: Self) -> Option<Self> {
                // None pour /0 et pour MIN / -1
                self.checked_div(autre)
            }
            fn reste(self, autre: Self) -> Option<Self> {
                self.checked_rem(autre)
            }
            fn puissance(self, autre: Self) -> Option<Self> {
                puissance_via_f64(self, autre)
            }
        }
    };
}

macro_rules! nombre_flottant {
    ($t:ty, $nom:expr) => {
        impl Nombre for $t {
            const NOM: &'static str = $nom;

            fn oppose(self) -> Option<Self> {
                fini(-self)
            }
            fn somme(self, autre: Self) -> Option<Self> {
                fini(self + autre)
            }
            fn difference(self, autre: Self) -> Option<Self> {
                fini(self - autre)
            }
            fn produit(self, autre: Self) -> Option<Self> {
                fini(self * autre)
            }
            fn quotient(self, autre: Self) -> Option<Self> {
                fini(self / autre)
            }
            fn reste(self, autre: Self) -> Option<Self> {
                fini(self % autre)
            }
            fn puissance(self, autre: Self) -> Option<Self> {
                puissance_via_f64(self, autre).and_then(fini)
            }
            fn est_valide(self) -> bool {
                self.is_finite()
            }
        }
    };
}

nombre_entier!(i32, "i32");
nombre_entier!(i64, "i64");
nombre_flottant!(f32, "f32");
nombre_flottant!(f64, "f64");

/// Choix du type à l’exécution (sélecteur de l’interface).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeNumerique {
    I32,
    I64,
    F32,
    #[default]
    F64,
}

impl TypeNumerique {
    pub const TOUS: [TypeNumerique; 4] = [
        TypeNumerique::I32,
        TypeNumerique::I64,
        TypeNumerique::F32,
        TypeNumerique::F64,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            TypeNumerique::I32 => i32::NOM,
            TypeNumerique::I64 => i64::NOM,
            TypeNumerique::F32 => f32::NOM,
            TypeNumerique::F64 => f64::NOM,
        }
    }
}

impl fmt::Display for TypeNumerique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}
