// src/noyau/fonctions.rs
//
// Tables statiques en lecture seule :
// - constantes nommées (pi, π, e)
// - fonctions unaires (sin, cos, ..., neg)
//
// Ajouter une fonction = une ligne dans FONCTIONS + un bras dans `appliquer`.
// Le parseur n’est pas concerné.

use std::f64::consts::{E, PI};

use super::trig::ModeAngle;

const CONSTANTES: &[(&str, f64)] = &[("pi", PI), ("π", PI), ("e", E)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log,
    Abs,
    Neg,
}

const FONCTIONS: &[(&str, Fonction)] = &[
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("sqrt", Fonction::Sqrt),
    ("ln", Fonction::Ln),
    ("log", Fonction::Log),
    ("abs", Fonction::Abs),
    ("neg", Fonction::Neg),
];

/// Valeur d’une constante nommée (insensible à la casse).
pub fn constante(nom: &str) -> Option<f64> {
    CONSTANTES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(nom))
        .map(|&(_, v)| v)
}

/// Fonction unaire connue sous ce nom (insensible à la casse).
pub fn fonction(nom: &str) -> Option<Fonction> {
    FONCTIONS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(nom))
        .map(|&(_, f)| f)
}

impl Fonction {
    /// Applique la fonction.
    /// Le mode d’angle n’entoure que la famille trig (directe et inverse).
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            Fonction::Sin => mode.vers_radians(x).sin(),
            Fonction::Cos => mode.vers_radians(x).cos(),
            Fonction::Tan => mode.vers_radians(x).tan(),
            Fonction::Asin => mode.depuis_radians(x.asin()),
            Fonction::Acos => mode.depuis_radians(x.acos()),
            Fonction::Atan => mode.depuis_radians(x.atan()),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Abs => x.abs(),
            Fonction::Neg => -x,
        }
    }
}
