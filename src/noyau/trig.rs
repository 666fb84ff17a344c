// src/noyau/trig.rs
//
// Mode d’angle (DEG / RAD).
// Possédé par l’hôte ; le noyau en reçoit une copie par évaluation.

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Argument de sin/cos/tan -> radians.
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * PI / 180.0,
            ModeAngle::Radians => x,
        }
    }

    /// Résultat de asin/acos/atan (radians) -> unité du mode.
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * 180.0 / PI,
            ModeAngle::Radians => x,
        }
    }

    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}
