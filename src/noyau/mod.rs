//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation + multiplication implicite
//! - rpn.rs       : shunting-yard (infixe -> postfix)
//! - eval.rs      : pile RPN + pipeline complet
//! - fonctions.rs : tables constantes / fonctions unaires
//! - trig.rs      : mode d’angle DEG / RAD
//! - erreur.rs    : genres d’erreurs
//! - format.rs    : affichage court du résultat

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_avec_demarche, eval_expression};
pub use format::format_court;
pub use trig::ModeAngle;
