// src/cli.rs
//
// Options ligne de commande (natif seulement).

use clap::Parser;

use crate::noyau::{eval_expression, format_court, ErreurCalcul, ModeAngle};

#[derive(Parser, Debug)]
#[command(name = "calculatrice_rpn", version, about = "Calculatrice (shunting-yard + RPN)")]
pub struct Args {
    /// Évalue une expression, affiche le résultat et quitte (sans fenêtre)
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Démarre en radians (degrés par défaut)
    #[arg(long)]
    pub radians: bool,
}

impl Args {
    pub fn mode(&self) -> ModeAngle {
        if self.radians {
            ModeAngle::Radians
        } else {
            ModeAngle::Degres
        }
    }
}

/// Évaluation sans UI : texte formaté comme à l’écran.
pub fn evaluer_ligne(expr: &str, mode: ModeAngle) -> Result<String, ErreurCalcul> {
    eval_expression(expr, mode).map(format_court)
}
