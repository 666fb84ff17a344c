//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64
//!
//! Chaque phase rend un `Result` ; la première erreur coupe la suite.
//! Aucun état conservé entre deux appels : le mode d’angle arrive par valeur.

use tracing::debug;

use super::erreur::{ErreurCalcul, ErreurEvaluation};
use super::fonctions::fonction;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::rpn::to_rpn;
use super::trig::ModeAngle;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression texte.
pub fn eval_expression(expr_str: &str, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    eval_avec_demarche(expr_str, mode).map(|(v, _)| v)
}

/// Comme `eval_expression`, plus la démarche (jetons + RPN) pour l’affichage.
pub fn eval_avec_demarche(
    expr_str: &str,
    mode: ModeAngle,
) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!(entree = expr_str, rpn = %d.rpn, ?mode, "évaluation");

    // 3) Pile
    let v = evaluate(&rpn, mode)?;
    Ok((v, d))
}

/// Réduit une suite RPN à une seule valeur.
///
/// - `%` : pourcent de calculatrice, unaire (x -> x/100), même en position binaire
/// - `mod` : reste flottant a mod b (signe de a)
/// - Ident : fonction unaire de la table ; nom inconnu => SymboleInconnu
pub fn evaluate(postfix: &[Tok], mode: ModeAngle) -> Result<f64, ErreurEvaluation> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match tok {
            Tok::Num(v) => pile.push(*v),

            Tok::Op(Op::Percent) => {
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Operandes("%".into()))?;
                pile.push(a / 100.0);
            }

            Tok::Op(op) => {
                let (Some(b), Some(a)) = (pile.pop(), pile.pop()) else {
                    return Err(ErreurEvaluation::Operandes(op.symbole().into()));
                };
                pile.push(appliquer_binaire(*op, a, b)?);
            }

            Tok::Ident(nom) => {
                let f =
                    fonction(nom).ok_or_else(|| ErreurEvaluation::SymboleInconnu(nom.clone()))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Operandes(nom.clone()))?;
                pile.push(f.appliquer(a, mode));
            }

            Tok::LPar => return Err(ErreurEvaluation::SymboleInconnu("(".into())),
            Tok::RPar => return Err(ErreurEvaluation::SymboleInconnu(")".into())),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEvaluation::Invariant(pile.len())),
    }
}

fn appliquer_binaire(op: Op, a: f64, b: f64) -> Result<f64, ErreurEvaluation> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash | Op::Mod if b == 0.0 => Err(ErreurEvaluation::DivisionParZero),
        Op::Slash => Ok(a / b),
        Op::Mod => Ok(a % b),
        Op::Caret => Ok(a.powf(b)),
        // traité en unaire dans `evaluate` ; ne devrait pas arriver ici
        Op::Percent => Err(ErreurEvaluation::SymboleInconnu(op.symbole().to_string())),
    }
}
