// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix), sans rien évaluer
//
// Règles:
// - Ident(name):
//    - suivi de '(' => marqueur de fonction, empilé, sorti après sa ')'
//    - sinon        => variable nue, sortie directe (l’évaluateur la rejettera)
// - Opérateurs : précédence 2 (+ -), 3 (* / % mod), 4 (^) ; seul ^ groupe à droite
//
// NOTE:
// - Lookahead par index sur une tranche immuable (pas de curseur partagé).
// - Une fonction n’est liée qu’à la fermeture de sa parenthèse : son argument
//   est donc entièrement réduit avant elle en RPN.

use tracing::trace;

use super::erreur::ErreurAnalyse;
use super::jetons::{format_tokens, Op, Tok};

/// Faut-il sortir l’opérateur du sommet avant d’empiler `op` ?
fn doit_depiler(op: Op, sommet: Op) -> bool {
    if op.est_associatif_droite() {
        op.precedence() < sommet.precedence()
    } else {
        op.precedence() <= sommet.precedence()
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(90), Slash, Num(2), RPar]
///   rpn:    [Num(90), Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurAnalyse> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Ident(_) => {
                if matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    ops.push(tok.clone());
                } else {
                    out.push(tok.clone());
                }
            }

            Tok::Op(op) => {
                // on ne traverse ni '(' ni un marqueur de fonction
                while let Some(Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(*op, *sommet) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok.clone());
            }

            Tok::LPar => ops.push(Tok::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => parenthèse orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(ErreurAnalyse::Structurelle),
                    }
                }

                // si une fonction est au sommet, elle se lie à son argument complet
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(t) = ops.pop() {
        if matches!(t, Tok::LPar | Tok::RPar) {
            return Err(ErreurAnalyse::Structurelle);
        }
        out.push(t);
    }

    trace!(rpn = %format_tokens(&out), "to_rpn");
    Ok(out)
}
