// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - ErreurAnalyse    : jetons + shunting-yard
// - ErreurEvaluation : pile RPN
// - ErreurCalcul     : pipeline complet (enveloppe les deux)
//
// L’UI écrase tout en un seul "Error" ; ici les genres restent distincts.

use thiserror::Error;

/// Erreurs détectées avant l’évaluation (lecture du texte, parenthèses).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurAnalyse {
    /// Caractère non reconnu par le découpage en jetons.
    #[error("caractère inattendu '{caractere}' en position {position}")]
    Lexicale { position: usize, caractere: char },

    /// Parenthèses non appariées (ouvrante ou fermante orpheline).
    #[error("parenthèses non appariées")]
    Structurelle,
}

/// Erreurs levées pendant la réduction de la suite RPN.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    #[error("opérandes insuffisants pour '{0}'")]
    Operandes(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("symbole inconnu: {0}")]
    SymboleInconnu(String),

    /// La pile ne contient pas exactement une valeur en fin de parcours.
    #[error("expression invalide (pile finale de taille {0})")]
    Invariant(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Analyse(#[from] ErreurAnalyse),

    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),
}

/// Genre d’erreur, sans charge utile (tests + journaux).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lexicale,
    Structurelle,
    Operandes,
    Arithmetique,
    SymboleInconnu,
    Invariant,
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::Analyse(ErreurAnalyse::Lexicale { .. }) => GenreErreur::Lexicale,
            ErreurCalcul::Analyse(ErreurAnalyse::Structurelle) => GenreErreur::Structurelle,
            ErreurCalcul::Evaluation(ErreurEvaluation::Operandes(_)) => GenreErreur::Operandes,
            ErreurCalcul::Evaluation(ErreurEvaluation::DivisionParZero) => {
                GenreErreur::Arithmetique
            }
            ErreurCalcul::Evaluation(ErreurEvaluation::SymboleInconnu(_)) => {
                GenreErreur::SymboleInconnu
            }
            ErreurCalcul::Evaluation(ErreurEvaluation::Invariant(_)) => GenreErreur::Invariant,
        }
    }
}
