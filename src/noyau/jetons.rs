// src/noyau/jetons.rs

use tracing::trace;

use super::erreur::ErreurAnalyse;
use super::fonctions::constante;

/// Opérateurs binaires (et le pourcent, unaire à l’évaluation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // %
    Mod,     // mot-clé "mod"
}

impl Op {
    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            '%' => Some(Op::Percent),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Caret => "^",
            Op::Percent => "%",
            Op::Mod => "mod",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 2,
            Op::Star | Op::Slash | Op::Percent | Op::Mod => 3,
            Op::Caret => 4,
        }
    }

    /// Seul `^` groupe à droite : 2^3^2 = 2^(3^2).
    pub fn est_associatif_droite(self) -> bool {
        matches!(self, Op::Caret)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,

    // Fonction ou variable : décidé par le parseur (lookahead sur '(')
    // puis par l’évaluateur (table des fonctions).
    Ident(String),
}

/// Jeton brut du balayage. `nomme` = nombre issu d’une constante (pi, e).
struct Brut {
    tok: Tok,
    nomme: bool,
}

impl Brut {
    fn simple(tok: Tok) -> Self {
        Self { tok, nomme: false }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : 3, .5, 3.14 (un seul point, au moins un chiffre après)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]*
/// - pi / π / e (constantes, insensibles à la casse) -> Num
/// - mod (insensible à la casse) -> Op::Mod
/// - opérateurs + - * / ^ % et parenthèses ( )
///
/// Puis insère les multiplications implicites : 2(3), 2pi, (1)(2), x y ...
/// Tout autre caractère fait échouer l’ensemble (pas de résultat partiel).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurAnalyse> {
    let chars: Vec<char> = s.chars().collect();
    let mut bruts: Vec<Brut> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : chiffres, ou '.' suivi d’un chiffre
        let suivant_chiffre = chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && suivant_chiffre) {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let litteral: String = chars[start..i].iter().collect();
            let v = litteral
                .parse::<f64>()
                .map_err(|_| ErreurAnalyse::Lexicale {
                    position: start,
                    caractere: c,
                })?;
            bruts.push(Brut::simple(Tok::Num(v)));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            bruts.push(resoudre_ident(mot));
            continue;
        }

        if c == 'π' {
            bruts.push(resoudre_ident(c.to_string()));
            i += 1;
            continue;
        }

        match c {
            '(' => bruts.push(Brut::simple(Tok::LPar)),
            ')' => bruts.push(Brut::simple(Tok::RPar)),
            _ => match Op::depuis_char(c) {
                Some(op) => bruts.push(Brut::simple(Tok::Op(op))),
                None => {
                    return Err(ErreurAnalyse::Lexicale {
                        position: i,
                        caractere: c,
                    })
                }
            },
        }
        i += 1;
    }

    let out = inserer_multiplications(bruts);
    trace!(jetons = %format_tokens(&out), "tokenize");
    Ok(out)
}

/// Constante -> Num, "mod" -> opérateur, le reste -> Ident (en minuscules).
fn resoudre_ident(mot: String) -> Brut {
    if let Some(v) = constante(&mot) {
        return Brut {
            tok: Tok::Num(v),
            nomme: true,
        };
    }
    if mot.eq_ignore_ascii_case("mod") {
        return Brut::simple(Tok::Op(Op::Mod));
    }
    Brut::simple(Tok::Ident(mot.to_lowercase()))
}

/// Passe de multiplication implicite : n’insère que des Op::Star entre voisins,
/// sans jamais réordonner.
fn inserer_multiplications(bruts: Vec<Brut>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(bruts.len());

    for k in 0..bruts.len() {
        if k > 0 && multiplication_implicite(&bruts[k - 1], &bruts[k]) {
            out.push(Tok::Op(Op::Star));
        }
        out.push(bruts[k].tok.clone());
    }

    out
}

fn multiplication_implicite(prev: &Brut, cur: &Brut) -> bool {
    // Ident suivi de '(' = appel de fonction, pas un facteur.
    let gauche = match &prev.tok {
        Tok::Num(_) | Tok::RPar => true,
        Tok::Ident(_) => !matches!(cur.tok, Tok::LPar),
        _ => false,
    };

    // Un littéral ne devient facteur qu’après ')' : "2 3" reste une erreur.
    let droite = match &cur.tok {
        Tok::LPar | Tok::Ident(_) => true,
        Tok::Num(_) => cur.nomme || matches!(prev.tok, Tok::RPar),
        _ => false,
    };

    gauche && droite
}

/// Format utilitaire (démarche / journaux) : liste de jetons en texte.
/// Le rendu se re-tokenize sans nouvelle insertion.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Ident(name) => name.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
