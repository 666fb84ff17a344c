//! Tests bout-en-bout : texte -> valeur (ou genre d’erreur).

use super::erreur::GenreErreur;
use super::{eval_expression, ModeAngle};

const TOL: f64 = 1e-9;

fn ok_mode(s: &str, mode: ModeAngle) -> f64 {
    eval_expression(s, mode).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

fn ok(s: &str) -> f64 {
    ok_mode(s, ModeAngle::Radians)
}

fn genre(s: &str) -> GenreErreur {
    match eval_expression(s, ModeAngle::Degres) {
        Ok(v) => panic!("attendu une erreur pour {s:?}, obtenu {v}"),
        Err(e) => e.genre(),
    }
}

fn assert_proche(a: f64, b: f64) {
    if (a - b).abs() > TOL {
        panic!("diff: A={a} B={b}");
    }
}

// --- Précédence / associativité ---

#[test]
fn precedence_de_base() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
    assert_eq!(ok("10-4-3"), 3.0);
    assert_eq!(ok("2*3^2"), 18.0);
}

#[test]
fn puissance_a_droite() {
    assert_eq!(ok("2^3^2"), 512.0);
    assert_eq!(ok("(2^3)^2"), 64.0);
}

// --- Multiplication implicite ---

#[test]
fn implicite() {
    assert_eq!(ok("2(3+4)"), 14.0);
    assert_proche(ok("2pi"), 6.283185307);
    assert_eq!(ok("(1+1)(2+2)"), 8.0);
    assert_eq!(ok("(2)3"), 6.0);
    assert_proche(ok("2sqrt(4)"), 4.0);
    assert_proche(ok("pi(2)"), 2.0 * std::f64::consts::PI);
}

// --- Pourcent de calculatrice ---

#[test]
fn pourcent_unaire() {
    assert_eq!(ok("50%"), 0.5);
    assert_eq!(ok("50%+1"), 1.5);
    assert_eq!(ok("200*10%"), 20.0);
}

/// `%` reste le pourcent même entre deux nombres : seul le 20 est divisé,
/// le 50 reste sur la pile. Comportement de calculatrice conservé, pas un modulo.
#[test]
fn pourcent_en_position_binaire_n_est_pas_un_modulo() {
    assert_eq!(genre("50%20"), GenreErreur::Invariant);
    // le vrai reste s’écrit avec mod
    assert_eq!(ok("50 mod 20"), 10.0);
}

// --- Mode d’angle ---

#[test]
fn trig_degres() {
    assert_proche(ok_mode("sin(90)", ModeAngle::Degres), 1.0);
    assert_proche(ok_mode("cos(180)", ModeAngle::Degres), -1.0);
    assert_proche(ok_mode("tan(45)", ModeAngle::Degres), 1.0);
    assert_proche(ok_mode("asin(1)", ModeAngle::Degres), 90.0);
}

#[test]
fn trig_radians() {
    assert_proche(ok_mode("sin(pi/2)", ModeAngle::Radians), 1.0);
    assert_proche(ok_mode("acos(neg(1))", ModeAngle::Radians), std::f64::consts::PI);
}

#[test]
fn mode_sans_effet_hors_trig() {
    for mode in [ModeAngle::Degres, ModeAngle::Radians] {
        assert_eq!(ok_mode("sqrt(81)+abs(neg(1))", mode), 10.0);
    }
}

// --- Erreurs classées ---

#[test]
fn division_par_zero() {
    assert_eq!(genre("5/0"), GenreErreur::Arithmetique);
    assert_eq!(genre("1/(2-2)"), GenreErreur::Arithmetique);
}

#[test]
fn parentheses_non_appariees() {
    assert_eq!(genre("(2+3"), GenreErreur::Structurelle);
    assert_eq!(genre("2+3)"), GenreErreur::Structurelle);
}

#[test]
fn fonction_inconnue() {
    assert_eq!(genre("foo(3)"), GenreErreur::SymboleInconnu);
}

#[test]
fn caractere_inconnu() {
    assert_eq!(genre("2 # 3"), GenreErreur::Lexicale);
    assert_eq!(genre("3."), GenreErreur::Lexicale);
}

#[test]
fn operandes_manquants() {
    assert_eq!(genre("2+"), GenreErreur::Operandes);
    // pas de moins unaire : neg(...) à la place
    assert_eq!(genre("-5"), GenreErreur::Operandes);
    assert_eq!(ok("neg(5)+8"), 3.0);
}

#[test]
fn pile_finale_invalide() {
    assert_eq!(genre(""), GenreErreur::Invariant);
    assert_eq!(genre("2 3"), GenreErreur::Invariant);
}

#[test]
fn espaces_et_majuscules() {
    assert_proche(ok_mode("  SIN ( 90 ) ", ModeAngle::Degres), 1.0);
    assert_eq!(ok("4 MOD 3"), 1.0);
}
