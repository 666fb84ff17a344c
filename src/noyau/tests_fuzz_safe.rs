//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - contre-vérification par un évaluateur de référence indépendant
//!   (descente récursive, sans jetons ni RPN)

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::jetons::{format_tokens, tokenize};
use super::{eval_expression, ModeAngle};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

/// Grammaire : expr := terme (('+'|'-') terme)* ; terme := facteur (('*'|'/') facteur)* ;
/// facteur := entier | '(' expr ')'.
/// None = division par zéro rencontrée (tous les sous-termes sont évalués).
struct Reference<'a> {
    octets: &'a [u8],
    pos: usize,
    div_zero: bool,
}

impl<'a> Reference<'a> {
    fn evaluer(s: &'a str) -> Option<f64> {
        let mut r = Reference {
            octets: s.as_bytes(),
            pos: 0,
            div_zero: false,
        };
        let v = r.expr();
        assert_eq!(r.pos, r.octets.len(), "référence: reste non lu dans {s:?}");
        if r.div_zero {
            None
        } else {
            Some(v)
        }
    }

    fn voir(&self) -> Option<u8> {
        self.octets.get(self.pos).copied()
    }

    fn expr(&mut self) -> f64 {
        let mut acc = self.terme();
        while let Some(c @ (b'+' | b'-')) = self.voir() {
            self.pos += 1;
            let d = self.terme();
            acc = if c == b'+' { acc + d } else { acc - d };
        }
        acc
    }

    fn terme(&mut self) -> f64 {
        let mut acc = self.facteur();
        while let Some(c @ (b'*' | b'/')) = self.voir() {
            self.pos += 1;
            let d = self.facteur();
            if c == b'*' {
                acc *= d;
            } else {
                if d == 0.0 {
                    self.div_zero = true;
                }
                acc /= d;
            }
        }
        acc
    }

    fn facteur(&mut self) -> f64 {
        if self.voir() == Some(b'(') {
            self.pos += 1;
            let v = self.expr();
            assert_eq!(self.voir(), Some(b')'), "référence: ')' attendue");
            self.pos += 1;
            return v;
        }
        let start = self.pos;
        while self.voir().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.octets[start..self.pos])
            .ok()
            .and_then(|t| t.parse::<f64>().ok())
            .unwrap_or_else(|| panic!("référence: entier attendu en {start}"))
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_entier(rng: &mut Rng) -> String {
    // 0 inclus : la division par zéro doit apparaître de temps en temps
    format!("{}", rng.pick(13))
}

fn gen_arith(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_entier(rng);
    }

    let op = ["+", "-", "*", "/"][rng.pick(4) as usize];
    match rng.pick(5) {
        0 => gen_entier(rng),
        1 => format!("({})", gen_arith(rng, depth - 1)),
        _ => format!(
            "{}{op}{}",
            gen_arith(rng, depth - 1),
            gen_arith(rng, depth - 1)
        ),
    }
}

/// Fragments libres : constantes, identifiants, appels, parenthèses.
fn gen_fragments(rng: &mut Rng) -> String {
    const FRAGMENTS: &[&str] = &[
        "2", "3.5", ".25", "pi", "e", "x", "sin(", "sqrt(", "(", ")", "+", "*", "^", "%",
        " mod ", "PI", "π",
    ];
    let n = 1 + rng.pick(10);
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(FRAGMENTS[rng.pick(FRAGMENTS.len() as u32) as usize]);
        if rng.pick(3) == 0 {
            s.push(' ');
        }
    }
    s
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_arithmetique_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_arith(&mut rng, 5);
        let attendu = Reference::evaluer(&expr);

        match (eval_expression(&expr, ModeAngle::Degres), attendu) {
            (Ok(v), Some(r)) => {
                let tol = 1e-9 * r.abs().max(1.0);
                assert!(
                    (v - r).abs() <= tol || (v.is_nan() && r.is_nan()),
                    "expr={expr:?} noyau={v} référence={r}"
                );
                seen_ok += 1;
            }
            (Err(e), None) => {
                assert_eq!(e.genre(), GenreErreur::Arithmetique, "expr={expr:?}");
                seen_div0 += 1;
            }
            (obtenu, attendu) => {
                panic!("désaccord: expr={expr:?} noyau={obtenu:?} référence={attendu:?}")
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_multiplication_implicite_idempotente() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut vus = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let s = gen_fragments(&mut rng);
        let Ok(une) = tokenize(&s) else {
            continue;
        };
        let rendu = format_tokens(&une);
        let deux = tokenize(&rendu)
            .unwrap_or_else(|e| panic!("rendu non relisible: {rendu:?} ({e})"));
        assert_eq!(une, deux, "entrée={s:?} rendu={rendu:?}");
        vus += 1;
    }

    assert!(vus > 100, "trop peu d’entrées tokenisées: {vus}");
}

#[test]
fn fuzz_safe_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);
        let s = gen_fragments(&mut rng);
        // seul compte : un résultat ou une erreur classée, jamais de panique
        let _ = eval_expression(&s, ModeAngle::Radians);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let v = eval_expression(&expr, ModeAngle::Degres).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}
