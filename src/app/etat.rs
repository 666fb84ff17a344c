//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, mode d’angle, ANS, démarche)
//! et offrir les actions des touches sans logique de dessin.
//!
//! Contrats :
//! - Le noyau reçoit une copie du texte et du mode ; il ne touche jamais à l’état.
//! - En cas d’échec, l’affichage montre "Error" et rien d’autre ne change.

use tracing::{debug, warn};

use crate::noyau::{eval_avec_demarche, format_court, ModeAngle};

/// Texte affiché quand l’évaluation échoue (tous genres confondus).
pub const TEXTE_ERREUR: &str = "Error";

/// Motifs retirés d’un bloc par la touche DEL.
const MOTIFS_EFFACES: &[&str] = &[
    "sqrt(", "asin(", "acos(", "atan(", "sin(", "cos(", "tan(", "log(", "ln(", "neg(", " mod ",
];

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée / sortie (même tampon, comme l’écran d’une calculatrice) ---
    pub affichage: String,

    // --- paramètres ---
    pub mode: ModeAngle,

    // --- mémoire ---
    pub ans: Option<f64>,
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_mode(ModeAngle::default())
    }
}

impl AppCalc {
    pub fn avec_mode(mode: ModeAngle) -> Self {
        Self {
            affichage: String::new(),
            mode,
            ans: None,
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Édition du tampon ------------------------ */

    /// Ajoute du texte ; un "0" seul ou un "Error" affiché est remplacé.
    /// Un espace sépare deux identifiants qui se colleraient ("e" puis "sin(").
    pub fn ajouter(&mut self, s: &str) {
        if self.affichage == "0" || self.affichage == TEXTE_ERREUR {
            self.affichage.clear();
        }
        if finit_par_identifiant(&self.affichage) && s.starts_with(est_car_identifiant) {
            self.affichage.push(' ');
        }
        self.affichage.push_str(s);
        self.focus_entree = true;
    }

    /// C : efface l’affichage.
    pub fn clear_entree(&mut self) {
        self.affichage.clear();
        self.focus_entree = true;
    }

    /// DEL : retire un motif connu d’un coup ("sin(", " mod "...), sinon un caractère.
    pub fn backspace(&mut self) {
        if self.affichage == TEXTE_ERREUR {
            self.affichage.clear();
            return;
        }

        for &pat in MOTIFS_EFFACES {
            if let Some(reste) = self.affichage.strip_suffix(pat) {
                let n = reste.len();
                self.affichage.truncate(n);
                return;
            }
        }

        self.affichage.pop();
    }

    /// ± : enveloppe dans neg(...) ou retire l’enveloppe (pas de moins unaire au noyau).
    pub fn basculer_signe(&mut self) {
        let s = self.affichage.trim();
        if s.is_empty() || s == "0" || s == TEXTE_ERREUR {
            return;
        }

        // "-5" tapé au clavier : on retire simplement le signe
        if let Some(r) = s.strip_prefix('-').filter(|r| r.parse::<f64>().is_ok()) {
            self.affichage = r.to_string();
            self.focus_entree = true;
            return;
        }

        let nouveau = match s.strip_prefix("neg(").and_then(|r| r.strip_suffix(')')) {
            // neg(a)+neg(b) : l’enveloppe extérieure n’est pas unique, on ré-enveloppe
            Some(interieur) if parentheses_equilibrees(interieur) => interieur.to_string(),
            _ => format!("neg({s})"),
        };
        self.affichage = nouveau;
        self.focus_entree = true;
    }

    /// ANS : insère le dernier résultat (rien si aucun, ou s’il n’est pas fini).
    pub fn inserer_ans(&mut self) {
        if let Some(t) = self.ans.and_then(texte_relisible) {
            self.ajouter(&t);
        }
    }

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.basculer();
        self.focus_entree = true;
    }

    /* ------------------------ "=" ------------------------ */

    /// Évalue l’affichage via le noyau. Vide => rien.
    pub fn evaluer(&mut self) {
        let expr = self.affichage.trim().to_string();
        if expr.is_empty() {
            return;
        }

        // instantané du mode : passé par valeur
        let mode = self.mode;
        match eval_avec_demarche(&expr, mode) {
            Ok((v, d)) => {
                debug!(%expr, valeur = v, "résultat");
                self.affichage = texte_relisible(v).unwrap_or_else(|| format_court(v));
                self.ans = Some(v);
                self.demarche = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                };
            }
            Err(e) => {
                warn!(%expr, genre = ?e.genre(), "évaluation échouée: {e}");
                self.affichage = TEXTE_ERREUR.to_string();
                self.demarche = Demarche::default();
            }
        }
        self.focus_entree = true;
    }

    /* ------------------------ Touches du pavé ------------------------ */

    /// Traduit un libellé de touche en action (même table que le pavé de vue.rs).
    pub fn appuyer(&mut self, touche: &str) {
        match touche {
            "C" => self.clear_entree(),
            "DEL" => self.backspace(),
            "=" => self.evaluer(),
            "ANS" => self.inserer_ans(),
            "±" => self.basculer_signe(),
            "π" => self.ajouter("π"),
            "x²" => self.ajouter("^2"),
            "x^y" => self.ajouter("^"),
            "mod" => self.ajouter(" mod "),
            "1/x" => self.ajouter("(1/"),
            "√" => self.ajouter("sqrt("),
            "sin" | "cos" | "tan" | "log" | "ln" => self.ajouter(&format!("{touche}(")),
            "÷" => self.ajouter("/"),
            "×" => self.ajouter("*"),
            // chiffres, point, + - ( ) % e
            autre => self.ajouter(autre),
        }
    }
}

/// Résultat réécrit pour être relu par le noyau : pas de moins unaire, donc `neg(7)`.
/// None pour NaN / ±∞, que le tokenizer refuse.
fn texte_relisible(v: f64) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    let t = format_court(v.abs());
    if v < 0.0 && t != "0" {
        Some(format!("neg({t})"))
    } else {
        Some(t)
    }
}

fn est_car_identifiant(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Vrai si le tampon se termine par un identifiant ("2e", "pi"), pas par un nombre seul.
fn finit_par_identifiant(s: &str) -> bool {
    s.chars()
        .rev()
        .take_while(|&c| est_car_identifiant(c))
        .any(|c| c.is_ascii_alphabetic() || c == '_')
}

fn parentheses_equilibrees(s: &str) -> bool {
    let mut prof: i32 = 0;
    for c in s.chars() {
        match c {
            '(' => prof += 1,
            ')' => {
                prof -= 1;
                if prof < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    prof == 0
}
