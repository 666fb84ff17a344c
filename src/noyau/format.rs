// src/noyau/format.rs
//
// Affichage court d’un résultat : au plus 10 décimales, sans zéros inutiles.
// (responsabilité de l’hôte ; vit ici pour être partagé par l’UI et la CLI)

const DECIMALES_MAX: usize = 10;

/// 1/3 -> "0.3333333333", 2.0 -> "2", -0.0 -> "0".
pub fn format_court(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let brut = format!("{:.*}", DECIMALES_MAX, v);
    let s = brut.trim_end_matches('0').trim_end_matches('.');

    // arrondi vers zéro (ex: -1e-12) : pas de "-0"
    if s == "-0" {
        return "0".to_string();
    }
    s.to_string()
}
