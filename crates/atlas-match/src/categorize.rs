//! Program-label categorization against a formation catalog.

use crate::fuzzy::extract_one;
use crate::tables;

/// Number of leading characters kept for BTS labels before matching.
///
/// BTS labels in the cartography dataset carry a long site-specific suffix;
/// only the head of the label is discriminating.
const BTS_PREFIX_CHARS: usize = 15;

/// Resolve a raw program label to an entry of the specialty-pairs catalog.
///
/// `label` is the program name from the cartography dataset, `alt_label`
/// the alternate wording from the admission records. Substring markers
/// ("BTS", "BUT", "D.E", "Classe préparatoire") select a restricted
/// candidate list; otherwise the label is matched against the whole
/// catalog. Returns the best-scoring catalog entry or category name, or an
/// empty string when nothing matches.
pub fn categorize(label: &str, alt_label: &str, catalog: &[String]) -> String {
    let catalog_iter = || catalog.iter().map(String::as_str);

    if label.contains("BTS") {
        // Char-based truncation: BTS labels are accented, byte slicing
        // would split a code point.
        let prefix: String = label.chars().take(BTS_PREFIX_CHARS).collect();
        return match extract_one(&prefix, catalog_iter()) {
            Some(m) => m.value.to_string(),
            None => String::new(),
        };
    }

    if label.contains("BUT") {
        let production = extract_one(label, tables::BUT_PRODUCTION.iter().copied());
        let service = extract_one(label, tables::BUT_SERVICE.iter().copied());
        return match (production, service) {
            // Equal scores prefer Production, the fixed category order.
            (Some(p), Some(s)) if p.score >= s.score => "BUT Production".to_string(),
            (Some(_), Some(_)) => "BUT Service".to_string(),
            (Some(_), None) => "BUT Production".to_string(),
            (None, Some(_)) => "BUT Service".to_string(),
            (None, None) => String::new(),
        };
    }

    if label.contains("D.E") {
        let social = extract_one(label, tables::DE_SOCIAL.iter().copied());
        let sanitaire = extract_one(label, tables::DE_SANITAIRE.iter().copied());
        return match (social, sanitaire) {
            (Some(so), Some(sa)) if so.score >= sa.score => "D.E social".to_string(),
            (Some(_), Some(_)) => "D.E sanitaire".to_string(),
            (Some(_), None) => "D.E social".to_string(),
            (None, Some(_)) => "D.E sanitaire".to_string(),
            (None, None) => String::new(),
        };
    }

    if alt_label.contains("Classe préparatoire") {
        // Unknown CPGE wordings fall through to the plain catalog match
        // instead of failing.
        if let Some(short) = tables::cpge_short_name(alt_label) {
            return match extract_one(short, catalog_iter()) {
                Some(m) => m.value.to_string(),
                None => String::new(),
            };
        }
    }

    match extract_one(label, catalog_iter()) {
        Some(m) => m.value.to_string(),
        None => String::new(),
    }
}
