//! Hard-coded category tables for program-label buckets.
//!
//! These mirror the official Parcoursup nomenclature for BUT specialities,
//! D.E (state diploma) tracks and CPGE streams. They change at most once a
//! year, with the national catalog.

/// BUT specialities in the "Production" group.
pub const BUT_PRODUCTION: &[&str] = &[
    "Chimie",
    "Génie biologique",
    "Génie chimique, génie des procédés",
    "Génie civil, construction durable",
    "Génie électrique et informatique industrielle",
    "Génie industriel et maintenance",
    "Génie mécanique et productique",
    "Hygiène Sécurité Environnement",
    "Informatique",
    "Mesures physiques",
    "Métiers de la transition et de l’efficacité énergétique",
    "Packaging, emballage et conditionnement",
    "Qualité, logistique industrielle et organisation",
    "Réseaux et télécommunications",
    "Science et génie des matériaux",
];

/// BUT specialities in the "Service" group.
pub const BUT_SERVICE: &[&str] = &[
    "Gestion des Entreprises et des Administrations",
    "Techniques de Commercialisation",
    "Gestion Administrative et Commerciale des Organisations",
    "Info-Com",
    "Métiers du Multimédia et de l’Internet",
    "Carrières Juridiques",
    "Carrière Sociales",
];

/// D.E tracks in the social sector.
pub const DE_SOCIAL: &[&str] = &[
    "Educateur spécialisé",
    "Educateur de jeunes enfants",
    "Assistant de service social",
];

/// D.E tracks in the health sector.
pub const DE_SANITAIRE: &[&str] = &[
    "Orthophoniste",
    "Orthoptiste",
    "Infirmier",
    "Manipulateur en électroradiologie médicale",
    "Psychomotricien",
    "Audioprothésiste",
    "Technicien de laboratoire médical",
    "Ergothérapeute",
    "Podologue",
];

/// CPGE alternate labels mapped to the short names used by the
/// specialty-pairs dataset.
pub const CPGE: &[(&str, &str)] = &[
    ("Classe préparatoire aux études supérieures", "CUPGE"),
    ("Classe préparatoire scientifique", "CPGE S"),
    ("Classe préparatoire littéraire", "CPGE L"),
    ("Classe préparatoire économique et commerciale", "CPGE ECG"),
];

/// Look up the short name for a CPGE alternate label.
pub fn cpge_short_name(alt_label: &str) -> Option<&'static str> {
    CPGE.iter()
        .find(|(long, _)| *long == alt_label)
        .map(|(_, short)| *short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpge_lookup_known_labels() {
        assert_eq!(
            cpge_short_name("Classe préparatoire scientifique"),
            Some("CPGE S")
        );
        assert_eq!(
            cpge_short_name("Classe préparatoire aux études supérieures"),
            Some("CUPGE")
        );
    }

    #[test]
    fn cpge_lookup_unknown_label() {
        assert_eq!(cpge_short_name("Classe préparatoire militaire"), None);
    }

    #[test]
    fn category_tables_are_disjoint() {
        for p in BUT_PRODUCTION {
            assert!(!BUT_SERVICE.contains(p));
        }
        for s in DE_SOCIAL {
            assert!(!DE_SANITAIRE.contains(s));
        }
    }
}
