//! Hand-trimmed samples of the three data sources.
//!
//! Each fixture keeps the exact field names and shapes of the real source
//! so the parsers are exercised against realistic documents, just with a
//! handful of rows.

/// Excerpt of the cartography GeoJSON file
/// (`fr-esr-cartographie_formations_parcoursup.geojson`): two 2023 sites
/// and one 2022 site.
pub const CARTO_SAMPLE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "etab_nom": "Université Claude Bernard Lyon 1",
                "etab_uai": "0691774D",
                "annee": "2023",
                "nm": "BUT Informatique"
            },
            "geometry": {"type": "Point", "coordinates": [4.8655, 45.7797]}
        },
        {
            "type": "Feature",
            "properties": {
                "etab_nom": "Lycée Louis-le-Grand",
                "etab_uai": "0750655D",
                "annee": "2023",
                "nm": "CPGE S"
            },
            "geometry": {"type": "Point", "coordinates": [2.3442, 48.8479]}
        },
        {
            "type": "Feature",
            "properties": {
                "etab_nom": "Lycée Turgot",
                "etab_uai": "0750647V",
                "annee": "2022",
                "nm": "DCG"
            },
            "geometry": {"type": "Point", "coordinates": [2.3590, 48.8665]}
        }
    ]
}"#;

/// Excerpt of the specialty-pairs table
/// (`fr-esr-parcoursup-enseignements-de-specialite-bacheliers-generaux-2.json`).
pub const SPECIALTIES_SAMPLE: &str = r#"[
    {
        "formation": "DCG",
        "annee_du_bac": 2021,
        "doublette": ["Mathématiques", "SES"],
        "voeux": 120,
        "propositions_d_admissions": 40
    },
    {
        "formation": "DCG",
        "annee_du_bac": 2021,
        "doublette": ["Mathématiques", "Histoire-Géographie"],
        "voeux": 50,
        "propositions_d_admissions": 10
    },
    {
        "formation": "DCG",
        "annee_du_bac": 2022,
        "doublette": ["Mathématiques", "SES"],
        "voeux": 130,
        "propositions_d_admissions": 45
    },
    {
        "formation": "CPGE S",
        "annee_du_bac": 2021,
        "doublette": ["Mathématiques", "Physique-Chimie"],
        "voeux": 300,
        "propositions_d_admissions": 90
    },
    {
        "formation": "CPGE S",
        "annee_du_bac": 2022,
        "doublette": ["Mathématiques", "NSI"],
        "voeux": 280,
        "propositions_d_admissions": 85
    }
]"#;

/// Excerpt of an explore-API response for
/// `fr-esr-parcoursup/records?where=session LIKE "2023" AND cod_uai LIKE ...`,
/// two programs for one institution. The second record leaves most counts
/// out to exercise the defaults.
pub const PARCOURSUP_API_SAMPLE: &str = r#"{
    "total_count": 2,
    "results": [
        {
            "cod_uai": "0691774D",
            "g_ea_lib_vx": "Université Claude Bernard Lyon 1",
            "dep": "69",
            "dep_lib": "Rhône",
            "acad_mies": "Lyon",
            "session": 2023,
            "region_etab_aff": "Auvergne-Rhône-Alpes",
            "ville_etab": "Villeurbanne",
            "lib_for_voe_ins": "BUT - Informatique",
            "form_lib_voe_acc": "BUT Informatique",
            "select_form": "formation sélective",
            "capa_fin": 120,
            "voe_tot": 1500,
            "voe_tot_f": 300,
            "nb_voe_pp_bg": 900,
            "nb_voe_pp_bt": 400,
            "nb_voe_pp_bp": 100,
            "nb_voe_pp_at": 100,
            "prop_tot_bg": 200,
            "prop_tot_bt": 80,
            "prop_tot_bp": 10,
            "prop_tot_at": 10,
            "acc_tot": 120,
            "acc_tot_f": 25,
            "acc_bg": 90,
            "acc_bt": 25,
            "acc_bp": 3,
            "acc_at": 2,
            "acc_mention_nonrenseignee": 1,
            "acc_sansmention": 10,
            "acc_ab": 40,
            "acc_b": 45,
            "acc_tb": 20,
            "acc_tbf": 4,
            "ran_grp1": 450,
            "lien_form_psup": "https://dossier.parcoursup.fr/Candidats/public/fiches/afficherFicheFormation?g_ta_cod=1"
        },
        {
            "cod_uai": "0691774D",
            "g_ea_lib_vx": "Université Claude Bernard Lyon 1",
            "session": 2023,
            "lib_for_voe_ins": "Licence - Informatique",
            "form_lib_voe_acc": "Licence Informatique"
        }
    ]
}"#;

/// An explore-API response with no matching records.
pub const PARCOURSUP_API_EMPTY: &str = r#"{"total_count": 0, "results": []}"#;

#[cfg(test)]
mod tests {
    #[test]
    fn fixtures_are_valid_json() {
        for doc in [
            super::CARTO_SAMPLE,
            super::SPECIALTIES_SAMPLE,
            super::PARCOURSUP_API_SAMPLE,
            super::PARCOURSUP_API_EMPTY,
        ] {
            serde_json::from_str::<serde_json::Value>(doc).unwrap();
        }
    }
}
