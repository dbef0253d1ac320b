//! Admission record types shared between the upstream client and the
//! figure builders.
//!
//! Field meanings follow the fr-esr-parcoursup dataset: counts are split
//! by bac type (BG general, BT technological, BP professional, "autre"
//! for everything else) and by honors band for the admitted students.

use serde::{Deserialize, Serialize};

use crate::types::Uai;

/// Institution-level summary, taken from the first admission record of a
/// session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionSummary {
    pub etab_uai: Uai,
    pub nom_etab: String,
    pub session: String,
    pub academie: String,
    pub region: String,
    pub ville: String,
    pub dep: String,
    pub dep_lib: String,
}

/// Admission figures for one program of an institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramAdmission {
    /// Program label as listed on the wish form.
    pub intitule: String,
    /// Alternate wording of the program label (acceptance form).
    pub intitule_alt: String,
    pub selectivite: String,
    pub capacite: u64,

    // Candidates (main phase), total and per bac type.
    pub voeux_total: u64,
    pub voeux_total_femmes: u64,
    pub candidats_bg: u64,
    pub candidats_bt: u64,
    pub candidats_bp: u64,
    pub candidats_autre: u64,

    // Admission proposals per bac type.
    pub propositions_bg: u64,
    pub propositions_bt: u64,
    pub propositions_bp: u64,
    pub propositions_autre: u64,

    // Accepted proposals.
    pub acceptations_total: u64,
    pub acceptations_total_femmes: u64,
    pub admis_bg: u64,
    pub admis_bt: u64,
    pub admis_bp: u64,
    pub admis_autre: u64,

    // Honors distribution among the admitted.
    pub admis_mention_inconnue: u64,
    pub admis_sans_mention: u64,
    pub admis_mention_ab: u64,
    pub admis_mention_b: u64,
    pub admis_mention_tb: u64,
    pub admis_mention_tbf: u64,

    pub rang_dernier_admis: u64,
    pub lien_parcoursup: String,
}
