//! Client for the public fr-esr-parcoursup admission-records API.
//!
//! One GET per institution and session; the explore API answers with
//! `{"total_count": n, "results": [...]}` where every record mixes
//! institution-level and program-level fields. Absent fields default
//! (empty string / zero) and failed calls are not retried.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use atlas_common::{
    AtlasError, AtlasResult, InstitutionSummary, ProgramAdmission, Session, Uai,
};

/// Institution summary plus its per-program admission records.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InstitutionRecords {
    pub institution: InstitutionSummary,
    pub programs: Vec<ProgramAdmission>,
}

/// HTTP client for the admission-records API.
pub struct ParcoursupClient {
    client: reqwest::Client,
    base_url: String,
}

impl ParcoursupClient {
    pub fn new(base_url: impl Into<String>) -> AtlasResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AtlasError::InternalError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch every admission record of one institution for one session.
    #[instrument(skip(self), fields(uai = %uai, session = %session))]
    pub async fn fetch_institution(
        &self,
        uai: &Uai,
        session: Session,
    ) -> AtlasResult<InstitutionRecords> {
        let url = format!(
            "{}/catalog/datasets/fr-esr-parcoursup/records",
            self.base_url
        );
        let filter = format!(
            "session LIKE \"{}\" AND cod_uai LIKE \"{}\"",
            session,
            uai.as_str()
        );

        let response = self
            .client
            .get(&url)
            .query(&[("where", filter.as_str()), ("limit", "100")])
            .send()
            .await
            .map_err(|e| AtlasError::UpstreamRequest(e.to_string()))?
            .error_for_status()
            .map_err(|e| AtlasError::UpstreamRequest(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| AtlasError::UpstreamRequest(e.to_string()))?;

        let records = parse_response(&body)?
            .ok_or_else(|| AtlasError::InstitutionNotFound(uai.to_string()))?;
        debug!(programs = records.programs.len(), "Fetched admission records");
        Ok(records)
    }
}

// === Raw explore-API payload ===

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    results: Vec<RawRecord>,
}

/// One explore-API record. Counts arrive as JSON numbers but are
/// occasionally null; strings may be absent entirely.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    // Institution-level fields.
    #[serde(default)]
    cod_uai: Option<String>,
    #[serde(default)]
    g_ea_lib_vx: Option<String>,
    #[serde(default)]
    session: Option<Value>,
    #[serde(default)]
    acad_mies: Option<String>,
    #[serde(default)]
    region_etab_aff: Option<String>,
    #[serde(default)]
    ville_etab: Option<String>,
    #[serde(default)]
    dep: Option<String>,
    #[serde(default)]
    dep_lib: Option<String>,

    // Program-level fields.
    #[serde(default)]
    lib_for_voe_ins: Option<String>,
    #[serde(default)]
    form_lib_voe_acc: Option<String>,
    #[serde(default)]
    select_form: Option<String>,
    #[serde(default)]
    capa_fin: Option<f64>,
    #[serde(default)]
    voe_tot: Option<f64>,
    #[serde(default)]
    voe_tot_f: Option<f64>,
    #[serde(default)]
    nb_voe_pp_bg: Option<f64>,
    #[serde(default)]
    nb_voe_pp_bt: Option<f64>,
    #[serde(default)]
    nb_voe_pp_bp: Option<f64>,
    #[serde(default)]
    nb_voe_pp_at: Option<f64>,
    #[serde(default)]
    prop_tot_bg: Option<f64>,
    #[serde(default)]
    prop_tot_bt: Option<f64>,
    #[serde(default)]
    prop_tot_bp: Option<f64>,
    #[serde(default)]
    prop_tot_at: Option<f64>,
    #[serde(default)]
    acc_tot: Option<f64>,
    #[serde(default)]
    acc_tot_f: Option<f64>,
    #[serde(default)]
    acc_bg: Option<f64>,
    #[serde(default)]
    acc_bt: Option<f64>,
    #[serde(default)]
    acc_bp: Option<f64>,
    #[serde(default)]
    acc_at: Option<f64>,
    #[serde(default)]
    acc_mention_nonrenseignee: Option<f64>,
    #[serde(default)]
    acc_sansmention: Option<f64>,
    #[serde(default)]
    acc_ab: Option<f64>,
    #[serde(default)]
    acc_b: Option<f64>,
    #[serde(default)]
    acc_tb: Option<f64>,
    #[serde(default)]
    acc_tbf: Option<f64>,
    #[serde(default)]
    ran_grp1: Option<f64>,
    #[serde(default)]
    lien_form_psup: Option<String>,
}

fn count(v: Option<f64>) -> u64 {
    v.map(|x| x.max(0.0) as u64).unwrap_or(0)
}

fn text(v: Option<String>) -> String {
    v.unwrap_or_default()
}

fn session_text(v: &Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl RawRecord {
    fn into_program(self) -> ProgramAdmission {
        ProgramAdmission {
            intitule: text(self.lib_for_voe_ins),
            intitule_alt: text(self.form_lib_voe_acc),
            selectivite: text(self.select_form),
            capacite: count(self.capa_fin),
            voeux_total: count(self.voe_tot),
            voeux_total_femmes: count(self.voe_tot_f),
            candidats_bg: count(self.nb_voe_pp_bg),
            candidats_bt: count(self.nb_voe_pp_bt),
            candidats_bp: count(self.nb_voe_pp_bp),
            candidats_autre: count(self.nb_voe_pp_at),
            propositions_bg: count(self.prop_tot_bg),
            propositions_bt: count(self.prop_tot_bt),
            propositions_bp: count(self.prop_tot_bp),
            propositions_autre: count(self.prop_tot_at),
            acceptations_total: count(self.acc_tot),
            acceptations_total_femmes: count(self.acc_tot_f),
            admis_bg: count(self.acc_bg),
            admis_bt: count(self.acc_bt),
            admis_bp: count(self.acc_bp),
            admis_autre: count(self.acc_at),
            admis_mention_inconnue: count(self.acc_mention_nonrenseignee),
            admis_sans_mention: count(self.acc_sansmention),
            admis_mention_ab: count(self.acc_ab),
            admis_mention_b: count(self.acc_b),
            admis_mention_tb: count(self.acc_tb),
            admis_mention_tbf: count(self.acc_tbf),
            rang_dernier_admis: count(self.ran_grp1),
            lien_parcoursup: text(self.lien_form_psup),
        }
    }
}

/// Parse an explore-API response body.
///
/// Returns None when the response carries no record (unknown institution
/// or session). The institution summary comes from the first record.
pub fn parse_response(body: &str) -> AtlasResult<Option<InstitutionRecords>> {
    let raw: RawResponse = serde_json::from_str(body)
        .map_err(|e| AtlasError::UpstreamPayload(e.to_string()))?;

    if raw.total_count == 0 || raw.results.is_empty() {
        return Ok(None);
    }

    let first = &raw.results[0];
    let institution = InstitutionSummary {
        etab_uai: Uai::new(text(first.cod_uai.clone())),
        nom_etab: text(first.g_ea_lib_vx.clone()),
        session: session_text(&first.session),
        academie: text(first.acad_mies.clone()),
        region: text(first.region_etab_aff.clone()),
        ville: text(first.ville_etab.clone()),
        dep: text(first.dep.clone()),
        dep_lib: text(first.dep_lib.clone()),
    };

    let programs = raw
        .results
        .into_iter()
        .map(RawRecord::into_program)
        .collect();

    Ok(Some(InstitutionRecords {
        institution,
        programs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::{PARCOURSUP_API_EMPTY, PARCOURSUP_API_SAMPLE};

    #[test]
    fn parses_institution_summary_from_first_record() {
        let records = parse_response(PARCOURSUP_API_SAMPLE).unwrap().unwrap();
        let inst = &records.institution;
        assert_eq!(inst.etab_uai.as_str(), "0691774D");
        assert_eq!(inst.nom_etab, "Université Claude Bernard Lyon 1");
        assert_eq!(inst.session, "2023");
        assert_eq!(inst.academie, "Lyon");
        assert_eq!(inst.dep_lib, "Rhône");
    }

    #[test]
    fn parses_program_counts() {
        let records = parse_response(PARCOURSUP_API_SAMPLE).unwrap().unwrap();
        assert_eq!(records.programs.len(), 2);
        let p = &records.programs[0];
        assert_eq!(p.intitule, "BUT - Informatique");
        assert_eq!(p.intitule_alt, "BUT Informatique");
        assert_eq!(p.capacite, 120);
        assert_eq!(p.candidats_bg, 900);
        assert_eq!(p.propositions_bt, 80);
        assert_eq!(p.admis_mention_b, 45);
        assert_eq!(p.rang_dernier_admis, 450);
    }

    #[test]
    fn absent_fields_default() {
        let records = parse_response(PARCOURSUP_API_SAMPLE).unwrap().unwrap();
        let p = &records.programs[1];
        assert_eq!(p.intitule, "Licence - Informatique");
        assert_eq!(p.selectivite, "");
        assert_eq!(p.capacite, 0);
        assert_eq!(p.voeux_total, 0);
        assert_eq!(p.lien_parcoursup, "");
    }

    #[test]
    fn empty_result_set_is_none() {
        assert!(parse_response(PARCOURSUP_API_EMPTY).unwrap().is_none());
    }

    #[test]
    fn malformed_payload_is_an_upstream_error() {
        let err = parse_response("not json").unwrap_err();
        assert_eq!(err.code(), "upstream_payload");
    }
}
