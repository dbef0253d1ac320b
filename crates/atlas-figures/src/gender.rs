//! Female/male split of candidatures and admissions.

use serde::Serialize;

use atlas_common::ProgramAdmission;

use crate::figure::{BarMarker, Figure, Layout, Margin, Trace};

const FEMMES_COLOR: &str = "#FF69B4";
const HOMMES_COLOR: &str = "#4169E1";

/// The two gender figures for one program: the candidatures/admissions
/// sunburst and the grouped bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct GenderFigures {
    pub sunburst: Figure,
    pub bars: Figure,
}

/// Female/male breakdown of candidatures and admissions.
///
/// The dataset only reports totals and female counts; the male counts are
/// derived (total minus female) and floored at zero so the figures stay
/// chartable when the upstream counts disagree.
pub fn gender_figures(program: &ProgramAdmission) -> GenderFigures {
    let candidates = program.voeux_total;
    let candidates_f = program.voeux_total_femmes;
    let candidates_h = candidates.saturating_sub(candidates_f);
    let admis = program.acceptations_total;
    let admis_f = program.acceptations_total_femmes;
    let admis_h = admis.saturating_sub(admis_f);

    let mut sunburst_layout =
        Layout::titled("Répartition femmes/hommes des candidatures et admissions");
    sunburst_layout.height = Some(600);
    sunburst_layout.margin = Some(Margin {
        l: 30,
        r: 30,
        t: 30,
        b: 30,
    });

    let sunburst = Figure::new(
        vec![Trace::Sunburst {
            labels: vec![
                "Total".to_string(),
                "Femmes".to_string(),
                "Hommes".to_string(),
                "Femmes Admis".to_string(),
                "Hommes Admis".to_string(),
            ],
            parents: vec![
                String::new(),
                "Total".to_string(),
                "Total".to_string(),
                "Femmes".to_string(),
                "Hommes".to_string(),
            ],
            values: vec![candidates, candidates_f, candidates_h, admis_f, admis_h],
            branchvalues: "total",
            marker: None,
        }],
        sunburst_layout,
    );

    let categories = vec!["Candidatures".to_string(), "Admissions".to_string()];
    let mut bars_layout = Layout::titled("Évolution du ratio femmes/hommes");
    bars_layout.barmode = Some("group");
    bars_layout.height = Some(400);
    bars_layout.margin = Some(Margin {
        l: 30,
        r: 30,
        t: 30,
        b: 30,
    });

    let bars = Figure::new(
        vec![
            Trace::CategoryBar {
                name: "Femmes".to_string(),
                x: categories.clone(),
                y: vec![candidates_f, admis_f],
                marker: BarMarker {
                    color: FEMMES_COLOR,
                },
            },
            Trace::CategoryBar {
                name: "Hommes".to_string(),
                x: categories,
                y: vec![candidates_h, admis_h],
                marker: BarMarker {
                    color: HOMMES_COLOR,
                },
            },
        ],
        bars_layout,
    );

    GenderFigures { sunburst, bars }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> ProgramAdmission {
        ProgramAdmission {
            voeux_total: 1500,
            voeux_total_femmes: 300,
            acceptations_total: 120,
            acceptations_total_femmes: 25,
            ..Default::default()
        }
    }

    #[test]
    fn sunburst_derives_male_counts() {
        let figs = gender_figures(&program());
        let Trace::Sunburst {
            labels,
            parents,
            values,
            ..
        } = &figs.sunburst.data[0]
        else {
            panic!("expected sunburst trace");
        };
        assert_eq!(
            labels,
            &[
                "Total".to_string(),
                "Femmes".to_string(),
                "Hommes".to_string(),
                "Femmes Admis".to_string(),
                "Hommes Admis".to_string()
            ]
        );
        assert_eq!(
            parents,
            &[
                String::new(),
                "Total".to_string(),
                "Total".to_string(),
                "Femmes".to_string(),
                "Hommes".to_string()
            ]
        );
        assert_eq!(values, &[1500, 300, 1200, 25, 95]);
    }

    #[test]
    fn derived_male_counts_floor_at_zero() {
        let p = ProgramAdmission {
            voeux_total: 10,
            voeux_total_femmes: 30, // more women than the reported total
            acceptations_total: 5,
            acceptations_total_femmes: 9,
            ..Default::default()
        };
        let figs = gender_figures(&p);
        let Trace::Sunburst { values, .. } = &figs.sunburst.data[0] else {
            panic!("expected sunburst trace");
        };
        assert_eq!(values[2], 0); // Hommes
        assert_eq!(values[4], 0); // Hommes Admis
    }

    #[test]
    fn bars_are_grouped_with_fixed_colors() {
        let figs = gender_figures(&program());
        let json = serde_json::to_value(&figs.bars).unwrap();
        assert_eq!(json["layout"]["barmode"], "group");
        assert_eq!(json["data"][0]["name"], "Femmes");
        assert_eq!(json["data"][0]["marker"]["color"], "#FF69B4");
        assert_eq!(json["data"][1]["marker"]["color"], "#4169E1");
        assert_eq!(json["data"][0]["x"][1], "Admissions");
        assert_eq!(json["data"][0]["y"][0], 300);
        assert_eq!(json["data"][1]["y"][1], 95);
    }

    #[test]
    fn document_carries_both_figures() {
        let json = serde_json::to_value(gender_figures(&program())).unwrap();
        assert_eq!(json["sunburst"]["data"][0]["type"], "sunburst");
        assert_eq!(json["bars"]["data"][0]["type"], "bar");
        assert_eq!(
            json["sunburst"]["layout"]["title"]["text"],
            "Répartition femmes/hommes des candidatures et admissions"
        );
        assert_eq!(
            json["bars"]["layout"]["title"]["text"],
            "Évolution du ratio femmes/hommes"
        );
    }
}
