//! Grouped bar chart: wishes vs admission proposals per specialty pair.

use atlas_common::Session;
use atlas_datasets::ComparisonRow;

use crate::figure::{Figure, Layout, Trace};

/// Horizontal grouped bars, one group per specialty pair.
pub fn comparison_bar(rows: &[ComparisonRow], year: Session) -> Figure {
    let couples: Vec<String> = rows.iter().map(|r| r.couple.clone()).collect();
    let voeux: Vec<u64> = rows.iter().map(|r| r.voeux).collect();
    let propositions: Vec<u64> = rows.iter().map(|r| r.propositions).collect();

    let mut layout = Layout::titled(format!(
        "Comparaison des voeux et propositions pour l'année {}",
        year
    ))
    .with_axis_titles("Nombre de candidats", "Duo de spécialités");
    layout.barmode = Some("group");

    Figure::new(
        vec![
            Trace::Bar {
                name: "Voeux".to_string(),
                x: voeux,
                y: couples.clone(),
                orientation: "h",
            },
            Trace::Bar {
                name: "Propositions d'admissions".to_string(),
                x: propositions,
                y: couples,
                orientation: "h",
            },
        ],
        layout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ComparisonRow> {
        vec![
            ComparisonRow {
                couple: "Mathématiques, SES".into(),
                voeux: 120,
                propositions: 40,
            },
            ComparisonRow {
                couple: "Mathématiques, Physique-Chimie".into(),
                voeux: 80,
                propositions: 30,
            },
        ]
    }

    #[test]
    fn two_traces_share_the_couple_axis() {
        let fig = comparison_bar(&rows(), Session(2021));
        assert_eq!(fig.data.len(), 2);
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["name"], "Voeux");
        assert_eq!(json["data"][1]["name"], "Propositions d'admissions");
        assert_eq!(json["data"][0]["y"], json["data"][1]["y"]);
        assert_eq!(json["data"][0]["x"][0], 120);
        assert_eq!(json["data"][1]["x"][1], 30);
    }

    #[test]
    fn layout_is_grouped_and_titled_with_year() {
        let fig = comparison_bar(&rows(), Session(2021));
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["layout"]["barmode"], "group");
        assert_eq!(
            json["layout"]["title"]["text"],
            "Comparaison des voeux et propositions pour l'année 2021"
        );
        assert_eq!(
            json["layout"]["xaxis"]["title"]["text"],
            "Nombre de candidats"
        );
    }

    #[test]
    fn empty_rows_build_an_empty_chart() {
        let fig = comparison_bar(&[], Session(2021));
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["x"], serde_json::json!([]));
    }
}
