//! Pie chart of bac honors among admitted students.

use atlas_common::ProgramAdmission;

use crate::figure::{Figure, Layout, Margin, Trace};

/// Honors distribution of the admitted students for one program.
pub fn mentions_pie(program: &ProgramAdmission) -> Figure {
    let labels = vec![
        "Sans Mention".to_string(),
        "Mention AB".to_string(),
        "Mention B".to_string(),
        "Mention TB".to_string(),
        "Mention TBF".to_string(),
    ];
    let values = vec![
        program.admis_sans_mention,
        program.admis_mention_ab,
        program.admis_mention_b,
        program.admis_mention_tb,
        program.admis_mention_tbf,
    ];

    let mut layout =
        Layout::titled("Répartition des mentions au bac des admis pour la formation");
    layout.margin = Some(Margin {
        l: 40,
        r: 40,
        t: 40,
        b: 40,
    });

    Figure::new(vec![Trace::Pie { labels, values }], layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_aligns_labels_and_values() {
        let program = ProgramAdmission {
            admis_sans_mention: 5,
            admis_mention_ab: 10,
            admis_mention_b: 7,
            admis_mention_tb: 3,
            admis_mention_tbf: 1,
            ..Default::default()
        };
        let fig = mentions_pie(&program);
        let json = serde_json::to_value(&fig).unwrap();

        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["labels"][0], "Sans Mention");
        assert_eq!(json["data"][0]["values"][1], 10);
        assert_eq!(json["data"][0]["labels"][4], "Mention TBF");
        assert_eq!(json["data"][0]["values"][4], 1);
    }

    #[test]
    fn unknown_honors_band_is_not_charted() {
        // "mention inconnue" is deliberately left out of the pie.
        let program = ProgramAdmission {
            admis_mention_inconnue: 99,
            ..Default::default()
        };
        let fig = mentions_pie(&program);
        let json = serde_json::to_string(&fig).unwrap();
        assert!(!json.contains("99"));
    }
}
