//! Nested sunburst of candidates, proposals and admissions per bac type.

use atlas_common::ProgramAdmission;

use crate::figure::{Figure, Layout, Marker, Trace};

/// Fixed palette, one shade set per bac type ring.
const COLORS: &[&str] = &[
    "#1B4965", "#0081A7", "#00AFB9", "#62B6CB", "#BEE9E8", // BG
    "#FF7B00", "#FF9500", "#FFA200", "#FFB700", "#FF8800", // BT
    "#55753C", "#96BE8C", "#ACECA1", "#C9F2C7", "#629460", // BP
    "#6E0D0D", "#F73E3E", "#A81111", "#FF7777", "#DE1021", // Autres
];

struct BacGroup {
    label: &'static str,
    candidats: u64,
    propositions: u64,
    admis: u64,
}

/// Candidates → proposals → admissions rings for one program.
///
/// Derived leaves: "Refusé" (candidates minus proposals) and "Vœux non
/// acceptés" (proposals minus accepted), both floored at zero so the data
/// stays chartable when the upstream counts disagree.
pub fn admissions_sunburst(program: &ProgramAdmission) -> Figure {
    let groups = [
        BacGroup {
            label: "BG",
            candidats: program.candidats_bg,
            propositions: program.propositions_bg,
            admis: program.admis_bg,
        },
        BacGroup {
            label: "BT",
            candidats: program.candidats_bt,
            propositions: program.propositions_bt,
            admis: program.admis_bt,
        },
        BacGroup {
            label: "BP",
            candidats: program.candidats_bp,
            propositions: program.propositions_bp,
            admis: program.admis_bp,
        },
        BacGroup {
            label: "Autres",
            candidats: program.candidats_autre,
            propositions: program.propositions_autre,
            admis: program.admis_autre,
        },
    ];

    let mut labels = Vec::with_capacity(groups.len() * 5);
    let mut parents = Vec::with_capacity(groups.len() * 5);
    let mut values = Vec::with_capacity(groups.len() * 5);

    for g in &groups {
        let candidats_label = format!("Candidats {}", g.label);
        let propositions_label = format!("Propositions {}", g.label);

        let refuses = g.candidats.saturating_sub(g.propositions);
        let non_acceptes = g.propositions.saturating_sub(g.admis);

        labels.push(candidats_label.clone());
        parents.push(String::new());
        values.push(g.candidats);

        labels.push(propositions_label.clone());
        parents.push(candidats_label.clone());
        values.push(g.propositions);

        labels.push(format!("Admis {}", g.label));
        parents.push(propositions_label.clone());
        values.push(g.admis);

        labels.push(format!("Vœux non acceptés {}", g.label));
        parents.push(propositions_label);
        values.push(non_acceptes);

        labels.push(format!("Refusé {}", g.label));
        parents.push(candidats_label);
        values.push(refuses);
    }

    Figure::new(
        vec![Trace::Sunburst {
            labels,
            parents,
            values,
            branchvalues: "total",
            marker: Some(Marker {
                colors: COLORS.to_vec(),
            }),
        }],
        Layout::titled(
            "Répartition des candidats, propositions et admis par type de bac",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> ProgramAdmission {
        ProgramAdmission {
            candidats_bg: 100,
            propositions_bg: 60,
            admis_bg: 40,
            candidats_bt: 50,
            propositions_bt: 20,
            admis_bt: 10,
            ..Default::default()
        }
    }

    #[test]
    fn sunburst_has_twenty_aligned_nodes() {
        let fig = admissions_sunburst(&program());
        let Trace::Sunburst {
            labels,
            parents,
            values,
            ..
        } = &fig.data[0]
        else {
            panic!("expected sunburst trace");
        };
        assert_eq!(labels.len(), 20);
        assert_eq!(parents.len(), 20);
        assert_eq!(values.len(), 20);
    }

    #[test]
    fn derived_counts_are_consistent() {
        let fig = admissions_sunburst(&program());
        let Trace::Sunburst { labels, values, .. } = &fig.data[0] else {
            panic!("expected sunburst trace");
        };
        let get = |name: &str| {
            let i = labels.iter().position(|l| l == name).unwrap();
            values[i]
        };
        assert_eq!(get("Refusé BG"), 40); // 100 - 60
        assert_eq!(get("Vœux non acceptés BG"), 20); // 60 - 40
        assert_eq!(get("Refusé BT"), 30);
        assert_eq!(get("Admis BT"), 10);
    }

    #[test]
    fn derived_counts_floor_at_zero() {
        let p = ProgramAdmission {
            candidats_bg: 10,
            propositions_bg: 30, // more proposals than candidates
            admis_bg: 40,        // more admitted than proposed
            ..Default::default()
        };
        let fig = admissions_sunburst(&p);
        let Trace::Sunburst { labels, values, .. } = &fig.data[0] else {
            panic!("expected sunburst trace");
        };
        let get = |name: &str| {
            let i = labels.iter().position(|l| l == name).unwrap();
            values[i]
        };
        assert_eq!(get("Refusé BG"), 0);
        assert_eq!(get("Vœux non acceptés BG"), 0);
    }

    #[test]
    fn root_nodes_have_empty_parent() {
        let fig = admissions_sunburst(&program());
        let Trace::Sunburst { labels, parents, .. } = &fig.data[0] else {
            panic!("expected sunburst trace");
        };
        for (label, parent) in labels.iter().zip(parents) {
            if label.starts_with("Candidats") {
                assert_eq!(parent, "");
            }
        }
    }

    #[test]
    fn palette_covers_every_node() {
        let fig = admissions_sunburst(&program());
        let Trace::Sunburst { labels, marker, .. } = &fig.data[0] else {
            panic!("expected sunburst trace");
        };
        let marker = marker.as_ref().unwrap();
        assert_eq!(marker.colors.len(), labels.len());
    }
}
