//! Heatmap of admission proposals per specialty pair.

use atlas_datasets::SpecialtyPivot;

use crate::figure::{Figure, Layout, Margin, Trace};

/// Percentage heatmap for one formation and bac year.
///
/// Cells come pre-normalized from the pivot (percent of the largest
/// cell), so the color axis is fixed to 0..=100.
pub fn specialty_heatmap(pivot: &SpecialtyPivot) -> Figure {
    let mut layout = Layout::titled(format!(
        "Répartition des propositions d'admission ({} - {})",
        pivot.formation, pivot.year
    ))
    .with_axis_titles("Spécialité 1", "Spécialité 2");
    layout.height = Some(700);
    layout.margin = Some(Margin {
        l: 150,
        r: 50,
        t: 100,
        b: 150,
    });

    Figure::new(
        vec![Trace::Heatmap {
            x: pivot.x.clone(),
            y: pivot.y.clone(),
            z: pivot.z.clone(),
            colorscale: "Portland",
            zmin: 0.0,
            zmax: 100.0,
        }],
        layout,
    )
}
