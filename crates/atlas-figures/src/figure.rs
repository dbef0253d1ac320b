//! The Plotly figure document model.
//!
//! Only the subset of the Plotly schema the dashboard uses is modeled;
//! everything serializes with the exact property names the client library
//! expects.

use serde::Serialize;

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }
}

/// A single trace. The `type` tag selects the Plotly trace kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
    Sunburst {
        labels: Vec<String>,
        parents: Vec<String>,
        values: Vec<u64>,
        branchvalues: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Heatmap {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        colorscale: &'static str,
        zmin: f64,
        zmax: f64,
    },
    Bar {
        name: String,
        x: Vec<u64>,
        y: Vec<String>,
        orientation: &'static str,
    },
    /// Vertical bars over categorical x values, one solid color per trace.
    #[serde(rename = "bar")]
    CategoryBar {
        name: String,
        x: Vec<String>,
        y: Vec<u64>,
        marker: BarMarker,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarMarker {
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    pub fn titled(text: impl Into<String>) -> Self {
        Layout {
            title: Some(Title {
                text: text.into(),
                font: Some(Font { size: 12 }),
            }),
            ..Default::default()
        }
    }

    pub fn with_axis_titles(
        mut self,
        x: impl Into<String>,
        y: impl Into<String>,
    ) -> Self {
        self.xaxis = Some(Axis {
            title: AxisTitle { text: x.into() },
        });
        self.yaxis = Some(Axis {
            title: AxisTitle { text: y.into() },
        });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_type_tag_is_lowercase() {
        let trace = Trace::Pie {
            labels: vec!["A".into()],
            values: vec![1],
        };
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "pie");
    }

    #[test]
    fn empty_layout_serializes_to_empty_object() {
        let json = serde_json::to_value(Layout::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn titled_layout_carries_font_size() {
        let json = serde_json::to_value(Layout::titled("Titre")).unwrap();
        assert_eq!(json["title"]["text"], "Titre");
        assert_eq!(json["title"]["font"]["size"], 12);
    }

    #[test]
    fn category_bar_serializes_as_a_bar_trace() {
        let trace = Trace::CategoryBar {
            name: "Femmes".into(),
            x: vec!["Candidatures".into(), "Admissions".into()],
            y: vec![300, 25],
            marker: BarMarker { color: "#FF69B4" },
        };
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["x"][0], "Candidatures");
        assert_eq!(json["y"][1], 25);
        assert_eq!(json["marker"]["color"], "#FF69B4");
    }

    #[test]
    fn figure_has_data_and_layout_keys() {
        let fig = Figure::new(vec![], Layout::default());
        let json = serde_json::to_value(&fig).unwrap();
        assert!(json.get("data").is_some());
        assert!(json.get("layout").is_some());
    }
}
