//! Specialty-pairs admission dataset.
//!
//! Source file:
//! `fr-esr-parcoursup-enseignements-de-specialite-bacheliers-generaux-2.json`.
//! One record per (formation, bac year, specialty pair): how many wishes
//! and admission proposals that pair received for that formation.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use atlas_common::Session;

use crate::error::Result;

/// One row of the specialty-pairs table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialtyRecord {
    pub formation: String,
    pub year: Session,
    pub spe1: String,
    pub spe2: String,
    pub voeux: u64,
    pub propositions: u64,
}

impl SpecialtyRecord {
    /// Display label for the pair: "spe1, spe2".
    pub fn couple(&self) -> String {
        format!("{}, {}", self.spe1, self.spe2)
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    formation: String,
    #[serde(default)]
    annee_du_bac: u16,
    #[serde(default)]
    doublette: Vec<String>,
    #[serde(default)]
    voeux: u64,
    #[serde(default)]
    propositions_d_admissions: u64,
}

/// Unique formation labels in first-occurrence order, each with the index
/// of its first record.
#[derive(Debug, Default, Clone)]
pub struct FormationIndex {
    labels: Vec<String>,
    by_label: HashMap<String, usize>,
}

impl FormationIndex {
    fn insert(&mut self, label: &str, record_index: usize) {
        if !self.by_label.contains_key(label) {
            self.by_label.insert(label.to_string(), record_index);
            self.labels.push(label.to_string());
        }
    }

    /// All formation labels, in dataset order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the first record carrying this formation label.
    pub fn first_record(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }
}

/// Wishes vs admission proposals for one specialty pair, for the grouped
/// bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub couple: String,
    pub voeux: u64,
    pub propositions: u64,
}

/// Specialty-1 × specialty-2 pivot of admission proposals, normalized to
/// percent of the largest cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialtyPivot {
    pub formation: String,
    pub year: Session,
    /// Column labels (specialty 1).
    pub x: Vec<String>,
    /// Row labels (specialty 2).
    pub y: Vec<String>,
    /// Percentages, one row per `y` entry.
    pub z: Vec<Vec<f64>>,
}

/// The loaded specialty-pairs table with its derived indexes.
#[derive(Debug, Default, Clone)]
pub struct SpecialtyTable {
    records: Vec<SpecialtyRecord>,
    formations: FormationIndex,
}

impl SpecialtyTable {
    /// Parse the dataset from its JSON array form.
    ///
    /// Records with fewer than two specialties in the pair keep empty
    /// strings for the missing side, matching the empty-field default used
    /// everywhere else.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(raw.len());
        let mut formations = FormationIndex::default();

        for (i, r) in raw.into_iter().enumerate() {
            formations.insert(&r.formation, i);
            let spe1 = r.doublette.first().cloned().unwrap_or_default();
            let spe2 = r.doublette.get(1).cloned().unwrap_or_default();
            records.push(SpecialtyRecord {
                formation: r.formation,
                year: Session(r.annee_du_bac),
                spe1,
                spe2,
                voeux: r.voeux,
                propositions: r.propositions_d_admissions,
            });
        }

        Ok(Self {
            records,
            formations,
        })
    }

    /// Load the dataset file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        info!(
            records = table.records.len(),
            formations = table.formations.labels().len(),
            path = %path.display(),
            "Loaded specialty-pairs table"
        );
        Ok(table)
    }

    pub fn records(&self) -> &[SpecialtyRecord] {
        &self.records
    }

    pub fn formations(&self) -> &FormationIndex {
        &self.formations
    }

    /// Distinct bac years present in the table, ascending.
    pub fn years(&self) -> Vec<Session> {
        let mut years: Vec<Session> = self.records.iter().map(|r| r.year).collect();
        years.sort_by_key(|s| s.0);
        years.dedup();
        years
    }

    /// Wishes vs proposals per specialty pair for one formation and year.
    pub fn comparison(&self, formation: &str, year: Session) -> Vec<ComparisonRow> {
        self.records
            .iter()
            .filter(|r| r.formation == formation && r.year == year)
            .map(|r| ComparisonRow {
                couple: r.couple(),
                voeux: r.voeux,
                propositions: r.propositions,
            })
            .collect()
    }

    /// Pivot admission proposals by specialty pair for one formation and
    /// year. Returns None when no record matches.
    ///
    /// Cells are summed, missing pairs fill with 0, and the whole table is
    /// scaled to percent of the largest cell.
    pub fn pivot(&self, formation: &str, year: Session) -> Option<SpecialtyPivot> {
        let filtered: Vec<&SpecialtyRecord> = self
            .records
            .iter()
            .filter(|r| r.formation == formation && r.year == year)
            .collect();

        if filtered.is_empty() {
            return None;
        }

        let mut x: Vec<String> = filtered.iter().map(|r| r.spe1.clone()).collect();
        x.sort();
        x.dedup();
        let mut y: Vec<String> = filtered.iter().map(|r| r.spe2.clone()).collect();
        y.sort();
        y.dedup();

        let mut sums: HashMap<(&str, &str), u64> = HashMap::new();
        for r in &filtered {
            *sums.entry((r.spe1.as_str(), r.spe2.as_str())).or_insert(0) += r.propositions;
        }

        let max = sums.values().copied().max().unwrap_or(0);

        let z: Vec<Vec<f64>> = y
            .iter()
            .map(|row| {
                x.iter()
                    .map(|col| {
                        let v = sums
                            .get(&(col.as_str(), row.as_str()))
                            .copied()
                            .unwrap_or(0);
                        if max == 0 {
                            0.0
                        } else {
                            (v as f64 / max as f64) * 100.0
                        }
                    })
                    .collect()
            })
            .collect();

        Some(SpecialtyPivot {
            formation: formation.to_string(),
            year,
            x,
            y,
            z,
        })
    }
}
