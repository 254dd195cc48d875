//! Airplane catalog loading and lookup.
//!
//! A catalog starts from the built-in standard models and can be extended
//! from CSV files with one row per consumption profile entry:
//!
//! ```text
//! name,size,seats,max_range_km,max_payload_kg,distance_km,fuel_kg
//! A320F,medium,0,4000,21000,232,1600
//! A320F,medium,0,4000,21000,463,2300
//! ```
//!
//! Rows sharing a name are merged into a single specification; their airplane
//! attributes must agree.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::airplane::{AirplaneSize, AirplaneSpecification, ConsumptionProfile};
use super::standard_models::StandardModel;

const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "size",
    "seats",
    "max_range_km",
    "max_payload_kg",
    "distance_km",
    "fuel_kg",
];

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A named airplane specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub specification: AirplaneSpecification,
}

/// Collection of airplane specifications keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct AirplaneCatalog {
    entries: HashMap<String, CatalogEntry>,
    source: Option<PathBuf>,
}

impl AirplaneCatalog {
    /// Catalog holding the six standard models under their codes.
    pub fn standard() -> Self {
        let entries = StandardModel::ALL
            .iter()
            .map(|model| {
                let entry = CatalogEntry {
                    name: model.code().to_string(),
                    specification: model.specification().clone(),
                };
                (normalize_name(&entry.name), entry)
            })
            .collect();
        Self {
            entries,
            source: None,
        }
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            models = catalog.len(),
            "loaded airplane catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::AirplaneDataValidation {
                message: format!("failed to read airplane data headers: {err}"),
            })?
            .clone();
        let columns = column_indices(&headers)?;

        // insertion order of names is kept for deterministic error messages
        let mut order: Vec<String> = Vec::new();
        let mut entries: HashMap<String, CatalogEntry> = HashMap::new();

        let mut row_num: usize = 1;
        for result in csv_reader.records() {
            row_num += 1;
            let record = result.map_err(|err| Error::AirplaneDataValidation {
                message: err.to_string(),
            })?;
            let row = Row {
                record: &record,
                columns: &columns,
                line: row_num,
            };

            let name = row.text("name")?;
            if name.is_empty() {
                return Err(Error::AirplaneDataValidation {
                    message: format!("missing airplane name at row {row_num}"),
                });
            }
            let size: AirplaneSize = row.text("size")?.parse()?;
            let seats: u32 = row.parse("seats", &name)?;
            let max_range_km: u32 = row.parse("max_range_km", &name)?;
            let max_payload_kg: u32 = row.parse("max_payload_kg", &name)?;
            let distance_km: f64 = row.parse("distance_km", &name)?;
            let fuel_kg: f64 = row.parse("fuel_kg", &name)?;

            let key = normalize_name(&name);
            let entry = entries.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                CatalogEntry {
                    name: name.clone(),
                    specification: AirplaneSpecification::new(
                        size,
                        seats,
                        max_range_km,
                        max_payload_kg,
                        ConsumptionProfile::new(),
                    ),
                }
            });

            let spec = &mut entry.specification;
            if spec.size != size
                || spec.seats != seats
                || spec.max_range_km != max_range_km
                || spec.max_payload_kg != max_payload_kg
            {
                return Err(Error::AirplaneDataValidation {
                    message: format!(
                        "conflicting attributes for airplane '{name}' at row {row_num}"
                    ),
                });
            }
            spec.add_consumption_entry(distance_km, fuel_kg)?;
        }

        for key in &order {
            if let Some(entry) = entries.get(key) {
                entry.specification.validate().map_err(|err| match err {
                    Error::AirplaneDataValidation { message } => Error::AirplaneDataValidation {
                        message: format!("{}: {message}", entry.name),
                    },
                    other => other,
                })?;
            }
        }

        debug!(models = entries.len(), "parsed airplane data");
        Ok(Self {
            entries,
            source: None,
        })
    }

    /// Add every entry of `other`. Fails if a name is already present.
    pub fn merge(&mut self, other: AirplaneCatalog) -> Result<()> {
        if let Some(duplicate) = other
            .entries
            .keys()
            .find(|key| self.entries.contains_key(*key))
        {
            let name = other.entries[duplicate].name.clone();
            return Err(Error::DuplicateAirplaneModel { name });
        }
        self.entries.extend(other.entries);
        if self.source.is_none() {
            self.source = other.source;
        }
        Ok(())
    }

    /// Get an airplane by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&normalize_name(name))
    }

    /// Like [`get`](Self::get), with close matches attached to the error.
    pub fn resolve(&self, name: &str) -> Result<&CatalogEntry> {
        self.get(name).ok_or_else(|| Error::UnknownAirplaneModel {
            name: name.to_string(),
            suggestions: suggest_names(
                name,
                self.entries.values().map(|entry| entry.name.as_str()),
                3,
            ),
        })
    }

    /// Sorted list of all airplane names.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.values().map(|e| e.name.clone()).collect();
        names.sort();
        names
    }

    /// All entries sorted by name.
    pub fn entries_sorted(&self) -> Vec<&CatalogEntry> {
        let mut entries: Vec<&CatalogEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a BTreeMap<&'static str, usize>,
    line: usize,
}

impl Row<'_> {
    fn text(&self, field: &'static str) -> Result<String> {
        self.columns
            .get(field)
            .and_then(|&i| self.record.get(i))
            .map(|s| s.trim().to_string())
            .ok_or_else(|| Error::AirplaneDataValidation {
                message: format!("missing {field} at row {}", self.line),
            })
    }

    fn parse<T>(&self, field: &'static str, name: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.text(field)?
            .parse::<T>()
            .map_err(|err| Error::AirplaneDataValidation {
                message: format!(
                    "invalid {field} for airplane '{name}' at row {}: {err}",
                    self.line
                ),
            })
    }
}

fn column_indices(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let mut indices = BTreeMap::new();
    let mut missing = Vec::new();
    for column in REQUIRED_COLUMNS {
        match normalized.iter().position(|h| h == column) {
            Some(i) => {
                indices.insert(column, i);
            }
            None => missing.push(column),
        }
    }

    if !missing.is_empty() {
        return Err(Error::AirplaneDataValidation {
            message: format!(
                "airplane data missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }
    Ok(indices)
}

/// Normalize an airplane name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Up to `limit` candidates similar to `query`, best match first.
pub(crate) fn suggest_names<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = normalize_name(query);
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&query, &normalize_name(candidate));
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "name,size,seats,max_range_km,max_payload_kg,distance_km,fuel_kg\n";

    #[test]
    fn groups_rows_into_profiles() {
        let csv = format!(
            "{HEADER}Test Jet,small,0,1000,5000,200,500\nTest Jet,small,0,1000,5000,100,300\n"
        );
        let catalog = AirplaneCatalog::from_reader(Cursor::new(csv)).expect("valid csv");
        let entry = catalog.get("test jet").expect("entry exists");
        assert_eq!(entry.specification.consumption.len(), 2);
        assert_eq!(entry.specification.consumption.entries()[0].x, 100.0);
        assert_eq!(entry.specification.max_payload_kg, 5000);
    }

    #[test]
    fn rejects_conflicting_attributes() {
        let csv = format!("{HEADER}Jet,small,0,1000,5000,100,300\nJet,big,0,1000,5000,200,500\n");
        match AirplaneCatalog::from_reader(Cursor::new(csv)) {
            Err(Error::AirplaneDataValidation { message }) => {
                assert!(message.contains("conflicting"), "{message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn reports_missing_columns() {
        let csv = "name,size\nJet,small\n";
        let err = AirplaneCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("distance_km"));
    }

    #[test]
    fn merge_refuses_duplicates() {
        let mut catalog = AirplaneCatalog::standard();
        let csv = format!("{HEADER}p_757_200,medium,200,7222,4000,100,300\n");
        let extra = AirplaneCatalog::from_reader(Cursor::new(csv)).unwrap();
        match catalog.merge(extra) {
            Err(Error::DuplicateAirplaneModel { name }) => assert_eq!(name, "p_757_200"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn suggestions_are_ranked_and_limited() {
        let names = ["P_747_400", "F_747_400F", "P_757_200", "P_FOKKER100"];
        let suggestions = suggest_names("p_747_40", names, 2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], "P_747_400");
        assert!(suggest_names("zzzz", names, 3).is_empty());
    }
}
