//! Read-only vendor directory consulted by the triage engine.
//!
//! A directory is validated once when it is loaded: every category must have
//! at least one vendor, categories must be known, and vendor ids must be
//! unique. After that it is only ever shared behind an `Arc`.

mod parser;

use std::collections::{BTreeMap, HashSet};
use std::io::{Cursor, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Category;
use super::engine::TriageError;
use parser::VendorRow;

const BUNDLED_DIRECTORY: &str = include_str!("../../../data/vendors.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub contact: String,
}

/// Error raised when a vendor directory cannot be loaded or is incomplete.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read vendor directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vendor directory JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid vendor directory CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("vendor entry {position} has a blank {field}")]
    BlankField { field: &'static str, position: usize },
    #[error("vendor '{vendor_id}' uses unknown category '{value}'")]
    UnknownCategory { vendor_id: String, value: String },
    #[error("vendor id '{0}' is listed more than once")]
    DuplicateVendor(String),
    #[error("no vendor registered for category {0}")]
    MissingCategory(Category),
}

/// Vendors grouped by category; the first entry per category is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDirectory {
    by_category: BTreeMap<Category, Vec<Vendor>>,
}

impl VendorDirectory {
    /// Loads the directory from `source`, or the bundled directory when no
    /// path is configured.
    pub fn load(source: Option<&Path>) -> Result<Self, DirectoryError> {
        match source {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json_reader(Cursor::new(BUNDLED_DIRECTORY))
    }

    /// Files ending in `.csv` are read as CSV; everything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        debug!(path = %path.display(), is_csv, "loading vendor directory");

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let rows = parser::parse_json(reader)?;
        Self::from_rows(rows)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DirectoryError> {
        Self::from_json_reader(raw.as_bytes())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let rows = parser::parse_csv(reader)?;
        Self::from_rows(rows)
    }

    /// Validates an in-memory vendor list.
    pub fn from_vendors(vendors: Vec<Vendor>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        let mut by_category: BTreeMap<Category, Vec<Vendor>> = BTreeMap::new();

        for (position, vendor) in vendors.into_iter().enumerate() {
            if vendor.id.trim().is_empty() {
                return Err(DirectoryError::BlankField {
                    field: "id",
                    position,
                });
            }
            if vendor.name.trim().is_empty() {
                return Err(DirectoryError::BlankField {
                    field: "name",
                    position,
                });
            }
            if !seen.insert(vendor.id.clone()) {
                return Err(DirectoryError::DuplicateVendor(vendor.id));
            }
            by_category.entry(vendor.category).or_default().push(vendor);
        }

        if let Some(missing) = Category::ordered()
            .into_iter()
            .find(|category| !by_category.contains_key(category))
        {
            return Err(DirectoryError::MissingCategory(missing));
        }

        Ok(Self { by_category })
    }

    fn from_rows(rows: Vec<VendorRow>) -> Result<Self, DirectoryError> {
        let vendors = rows
            .into_iter()
            .map(|row| -> Result<Vendor, DirectoryError> {
                let category = Category::from_directory_label(&row.category).ok_or_else(|| {
                    DirectoryError::UnknownCategory {
                        vendor_id: row.id.clone(),
                        value: row.category.clone(),
                    }
                })?;
                Ok(Vendor {
                    id: row.id,
                    name: row.name,
                    category,
                    contact: row.contact,
                })
            })
            .collect::<Result<Vec<_>, DirectoryError>>()?;

        Self::from_vendors(vendors)
    }

    #[cfg(test)]
    pub(crate) fn unchecked(vendors: Vec<Vendor>) -> Self {
        let mut by_category: BTreeMap<Category, Vec<Vendor>> = BTreeMap::new();
        for vendor in vendors {
            by_category.entry(vendor.category).or_default().push(vendor);
        }
        Self { by_category }
    }

    /// Default vendor for `category`.
    pub fn lookup(&self, category: Category) -> Result<&Vendor, TriageError> {
        self.by_category
            .get(&category)
            .and_then(|vendors| vendors.first())
            .ok_or(TriageError::NoVendorAvailable { category })
    }

    pub fn vendors(&self, category: Category) -> &[Vendor] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vendor> {
        self.by_category.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
