//! Placement zones: the named printable areas a design can be placed on.

use decal_core::Container;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IoError, Result};

/// A named printable area on the garment.
///
/// The zone defines the container every component is clamped against while it is active,
/// plus the dimension captions drawn along the editor guides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ZoneRecord", into = "ZoneRecord")]
pub struct PlacementZone {
    pub id: String,
    pub title: String,
    pub container: Container,
    /// Caption for the horizontal guide, e.g. "10 cm"
    pub width_label: String,
    /// Caption for the vertical guide
    pub height_label: String,
}

impl PlacementZone {
    pub fn new(id: impl Into<String>, title: impl Into<String>, container: Container) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            container,
            width_label: String::new(),
            height_label: String::new(),
        }
    }

    pub fn with_labels(mut self, width_label: impl Into<String>, height_label: impl Into<String>) -> Self {
        self.width_label = width_label.into();
        self.height_label = height_label.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(IoError::invalid_zone(&self.id, "empty id"));
        }
        if self.container.is_degenerate() {
            return Err(IoError::invalid_zone(
                &self.id,
                format!("degenerate container {}x{}", self.container.width, self.container.height),
            ));
        }
        Ok(())
    }
}

/// On-disk shape of a zone: a flat rectangle in editor pixels.
#[derive(Serialize, Deserialize)]
struct ZoneRecord {
    id: String,
    title: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    width_text: String,
    #[serde(default)]
    height_text: String,
}

impl From<ZoneRecord> for PlacementZone {
    fn from(record: ZoneRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            container: Container::from_rect(record.x, record.y, record.width, record.height),
            width_label: record.width_text,
            height_label: record.height_text,
        }
    }
}

impl From<PlacementZone> for ZoneRecord {
    fn from(zone: PlacementZone) -> Self {
        Self {
            id: zone.id,
            title: zone.title,
            x: zone.container.origin.x,
            y: zone.container.origin.y,
            width: zone.container.width,
            height: zone.container.height,
            width_text: zone.width_label,
            height_text: zone.height_label,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
    zones: Vec<PlacementZone>,
}

/// The ordered set of zones offered for one product, plus the selected one.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: IndexMap<String, PlacementZone>,
    active: Option<String>,
}

impl ZoneCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from JSON.
    ///
    /// Every zone is validated. Without an explicit `active` entry the first zone is
    /// selected.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for zone in file.zones {
            if catalog.zones.contains_key(&zone.id) {
                return Err(IoError::invalid_zone(&zone.id, "duplicate id"));
            }
            catalog.insert(zone)?;
        }
        if let Some(id) = file.active {
            catalog.select(&id)?;
        }
        log::debug!("loaded {} placement zones", catalog.len());
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            active: self.active.clone(),
            zones: self.zones.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Add or replace a zone. The first zone added becomes active.
    pub fn insert(&mut self, zone: PlacementZone) -> Result<()> {
        zone.validate()?;
        if self.active.is_none() {
            self.active = Some(zone.id.clone());
        }
        self.zones.insert(zone.id.clone(), zone);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PlacementZone> {
        self.zones.get(id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over zones in catalog order.
    pub fn zones(&self) -> impl Iterator<Item = &PlacementZone> {
        self.zones.values()
    }

    /// Switch the active zone.
    pub fn select(&mut self, id: &str) -> Result<&PlacementZone> {
        let zone = self
            .zones
            .get(id)
            .ok_or_else(|| IoError::UnknownZone(id.to_string()))?;
        self.active = Some(zone.id.clone());
        Ok(zone)
    }

    pub fn active(&self) -> Option<&PlacementZone> {
        self.active.as_deref().and_then(|id| self.zones.get(id))
    }

    /// The container components are clamped against while the active zone is shown.
    pub fn active_container(&self) -> Option<Container> {
        self.active().map(|zone| zone.container)
    }
}
