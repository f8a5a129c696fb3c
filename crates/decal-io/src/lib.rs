//! decal-io: placement-zone catalogs and the 3D export format.
//!
//! A [`ZoneCatalog`] is loaded from JSON and supplies the container for the active zone.
//! A [`DesignExport`] turns a design snapshot into the decal record the garment viewer
//! renders.
//!
//! ```
//! use decal_io::ZoneCatalog;
//!
//! let catalog = ZoneCatalog::from_json(
//!     r#"{ "zones": [ { "id": "bm", "title": "Borst midden", "x": 0, "y": 0, "width": 240, "height": 240 } ] }"#,
//! )?;
//! assert_eq!(catalog.active_container().map(|c| c.width), Some(240.0));
//! # Ok::<(), decal_io::IoError>(())
//! ```

pub mod error;
pub mod export;
pub mod zones;

pub use error::{IoError, Result};
pub use export::{CameraPose, DesignExport, ExportRecord, SceneMapping};
pub use zones::{PlacementZone, ZoneCatalog};
