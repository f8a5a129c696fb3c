//! Export of a design as a 3D decal record.
//!
//! The viewer projects each component onto the garment as a decal. Container-local pixel
//! coordinates are converted to scene units with a [`SceneMapping`]: the container center
//! becomes the scene origin and the y axis points up.

use decal_core::{Component, ComponentId, Container};
use decal_store::DesignSnapshot;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Container-local pixels to scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneMapping {
    /// Scene units per container pixel
    pub units_per_pixel: f64,
    /// Distance of the decal plane in front of the garment
    pub depth: f64,
    /// Screen y grows downward, scene y grows upward
    pub flip_y: bool,
}

impl Default for SceneMapping {
    fn default() -> Self {
        Self {
            units_per_pixel: 0.01,
            depth: 0.15,
            flip_y: true,
        }
    }
}

impl SceneMapping {
    pub fn to_scene(&self, position: DVec2, container: &Container) -> [f64; 3] {
        let offset = (position - container.center()) * self.units_per_pixel;
        let y = if self.flip_y { negate(offset.y) } else { offset.y };
        [offset.x, y, self.depth]
    }

    /// Rotation about the viewing axis. Flipping y reverses the direction of rotation.
    pub fn rotation(&self, angle: f64) -> [f64; 3] {
        let z = if self.flip_y { negate(angle) } else { angle };
        [0.0, 0.0, z]
    }

    pub fn scale(&self, component: &Component) -> [f64; 2] {
        [
            component.size.width * self.units_per_pixel,
            component.size.height * self.units_per_pixel,
        ]
    }
}

// 0.0 - v keeps zero positive
fn negate(v: f64) -> f64 {
    0.0 - v
}

/// Camera the viewer renders the garment with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f64; 3],
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.5],
            fov: 25.0,
        }
    }
}

/// One component as a decal in scene space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: ComponentId,
    pub kind: String,
    pub z_index: usize,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 2],
}

impl ExportRecord {
    pub fn from_component(component: &Component, container: &Container, mapping: &SceneMapping) -> Self {
        Self {
            id: component.id,
            kind: component.label().to_string(),
            z_index: component.z_index,
            position: mapping.to_scene(component.position, container),
            rotation: mapping.rotation(component.rotation),
            scale: mapping.scale(component),
        }
    }
}

/// Everything the 3D viewer needs to show a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignExport {
    pub camera: CameraPose,
    /// Decals in paint order
    pub components: Vec<ExportRecord>,
}

impl DesignExport {
    pub fn from_snapshot(snapshot: &DesignSnapshot, container: &Container, mapping: &SceneMapping) -> Self {
        let components = snapshot
            .components
            .iter()
            .map(|component| ExportRecord::from_component(component, container, mapping))
            .collect();
        Self {
            camera: CameraPose::default(),
            components,
        }
    }

    pub fn with_camera(mut self, camera: CameraPose) -> Self {
        self.camera = camera;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decal_core::{ComponentKind, ImageContent, Size, TextContent};
    use decal_store::Design;
    use std::f64::consts::FRAC_PI_2;

    fn container() -> Container {
        Container::new(800.0, 800.0)
    }

    #[test]
    fn test_center_maps_to_origin() {
        let mapping = SceneMapping::default();
        assert_eq!(mapping.to_scene(DVec2::new(400.0, 400.0), &container()), [0.0, 0.0, 0.15]);
    }

    #[test]
    fn test_y_points_up() {
        let mapping = SceneMapping::default();
        let [_, y, _] = mapping.to_scene(DVec2::new(400.0, 300.0), &container());
        assert!(y > 0.0);

        let unflipped = SceneMapping {
            flip_y: false,
            ..SceneMapping::default()
        };
        let [_, y, _] = unflipped.to_scene(DVec2::new(400.0, 300.0), &container());
        assert!(y < 0.0);
    }

    #[test]
    fn test_offset_container() {
        let mapping = SceneMapping::default();
        let zone = Container::from_rect(100.0, 100.0, 200.0, 200.0);
        assert_eq!(mapping.to_scene(DVec2::new(200.0, 200.0), &zone), [0.0, 0.0, 0.15]);
    }

    #[test]
    fn test_export_snapshot() {
        let mut design = Design::new();
        design.add_component(
            ComponentKind::Image(ImageContent::new("logo.svg")),
            DVec2::new(500.0, 300.0),
            Size::new(100.0, 50.0),
        );
        let id = design.add_component(
            ComponentKind::Text(TextContent::new("Team")),
            DVec2::new(400.0, 400.0),
            Size::new(200.0, 100.0),
        );
        design.send_to_back(id).unwrap();
        let mut first = design.snapshot();
        first.components[1].rotation = FRAC_PI_2;

        let export = DesignExport::from_snapshot(&first, &container(), &SceneMapping::default());
        insta::assert_snapshot!(export.to_json().unwrap(), @r###"
        {
          "camera": {
            "position": [
              0.0,
              0.0,
              2.5
            ],
            "fov": 25.0
          },
          "components": [
            {
              "id": 1,
              "kind": "text",
              "z_index": 0,
              "position": [
                0.0,
                0.0,
                0.15
              ],
              "rotation": [
                0.0,
                0.0,
                0.0
              ],
              "scale": [
                2.0,
                1.0
              ]
            },
            {
              "id": 0,
              "kind": "image",
              "z_index": 1,
              "position": [
                1.0,
                1.0,
                0.15
              ],
              "rotation": [
                0.0,
                0.0,
                -1.5707963267948966
              ],
              "scale": [
                1.0,
                0.5
              ]
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_export_json_roundtrip() {
        let mut design = Design::new();
        design.add_component(
            ComponentKind::Image(ImageContent::new("logo.png")),
            DVec2::new(250.0, 640.0),
            Size::new(80.0, 80.0),
        );
        let export = DesignExport::from_snapshot(&design.snapshot(), &container(), &SceneMapping::default())
            .with_camera(CameraPose {
                position: [0.0, 0.5, 3.0],
                fov: 30.0,
            });

        let parsed = DesignExport::from_json(&export.to_json().unwrap()).unwrap();
        assert_eq!(parsed, export);
    }
}
