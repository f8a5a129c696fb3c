//! The design: an ordered set of placed components.

use decal_core::{
    normalize_angle, Color, Component, ComponentId, ComponentKind, EngineOptions, Size, StoreError,
    TransformResult,
};
use glam::DVec2;
use indexmap::IndexMap;

/// Read-only view of a design for one render frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignSnapshot {
    /// Components in paint order (ascending z-index)
    pub components: Vec<Component>,
    pub active: Option<ComponentId>,
}

/// An ordered collection of components plus the active selection.
///
/// Components keep their insertion order; `z_index` is tracked separately and is always a
/// permutation of `0..len()`. Every stored size is at least `min_dimension` on both axes.
#[derive(Debug, Clone)]
pub struct Design {
    components: IndexMap<ComponentId, Component>,
    pub(crate) active: Option<ComponentId>,
    next_id: u64,
    min_dimension: f64,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            components: IndexMap::new(),
            active: None,
            next_id: 0,
            min_dimension: EngineOptions::default().min_dimension,
        }
    }
}

impl Design {
    /// Create an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different size floor. Non-positive or non-finite values are ignored.
    pub fn with_min_dimension(mut self, min_dimension: f64) -> Self {
        if min_dimension > 0.0 && min_dimension.is_finite() {
            self.min_dimension = min_dimension;
        }
        self
    }

    pub fn min_dimension(&self) -> f64 {
        self.min_dimension
    }

    fn floor_size(&self, size: Size) -> Size {
        let floor = |v: f64| if v.is_finite() { v.max(self.min_dimension) } else { self.min_dimension };
        let floored = Size::new(floor(size.width), floor(size.height));
        if floored != size {
            log::warn!(
                "size {}x{} floored to {}x{}",
                size.width,
                size.height,
                floored.width,
                floored.height
            );
        }
        floored
    }

    fn next_id(&mut self) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new component on top of the paint order.
    ///
    /// The new component is not selected; callers decide.
    pub fn add_component(&mut self, kind: ComponentKind, position: DVec2, size: Size) -> ComponentId {
        let id = self.next_id();
        let mut component = Component::new(id, kind, position, self.floor_size(size));
        component.z_index = self.components.len();
        log::debug!("added {} {} at z {}", component.label(), id, component.z_index);
        self.components.insert(id, component);
        id
    }

    /// Append a component restored from persisted state.
    ///
    /// The id and z-index carried by `component` are replaced so the design's invariants hold.
    pub fn insert_component(&mut self, mut component: Component) -> ComponentId {
        let id = self.next_id();
        component.id = id;
        component.z_index = self.components.len();
        component.size = self.floor_size(component.size);
        component.rotation = normalize_angle(component.rotation);
        self.components.insert(id, component);
        id
    }

    /// Remove a component. Absent ids are ignored.
    ///
    /// Clears the selection if it pointed at the removed component; picking a fallback is up
    /// to the caller.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        let removed = self.components.shift_remove(&id);
        match &removed {
            Some(_) => {
                if self.active == Some(id) {
                    self.active = None;
                }
                self.reindex();
                log::debug!("removed {id}, {} left", self.components.len());
            }
            None => log::debug!("remove of absent component {id} ignored"),
        }
        removed
    }

    /// Reassign z-indices to `0..len()`, keeping the relative order.
    fn reindex(&mut self) {
        let mut order: Vec<(usize, ComponentId)> = self
            .components
            .values()
            .map(|c| (c.z_index, c.id))
            .collect();
        order.sort_unstable();
        for (z, (_, id)) in order.into_iter().enumerate() {
            if let Some(component) = self.components.get_mut(&id) {
                component.z_index = z;
            }
        }
    }

    /// Raise a component to the top of the paint order.
    pub fn bring_to_front(&mut self, id: ComponentId) -> Result<(), StoreError> {
        let old = self.require(id)?.z_index;
        let top = self.components.len() - 1;
        if old == top {
            return Ok(());
        }
        for component in self.components.values_mut() {
            if component.id == id {
                component.z_index = top;
            } else if component.z_index > old {
                component.z_index -= 1;
            }
        }
        log::debug!("{id} to front");
        Ok(())
    }

    /// Lower a component to the bottom of the paint order.
    pub fn send_to_back(&mut self, id: ComponentId) -> Result<(), StoreError> {
        let old = self.require(id)?.z_index;
        if old == 0 {
            return Ok(());
        }
        for component in self.components.values_mut() {
            if component.id == id {
                component.z_index = 0;
            } else if component.z_index < old {
                component.z_index += 1;
            }
        }
        log::debug!("{id} to back");
        Ok(())
    }

    /// Merge a transform engine result into a component in one step.
    pub fn apply_transform_result(&mut self, id: ComponentId, result: &TransformResult) -> Result<(), StoreError> {
        let size = result.size.map(|size| self.floor_size(size));
        let component = self
            .components
            .get_mut(&id)
            .ok_or(StoreError::UnknownComponent { id })?;

        if let Some(position) = result.position {
            component.position = position;
        }
        if let Some(size) = size {
            component.size = size;
        }
        if let Some(rotation) = result.rotation {
            component.rotation = normalize_angle(rotation);
        }
        Ok(())
    }

    /// Replace what a component shows, keeping its placement and paint order.
    pub fn update_content(&mut self, id: ComponentId, kind: ComponentKind) -> Result<(), StoreError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(StoreError::UnknownComponent { id })?;
        component.kind = kind;
        log::debug!("updated content of {id} ({})", component.label());
        Ok(())
    }

    /// Change the fill of a vector image print. `None` restores the file's own colors.
    pub fn recolor(&mut self, id: ComponentId, fill: Option<Color>) -> Result<(), StoreError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(StoreError::UnknownComponent { id })?;
        match &mut component.kind {
            ComponentKind::Image(image) if image.is_vector() => {
                image.fill = fill;
                Ok(())
            }
            _ => Err(StoreError::NotRecolorable { id }),
        }
    }

    fn require(&self, id: ComponentId) -> Result<&Component, StoreError> {
        self.components.get(&id).ok_or(StoreError::UnknownComponent { id })
    }

    /// Get a component by ID.
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Components sorted bottom to top.
    pub fn paint_order(&self) -> Vec<&Component> {
        let mut ordered: Vec<&Component> = self.components.values().collect();
        ordered.sort_by_key(|c| c.z_index);
        ordered
    }

    pub fn active(&self) -> Option<ComponentId> {
        self.active
    }

    pub fn active_component(&self) -> Option<&Component> {
        self.active.and_then(|id| self.components.get(&id))
    }

    /// Change the selection. Selecting an unknown id is an error.
    pub fn set_active(&mut self, id: Option<ComponentId>) -> Result<(), StoreError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.active = id;
        Ok(())
    }

    /// Copy out the current state for rendering.
    pub fn snapshot(&self) -> DesignSnapshot {
        DesignSnapshot {
            components: self.paint_order().into_iter().cloned().collect(),
            active: self.active,
        }
    }

    /// Check that z-indices are exactly `{0, .., len - 1}`.
    pub fn z_indices_are_permutation(&self) -> bool {
        let mut seen = vec![false; self.components.len()];
        for component in self.components.values() {
            match seen.get_mut(component.z_index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decal_core::{ImageContent, TextContent};

    fn logo(design: &mut Design, name: &str) -> ComponentId {
        design.add_component(
            ComponentKind::Image(ImageContent::new(name)),
            DVec2::new(400.0, 400.0),
            Size::new(100.0, 100.0),
        )
    }

    fn z_order(design: &Design) -> Vec<ComponentId> {
        design.paint_order().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_add_appends_on_top() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        let c = design.add_component(
            ComponentKind::Text(TextContent::new("Team")),
            DVec2::new(100.0, 100.0),
            Size::new(80.0, 20.0),
        );

        assert_eq!(design.len(), 3);
        assert_eq!(z_order(&design), vec![a, b, c]);
        assert_eq!(design.active(), None);
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        design.remove_component(a);
        let b = logo(&mut design, "b.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        let c = logo(&mut design, "c.png");

        let removed = design.remove_component(b).expect("b exists");
        assert_eq!(removed.id, b);
        assert_eq!(z_order(&design), vec![a, c]);
        assert_eq!(design.get(c).map(|c| c.z_index), Some(1));
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_remove_absent_is_silent() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        assert_eq!(design.remove_component(ComponentId(99)), None);
        assert_eq!(design.len(), 1);
        assert!(design.contains(a));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        design.set_active(Some(a)).unwrap();
        design.remove_component(a);
        assert_eq!(design.active(), None);
        assert!(design.is_empty());
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_bring_to_front() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        let c = logo(&mut design, "c.png");

        design.bring_to_front(a).unwrap();
        assert_eq!(z_order(&design), vec![b, c, a]);
        design.bring_to_front(a).unwrap();
        assert_eq!(z_order(&design), vec![b, c, a]);
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_send_to_back() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        let c = logo(&mut design, "c.png");

        design.send_to_back(c).unwrap();
        assert_eq!(z_order(&design), vec![c, a, b]);
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_reorder_single_component_is_noop() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        design.bring_to_front(a).unwrap();
        design.send_to_back(a).unwrap();
        assert_eq!(design.get(a).map(|c| c.z_index), Some(0));
    }

    #[test]
    fn test_reorder_unknown_component() {
        let mut design = Design::new();
        logo(&mut design, "a.png");
        let err = design.bring_to_front(ComponentId(42)).unwrap_err();
        assert_eq!(err, StoreError::UnknownComponent { id: ComponentId(42) });
        assert!(design.send_to_back(ComponentId(42)).is_err());
    }

    #[test]
    fn test_apply_transform_result() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let result = TransformResult {
            position: Some(DVec2::new(10.0, 20.0)),
            size: None,
            rotation: Some(7.0),
        };
        design.apply_transform_result(a, &result).unwrap();

        let component = design.get(a).unwrap();
        assert_eq!(component.position, DVec2::new(10.0, 20.0));
        assert_eq!(component.size, Size::new(100.0, 100.0));
        assert!(component.rotation > -std::f64::consts::PI && component.rotation <= std::f64::consts::PI);
    }

    #[test]
    fn test_apply_to_unknown_component() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let err = design
            .apply_transform_result(ComponentId(5), &TransformResult::default())
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownComponent { id: ComponentId(5) });
        assert_eq!(design.get(a).unwrap().position, DVec2::new(400.0, 400.0));
    }

    #[test]
    fn test_set_active_validates() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        assert!(design.set_active(Some(ComponentId(3))).is_err());
        design.set_active(Some(a)).unwrap();
        assert_eq!(design.active_component().map(|c| c.id), Some(a));
        design.set_active(None).unwrap();
        assert_eq!(design.active(), None);
    }

    #[test]
    fn test_insert_component_reassigns_identity() {
        let mut design = Design::new();
        logo(&mut design, "a.png");
        let mut restored = Component::new(
            ComponentId(77),
            ComponentKind::Text(TextContent::new("Back")),
            DVec2::new(50.0, 50.0),
            Size::new(10.0, 10.0),
        );
        restored.z_index = 12;
        let id = design.insert_component(restored);
        assert_eq!(id, ComponentId(1));
        assert_eq!(design.get(id).map(|c| c.z_index), Some(1));
        assert!(design.z_indices_are_permutation());
    }

    #[test]
    fn test_sizes_are_floored() {
        let mut design = Design::new();
        let a = design.add_component(
            ComponentKind::Image(ImageContent::new("a.png")),
            DVec2::new(10.0, 10.0),
            Size::new(0.0, -5.0),
        );
        assert_eq!(design.get(a).unwrap().size, Size::new(1.0, 1.0));

        let restored = Component::new(
            ComponentId(4),
            ComponentKind::Text(TextContent::new("Back")),
            DVec2::new(50.0, 50.0),
            Size::new(f64::INFINITY, 30.0),
        );
        let b = design.insert_component(restored);
        assert_eq!(design.get(b).unwrap().size, Size::new(1.0, 30.0));

        let result = TransformResult {
            size: Some(Size::new(0.25, 40.0)),
            ..TransformResult::default()
        };
        design.apply_transform_result(b, &result).unwrap();
        assert_eq!(design.get(b).unwrap().size, Size::new(1.0, 40.0));
    }

    #[test]
    fn test_custom_size_floor() {
        let mut design = Design::new().with_min_dimension(8.0).with_min_dimension(-1.0);
        assert_eq!(design.min_dimension(), 8.0);
        let a = logo(&mut design, "a.png");
        let result = TransformResult {
            size: Some(Size::new(2.0, 200.0)),
            ..TransformResult::default()
        };
        design.apply_transform_result(a, &result).unwrap();
        assert_eq!(design.get(a).unwrap().size, Size::new(8.0, 200.0));
    }

    #[test]
    fn test_update_content_keeps_placement() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        design.send_to_back(b).unwrap();

        design
            .update_content(b, ComponentKind::Text(TextContent::new("Crew")))
            .unwrap();
        let component = design.get(b).unwrap();
        assert!(component.is_text());
        assert_eq!(component.z_index, 0);
        assert_eq!(component.position, DVec2::new(400.0, 400.0));
        assert_eq!(design.get(a).map(|c| c.z_index), Some(1));

        let err = design
            .update_content(ComponentId(9), ComponentKind::Text(TextContent::new("x")))
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownComponent { id: ComponentId(9) });
    }

    #[test]
    fn test_recolor_vector_image() {
        let mut design = Design::new();
        let print = logo(&mut design, "print.SVG");
        let orange = Color::from_hex("#EFBD4E").unwrap();

        design.recolor(print, Some(orange)).unwrap();
        match &design.get(print).unwrap().kind {
            ComponentKind::Image(image) => assert_eq!(image.fill, Some(orange)),
            other => panic!("expected an image, got {other:?}"),
        }

        design.recolor(print, None).unwrap();
        assert!(matches!(&design.get(print).unwrap().kind, ComponentKind::Image(image) if image.fill.is_none()));
    }

    #[test]
    fn test_recolor_rejects_raster_and_text() {
        let mut design = Design::new();
        let photo = logo(&mut design, "photo.png");
        let text = design.add_component(
            ComponentKind::Text(TextContent::new("Team")),
            DVec2::new(100.0, 100.0),
            Size::new(80.0, 20.0),
        );

        assert_eq!(design.recolor(photo, Some(Color::WHITE)), Err(StoreError::NotRecolorable { id: photo }));
        assert_eq!(design.recolor(text, Some(Color::WHITE)), Err(StoreError::NotRecolorable { id: text }));
        assert_eq!(
            design.recolor(ComponentId(40), None),
            Err(StoreError::UnknownComponent { id: ComponentId(40) })
        );
    }

    #[test]
    fn test_snapshot_is_in_paint_order() {
        let mut design = Design::new();
        let a = logo(&mut design, "a.png");
        let b = logo(&mut design, "b.png");
        design.send_to_back(b).unwrap();
        design.set_active(Some(a)).unwrap();

        let snapshot = design.snapshot();
        let ids: Vec<_> = snapshot.components.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(snapshot.active, Some(a));
    }
}
