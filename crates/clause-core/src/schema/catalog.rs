use super::ObjectMap;
use crate::Result;

/// The set of object maps a render pass resolves entities against.
///
/// Read-only once populated; shared by reference into every render call.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    maps: Vec<ObjectMap>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of maps, rejecting duplicate entities.
    pub fn from_maps(maps: impl IntoIterator<Item = ObjectMap>) -> Result<Self> {
        let mut catalog = Self::new();

        for map in maps {
            catalog.add(map)?;
        }

        Ok(catalog)
    }

    /// Adds a map. Entity names must be unique within the catalog.
    pub fn add(&mut self, map: ObjectMap) -> Result<()> {
        if self.map(&map.entity).is_some() {
            crate::bail!("duplicate entity `{}` in catalog", map.entity);
        }

        self.maps.push(map);
        Ok(())
    }

    /// Looks up an entity's map by name.
    pub fn map(&self, entity: &str) -> Option<&ObjectMap> {
        self.maps.iter().find(|map| map.entity == entity)
    }

    pub fn maps(&self) -> &[ObjectMap] {
        &self.maps
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
