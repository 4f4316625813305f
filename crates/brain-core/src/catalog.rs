//! Static region catalog.
//!
//! The catalog is the single source of truth for the diagram: the scene
//! builder and the label overlay both derive their objects from it by index.
//! It is validated once at startup and never changes afterwards.

use fnv::FnvHashMap;
use glam::Vec3;
use thiserror::Error;

/// 24-bit `0xRRGGBB` color as written in the region table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Channels in display (sRGB) space, 0..1.
    pub fn to_srgb(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }

    /// Channels decoded to linear space for shading on an sRGB surface.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub name: String,
    pub color: Rgb,
    pub position: Vec3,
    pub scale: Vec3,
    pub opacity: Option<f32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("region #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("region #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate region name `{name}`")]
    DuplicateName { name: String },
    #[error("region `{name}` has opacity {opacity} outside (0, 1]")]
    InvalidOpacity { name: String, opacity: f32 },
    #[error("region `{name}` has a non-finite position")]
    InvalidPosition { name: String },
    #[error("region `{name}` needs a finite, positive scale on every axis")]
    InvalidScale { name: String },
}

/// Region record with every field optional, validated by [`Catalog::from_builders`].
#[derive(Clone, Debug, Default)]
pub struct RegionBuilder {
    name: Option<String>,
    color: Option<Rgb>,
    position: Option<Vec3>,
    scale: Option<Vec3>,
    opacity: Option<f32>,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, hex: u32) -> Self {
        self.color = Some(Rgb(hex));
        self
    }

    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Some(Vec3::new(x, y, z));
        self
    }

    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Some(Vec3::new(x, y, z));
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    fn build(self, index: usize) -> Result<Region, CatalogError> {
        let missing = |field| CatalogError::MissingField { index, field };
        Ok(Region {
            name: self.name.ok_or_else(|| missing("name"))?,
            color: self.color.ok_or_else(|| missing("color"))?,
            position: self.position.ok_or_else(|| missing("position"))?,
            scale: self.scale.ok_or_else(|| missing("scale"))?,
            opacity: self.opacity,
        })
    }
}

/// Ordered, immutable list of regions.
#[derive(Clone, Debug)]
pub struct Catalog {
    regions: Vec<Region>,
    by_name: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut by_name = FnvHashMap::default();
        for (index, region) in regions.iter().enumerate() {
            validate(index, region)?;
            if by_name.insert(region.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: region.name.clone(),
                });
            }
        }
        Ok(Self { regions, by_name })
    }

    pub fn from_builders(
        builders: impl IntoIterator<Item = RegionBuilder>,
    ) -> Result<Self, CatalogError> {
        let regions = builders
            .into_iter()
            .enumerate()
            .map(|(i, b)| b.build(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(regions)
    }

    /// The ten regions of the illustrative diagram.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_builders(builtin_regions())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(index: usize, region: &Region) -> Result<(), CatalogError> {
    if region.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { index });
    }
    if !region.position.is_finite() {
        return Err(CatalogError::InvalidPosition {
            name: region.name.clone(),
        });
    }
    if !region.scale.is_finite() || region.scale.min_element() <= 0.0 {
        return Err(CatalogError::InvalidScale {
            name: region.name.clone(),
        });
    }
    if let Some(opacity) = region.opacity {
        // NaN fails both comparisons
        if !(opacity > 0.0 && opacity <= 1.0) {
            return Err(CatalogError::InvalidOpacity {
                name: region.name.clone(),
                opacity,
            });
        }
    }
    Ok(())
}

fn builtin_regions() -> Vec<RegionBuilder> {
    let region = |name: &str, color: u32, p: [f32; 3], s: [f32; 3]| {
        RegionBuilder::new()
            .name(name)
            .color(color)
            .position(p[0], p[1], p[2])
            .scale(s[0], s[1], s[2])
    };
    vec![
        region("Frontal/Prefrontal Cortex", 0x5599ff, [0.0, 1.2, 0.6], [1.2, 0.7, 0.8]),
        region("Parietal Cortex", 0x55dd55, [0.0, 1.2, -0.4], [1.2, 0.7, 0.8]),
        region("Left Temporal Lobe", 0xdd55dd, [-1.1, 0.3, 0.2], [0.6, 0.7, 0.8]),
        region("Limbic System", 0xff9955, [0.0, 0.0, 0.0], [0.8, 0.7, 0.7]),
        region("Hippocampus", 0xffff00, [0.4, -0.2, 0.2], [0.3, 0.2, 0.5]),
        region("Basal Ganglia", 0xff5555, [0.4, 0.2, 0.0], [0.5, 0.5, 0.5]),
        region("Striatum", 0xff88bb, [0.6, 0.2, 0.2], [0.3, 0.3, 0.3]),
        region("Cerebellum", 0xcc44cc, [0.0, -1.0, -0.2], [1.0, 0.6, 0.7]),
        region("Dendritic Damage Areas", 0xff0000, [-0.6, 0.5, 0.4], [0.2, 0.2, 0.2])
            .opacity(0.7),
        region("Receptor Damage Areas", 0xffaa00, [0.6, 0.5, 0.6], [0.2, 0.2, 0.2])
            .opacity(0.7),
    ]
}
