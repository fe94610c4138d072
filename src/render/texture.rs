use std::fmt;

use super::backend::TextureHandle;

/// Semantic texture slot. The discriminant is the texture unit it binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureSlot {
    /// Albedo map.
    BaseColor = 0,
    /// Tangent-space normal map.
    Normal = 1,
    /// Roughness map.
    Roughness = 2,
    /// Alpha/opacity map.
    Alpha = 3,
    /// Metallic map.
    Metallic = 4,
    /// Emissive map.
    Emissive = 5,
}

impl TextureSlot {
    /// Every slot in texture-unit order.
    pub const ALL: [Self; 6] = [
        Self::BaseColor,
        Self::Normal,
        Self::Roughness,
        Self::Alpha,
        Self::Metallic,
        Self::Emissive,
    ];

    /// Texture unit index.
    #[must_use]
    pub fn unit(self) -> u32 {
        self as u32
    }

    /// Sampler uniform name used by the scene shader.
    #[must_use]
    pub fn uniform_name(self) -> &'static str {
        match self {
            Self::BaseColor => "BaseColor",
            Self::Normal => "Normal",
            Self::Roughness => "Roughness",
            Self::Alpha => "Alpha",
            Self::Metallic => "Metallic",
            Self::Emissive => "Emissive",
        }
    }

    /// Parse a sampler name as written by the part exporter.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.uniform_name() == name)
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uniform_name())
    }
}

/// Slot → texture mapping for one object. Unset slots are skipped at draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureSet {
    slots: [Option<TextureHandle>; TextureSlot::ALL.len()],
}

impl TextureSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, slot: TextureSlot, handle: TextureHandle) -> Self {
        self.set(slot, handle);
        self
    }

    /// Assign `handle` to `slot`, replacing any previous texture.
    pub fn set(&mut self, slot: TextureSlot, handle: TextureHandle) {
        self.slots[slot as usize] = Some(handle);
    }

    /// Texture bound to `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: TextureSlot) -> Option<TextureHandle> {
        self.slots[slot as usize]
    }

    /// Present textures in texture-unit order.
    pub fn iter(&self) -> impl Iterator<Item = (TextureSlot, TextureHandle)> + '_ {
        TextureSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|h| (slot, h)))
    }
}
