/// Number of texture units the scene shader can sample from.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// A texture image registered under a tag. The slot index is its position
/// in the [`TextureTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSlot {
    /// Lookup key used by scene objects.
    pub tag: String,
    /// Image path relative to the asset root.
    pub path: String,
}

/// Tag → texture unit assignment, at most [`MAX_TEXTURE_SLOTS`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextureTable {
    slots: Vec<TextureSlot>,
}

impl TextureTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next free slot to `tag`. Re-registering a tag replaces its
    /// path in place. Returns `None` when every slot is taken.
    pub fn register(&mut self, tag: &str, path: &str) -> Option<usize> {
        if let Some(index) = self.slot(tag) {
            self.slots[index].path = path.to_owned();
            return Some(index);
        }
        if self.slots.len() >= MAX_TEXTURE_SLOTS {
            log::warn!("no texture slot left for {tag} ({path})");
            return None;
        }
        self.slots.push(TextureSlot {
            tag: tag.to_owned(),
            path: path.to_owned(),
        });
        Some(self.slots.len() - 1)
    }

    /// Slot index of `tag`.
    #[must_use]
    pub fn slot(&self, tag: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.tag == tag)
    }

    /// Registered slots in unit order.
    #[must_use]
    pub fn slots(&self) -> &[TextureSlot] {
        &self.slots
    }

    /// Number of registered slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no texture is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The still life's images, in slot order.
pub(crate) const STILL_LIFE_TEXTURES: [(&str, &str); 11] = [
    ("floor", "textures/pavers.jpg"),
    ("drywall", "textures/drywall.jpg"),
    ("cylinder", "textures/beads.png"),
    ("cylinder_top", "textures/circular-brushed-gold-texture.jpg"),
    ("plank", "textures/wood.jpg"),
    ("box", "textures/iphonebox.jpg"),
    ("iphone", "textures/iphone.png"),
    ("ball", "textures/orange.jpg"),
    ("cone", "textures/cone.jpg"),
    ("mint", "textures/mint.jpg"),
    ("top", "textures/top.png"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_assigned_in_order() {
        let mut table = TextureTable::new();
        assert_eq!(table.register("floor", "a.jpg"), Some(0));
        assert_eq!(table.register("wall", "b.jpg"), Some(1));
        assert_eq!(table.slot("wall"), Some(1));
        assert_eq!(table.slot("ceiling"), None);
    }

    #[test]
    fn re_registering_keeps_slot() {
        let mut table = TextureTable::new();
        let _ = table.register("floor", "a.jpg");
        assert_eq!(table.register("floor", "c.jpg"), Some(0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.slots()[0].path, "c.jpg");
    }

    #[test]
    fn table_is_capped_at_sixteen() {
        let mut table = TextureTable::new();
        for i in 0..MAX_TEXTURE_SLOTS {
            assert_eq!(table.register(&format!("t{i}"), "x.png"), Some(i));
        }
        assert_eq!(table.register("one-too-many", "x.png"), None);
        assert_eq!(table.len(), MAX_TEXTURE_SLOTS);
    }
}
