//! Immutable layout schema: where tableau slots sit and what hides them.
//!
//! A `LayoutSchema` is built once per session from a layout document
//! (see `parser`) and never changes afterwards. It holds:
//! - the global position multiplier
//! - tableau `SlotDefinition`s in document order
//! - the draw pile and discard pile definitions

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::SchemaError;

/// Sorting layer names, indexed by a record's `layer` attribute.
pub const LAYER_NAMES: [&str; 6] = ["Row0", "Row1", "Row2", "Row3", "Discard", "Draw"];

/// Identifier of a tableau slot, unique within a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A named track of the layout ("Row0".."Row3", "Discard", "Draw").
///
/// Wraps the layer index; the name comes from `LAYER_NAMES`.
/// Serialized as that index, and only indices with a name deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Column(u8);

impl Column {
    /// Resolve a layer index, `None` when it has no name.
    #[must_use]
    pub fn from_layer(layer: i64) -> Option<Self> {
        usize::try_from(layer)
            .ok()
            .filter(|&i| i < LAYER_NAMES.len())
            .map(|i| Self(i as u8))
    }

    /// Layer index this column was declared with.
    #[must_use]
    pub const fn layer(self) -> u8 {
        self.0
    }

    /// Human-readable column name.
    #[must_use]
    pub fn name(self) -> &'static str {
        LAYER_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Column {
    type Error = SchemaError;

    fn try_from(layer: u8) -> Result<Self, Self::Error> {
        Self::from_layer(i64::from(layer)).ok_or(SchemaError::UnnamedLayer(layer))
    }
}

impl From<Column> for u8 {
    fn from(column: Column) -> Self {
        column.0
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a layout record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Slot,
    DrawPile,
    DiscardPile,
}

impl SlotRole {
    /// Parse a record's `type` attribute.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "slot" => Some(SlotRole::Slot),
            "drawpile" => Some(SlotRole::DrawPile),
            "discardpile" => Some(SlotRole::DiscardPile),
            _ => None,
        }
    }

    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            SlotRole::Slot => "slot",
            SlotRole::DrawPile => "drawpile",
            SlotRole::DiscardPile => "discardpile",
        }
    }
}

/// One tableau position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub id: SlotId,

    /// Unscaled layout coordinates.
    pub position: Vec2,

    pub column: Column,

    /// The `faceup` flag declared by the document.
    pub initial_face_up: bool,

    /// Slots whose cards must leave the mine before this one is revealed.
    pub occluded_by: SmallVec<[SlotId; 4]>,
}

/// The draw pile or discard pile position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PileDefinition {
    pub position: Vec2,
    pub column: Column,

    /// Horizontal offset between consecutive cards. Zero for the discard pile.
    pub x_stagger: f32,
}

/// The parsed, validated layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSchema {
    multiplier: Vec2,
    slots: Vec<SlotDefinition>,
    draw_pile: PileDefinition,
    discard_pile: PileDefinition,
    by_id: FxHashMap<SlotId, usize>,
}

impl LayoutSchema {
    /// Build a schema, checking slot ids and occlusion references.
    ///
    /// Fails when a slot id repeats, a slot hides itself, a `hiddenby`
    /// entry names a slot that does not exist, or the occlusion edges
    /// contain a cycle.
    pub fn new(
        multiplier: Vec2,
        slots: Vec<SlotDefinition>,
        draw_pile: PileDefinition,
        discard_pile: PileDefinition,
    ) -> Result<Self, SchemaError> {
        let mut by_id = FxHashMap::default();
        for (index, slot) in slots.iter().enumerate() {
            if by_id.insert(slot.id, index).is_some() {
                return Err(SchemaError::DuplicateSlotId(slot.id));
            }
        }

        for slot in &slots {
            for &occluder in &slot.occluded_by {
                if occluder == slot.id {
                    return Err(SchemaError::SelfOcclusion(slot.id));
                }
                if !by_id.contains_key(&occluder) {
                    return Err(SchemaError::UnknownOccluder {
                        slot: slot.id,
                        occluder,
                    });
                }
            }
        }

        let schema = Self {
            multiplier,
            slots,
            draw_pile,
            discard_pile,
            by_id,
        };
        schema.check_acyclic()?;
        Ok(schema)
    }

    /// Three-colour DFS over the `occluded_by` edges.
    fn check_acyclic(&self) -> Result<(), SchemaError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.slots.len()];

        for root in 0..self.slots.len() {
            if marks[root] != Mark::New {
                continue;
            }

            // (slot index, next edge to visit)
            let mut stack = vec![(root, 0usize)];
            marks[root] = Mark::Active;

            while let Some(top) = stack.last_mut() {
                let (index, edge) = *top;
                let edges = &self.slots[index].occluded_by;
                if edge == edges.len() {
                    marks[index] = Mark::Done;
                    stack.pop();
                    continue;
                }

                top.1 += 1;
                let next = self.by_id[&edges[edge]];

                match marks[next] {
                    Mark::Active => return Err(SchemaError::OcclusionCycle(self.slots[next].id)),
                    Mark::New => {
                        marks[next] = Mark::Active;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            }
        }

        Ok(())
    }

    /// Global scale factor applied to every coordinate.
    #[must_use]
    pub fn multiplier(&self) -> Vec2 {
        self.multiplier
    }

    /// Tableau slots in document order.
    #[must_use]
    pub fn slots(&self) -> &[SlotDefinition] {
        &self.slots
    }

    /// Number of tableau slots (cards dealt into the mine).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Look up a slot by id.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&SlotDefinition> {
        self.by_id.get(&id).map(|&index| &self.slots[index])
    }

    #[must_use]
    pub fn draw_pile(&self) -> &PileDefinition {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &PileDefinition {
        &self.discard_pile
    }

    /// Apply the multiplier to a layout-space point.
    #[must_use]
    pub fn scale(&self, point: Vec2) -> Vec2 {
        Vec2::new(self.multiplier.x * point.x, self.multiplier.y * point.y)
    }
}
