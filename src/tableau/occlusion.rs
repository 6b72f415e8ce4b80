//! Occlusion graph: which mine cards are covered by other mine cards.
//!
//! Edges come from the layout's `hiddenby` lists and never change. Only
//! mine membership changes, so face-up state is recomputed from scratch
//! after every change instead of being patched.
//!
//! A mine card is face-up iff every slot that hides it is empty, whether
//! because that slot was never dealt or because its card was matched away.

use im::OrdMap;
use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::layout::{LayoutSchema, SlotId};

/// Static "hidden by" edges for every tableau slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcclusionGraph {
    /// (slot, slots hiding it), in layout order.
    edges: Vec<(SlotId, SmallVec<[SlotId; 4]>)>,
}

impl OcclusionGraph {
    /// Collect edges from a schema.
    #[must_use]
    pub fn from_schema(schema: &LayoutSchema) -> Self {
        Self {
            edges: schema
                .slots()
                .iter()
                .map(|slot| (slot.id, slot.occluded_by.clone()))
                .collect(),
        }
    }

    /// Face-up flag for every card currently in the mine, in layout order.
    ///
    /// Pure and idempotent: equal mine membership gives equal output.
    #[must_use]
    pub fn recompute_face_up(&self, mine: &OrdMap<SlotId, CardId>) -> Vec<(CardId, bool)> {
        self.edges
            .iter()
            .filter_map(|(slot, hidden_by)| {
                let card = mine.get(slot)?;
                Some((*card, uncovered(hidden_by, mine)))
            })
            .collect()
    }
}

/// No slot in `hidden_by` still holds a mine card.
fn uncovered(hidden_by: &[SlotId], mine: &OrdMap<SlotId, CardId>) -> bool {
    hidden_by.iter().all(|occluder| !mine.contains_key(occluder))
}
