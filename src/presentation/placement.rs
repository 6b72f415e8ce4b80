//! Where the renderer should put a card in each pile.
//!
//! Positions are in scaled layout space (multiplier applied). `z` is a
//! depth hint, `order` the sort order within the sorting layer.

use serde::{Deserialize, Serialize};

use crate::layout::{Column, LayoutSchema, SlotDefinition};

/// Named sorting layer a sprite is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingLayer {
    /// One of the layout columns.
    Column(Column),
    /// The exposed target card, above the discard pile.
    Target,
}

impl std::fmt::Display for SortingLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortingLayer::Column(column) => f.write_str(column.name()),
            SortingLayer::Target => f.write_str("Target"),
        }
    }
}

/// Target transform and depth ordering for one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub layer: SortingLayer,
    pub order: i32,
}

/// Mine card: slot position, deeper rows further back.
#[must_use]
pub fn mine(schema: &LayoutSchema, slot: &SlotDefinition) -> Placement {
    let at = schema.scale(slot.position);
    Placement {
        x: at.x,
        y: at.y,
        z: -f32::from(slot.column.layer()),
        layer: SortingLayer::Column(slot.column),
        order: 0,
    }
}

/// Discard card; `depth` is the discard pile length including this card.
#[must_use]
pub fn discard(schema: &LayoutSchema, depth: usize) -> Placement {
    let pile = schema.discard_pile();
    let at = schema.scale(pile.position);
    Placement {
        x: at.x,
        y: at.y,
        z: 0.0,
        layer: SortingLayer::Column(pile.column),
        order: -200 + 3 * depth as i32,
    }
}

/// The target sits on the discard pile, above everything in it.
#[must_use]
pub fn target(schema: &LayoutSchema) -> Placement {
    let at = schema.scale(schema.discard_pile().position);
    Placement {
        x: at.x,
        y: at.y,
        z: 0.0,
        layer: SortingLayer::Target,
        order: 0,
    }
}

/// Draw pile card at `index` (0 = next to draw), staggered to show the count.
#[must_use]
pub fn draw_pile(schema: &LayoutSchema, index: usize) -> Placement {
    let pile = schema.draw_pile();
    let at = schema.scale(pile.position);
    let i = index as f32;
    Placement {
        x: at.x + pile.x_stagger * i,
        y: at.y,
        z: 0.1 * i,
        layer: SortingLayer::Column(pile.column),
        order: -10 * index as i32,
    }
}
