//! Tableau layout: slot positions, columns, and occlusion declarations.
//!
//! ## Key Types
//!
//! - `LayoutSchema`: Immutable parsed layout (built once per session)
//! - `SlotDefinition`: One tableau position with its `hiddenby` list
//! - `PileDefinition`: Draw pile / discard pile position
//! - `Column`: Named track a slot belongs to ("Row0".."Row3", ...)
//!
//! ## Usage
//!
//! ```
//! use prospector::layout::{LayoutSchema, TRI_PEAKS_LAYOUT};
//!
//! let schema = LayoutSchema::parse(TRI_PEAKS_LAYOUT).unwrap();
//! assert_eq!(schema.slot_count(), 28);
//! ```

pub mod schema;
pub mod parser;

pub use schema::{
    Column, LayoutSchema, PileDefinition, SlotDefinition, SlotId, SlotRole, Vec2, LAYER_NAMES,
};

use crate::core::error::SchemaError;

/// Three peaks over a ten-card base: 28 slots in four rows.
pub const TRI_PEAKS_LAYOUT: &str = include_str!("../../layouts/tri_peaks.json");

impl LayoutSchema {
    /// Parse a layout document. See `parser` for the format.
    pub fn parse(document: &str) -> Result<Self, SchemaError> {
        parser::parse(document)
    }
}
