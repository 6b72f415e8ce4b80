//! Layout document parser.
//!
//! A layout document is a JSON object with a `multiplier` record and a
//! `slots` array. Every record is a flat map of attributes whose values
//! may be written as JSON numbers or as strings:
//!
//! ```json
//! {
//!   "multiplier": { "x": 1.25, "y": 1.5 },
//!   "slots": [
//!     { "x": -6, "y": 3, "layer": 0, "faceup": "0", "id": 0, "hiddenby": "3,4" },
//!     { "type": "drawpile", "x": -7, "y": -4, "layer": 5, "xstagger": 0.15 },
//!     { "type": "discardpile", "x": 0, "y": -4, "layer": 4 }
//!   ]
//! }
//! ```
//!
//! `type` defaults to `slot` and `faceup` defaults to `0`.

use serde::Deserialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;
use tracing::debug;

use super::schema::{
    Column, LayoutSchema, PileDefinition, SlotDefinition, SlotId, SlotRole, Vec2, LAYER_NAMES,
};
use crate::core::error::{Location, SchemaError};

#[derive(Deserialize)]
struct RawDocument {
    multiplier: Option<Map<String, Value>>,
    #[serde(default)]
    slots: Vec<Map<String, Value>>,
}

/// Attribute access for one record, with errors tagged by location.
struct Record<'a> {
    at: Location,
    attributes: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    fn text(&self, name: &str) -> Option<String> {
        self.attributes.get(name).map(|value| match value {
            Value::String(s) => s.trim().to_string(),
            Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
            other => other.to_string(),
        })
    }

    fn required(&self, name: &'static str) -> Result<String, SchemaError> {
        self.text(name).ok_or(SchemaError::MissingAttribute {
            at: self.at,
            attribute: name,
        })
    }

    fn number<T: std::str::FromStr>(&self, name: &'static str, text: &str) -> Result<T, SchemaError> {
        text.trim().parse().map_err(|_| SchemaError::InvalidNumber {
            at: self.at,
            attribute: name,
            value: text.to_string(),
        })
    }

    fn float(&self, name: &'static str) -> Result<f32, SchemaError> {
        let text = self.required(name)?;
        self.number(name, &text)
    }

    fn position(&self) -> Result<Vec2, SchemaError> {
        Ok(Vec2::new(self.float("x")?, self.float("y")?))
    }

    fn column(&self) -> Result<Column, SchemaError> {
        let layer: i64 = self.number("layer", &self.required("layer")?)?;
        Column::from_layer(layer).ok_or(SchemaError::LayerOutOfRange {
            at: self.at,
            layer,
            max: LAYER_NAMES.len(),
        })
    }

    fn flag(&self, name: &'static str) -> Result<bool, SchemaError> {
        match self.text(name).as_deref() {
            None | Some("0") => Ok(false),
            Some("1") => Ok(true),
            Some(other) => Err(SchemaError::InvalidFlag {
                at: self.at,
                attribute: name,
                value: other.to_string(),
            }),
        }
    }

    fn slot_id(&self, name: &'static str, text: &str) -> Result<SlotId, SchemaError> {
        self.number(name, text).map(SlotId)
    }

    fn slot_ids(&self, name: &'static str) -> Result<SmallVec<[SlotId; 4]>, SchemaError> {
        let Some(text) = self.text(name) else {
            return Ok(SmallVec::new());
        };
        text.split(',').map(|part| self.slot_id(name, part)).collect()
    }

    fn role(&self) -> Result<SlotRole, SchemaError> {
        match self.text("type") {
            None => Ok(SlotRole::Slot),
            Some(kind) => SlotRole::from_type_name(&kind)
                .ok_or(SchemaError::UnknownType { at: self.at, kind }),
        }
    }
}

/// Parse a layout document into a validated schema.
///
/// Deterministic: the same text always yields an equal schema.
pub fn parse(document: &str) -> Result<LayoutSchema, SchemaError> {
    let raw: RawDocument =
        serde_json::from_str(document).map_err(|e| SchemaError::InvalidDocument(e.to_string()))?;

    let multiplier = {
        let attributes = raw.multiplier.as_ref().ok_or(SchemaError::MissingMultiplier)?;
        Record {
            at: Location::Multiplier,
            attributes,
        }
        .position()?
    };

    let mut slots = Vec::new();
    let mut draw_pile = None;
    let mut discard_pile = None;

    for (index, attributes) in raw.slots.iter().enumerate() {
        let record = Record {
            at: Location::Record(index),
            attributes,
        };

        let role = record.role()?;
        let position = record.position()?;
        let column = record.column()?;

        match role {
            SlotRole::Slot => {
                let id = record.slot_id("id", &record.required("id")?)?;
                slots.push(SlotDefinition {
                    id,
                    position,
                    column,
                    initial_face_up: record.flag("faceup")?,
                    occluded_by: record.slot_ids("hiddenby")?,
                });
            }
            SlotRole::DrawPile => {
                let pile = PileDefinition {
                    position,
                    column,
                    x_stagger: record.float("xstagger")?,
                };
                if draw_pile.replace(pile).is_some() {
                    return Err(SchemaError::DuplicatePile(role.type_name()));
                }
            }
            SlotRole::DiscardPile => {
                let pile = PileDefinition {
                    position,
                    column,
                    x_stagger: 0.0,
                };
                if discard_pile.replace(pile).is_some() {
                    return Err(SchemaError::DuplicatePile(role.type_name()));
                }
            }
        }
    }

    let draw_pile = draw_pile.ok_or(SchemaError::MissingPile(SlotRole::DrawPile.type_name()))?;
    let discard_pile =
        discard_pile.ok_or(SchemaError::MissingPile(SlotRole::DiscardPile.type_name()))?;

    let schema = LayoutSchema::new(multiplier, slots, draw_pile, discard_pile)?;
    debug!(slots = schema.slot_count(), "parsed layout");
    Ok(schema)
}
