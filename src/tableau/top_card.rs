//! Per-column index of the reachable mine card.
//!
//! Within a column the card in the highest slot id was dealt last and sits
//! physically on top, so it is the only one a player may take. Slot ids are
//! unique, so there are never ties.

use im::OrdMap;
use rustc_hash::FxHashMap;

use crate::core::card::CardId;
use crate::layout::{Column, LayoutSchema, SlotId};

/// The reachable card of one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TopCard {
    pub slot: SlotId,
    pub card: CardId,
}

/// Column -> reachable card. Rebuilt after every mine change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopCardIndex {
    tops: FxHashMap<Column, TopCard>,
}

impl TopCardIndex {
    /// Build the index for the given mine.
    ///
    /// Slots missing from `schema` are skipped.
    #[must_use]
    pub fn recompute(schema: &LayoutSchema, mine: &OrdMap<SlotId, CardId>) -> Self {
        let mut tops: FxHashMap<Column, TopCard> = FxHashMap::default();

        for (&slot, &card) in mine.iter() {
            let Some(definition) = schema.slot(slot) else {
                continue;
            };
            let candidate = TopCard { slot, card };
            tops.entry(definition.column)
                .and_modify(|top| {
                    if slot > top.slot {
                        *top = candidate;
                    }
                })
                .or_insert(candidate);
        }

        Self { tops }
    }

    /// Reachable card of a column.
    #[must_use]
    pub fn get(&self, column: Column) -> Option<TopCard> {
        self.tops.get(&column).copied()
    }

    /// Is `card` the reachable card of `column`?
    #[must_use]
    pub fn is_top(&self, column: Column, card: CardId) -> bool {
        self.get(column).is_some_and(|top| top.card == card)
    }

    /// All (column, top card) pairs, in column order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Column, TopCard)> {
        let mut entries: Vec<_> = self.tops.iter().map(|(&c, &t)| (c, t)).collect();
        entries.sort_by_key(|(column, _)| *column);
        entries
    }

    /// Number of columns with at least one mine card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }
}
