// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object kind classification
//!
//! Kind tags are free-form text from the generator. Only a handful of tags
//! carry meaning for compilation; everything else is decoration.

/// Compilation-relevant class of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    /// `wall`
    Wall,
    /// `house`, `building`, `tower`
    Building,
    /// `structure`: blocks movement but has no dedicated blockout height
    Structure,
    /// Trees, roads, props and anything unrecognised
    Other,
}

impl ObjectClass {
    /// Classify a kind tag (case-insensitive, surrounding whitespace ignored)
    pub fn from_kind(kind: &str) -> Self {
        let kind = kind.trim();
        if kind.eq_ignore_ascii_case("wall") {
            ObjectClass::Wall
        } else if kind.eq_ignore_ascii_case("house")
            || kind.eq_ignore_ascii_case("building")
            || kind.eq_ignore_ascii_case("tower")
        {
            ObjectClass::Building
        } else if kind.eq_ignore_ascii_case("structure") {
            ObjectClass::Structure
        } else {
            ObjectClass::Other
        }
    }

    /// Whether the footprint is subtracted from the walkable area
    #[inline]
    pub fn is_obstacle(self) -> bool {
        !matches!(self, ObjectClass::Other)
    }
}
