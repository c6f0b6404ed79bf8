// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape checks run before any geometry is compiled
//!
//! Only the plan's structural contract is enforced here. Object footprints
//! are left alone: a bad footprint is dropped by the geometry stage instead of
//! rejecting the whole plan.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{Region, ScenePlan};

impl ScenePlan {
    /// Reject plans whose geometry would be meaningless
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.size.x, self.size.y);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidWorldSize { width, height });
        }

        let mut seen = HashSet::with_capacity(self.regions.len());
        for region in &self.regions {
            validate_region(region)?;
            if !seen.insert(region.id.as_str()) {
                return Err(Error::DuplicateRegion(region.id.clone()));
            }
        }

        Ok(())
    }
}

fn validate_region(region: &Region) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidRegion {
        id: region.id.clone(),
        reason: reason.to_string(),
    };

    if !region.bbox_min.is_finite() || !region.bbox_max.is_finite() {
        return Err(invalid("bounding box is not finite"));
    }
    if region.bbox_min.x > region.bbox_max.x {
        return Err(invalid("bbox_min.x is greater than bbox_max.x"));
    }
    if region.bbox_min.y > region.bbox_max.y {
        return Err(invalid("bbox_min.y is greater than bbox_max.y"));
    }

    Ok(())
}
