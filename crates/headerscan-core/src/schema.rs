//! The seven header features and their canonical order.
//!
//! Every component indexes features through [`Feature`], so the order below is
//! shared by the extractor, the classifiers, the consistency checker and any
//! serialized output.

use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ExtractError;

/// Data directory holding the export table.
pub const EXPORT_DIRECTORY: usize = 0;
/// Data directory read for the `IatRVA` feature.
pub const IMPORT_DIRECTORY: usize = 1;
/// Data directory holding the resource table.
pub const RESOURCE_DIRECTORY: usize = 2;
/// Data directory holding the debug table.
pub const DEBUG_DIRECTORY: usize = 6;

/// One header feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    DebugSize,
    ImageVersion,
    IatRva,
    ExportSize,
    ResourceSize,
    VirtualSize2,
    NumberOfSections,
}

impl Feature {
    pub const COUNT: usize = 7;

    /// All features in canonical order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::DebugSize,
        Feature::ImageVersion,
        Feature::IatRva,
        Feature::ExportSize,
        Feature::ResourceSize,
        Feature::VirtualSize2,
        Feature::NumberOfSections,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Feature::DebugSize => "DebugSize",
            Feature::ImageVersion => "ImageVersion",
            Feature::IatRva => "IatRVA",
            Feature::ExportSize => "ExportSize",
            Feature::ResourceSize => "ResourceSize",
            Feature::VirtualSize2 => "VirtualSize2",
            Feature::NumberOfSections => "NumberOfSections",
        }
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully populated feature vector.
///
/// There is no way to build one with a missing or non-finite value: the
/// extractor only hands one out on success, and [`TryFrom<[f64; 7]>`] checks
/// every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Values in canonical order.
    pub fn to_array(&self) -> [f64; Feature::COUNT] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

impl TryFrom<[f64; Feature::COUNT]> for FeatureVector {
    type Error = ExtractError;

    fn try_from(values: [f64; Feature::COUNT]) -> Result<Self, Self::Error> {
        if let Some(feature) = Feature::ALL.iter().find(|f| !values[f.index()].is_finite()) {
            return Err(ExtractError::NonFinite(*feature));
        }
        Ok(Self { values })
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.values[feature.index()]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (feature, value) in self.iter() {
            let label = format!("{feature}:");
            writeln!(f, "{label:<18}{value}")?;
        }
        Ok(())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}
