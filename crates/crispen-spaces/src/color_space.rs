//! Color space values stored in a [`ColorSpaceSet`](crate::ColorSpaceSet).
//!
//! A set only needs two things from its entries: a name to key on, and a
//! deep copy. [`ColorSpace`] captures exactly that, so the set never looks at
//! primaries, transforms, or anything else a color space carries.

use serde::{Deserialize, Serialize};

use crate::name::names_match;

/// The capability a value needs to live in a [`ColorSpaceSet`](crate::ColorSpaceSet).
///
/// `Clone` must produce an independent deep copy: the set clones every value
/// it is handed and every value it hands to another set.
pub trait ColorSpace: Clone {
    /// Name used as the identity of this color space.
    fn name(&self) -> &str;
}

/// Broad classification of how a color space encodes values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Linear, scene-referred light.
    SceneLinear,
    /// Logarithmic camera or grading encoding.
    Log,
    /// Display-referred SDR video.
    SdrVideo,
    /// Display-referred HDR video.
    HdrVideo,
    /// Non-color data (normals, masks, depth).
    Data,
    /// Not declared.
    #[default]
    Unspecified,
}

/// A named color space description, as listed by a color management config.
///
/// Data spaces are those whose encoding is [`Encoding::Data`]. Documents may
/// also flag them with `"is_data": true`, which sets that encoding on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorSpaceDoc")]
pub struct ColorSpaceDesc {
    /// Unique name (matched case-insensitively).
    pub name: String,
    /// Slash-separated family used to group spaces in menus, e.g. `"ACES"`.
    pub family: String,
    /// Free-form description.
    pub description: String,
    /// Encoding of the values in this space.
    pub encoding: Encoding,
    /// Categories used to filter spaces for a given UI context.
    pub categories: Vec<String>,
}

/// On-disk form of [`ColorSpaceDesc`].
#[derive(Deserialize)]
struct ColorSpaceDoc {
    name: String,
    #[serde(default)]
    family: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    encoding: Encoding,
    #[serde(default)]
    is_data: bool,
    #[serde(default)]
    categories: Vec<String>,
}

impl From<ColorSpaceDoc> for ColorSpaceDesc {
    fn from(doc: ColorSpaceDoc) -> Self {
        Self {
            name: doc.name,
            family: doc.family,
            description: doc.description,
            encoding: if doc.is_data {
                Encoding::Data
            } else {
                doc.encoding
            },
            categories: doc.categories,
        }
    }
}

impl ColorSpaceDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family: String::new(),
            description: String::new(),
            encoding: Encoding::Unspecified,
            categories: Vec::new(),
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Add a category, ignoring it if an equal (case-insensitive) one exists.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.has_category(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Mark this space as non-color data.
    pub fn as_data(mut self) -> Self {
        self.encoding = Encoding::Data;
        self
    }

    /// Whether values are non-color data that must bypass color transforms.
    pub fn is_data(&self) -> bool {
        self.encoding == Encoding::Data
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| names_match(c, category))
    }
}

impl ColorSpace for ColorSpaceDesc {
    fn name(&self) -> &str {
        &self.name
    }
}
