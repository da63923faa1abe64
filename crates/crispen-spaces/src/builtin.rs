//! Color spaces Crispen knows natively, without an OCIO config.

use crate::color_space::{ColorSpaceDesc, Encoding};
use crate::set::ColorSpaceSet;

/// Identifies a built-in color space.
///
/// User-defined spaces are plain [`ColorSpaceDesc`] values with their own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpaceId {
    /// ACES 2065-1 (AP0 primaries, linear).
    Aces2065_1,
    /// ACEScg (AP1 primaries, linear).
    AcesCg,
    /// ACEScc (AP1 primaries, logarithmic).
    AcesCc,
    /// ACEScct (AP1 primaries, logarithmic with toe).
    AcesCct,
    /// sRGB (Rec. 709 primaries, sRGB transfer).
    Srgb,
    /// Linear sRGB (Rec. 709 primaries, linear).
    LinearSrgb,
    /// ITU-R BT.2020.
    Rec2020,
    /// DCI-P3.
    DciP3,
    /// ARRI LogC3 (ALEXA classic).
    ArriLogC3,
    /// ARRI LogC4 (ALEXA 35).
    ArriLogC4,
    /// Sony S-Log3.
    SLog3,
    /// RED Log3G10.
    RedLog3G10,
    /// Panasonic V-Log.
    VLog,
}

impl ColorSpaceId {
    /// Name under which this space appears in a [`ColorSpaceSet`].
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aces2065_1 => "ACES2065-1",
            Self::AcesCg => "ACEScg",
            Self::AcesCc => "ACEScc",
            Self::AcesCct => "ACEScct",
            Self::Srgb => "sRGB",
            Self::LinearSrgb => "Linear sRGB",
            Self::Rec2020 => "Rec.2020",
            Self::DciP3 => "DCI-P3",
            Self::ArriLogC3 => "ARRI LogC3",
            Self::ArriLogC4 => "ARRI LogC4",
            Self::SLog3 => "Sony S-Log3",
            Self::RedLog3G10 => "RED Log3G10",
            Self::VLog => "Panasonic V-Log",
        }
    }

    /// Every built-in space.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorSpaceId; 13] = [
            ColorSpaceId::Aces2065_1,
            ColorSpaceId::AcesCg,
            ColorSpaceId::AcesCc,
            ColorSpaceId::AcesCct,
            ColorSpaceId::Srgb,
            ColorSpaceId::LinearSrgb,
            ColorSpaceId::Rec2020,
            ColorSpaceId::DciP3,
            ColorSpaceId::ArriLogC3,
            ColorSpaceId::ArriLogC4,
            ColorSpaceId::SLog3,
            ColorSpaceId::RedLog3G10,
            ColorSpaceId::VLog,
        ];
        &ALL
    }

    const fn family(&self) -> &'static str {
        match self {
            Self::Aces2065_1 | Self::AcesCg | Self::AcesCc | Self::AcesCct => "ACES",
            Self::Srgb | Self::LinearSrgb | Self::Rec2020 | Self::DciP3 => "Display",
            Self::ArriLogC3 | Self::ArriLogC4 | Self::SLog3 | Self::RedLog3G10 | Self::VLog => {
                "Camera"
            }
        }
    }

    const fn encoding(&self) -> Encoding {
        match self {
            Self::Aces2065_1 | Self::AcesCg | Self::LinearSrgb => Encoding::SceneLinear,
            Self::AcesCc
            | Self::AcesCct
            | Self::ArriLogC3
            | Self::ArriLogC4
            | Self::SLog3
            | Self::RedLog3G10
            | Self::VLog => Encoding::Log,
            Self::Srgb | Self::DciP3 => Encoding::SdrVideo,
            Self::Rec2020 => Encoding::HdrVideo,
        }
    }

    const fn is_working_space(&self) -> bool {
        matches!(self, Self::AcesCg | Self::AcesCct | Self::LinearSrgb)
    }
}

impl From<ColorSpaceId> for ColorSpaceDesc {
    fn from(id: ColorSpaceId) -> Self {
        let desc = ColorSpaceDesc::new(id.label())
            .with_family(id.family())
            .with_encoding(id.encoding())
            .with_category("file-io");
        if id.is_working_space() {
            desc.with_category("working-space")
        } else {
            desc
        }
    }
}

impl ColorSpaceSet<ColorSpaceDesc> {
    /// The catalog of every built-in color space, in [`ColorSpaceId::all`] order.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for id in ColorSpaceId::all() {
            set.insert_unchecked(ColorSpaceDesc::from(*id));
        }
        set
    }
}
