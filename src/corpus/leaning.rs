use serde::{Deserialize, Serialize};

/// Political direction of a labeled sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leaning {
    Liberal,
    Conservative,
    Neutral,
}

impl Leaning {
    /// Signed label used in fusion: `+1` liberal, `-1` conservative, `0` neutral.
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Leaning::Liberal => 1.0,
            Leaning::Conservative => -1.0,
            Leaning::Neutral => 0.0,
        }
    }

    /// Non-negative class label used by the classifier (`-1` is stored as `2`).
    #[inline]
    pub fn class_label(self) -> u8 {
        match self {
            Leaning::Neutral => 0,
            Leaning::Liberal => 1,
            Leaning::Conservative => 2,
        }
    }

    /// Inverse of [`Leaning::class_label`].
    #[inline]
    pub fn from_class_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Leaning::Neutral),
            1 => Some(Leaning::Liberal),
            2 => Some(Leaning::Conservative),
            _ => None,
        }
    }

    /// Leaning carried by the sign of an intensity.
    #[inline]
    pub fn from_intensity(intensity: f32) -> Self {
        if intensity > 0.0 {
            Leaning::Liberal
        } else if intensity < 0.0 {
            Leaning::Conservative
        } else {
            Leaning::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Leaning::Liberal => "liberal",
            Leaning::Conservative => "conservative",
            Leaning::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Leaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
