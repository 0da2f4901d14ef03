use serde::{Deserialize, Serialize};

/// Distance weighting family used to blend samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeightKind {
    /// `1 / d`.
    Inverse,
    /// `1 / d²`.
    #[default]
    InverseSquare,
    /// `exp(-d)`.
    Exponential,
    /// A name that matched no known family. Weighs exactly like [`WeightKind::InverseSquare`].
    Unrecognized,
}

impl WeightKind {
    /// Resolve a configuration name. Matching is exact; any other spelling (including case or
    /// whitespace variants) yields [`WeightKind::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "inverse" => Self::Inverse,
            "inverse_square" => Self::InverseSquare,
            "exponential" => Self::Exponential,
            _ => {
                tracing::warn!(
                    name,
                    "unrecognized weight function, falling back to inverse_square"
                );
                Self::Unrecognized
            }
        }
    }

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inverse => "inverse",
            Self::InverseSquare => "inverse_square",
            Self::Exponential => "exponential",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Weight for a sample at `distance` from the query.
    ///
    /// The inverse families are singular at `distance == 0` and return `+inf` there.
    #[inline]
    pub fn weight(self, distance: f64) -> f64 {
        match self {
            Self::Inverse => 1.0 / distance,
            Self::Exponential => (-distance).exp(),
            Self::InverseSquare | Self::Unrecognized => 1.0 / (distance * distance),
        }
    }

    /// Weight evaluated relative to the nearest sample distance `nearest`.
    ///
    /// Ratios between samples match [`WeightKind::weight`]: the inverse families are homogeneous
    /// (`d / nearest`) and the exponential family is shift-invariant (`d - nearest`). The nearest
    /// sample always receives weight 1, so the total cannot underflow to zero.
    #[inline]
    pub fn relative_weight(self, distance: f64, nearest: f64) -> f64 {
        match self {
            Self::Exponential => (-(distance - nearest)).exp(),
            _ => self.weight(distance / nearest),
        }
    }
}

impl Serialize for WeightKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for WeightKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/weight.rs"]
mod tests;
