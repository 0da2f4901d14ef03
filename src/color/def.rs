use crate::foundation::core::Rgb;
use serde::Deserialize;

/// JSON-facing color literal.
///
/// Accepted forms: `"#RRGGBB"` (also `"RRGGBB"` / `"0xRRGGBB"`), a packed integer `0xRRGGBB`,
/// `{ "r": .., "g": .., "b": .. }` and `[r, g, b]` with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColorDef(pub(crate) Rgb);

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Packed(u64),
            RgbObj { r: f64, g: f64, b: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::Packed(v) => {
                let packed = u32::try_from(v)
                    .ok()
                    .filter(|v| *v <= 0x00ff_ffff)
                    .ok_or_else(|| {
                        serde::de::Error::custom("packed color must be within 0x000000..=0xffffff")
                    })?;
                Ok(Self(Rgb::from_hex(packed)))
            }
            Repr::RgbObj { r, g, b } => Ok(Self(Rgb::new(r, g, b))),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self(Rgb::new(v[0], v[1], v[2])))
                } else {
                    Err(serde::de::Error::custom(
                        "rgb array must have len 3 ([r,g,b])",
                    ))
                }
            }
        }
    }
}

pub(crate) fn deserialize_rgb<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: serde::Deserializer<'de>,
{
    ColorDef::deserialize(deserializer).map(|c| c.0)
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    let s = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if s.len() != 6 {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let packed =
        u32::from_str_radix(s, 16).map_err(|_| format!("invalid hex color \"{s}\""))?;
    Ok(Rgb::from_hex(packed))
}

#[cfg(test)]
#[path = "../../tests/unit/color/def.rs"]
mod tests;
