// Galaxy coordinate inputs: clamping, random picks and named-range lookup
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound for every coordinate axis
pub const MAX_COORDINATE: u32 = 10_000_000;

/// Values at or below this always select the first named range
const FIRST_OPTION_CEILING: u32 = 999_999;
/// Values from here up to the maximum always select the last named range
const LAST_OPTION_FLOOR: u32 = 9_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalaxyCoordinates {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl GalaxyCoordinates {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Pick each axis uniformly in `[0, max]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max: u32) -> Self {
        Self {
            x: rng.random_range(0..=max),
            y: rng.random_range(0..=max),
            z: rng.random_range(0..=max),
        }
    }

    /// Key used for this galaxy in the visitation record
    pub fn key(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.z)
    }

    pub fn parse_key(key: &str) -> Option<Self> {
        let mut parts = key.split(',').map(|part| part.trim().parse::<u32>());
        let x = parts.next()?.ok()?;
        let y = parts.next()?.ok()?;
        let z = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y, z })
    }
}

impl std::fmt::Display for GalaxyCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Normalize a typed coordinate the way the number input does: the leading
/// integer is used, anything unparseable or negative becomes 0 and values
/// above the maximum are capped.
pub fn clamp_coordinate(text: &str, max: u32) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    // Any digit string too long for u64 is far above the cap anyway
    match digits.parse::<u64>() {
        Ok(value) if value <= u64::from(max) => value as u32,
        _ => max,
    }
}

/// Find the named range a coordinate value falls in.
///
/// `option_values` are the ascending lower bounds of each named range. The
/// first range also absorbs everything up to 999,999 and the last range
/// everything from 9,000,000 to `max`.
pub fn select_option_index(option_values: &[u32], value: u32, max: u32) -> Option<usize> {
    let count = option_values.len();
    for (i, &option_value) in option_values.iter().enumerate() {
        let next_value = option_values
            .get(i + 1)
            .map(|&v| u64::from(v))
            .unwrap_or(u64::from(max) + 1);

        let in_first = i == 0 && value <= FIRST_OPTION_CEILING;
        let in_range = value >= option_value && u64::from(value) < next_value;
        let in_last = i == count - 1 && (LAST_OPTION_FLOOR..=max).contains(&value);

        if in_first || in_range || in_last {
            return Some(i);
        }
    }
    None
}
