//! Coordinate synthesis for records that arrive without a position.
//!
//! Raw location and waypoint records carry no floor-plan coordinates, yet the
//! record graph weighs its edges by straight-line distance. [`CoordinateLayout`]
//! decides where such nodes land inside a `LAYOUT_EXTENT` square. Coordinates
//! supplied on a record are always used as-is.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::graph::Coordinates;

/// Side length of the square that synthesized coordinates fall into.
pub const LAYOUT_EXTENT: f64 = 200.0;

/// Strategy for placing nodes that have no stored coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateLayout {
    /// Stable placement derived from a SHA-256 digest of the node id.
    #[default]
    Hashed,
    /// Fresh uniform random placement on every call. Paths over the same
    /// input may differ between calls.
    Random,
}

impl CoordinateLayout {
    /// Resolve the coordinates for `id`, preferring `supplied` when present.
    pub fn place(self, id: &str, supplied: Option<Coordinates>) -> Coordinates {
        if let Some(coordinates) = supplied {
            return coordinates;
        }

        match self {
            CoordinateLayout::Hashed => hashed_coordinates(id),
            CoordinateLayout::Random => {
                let mut rng = rand::thread_rng();
                Coordinates::new(
                    rng.gen_range(0.0..LAYOUT_EXTENT),
                    rng.gen_range(0.0..LAYOUT_EXTENT),
                )
            }
        }
    }
}

impl fmt::Display for CoordinateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CoordinateLayout::Hashed => "hashed",
            CoordinateLayout::Random => "random",
        };
        f.write_str(value)
    }
}

impl FromStr for CoordinateLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hashed" | "hash" => Ok(CoordinateLayout::Hashed),
            "random" => Ok(CoordinateLayout::Random),
            _ => Err(Error::InvalidLayout {
                value: s.to_string(),
            }),
        }
    }
}

fn hashed_coordinates(id: &str) -> Coordinates {
    let digest = Sha256::digest(id.as_bytes());
    let x = unit_interval(&digest[0..8]);
    let y = unit_interval(&digest[8..16]);
    Coordinates::new(x * LAYOUT_EXTENT, y * LAYOUT_EXTENT)
}

/// Map eight digest bytes onto `[0, 1)`.
fn unit_interval(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    // Keep the top 53 bits so the value is exactly representable.
    (u64::from_be_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_layout_is_deterministic() {
        let first = CoordinateLayout::Hashed.place("room-101", None);
        let second = CoordinateLayout::Hashed.place("room-101", None);
        assert_eq!(first, second);
        assert_ne!(first, CoordinateLayout::Hashed.place("room-102", None));
    }

    #[test]
    fn synthesized_coordinates_stay_in_extent() {
        for layout in [CoordinateLayout::Hashed, CoordinateLayout::Random] {
            for id in ["a", "b", "lobby", "wp-7", ""] {
                let point = layout.place(id, None);
                assert!((0.0..LAYOUT_EXTENT).contains(&point.x), "{layout} {id}");
                assert!((0.0..LAYOUT_EXTENT).contains(&point.y), "{layout} {id}");
            }
        }
    }

    #[test]
    fn supplied_coordinates_win() {
        let supplied = Coordinates::new(1.5, -2.0);
        assert_eq!(CoordinateLayout::Random.place("x", Some(supplied)), supplied);
        assert_eq!(CoordinateLayout::Hashed.place("x", Some(supplied)), supplied);
    }

    #[test]
    fn parses_layout_names() {
        assert_eq!("hashed".parse::<CoordinateLayout>().unwrap(), CoordinateLayout::Hashed);
        assert_eq!("RANDOM".parse::<CoordinateLayout>().unwrap(), CoordinateLayout::Random);
        assert!(matches!(
            "grid".parse::<CoordinateLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
    }
}
