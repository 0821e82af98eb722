//! Compact text form of a path
//!
//! Each move between two consecutive squares becomes a token such as `3SE`:
//! the number of squares jumped followed by the compass direction.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{DisplacementError, Direction, Point};

/// Straight-line move between two squares
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Displacement {
    /// Chebyshev distance of the move
    pub magnitude: usize,
    /// `None` only for a move that stays in place
    pub direction: Option<Direction>,
}

impl Displacement {
    /// Move from `from` to `to`
    ///
    /// Only moves along one of the eight compass lines can be reproduced
    /// exactly by [Self::apply]; board jumps always are such moves.
    pub fn between(from: Point, to: Point) -> Self {
        let dy = to.y as isize - from.y as isize;
        let dx = to.x as isize - from.x as isize;
        Displacement {
            magnitude: dy.unsigned_abs().max(dx.unsigned_abs()),
            direction: Direction::from_delta(dy, dx),
        }
    }

    /// Target square when moving from `from`, or `None` if it falls off the top or left
    pub fn apply(self, from: Point) -> Option<Point> {
        match self.direction {
            Some(direction) => from.offset(direction.delta(), self.magnitude),
            None => Some(from),
        }
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)?;
        if let Some(direction) = self.direction {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

impl FromStr for Displacement {
    type Err = DisplacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, letters) = s.split_at(split);
        let magnitude = digits
            .parse()
            .map_err(|_| DisplacementError::MissingMagnitude(s.to_string()))?;
        let direction = match letters {
            "" => None,
            code => Some(
                code.parse()
                    .map_err(|_| DisplacementError::InvalidDirection(s.to_string()))?,
            ),
        };
        Ok(Displacement {
            magnitude,
            direction,
        })
    }
}

/// Serialize path into space separated displacements, ending with a newline
///
/// A path with a single square has no moves and becomes just `"\n"`.
///
/// # Examples
/// ```
/// use bullseye_path::{displacement::to_displacements, Point};
///
/// let path = [Point::new(0, 0), Point::new(2, 0), Point::new(7, 5)];
/// assert_eq!(to_displacements(&path), "2S 5SE\n");
/// ```
pub fn to_displacements(path: &[Point]) -> String {
    let mut out = path
        .iter()
        .tuple_windows()
        .map(|(a, b)| Displacement::between(*a, *b))
        .join(" ");
    out.push('\n');
    out
}

/// Walk displacement tokens from `start`, returning every square visited
///
/// The result includes `start` itself.
pub fn apply_displacements(start: Point, text: &str) -> Result<Vec<Point>, DisplacementError> {
    let mut path = vec![start];
    let mut current = start;
    for token in text.split_whitespace() {
        let displacement: Displacement = token.parse()?;
        current = displacement
            .apply(current)
            .ok_or_else(|| DisplacementError::OutOfBounds {
                token: token.to_string(),
                from: current,
            })?;
        path.push(current);
    }
    Ok(path)
}
