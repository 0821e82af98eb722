//! Find a way to the bullseye on a red/blue arrow board
//!
//! Every square on the board is either red or blue and carries an arrow.
//! From a square you may jump any distance along its arrow, landing on a
//! square of the opposite color or on the bullseye in the bottom-right
//! corner. The search starts at the top-left corner.
//!
//! # Examples
//! ```
//! use bullseye_path::{displacement::to_displacements, Board, SearchOutcome};
//!
//! let board = Board::parse(
//!     "
//! 3 3
//! R_E  B_S  R_SW
//! B_NE R_E  B_S
//! R_N  B_E  O",
//! )
//! .unwrap();
//! let SearchOutcome::Found(path) = board.find_path() else {
//!     panic!("board should be solvable");
//! };
//! assert_eq!(to_displacements(&path), "1E 1S 1E 1S\n");
//! ```

pub mod displacement;
mod error;

#[cfg(feature = "boardgen")]
pub mod board_generator;

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use anyhow::Context;
use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{VisitMap, Visitable};
use tracing::{debug, info, trace, warn};

pub use crate::error::{DisplacementError, ParseError, PathError, UnknownDirection};

/// Location on the board
///
/// `y` is the row counted from the top, `x` the column counted from the left.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub y: usize,
    pub x: usize,
}

impl Point {
    /// Top-left corner, where every search starts
    pub const ORIGIN: Point = Point { y: 0, x: 0 };

    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Move `steps` times along `(dy, dx)`, or `None` on underflow
    fn offset(self, (dy, dx): (isize, isize), steps: usize) -> Option<Point> {
        let steps = isize::try_from(steps).ok()?;
        Some(Point {
            y: self.y.checked_add_signed(dy.checked_mul(steps)?)?,
            x: self.x.checked_add_signed(dx.checked_mul(steps)?)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// Square color
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Color {
    Red,
    Blue,
}

/// Compass direction of an arrow
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Unit step `(dy, dx)`, each component in `-1..=1`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// Direction pointing along the signs of `(dy, dx)`; `None` for no movement
    pub fn from_delta(dy: isize, dx: isize) -> Option<Self> {
        let unit = (dy.signum(), dx.signum());
        Self::ALL.into_iter().find(|d| d.delta() == unit)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::S => "S",
            Direction::E => "E",
            Direction::W => "W",
            Direction::NE => "NE",
            Direction::NW => "NW",
            Direction::SE => "SE",
            Direction::SW => "SW",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-sensitive match against the eight compass codes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One square of the board
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    pub point: Point,
    /// `None` only for the bullseye
    pub color: Option<Color>,
    /// `None` only for the bullseye
    pub facing: Option<Direction>,
}

impl Cell {
    pub fn is_bullseye(&self) -> bool {
        self.color.is_none()
    }
}

/// Result of a bullseye search
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SearchOutcome {
    /// Path from the top-left corner to the bullseye, both ends included
    Found(Vec<Point>),
    /// Bullseye is not reachable; `explored` squares were visited
    Unreachable { explored: usize },
}

/// Parsed square before neighborhoods are known
#[derive(Clone, Copy, Debug)]
enum Square {
    Arrow(Color, Direction),
    Bullseye,
}

impl Square {
    fn color(self) -> Option<Color> {
        match self {
            Square::Arrow(color, _) => Some(color),
            Square::Bullseye => None,
        }
    }
}

/// Red/blue arrow board with a bullseye in the bottom-right corner
#[derive(Debug)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    /// Node indices, one per square
    nodes: Vec<Vec<NodeIndex>>,
    /// Jumps between squares
    ///
    /// Weights of the nodes are the squares' coordinates
    graph: DiGraph<Point, ()>,
    rows: usize,
    cols: usize,
    /// Location of the final target
    bullseye: Point,
}

impl Board {
    const S_BULLSEYE: char = 'O';
    const S_RED: char = 'R';

    /// Parse board from whitespace separated text
    ///
    /// The first two tokens are the number of rows and columns, followed by
    /// one descriptor such as `R_NE` or `B_S` per square in row-major order.
    /// The last descriptor is the bullseye `O`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::from_tokens(&text.split_whitespace().collect::<Vec<_>>())
    }

    /// Build board from already split tokens
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        let (rows, cols) = match tokens {
            [rows, cols, ..] => (Self::parse_dimension(rows)?, Self::parse_dimension(cols)?),
            _ => return Err(ParseError::MissingDimension),
        };
        if rows == 0 || cols == 0 {
            return Err(ParseError::EmptyDimension { rows, cols });
        }
        let descriptors = &tokens[2..];
        let expected = rows.saturating_mul(cols);
        if descriptors.len() != expected {
            return Err(ParseError::CellCountMismatch {
                expected,
                found: descriptors.len(),
            });
        }
        debug!(rows, cols, "Parsing board");

        let squares: Vec<Vec<Square>> = descriptors
            .chunks(cols)
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, token)| Self::parse_square(token, y, x, rows, cols))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;

        let mut graph = DiGraph::with_capacity(expected, 0);
        let nodes: Vec<Vec<NodeIndex>> = (0..rows)
            .map(|y| (0..cols).map(|x| graph.add_node(Point { y, x })).collect())
            .collect();
        for y in 0..rows {
            for x in 0..cols {
                Self::add_to_graph(Point { y, x }, &squares, &mut graph, &nodes);
            }
        }

        let cells = squares
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, square)| Cell {
                        point: Point { y, x },
                        color: square.color(),
                        facing: match *square {
                            Square::Arrow(_, facing) => Some(facing),
                            Square::Bullseye => None,
                        },
                    })
                    .collect()
            })
            .collect();

        debug!(edges = graph.edge_count(), "Board built");
        Ok(Board {
            cells,
            nodes,
            graph,
            rows,
            cols,
            bullseye: Point::new(rows - 1, cols - 1),
        })
    }

    fn parse_dimension(token: &str) -> Result<usize, ParseError> {
        token.parse().map_err(|_| ParseError::InvalidDimension {
            token: token.to_string(),
        })
    }

    /// Interpret one cell descriptor `<color><separator><direction>`
    ///
    /// The last square is always the bullseye, whatever its descriptor says.
    fn parse_square(
        token: &str,
        y: usize,
        x: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Square, ParseError> {
        let is_last = y == rows - 1 && x == cols - 1;
        let marker = token.chars().next();
        if is_last {
            if marker != Some(Self::S_BULLSEYE) {
                warn!(token, "Last square is not marked as bullseye, treating it as one");
            }
            return Ok(Square::Bullseye);
        }
        if marker == Some(Self::S_BULLSEYE) {
            return Err(ParseError::MisplacedBullseye {
                token: token.to_string(),
                y,
                x,
            });
        }

        let color = if marker == Some(Self::S_RED) {
            Color::Red
        } else {
            Color::Blue
        };
        let mut chars = token.chars();
        if chars.nth(1).is_none() {
            return Err(ParseError::MissingSeparator {
                token: token.to_string(),
                y,
                x,
            });
        }
        let facing = chars
            .as_str()
            .parse()
            .map_err(|_: UnknownDirection| ParseError::InvalidDirection {
                token: token.to_string(),
                y,
                x,
            })?;
        Ok(Square::Arrow(color, facing))
    }

    /// Add edges `point` -> every square on its arrow's ray.
    ///
    /// [Graph::neighbors](petgraph::graph::Graph::neighbors) lists the most
    /// recently added edge first, so the ray is inserted farthest first to
    /// make the search see the nearest square first.
    ///
    /// ## Arguments
    /// - `point`: Square whose arrow is followed.
    /// - `squares`: Parsed squares.
    /// - `graph`: Graph that we are building.
    /// - `nodes`: Node matrix, one index per square.
    fn add_to_graph(
        point: Point,
        squares: &[Vec<Square>],
        graph: &mut DiGraph<Point, ()>,
        nodes: &[Vec<NodeIndex>],
    ) {
        let from = nodes[point.y][point.x];
        for target in Self::neighborhood(squares, point).into_iter().rev() {
            graph.add_edge(from, nodes[target.y][target.x], ());
        }
    }

    /// Squares reachable from `origin` by jumping along its arrow
    ///
    /// Walks the whole ray up to the board edge and records every square
    /// that is the bullseye or has the opposite color.
    fn neighborhood(squares: &[Vec<Square>], origin: Point) -> Vec<Point> {
        let Square::Arrow(color, facing) = squares[origin.y][origin.x] else {
            return Vec::new();
        };
        let delta = facing.delta();

        (1..)
            .map(|steps| origin.offset(delta, steps))
            .take_while(|p| matches!(p, Some(p) if p.y < squares.len() && p.x < squares[p.y].len()))
            .flatten()
            .filter(|p| squares[p.y][p.x].color() != Some(color))
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bottom-right corner
    pub fn bullseye(&self) -> Point {
        self.bullseye
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.cells.get(point.y)?.get(point.x)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    fn node(&self, point: Point) -> Option<NodeIndex> {
        self.nodes.get(point.y)?.get(point.x).copied()
    }

    /// Squares reachable from `point` in one jump, nearest first
    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        self.node(point)
            .map(|node| self.graph.neighbors(node).map(|n| self.graph[n]).collect())
            .unwrap_or_default()
    }

    /// Depth-first search from the top-left corner to the bullseye
    ///
    /// Neighbors are tried nearest first and the first path found is
    /// returned, which is not necessarily the shortest one. No square is
    /// visited twice, so at most `rows * cols` squares are expanded.
    pub fn find_path(&self) -> SearchOutcome {
        let start = self.nodes[0][0];
        let goal = self.nodes[self.bullseye.y][self.bullseye.x];
        if start == goal {
            return SearchOutcome::Found(vec![Point::ORIGIN]);
        }

        let mut explored = self.graph.visit_map();
        explored.visit(start);
        let mut explored_count = 1;
        let mut stack = vec![(start, self.graph.neighbors(start))];

        while let Some((_, neighbors)) = stack.last_mut() {
            match neighbors.find(|n| !explored.is_visited(n)) {
                Some(node) if node == goal => {
                    let path = stack
                        .iter()
                        .map(|(n, _)| self.graph[*n])
                        .chain([self.bullseye])
                        .collect::<Vec<_>>();
                    info!(moves = path.len() - 1, "Found path to bullseye");
                    return SearchOutcome::Found(path);
                }
                Some(node) => {
                    trace!(point = %self.graph[node], depth = stack.len(), "Exploring");
                    explored.visit(node);
                    explored_count += 1;
                    stack.push((node, self.graph.neighbors(node)));
                }
                None => {
                    stack.pop();
                }
            }
        }

        info!(explored = explored_count, "Bullseye is unreachable");
        SearchOutcome::Unreachable {
            explored: explored_count,
        }
    }

    /// Check that `path` is a legal walk from the top-left corner to the bullseye
    pub fn verify_path(&self, path: &[Point]) -> Result<(), PathError> {
        let (first, last) = match (path.first(), path.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(PathError::Empty),
        };
        if first != Point::ORIGIN {
            return Err(PathError::WrongStart(first));
        }
        if last != self.bullseye {
            return Err(PathError::WrongEnd {
                found: last,
                bullseye: self.bullseye,
            });
        }
        for (from, to) in path.iter().copied().tuple_windows() {
            let legal = match (self.node(from), self.node(to)) {
                (Some(a), Some(b)) => self.graph.contains_edge(a, b),
                _ => false,
            };
            if !legal {
                return Err(PathError::IllegalStep { from, to });
            }
        }
        Ok(())
    }
}

/// Read a board from `input`, search it and write the displacements to `output`
///
/// Nothing is written when the bullseye cannot be reached. The board is
/// handed back so that the caller can inspect or verify the result.
pub fn run(
    mut input: impl Read,
    mut output: impl Write,
) -> anyhow::Result<(Board, SearchOutcome)> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Could not read board")?;
    let board = Board::parse(&text)?;
    let outcome = board.find_path();
    if let SearchOutcome::Found(path) = &outcome {
        output
            .write_all(displacement::to_displacements(path).as_bytes())
            .context("Could not write path")?;
        output.flush().context("Could not write path")?;
    }
    Ok((board, outcome))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::{
        Board, Color, Direction, ParseError, PathError, Point, SearchOutcome, UnknownDirection,
    };

    fn p(y: usize, x: usize) -> Point {
        Point::new(y, x)
    }

    #[test]
    fn parse_board_input() {
        let board = Board::parse(
            "
2 3
R_E B_SW R_S
B_N R_NW O",
        )
        .unwrap();

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.bullseye(), p(1, 2));

        let cell = board.cell(p(0, 1)).unwrap();
        assert_eq!(cell.color, Some(Color::Blue));
        assert_eq!(cell.facing, Some(Direction::SW));
        assert_eq!(board.neighbors(p(0, 1)), vec![]);

        let bullseye = board.cell(p(1, 2)).unwrap();
        assert!(bullseye.is_bullseye());
        assert_eq!(bullseye.facing, None);
        assert!(board.neighbors(p(1, 2)).is_empty());
    }

    #[test]
    fn ray_records_every_color_switch_and_bullseye() {
        use crate::Square::{Arrow, Bullseye};
        let squares = vec![vec![
            Arrow(Color::Red, Direction::E),
            Arrow(Color::Red, Direction::W),
            Arrow(Color::Blue, Direction::E),
            Bullseye,
            Arrow(Color::Blue, Direction::S),
        ]];
        assert_eq!(
            Board::neighborhood(&squares, p(0, 0)),
            vec![p(0, 2), p(0, 3), p(0, 4)]
        );
        assert_eq!(Board::neighborhood(&squares, p(0, 2)), vec![p(0, 3)]);
        assert!(Board::neighborhood(&squares, p(0, 3)).is_empty());

        let board = Board::parse("1 5 R_E R_W B_E R_W O").unwrap();
        assert_eq!(board.neighbors(p(0, 0)), vec![p(0, 2), p(0, 4)]);
    }

    #[test]
    fn bullseye_must_be_last() {
        assert_eq!(
            Board::parse("1 5 R_E R_W B_W O_x B_S").unwrap_err(),
            ParseError::MisplacedBullseye {
                token: "O_x".into(),
                y: 0,
                x: 3
            }
        );
    }

    #[test]
    fn ray_passes_through_same_color() {
        let board = Board::parse("1 5 R_E R_W B_E B_W O").unwrap();
        assert_eq!(board.neighbors(p(0, 0)), vec![p(0, 2), p(0, 3), p(0, 4)]);
        assert_eq!(board.neighbors(p(0, 2)), vec![p(0, 4)]);
    }

    #[test]
    fn arrow_out_of_board_has_no_neighbors() {
        let board = Board::parse("2 2 R_N B_NE B_W O").unwrap();
        assert!(board.neighbors(p(0, 0)).is_empty());
        assert!(board.neighbors(p(0, 1)).is_empty());
        assert_eq!(board.neighbors(p(1, 0)), vec![]);
    }

    #[test]
    fn diagonal_rays() {
        let board = Board::parse(
            "3 3
            R_SE B_S  R_S
            B_E  B_NE R_S
            R_N  B_NW O",
        )
        .unwrap();
        assert_eq!(board.neighbors(p(0, 0)), vec![p(1, 1), p(2, 2)]);
        assert_eq!(board.neighbors(p(2, 1)), vec![]);
        assert_eq!(board.neighbors(p(1, 1)), vec![p(0, 2)]);
    }

    #[test]
    fn invalid_direction_is_rejected() {
        let err = Board::parse("1 2 R_Q O").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDirection {
                token: "R_Q".into(),
                y: 0,
                x: 0
            }
        );
        // Codes are case-sensitive
        assert!(matches!(
            Board::parse("1 2 R_ne O"),
            Err(ParseError::InvalidDirection { .. })
        ));
        assert!(matches!(
            Board::parse("1 2 R O"),
            Err(ParseError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        assert_eq!(Board::parse("").unwrap_err(), ParseError::MissingDimension);
        assert_eq!(Board::parse("3").unwrap_err(), ParseError::MissingDimension);
        assert_eq!(
            Board::parse("3 x").unwrap_err(),
            ParseError::InvalidDimension { token: "x".into() }
        );
        assert_eq!(
            Board::parse("0 4").unwrap_err(),
            ParseError::EmptyDimension { rows: 0, cols: 4 }
        );
    }

    #[test]
    fn cell_count_must_match_dimensions() {
        assert_eq!(
            Board::parse("2 2 R_E B_S O").unwrap_err(),
            ParseError::CellCountMismatch {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(
            Board::parse("1 2 R_E O B_S").unwrap_err(),
            ParseError::CellCountMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn single_square_board_is_solved_immediately() {
        let board = Board::parse("1 1 O").unwrap();
        assert_eq!(board.find_path(), SearchOutcome::Found(vec![p(0, 0)]));
    }

    #[test]
    fn first_found_path_follows_neighbor_order() {
        // (0,0) sees (0,1) first, whose ray is a dead end, then backtracks
        // to (0,2). Its ray holds (1,2), another dead end, and the bullseye.
        let board = Board::parse(
            "3 3
            R_E  B_N  B_S
            R_E  R_E  R_E
            R_E  R_E  O",
        )
        .unwrap();
        assert_eq!(board.neighbors(p(0, 0)), vec![p(0, 1), p(0, 2)]);
        assert_eq!(
            board.find_path(),
            SearchOutcome::Found(vec![p(0, 0), p(0, 2), p(2, 2)])
        );
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        // (0,0) and (0,1) point at each other; nothing reaches the bullseye.
        let board = Board::parse(
            "2 2
            R_E B_W
            R_N O",
        )
        .unwrap();
        assert_eq!(board.find_path(), SearchOutcome::Unreachable { explored: 2 });
    }

    #[test]
    fn isolated_bullseye_is_unreachable() {
        let board = Board::parse(
            "3 3
            R_E  B_S  R_W
            B_N  R_N  B_E
            R_N  B_N  O",
        )
        .unwrap();
        match board.find_path() {
            SearchOutcome::Unreachable { explored } => assert!(explored <= 9),
            found => panic!("expected unreachable, got {found:?}"),
        }
    }

    #[test]
    fn long_chain_does_not_overflow_stack() {
        // Single row of alternating colors all pointing east: the first
        // neighbor of every square is the next one, so the path visits all.
        let cols = 2_000;
        let mut text = format!("1 {cols}");
        for x in 0..cols - 1 {
            text.push_str(if x % 2 == 0 { " R_E" } else { " B_E" });
        }
        text.push_str(" O");
        let board = Board::parse(&text).unwrap();
        match board.find_path() {
            SearchOutcome::Found(path) => {
                assert_eq!(path.len(), cols);
                assert_eq!(path.last(), Some(&p(0, cols - 1)));
                board.verify_path(&path).unwrap();
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn verify_found_path() {
        let board = Board::parse(
            "3 3
            R_E  B_S  R_SW
            B_NE R_E  B_S
            R_N  B_E  O",
        )
        .unwrap();
        let SearchOutcome::Found(path) = board.find_path() else {
            panic!("expected a path");
        };
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(2, 2)]);
        board.verify_path(&path).unwrap();

        assert_eq!(board.verify_path(&[]), Err(PathError::Empty));
        assert_eq!(
            board.verify_path(&[p(0, 1), p(2, 2)]),
            Err(PathError::WrongStart(p(0, 1)))
        );
        assert_eq!(
            board.verify_path(&[p(0, 0), p(0, 1)]),
            Err(PathError::WrongEnd {
                found: p(0, 1),
                bullseye: p(2, 2)
            })
        );
        assert_eq!(
            board.verify_path(&[p(0, 0), p(2, 2)]),
            Err(PathError::IllegalStep {
                from: p(0, 0),
                to: p(2, 2)
            })
        );
    }

    #[test]
    fn direction_codes() {
        assert_eq!("SW".parse::<Direction>(), Ok(Direction::SW));
        assert_eq!(
            "sw".parse::<Direction>(),
            Err(UnknownDirection("sw".into()))
        );
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    /// Random red/blue board text, 1..=6 squares on each side, bullseye last
    fn random_board() -> impl Strategy<Value = (usize, usize, String)> {
        (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
            let square = (any::<bool>(), 0..Direction::ALL.len());
            prop::collection::vec(square, rows * cols - 1).prop_map(move |squares| {
                let descriptors = squares
                    .into_iter()
                    .map(|(red, d)| format!("{}_{}", if red { 'R' } else { 'B' }, Direction::ALL[d]))
                    .chain(["O".to_string()])
                    .join(" ");
                (rows, cols, format!("{rows} {cols} {descriptors}"))
            })
        })
    }

    proptest! {
        #[test]
        fn search_never_visits_a_square_twice((rows, cols, text) in random_board()) {
            let board = Board::parse(&text).unwrap();
            match board.find_path() {
                SearchOutcome::Found(path) => {
                    prop_assert!(path.iter().all_unique());
                    prop_assert_eq!(board.verify_path(&path), Ok(()));
                }
                SearchOutcome::Unreachable { explored } => {
                    prop_assert!(explored >= 1 && explored <= rows * cols);
                }
            }
        }
    }
}
