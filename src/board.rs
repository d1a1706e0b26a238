use std::collections::{HashMap, HashSet};

use crate::game_state::Player;
use crate::point::Point;
use crate::zobrist::{self, MAX_BOARD_SIZE};

/// A connected set of same-colored stones together with its liberties.
///
/// Exactly one logical instance exists per group on a board; every grid cell
/// the group occupies refers to the same arena slot, so a liberty mutation is
/// visible from all of them at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    pub color: Player,
    pub stones: HashSet<Point>,
    pub liberties: HashSet<Point>,
}

impl GoString {
    pub fn new(color: Player, stones: HashSet<Point>, liberties: HashSet<Point>) -> GoString {
        GoString { color, stones, liberties }
    }

    /// Merge two strings of the same color into one. Stones are the union;
    /// liberties are the union of liberties minus the union of stones.
    /// Merging is associative and commutative, so callers may fold candidate
    /// strings in any order.
    pub fn merged_with(&self, other: &GoString) -> GoString {
        assert_eq!(self.color, other.color);
        let stones: HashSet<Point> = self.stones.union(&other.stones).cloned().collect();
        let liberties = self.liberties.union(&other.liberties)
            .filter(|point| !stones.contains(point))
            .cloned()
            .collect();
        GoString { color: self.color, stones, liberties }
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(&point);
    }

    pub fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }
}

/// A Go board: a grid of points, each empty or occupied by a stone belonging
/// to some string.
///
/// Strings live in an arena (`groups`); the grid maps occupied points to
/// arena indices. Removing a string's liberty touches one slot and every
/// cell of the string observes it, so there are no stale per-cell copies to
/// keep in sync. `clone()` deep-copies the arena, which keeps the indices
/// valid on the copy.
#[derive(Clone, Debug)]
pub struct Board {
    pub num_rows: usize,
    pub num_cols: usize,
    grid: HashMap<Point, usize>,
    groups: Vec<Option<GoString>>,
    hash: u64,
}

impl Board {
    pub fn new(num_rows: usize, num_cols: usize) -> Board {
        assert!(num_rows >= 1 && num_rows <= MAX_BOARD_SIZE);
        assert!(num_cols >= 1 && num_cols <= MAX_BOARD_SIZE);
        Board {
            num_rows,
            num_cols,
            grid: HashMap::new(),
            groups: Vec::new(),
            hash: zobrist::empty_board(),
        }
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        point.row >= 1 && point.row <= self.num_rows
            && point.col >= 1 && point.col <= self.num_cols
    }

    /// The color of the stone at `point`, or `None` if the point is empty or
    /// off the grid.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.grid.get(&point).map(|&idx| self.string(idx).color)
    }

    /// The whole string occupying `point`, or `None` if the point is empty
    /// or off the grid.
    pub fn get_go_string(&self, point: Point) -> Option<&GoString> {
        self.grid.get(&point).map(|&idx| self.string(idx))
    }

    /// Incrementally maintained hash of the board's stone content. Collisions
    /// are possible; use it to reject candidates, not to prove equality.
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    /// Place a `player` stone on `point`, merging friendly neighbor strings
    /// and capturing any enemy strings this leaves without liberties.
    ///
    /// Callers must have already established legality: placing on an occupied
    /// or off-grid point is a caller bug and panics. Note that a self-capture
    /// placement executes without complaint here (the new string just ends up
    /// with zero liberties); rejecting suicide is the job of
    /// `GameState::is_valid_move`.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(self.is_on_grid(point));
        assert!(!self.grid.contains_key(&point));

        // classify the neighbors; strings are deduplicated by arena index
        let mut liberties = HashSet::new();
        let mut adjacent_same_color = Vec::new();
        let mut adjacent_opposite_color = Vec::new();
        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.grid.get(&neighbor) {
                None => {
                    liberties.insert(neighbor);
                },
                Some(&idx) => {
                    if self.string(idx).color == player {
                        if !adjacent_same_color.contains(&idx) {
                            adjacent_same_color.push(idx);
                        }
                    } else if !adjacent_opposite_color.contains(&idx) {
                        adjacent_opposite_color.push(idx);
                    }
                },
            }
        }

        // build the new string, absorbing every friendly neighbor
        let mut stones = HashSet::new();
        stones.insert(point);
        let mut new_string = GoString::new(player, stones, liberties);
        for &idx in &adjacent_same_color {
            let absorbed = self.groups[idx].take().unwrap();
            new_string = new_string.merged_with(&absorbed);
        }
        let slot = self.insert_string(new_string);
        for &stone in self.groups[slot].as_ref().unwrap().stones.iter() {
            self.grid.insert(stone, slot);
        }
        self.hash ^= zobrist::key(point, player);

        // the played point is no longer a liberty of any enemy string
        for &idx in &adjacent_opposite_color {
            self.groups[idx].as_mut().unwrap().remove_liberty(point);
        }
        // enemy strings left without liberties are captured
        for &idx in &adjacent_opposite_color {
            if self.groups[idx].as_ref().unwrap().num_liberties() == 0 {
                self.remove_string(idx);
            }
        }
    }

    fn string(&self, idx: usize) -> &GoString {
        self.groups[idx].as_ref().unwrap()
    }

    fn insert_string(&mut self, string: GoString) -> usize {
        match self.groups.iter().position(|slot| slot.is_none()) {
            Some(idx) => {
                self.groups[idx] = Some(string);
                idx
            },
            None => {
                self.groups.push(Some(string));
                self.groups.len() - 1
            },
        }
    }

    /// Clear a captured string off the grid. Each emptied point becomes a
    /// liberty of every *other* string adjacent to it.
    fn remove_string(&mut self, idx: usize) {
        let string = self.groups[idx].take().unwrap();
        for &stone in &string.stones {
            for neighbor in stone.neighbors() {
                match self.grid.get(&neighbor) {
                    Some(&neighbor_idx) if neighbor_idx != idx => {
                        self.groups[neighbor_idx].as_mut().unwrap().add_liberty(stone);
                    },
                    _ => {},
                }
            }
            self.grid.remove(&stone);
            self.hash ^= zobrist::key(stone, string.color);
        }
    }
}

/// Board-content equality: same dimensions and the same stone color on every
/// point. The running hash is only a fast reject; two boards are never called
/// equal on hash agreement alone.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        if self.hash != other.hash {
            return false;
        }
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.grid.len() == other.grid.len()
            && self.grid.keys().all(|&point| self.get(point) == other.get(point))
    }
}

impl Eq for Board {}
