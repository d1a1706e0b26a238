use crate::board::Board;
use crate::game_state::Player;
use crate::point::Point;

/// Heuristic eye test used by move-selection agents to skip plays that fill
/// their own eyes. Purely a read-only consumer of `Board::get` and
/// `Board::is_on_grid`; it plays no part in legality.
///
/// An eye is an empty point whose on-grid orthogonal neighbors all hold
/// `color`, and whose diagonal corners are controlled strongly enough: on the
/// edge or in a corner of the board every on-grid corner must be friendly,
/// while in the interior at least 3 of the 4 must be.
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    for neighbor in point.neighbors() {
        if board.is_on_grid(neighbor) && board.get(neighbor) != Some(color) {
            return false;
        }
    }

    // diagonal corners are this consumer's concern, not the geometry layer's
    let corners = [
        Point::new(point.row - 1, point.col - 1),
        Point::new(point.row - 1, point.col + 1),
        Point::new(point.row + 1, point.col - 1),
        Point::new(point.row + 1, point.col + 1),
    ];
    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for &corner in corners.iter() {
        if board.is_on_grid(corner) {
            if board.get(corner) == Some(color) {
                friendly_corners += 1;
            }
        } else {
            off_board_corners += 1;
        }
    }

    if off_board_corners > 0 {
        // edge or corner point: every on-grid corner must be friendly
        return off_board_corners + friendly_corners == 4;
    }
    // interior point: 3 of 4 corners suffice
    friendly_corners >= 3
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::Player::*;
    use crate::test_utils::board_from_diagram;

    #[test]
    fn test_interior_eye_with_all_corners() {
        let board = board_from_diagram(&[
            ".....",
            ".xxx.",
            ".x.x.",
            ".xxx.",
            ".....",
        ]);
        assert!(is_point_an_eye(&board, Point::new(3, 3), Black));
        assert!(!is_point_an_eye(&board, Point::new(3, 3), White));
    }

    #[test]
    fn test_interior_point_with_two_corners_is_not_an_eye() {
        // only the upper corners are friendly; the lower two are empty
        let board = board_from_diagram(&[
            ".....",
            ".xxx.",
            ".x.x.",
            "..x..",
            ".....",
        ]);
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Black));
    }

    #[test]
    fn test_interior_eye_with_three_corners() {
        let board = board_from_diagram(&[
            ".....",
            ".xxx.",
            ".x.x.",
            ".xx..",
            "...x.",
        ]);
        // corner (4,4) is empty but the other three are friendly
        assert!(is_point_an_eye(&board, Point::new(3, 3), Black));
    }

    #[test]
    fn test_corner_eye() {
        let board = board_from_diagram(&[
            ".o...",
            "oo...",
            ".....",
            ".....",
            ".....",
        ]);
        assert!(is_point_an_eye(&board, Point::new(1, 1), White));
    }

    #[test]
    fn test_edge_point_needs_every_corner() {
        // (1,3) sits on the top edge; both of its on-grid corners must be
        // friendly, so an empty (2,2) spoils the eye
        let board = board_from_diagram(&[
            ".x.x.",
            "..xx.",
            ".....",
            ".....",
            ".....",
        ]);
        assert!(!is_point_an_eye(&board, Point::new(1, 3), Black));
        let board = board_from_diagram(&[
            ".x.x.",
            ".xxx.",
            ".....",
            ".....",
            ".....",
        ]);
        assert!(is_point_an_eye(&board, Point::new(1, 3), Black));
    }

    #[test]
    fn test_occupied_point_is_not_an_eye() {
        let board = board_from_diagram(&[
            "xxx",
            "xxx",
            "xxx",
        ]);
        assert!(!is_point_an_eye(&board, Point::new(2, 2), Black));
    }

    #[test]
    fn test_enemy_neighbor_spoils_the_eye() {
        let board = board_from_diagram(&[
            ".....",
            ".xxx.",
            ".x.o.",
            ".xxx.",
            ".....",
        ]);
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Black));
    }
}
