pub mod dimensions;
pub mod field;

pub use self::dimensions::{BoardDimensions, UnitRadii};
pub use self::field::{BoardField, Ring};

use crate::consts::{BULL_SCORE, FIELD_COUNT, SECTOR_ORDER, SECTOR_WIDTH};
use crate::error::DartsResult;
use crate::geometry::Point;
use tracing::debug;

/// Index of a field inside its `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

/// Read-only registry of every scoring region on the board.
#[derive(Debug, Clone)]
pub struct Board {
    fields: Vec<BoardField>,
}

impl Board {
    /// Regulation board (170 mm double wire).
    pub fn regulation() -> Self {
        Self::from_unit_radii(&UnitRadii::regulation())
    }

    pub fn build(dims: &BoardDimensions) -> DartsResult<Self> {
        let radii = dims.unit_radii()?;
        Ok(Self::from_unit_radii(&radii))
    }

    fn from_unit_radii(radii: &UnitRadii) -> Self {
        let mut fields = Vec::with_capacity(FIELD_COUNT);

        fields.push(BoardField::bull(
            Ring::InnerBull,
            BULL_SCORE,
            0.0,
            radii.inner_bull,
        ));
        fields.push(BoardField::bull(
            Ring::OuterBull,
            BULL_SCORE,
            radii.inner_bull,
            radii.outer_bull,
        ));

        let bands = [
            (Ring::SingleInner, radii.outer_bull, radii.treble_inner),
            (Ring::Treble, radii.treble_inner, radii.treble_outer),
            (Ring::SingleOuter, radii.treble_outer, radii.double_inner),
            (Ring::Double, radii.double_inner, radii.double_outer),
        ];

        for (i, &score) in SECTOR_ORDER.iter().enumerate() {
            let wedge = (
                (i as f64 - 0.5) * SECTOR_WIDTH,
                (i as f64 + 0.5) * SECTOR_WIDTH,
            );
            for &(ring, inner, outer) in &bands {
                fields.push(BoardField::wedge(ring, score, wedge, (inner, outer)));
            }
        }

        debug!("Built board with {} fields", fields.len());
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[BoardField] {
        &self.fields
    }

    pub fn get(&self, id: FieldId) -> Option<&BoardField> {
        self.fields.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &BoardField)> {
        self.fields.iter().enumerate().map(|(i, f)| (FieldId(i), f))
    }

    pub fn find(&self, score: u8, ring: Ring) -> Option<(FieldId, &BoardField)> {
        self.iter()
            .find(|(_, f)| f.score == score && f.ring == ring)
    }

    /// Field containing the given impact point, if it landed in a scoring area.
    pub fn field_at(&self, point: Point) -> Option<(FieldId, &BoardField)> {
        let polar = point.to_polar();
        self.iter().find(|(_, f)| f.contains(&polar))
    }

    /// `(score, multiplier)` awarded for an impact point; `(0, 0)` off the board.
    pub fn score_point(&self, point: Point) -> (u8, u8) {
        self.field_at(point)
            .map(|(_, f)| (f.score, f.multiplier()))
            .unwrap_or((0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_board_has_82_fields() {
        let board = Board::regulation();
        assert_eq!(board.len(), 82);
        assert_eq!(board.iter().filter(|(_, f)| f.is_bull()).count(), 2);
        assert_eq!(
            board
                .iter()
                .filter(|(_, f)| f.ring == Ring::Treble)
                .count(),
            20
        );
    }

    #[test]
    fn treble_twenty_is_straight_up() {
        let board = Board::regulation();
        let (_, t20) = board.find(20, Ring::Treble).unwrap();
        let c = t20.cartesian_center();
        assert!(c.x.abs() < 1e-9);
        assert!(c.y < -0.5);
    }

    #[test]
    fn sector_one_is_right_of_twenty() {
        let board = Board::regulation();
        let (_, d1) = board.find(1, Ring::Double).unwrap();
        assert!(d1.cartesian_center().x > 0.0);
        let (_, d5) = board.find(5, Ring::Double).unwrap();
        assert!(d5.cartesian_center().x < 0.0);
    }

    #[test]
    fn off_board_scores_nothing() {
        let board = Board::regulation();
        assert_eq!(board.score_point(Point::new(0.0, -1.1)), (0, 0));
        assert_eq!(board.score_point(Point::ORIGIN), (25, 2));
    }
}
