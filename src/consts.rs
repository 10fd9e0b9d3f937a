use std::f64::consts::PI;

/// Score every leg of a 501 game starts from.
pub const DARTS501_INITIAL_SCORE: u32 = 501;

/// Darts a player may throw before the turn passes.
pub const DARTS_PER_TURN: u32 = 3;

/// Hard ceiling on a single practice request.
pub const MAX_PRACTICE_DARTS: u32 = 100_000;

/// Dart budget of a competition when nothing else is configured.
pub const DEFAULT_MATCH_DARTS: u32 = 99_999;

/// Face value of both bull rings.
pub const BULL_SCORE: u8 = 25;

/// Numbered sectors clockwise from the top of the board.
pub const SECTOR_ORDER: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Angular width of one numbered sector (18 degrees).
pub const SECTOR_WIDTH: f64 = PI / 10.0;

/// Radial bands per numbered sector: single-inner, treble, single-outer, double.
pub const BANDS_PER_SECTOR: usize = 4;

/// Two bull rings plus four bands for each of the twenty sectors.
pub const FIELD_COUNT: usize = 2 + SECTOR_ORDER.len() * BANDS_PER_SECTOR;

/// Furthest aim radius (in board radii) the judge is expected to accept.
pub const MAX_AIM_RADIUS: f64 = 1.2;
