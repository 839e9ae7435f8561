//! Pieces module - tetromino shape library
//!
//! Every shape is authored once, in its North orientation, as four cells around
//! the pivot `(0, 0)`. The other three orientations are derived by repeatedly
//! applying the clockwise point rotation `(x, y) → (-y, x)`. The `O` piece is the
//! exception: all four orientations are its authored shape, so it never wobbles.
//!
//! The table is evaluated at compile time and shared by every piece instance.

use crate::types::{Color, PieceKind, Point, Rotation};

/// Shape of a piece - 4 cell offsets from the piece pivot
pub type PieceShape = [Point; 4];

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

const S_SHAPE: PieceShape = [p(-1, 0), p(0, 0), p(0, -1), p(1, -1)];
const Z_SHAPE: PieceShape = [p(-1, -1), p(0, -1), p(0, 0), p(1, 0)];
const I_SHAPE: PieceShape = [p(-1, 0), p(0, 0), p(1, 0), p(2, 0)];
const O_SHAPE: PieceShape = [p(-1, -1), p(-1, 0), p(0, 0), p(0, -1)];
const L_SHAPE: PieceShape = [p(-1, 0), p(0, 0), p(1, 0), p(1, -1)];
const J_SHAPE: PieceShape = [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)];
const T_SHAPE: PieceShape = [p(-1, 0), p(0, 0), p(0, -1), p(1, 0)];

/// Rotate every cell of a shape a quarter turn clockwise
pub const fn rotate_clockwise(shape: PieceShape) -> PieceShape {
    [
        shape[0].rotate_clockwise(),
        shape[1].rotate_clockwise(),
        shape[2].rotate_clockwise(),
        shape[3].rotate_clockwise(),
    ]
}

/// The authored shape followed by its three clockwise rotations
pub const fn rotate_around(shape: PieceShape) -> [PieceShape; 4] {
    let once = rotate_clockwise(shape);
    let twice = rotate_clockwise(once);
    let thrice = rotate_clockwise(twice);
    [shape, once, twice, thrice]
}

/// Indexed by `PieceKind::index()`, then `Rotation::index()`
static ROTATIONS: [[PieceShape; 4]; 7] = [
    rotate_around(S_SHAPE),
    rotate_around(Z_SHAPE),
    rotate_around(I_SHAPE),
    [O_SHAPE; 4],
    rotate_around(L_SHAPE),
    rotate_around(J_SHAPE),
    rotate_around(T_SHAPE),
];

/// All four orientations of a piece kind
pub fn rotations(kind: PieceKind) -> &'static [PieceShape; 4] {
    &ROTATIONS[kind.index()]
}

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    ROTATIONS[kind.index()][rotation.index()]
}

/// Display color of a piece kind
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::S => Color::hsla(120, 100, 50, 100),
        PieceKind::Z => Color::hsla(0, 100, 50, 100),
        PieceKind::I => Color::hsla(180, 100, 50, 100),
        PieceKind::O => Color::hsla(60, 75, 50, 100),
        PieceKind::L => Color::hsla(39, 100, 50, 100),
        PieceKind::J => Color::hsla(240, 100, 50, 100),
        PieceKind::T => Color::hsla(276, 100, 50, 100),
    }
}
