pub mod io;
pub mod labels;
pub mod mask;

pub use self::labels::LabelRaster;
pub use self::mask::{Mask, FOREGROUND};

/// 4-connected neighbor offsets in (row, col) order.
pub const NEIGH_4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 8-connected neighbor offsets in (row, col) order.
pub const NEIGH_8: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
