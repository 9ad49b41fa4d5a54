//! The 16-case marching-squares triangulation table.

use crate::constants::{
    BOTTOM_LEFT_BIT, BOTTOM_RIGHT_BIT, CONFIGURATION_COUNT, TOP_LEFT_BIT, TOP_RIGHT_BIT,
};

/// A point of a cell: one of its four corners or one of its four edge midpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellPoint {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    CentreTop,
    CentreRight,
    CentreBottom,
    CentreLeft,
}

impl CellPoint {
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            CellPoint::TopLeft
                | CellPoint::TopRight
                | CellPoint::BottomRight
                | CellPoint::BottomLeft
        )
    }
}

use CellPoint::{
    BottomLeft as BL, BottomRight as BR, CentreBottom as CB, CentreLeft as CL, CentreRight as CR,
    CentreTop as CT, TopLeft as TL, TopRight as TR,
};

/// Fan points per configuration, in winding order. Point 0 is the fan apex.
pub const CASES: [&[CellPoint]; CONFIGURATION_COUNT] = [
    // 0: nothing active
    &[],
    // 1, 2: one corner
    &[CL, CB, BL],
    &[BR, CB, CR],
    // 3: bottom edge
    &[CR, BR, BL, CL],
    &[TR, CR, CT],
    // 5: opposite corners, stays connected through the middle
    &[CT, TR, CR, CB, BL, CL],
    &[CT, TR, BR, CB],
    &[CT, TR, BR, BL, CL],
    &[TL, CT, CL],
    &[TL, CT, CB, BL],
    // 10: opposite corners
    &[TL, CT, CR, BR, CB, CL],
    &[TL, CT, CR, BR, BL],
    &[TL, TR, CR, CL],
    &[TL, TR, CR, CB, BL],
    &[TL, TR, BR, CB, CL],
    // 15: solid square
    &[TL, TR, BR, BL],
];

/// Configuration code of a cell from its corner states.
#[inline]
pub fn configuration(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> u8 {
    let mut c = 0;
    if top_left {
        c |= TOP_LEFT_BIT;
    }
    if top_right {
        c |= TOP_RIGHT_BIT;
    }
    if bottom_right {
        c |= BOTTOM_RIGHT_BIT;
    }
    if bottom_left {
        c |= BOTTOM_LEFT_BIT;
    }
    c
}

#[inline]
pub fn case_points(configuration: u8) -> &'static [CellPoint] {
    CASES[configuration as usize & (CONFIGURATION_COUNT - 1)]
}

/// Fan triangulation of `n` points: (0,1,2), (0,2,3), ... Empty for fewer than 3.
#[inline]
pub fn fan_triangles(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (1..n.saturating_sub(1)).map(|i| [0, i, i + 1])
}
