//! Cuboid primitive: six oriented planes indexed by side.

use crate::Plane;

/// The six faces of a cuboid.
///
/// The discriminants double as storage indices; conversion goes through
/// `index`/`from_index` rather than numeric casts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Side {
    /// Number of sides of a cuboid.
    pub const COUNT: usize = 6;

    /// All sides in their fixed iteration order.
    ///
    /// Intersection scans the sides in exactly this order and the first
    /// accepted side wins, so the order is load-bearing.
    pub const ALL: [Side; Side::COUNT] = [
        Side::Top,
        Side::Bottom,
        Side::Front,
        Side::Back,
        Side::Left,
        Side::Right,
    ];

    /// Storage index of this side.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Front => 2,
            Side::Back => 3,
            Side::Left => 4,
            Side::Right => 5,
        }
    }

    /// Side for a storage index, if it is in range.
    pub fn from_index(index: usize) -> Option<Side> {
        Side::ALL.get(index).copied()
    }
}

/// A cuboid built from six oriented planes.
///
/// The six planes are expected to form a closed convex hexahedron with
/// outward normals; this is not validated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cuboid {
    sides: [Plane; Side::COUNT],
}

impl Cuboid {
    /// Create a cuboid from its six faces.
    pub fn new(
        top: Plane,
        bottom: Plane,
        front: Plane,
        back: Plane,
        left: Plane,
        right: Plane,
    ) -> Self {
        let mut sides = [top; Side::COUNT];
        sides[Side::Top.index()] = top;
        sides[Side::Bottom.index()] = bottom;
        sides[Side::Front.index()] = front;
        sides[Side::Back.index()] = back;
        sides[Side::Left.index()] = left;
        sides[Side::Right.index()] = right;
        Self { sides }
    }

    /// Get one face of the cuboid.
    #[inline]
    pub fn side(&self, side: Side) -> &Plane {
        &self.sides[side.index()]
    }

    /// Get all six faces, indexed by `Side::index`.
    #[inline]
    pub fn sides(&self) -> &[Plane; Side::COUNT] {
        &self.sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Vec3;

    fn unit_cuboid_at(center: Vec3, half: f32) -> Cuboid {
        Cuboid::new(
            Plane::new(center + Vec3::Y * half, Vec3::Y),
            Plane::new(center - Vec3::Y * half, -Vec3::Y),
            Plane::new(center + Vec3::Z * half, Vec3::Z),
            Plane::new(center - Vec3::Z * half, -Vec3::Z),
            Plane::new(center - Vec3::X * half, -Vec3::X),
            Plane::new(center + Vec3::X * half, Vec3::X),
        )
    }

    #[test]
    fn test_side_index_round_trip() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
        assert_eq!(Side::from_index(Side::COUNT), None);
    }

    #[test]
    fn test_side_order() {
        assert_eq!(
            Side::ALL,
            [
                Side::Top,
                Side::Bottom,
                Side::Front,
                Side::Back,
                Side::Left,
                Side::Right
            ]
        );
    }

    #[test]
    fn test_cuboid_sides_land_in_their_slots() {
        let cuboid = unit_cuboid_at(Vec3::ZERO, 0.5);
        assert_eq!(cuboid.side(Side::Top).normal(), Vec3::Y);
        assert_eq!(cuboid.side(Side::Bottom).normal(), -Vec3::Y);
        assert_eq!(cuboid.side(Side::Front).normal(), Vec3::Z);
        assert_eq!(cuboid.side(Side::Back).normal(), -Vec3::Z);
        assert_eq!(cuboid.side(Side::Left).normal(), -Vec3::X);
        assert_eq!(cuboid.side(Side::Right).normal(), Vec3::X);
    }
}
