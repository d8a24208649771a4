use barrage_common::math::{
    Aabb,
    QuatF32,
    Vec3F32,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Box around an implicit origin, turned into a world [`Aabb`]
/// with [`HitBox::materialize`].
///
/// Corners are always kept ordered: `x1 <= x2`, `y1 <= y2`, `z1 <= z2`.
/// Serialized as `[x1, y1, z1, x2, y2, z2]`, any order is accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[serde(from = "[f32; 6]", into = "[f32; 6]")]
pub struct HitBox {
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
}

impl HitBox {
    pub fn new(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            z1: z1.min(z2),
            x2: x1.max(x2),
            y2: y1.max(y2),
            z2: z1.max(z2),
        }
    }

    pub fn from_corners(a: Vec3F32, b: Vec3F32) -> Self {
        Self::new(a.x, a.y, a.z, b.x, b.y, b.z)
    }

    /// Cube centered on the origin.
    pub fn cube(half_edge: f32) -> Self {
        let h = half_edge.abs();
        Self::new(-h, -h, -h, h, h, h)
    }

    pub fn min(&self) -> Vec3F32 {
        Vec3F32::new(self.x1, self.y1, self.z1)
    }

    pub fn max(&self) -> Vec3F32 {
        Vec3F32::new(self.x2, self.y2, self.z2)
    }

    pub fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.z1 <= self.z2
    }

    /// World box with the origin placed at `center`.
    pub fn materialize(&self, center: Vec3F32) -> Aabb {
        Aabb {
            min: self.min() + center,
            max: self.max() + center,
        }
    }

    /// Rotates both corners around the origin by the rotation that turns
    /// `from` into `to`.
    ///
    /// Zero-length directions leave the box as is.
    pub fn rotate(&mut self, from: Vec3F32, to: Vec3F32) {
        let (Some(from), Some(to)) = (from.try_normalize(), to.try_normalize()) else {
            return;
        };

        let rotation = QuatF32::from_rotation_arc(from, to);

        *self = Self::from_corners(rotation * self.min(), rotation * self.max());

        debug_assert!(self.is_ordered(), "hit box corners out of order after rotation");
    }
}

impl Default for HitBox {
    fn default() -> Self {
        Self::cube(0.25)
    }
}

impl From<[f32; 6]> for HitBox {
    fn from([x1, y1, z1, x2, y2, z2]: [f32; 6]) -> Self {
        Self::new(x1, y1, z1, x2, y2, z2)
    }
}

impl From<HitBox> for [f32; 6] {
    fn from(hb: HitBox) -> Self {
        [hb.x1, hb.y1, hb.z1, hb.x2, hb.y2, hb.z2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1.0e-5;

    fn approx_eq(a: Vec3F32, b: Vec3F32) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    #[test]
    fn corners_are_ordered_for_any_input_order() {
        let values = [-1.5, 2.0];

        for x1 in values {
            for x2 in values {
                for y1 in values {
                    for y2 in values {
                        let hb = HitBox::new(x1, y1, 0.3, x2, y2, -0.3);

                        assert!(hb.is_ordered());
                        assert_eq!(hb.min().z, -0.3);
                    }
                }
            }
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = HitBox::new(1.0, 1.0, 1.0, -1.0, -1.0, -1.0);
        let b = HitBox::cube(1.0);
        let c = a;

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, HitBox::cube(0.5));
    }

    #[test]
    fn materialize_translates_both_corners() {
        let aabb = HitBox::new(-0.5, 0.0, -0.5, 0.5, 2.0, 0.5)
            .materialize(Vec3F32::new(10.0, 5.0, -3.0));

        assert_eq!(aabb.min, Vec3F32::new(9.5, 5.0, -3.5));
        assert_eq!(aabb.max, Vec3F32::new(10.5, 7.0, -2.5));
    }

    #[test]
    fn rotation_keeps_corners_ordered() {
        // Long along X, facing X
        let mut hb = HitBox::new(-2.0, -0.5, -0.5, 2.0, 0.5, 0.5);

        hb.rotate(Vec3F32::X, Vec3F32::Y);

        assert!(hb.is_ordered());
        assert!(approx_eq(hb.min(), Vec3F32::new(-0.5, -2.0, -0.5)));
        assert!(approx_eq(hb.max(), Vec3F32::new(0.5, 2.0, 0.5)));

        hb.rotate(Vec3F32::Y, Vec3F32::NEG_Y);

        assert!(hb.is_ordered());
    }

    #[test]
    fn rotation_with_zero_direction_is_noop() {
        let mut hb = HitBox::cube(1.0);

        hb.rotate(Vec3F32::ZERO, Vec3F32::X);

        assert_eq!(hb, HitBox::cube(1.0));
    }

    #[test]
    fn deserializes_unordered_corners() {
        let hb: HitBox = serde_json::from_str("[1, 1, 1, 0, 0, 0]").unwrap();

        assert_eq!(hb, HitBox::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
    }
}
