pub use glam::{
    IVec3 as Vec3I32,
    Quat as QuatF32,
    Vec3 as Vec3F32,
};
use serde::{
    Deserialize,
    Serialize,
};

pub trait Round {
    fn round_down(self) -> i32;
    fn round_up(self) -> i32;
}

impl Round for f32 {
    fn round_down(self) -> i32 {
        self.floor() as i32
    }

    fn round_up(self) -> i32 {
        self.ceil() as i32
    }
}

/// Axis-aligned box in world space.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec3F32,
    pub max: Vec3F32,
}

impl Aabb {
    /// Corners may be given in any order.
    pub fn from_corners(a: Vec3F32, b: Vec3F32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Volumes overlap; touching faces do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
    }

    /// `other` lies fully inside, faces included.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Every unit block cell that the box covers.
    /// A box that is flat on an axis still covers the cell it lies in.
    pub fn blocks(&self) -> impl Iterator<Item = Vec3I32> {
        let axis_range = |a: usize| {
            let start = self.min[a].round_down();
            let end = if self.max[a] > self.min[a] {
                self.max[a].round_up() - 1
            } else {
                start
            };

            start ..= end.max(start)
        };

        let [xs, ys, zs] = [axis_range(0), axis_range(1), axis_range(2)];

        zs.flat_map(move |z| {
            let xs = xs.clone();
            ys.clone()
                .flat_map(move |y| xs.clone().map(move |x| Vec3I32::new(x, y, z)))
        })
    }
}
