use barrage_common::AsFromUsize;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct BarrageClass(pub u32);

impl nohash_hasher::IsEnabled for BarrageClass {}

impl AsFromUsize for BarrageClass {
    fn as_usize(&self) -> usize {
        self.0.try_into().expect("value is out of bounds")
    }

    fn from_usize(value: usize) -> Self {
        Self(value.try_into().expect("value is out of bounds"))
    }
}
