use crate::AsFromUsize;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct BlockClass(pub u64);

impl AsFromUsize for BlockClass {
    fn as_usize(&self) -> usize {
        self.0.try_into().expect("value is out of bounds")
    }

    fn from_usize(value: usize) -> Self {
        Self(value.try_into().expect("value is out of bounds"))
    }
}
