use crate::{
    entity::block_class::BlockClass,
    AsFromUsize,
};

pub mod collision;

pub struct BlockClassComponent<T> {
    classes: Vec<Option<T>>,
}

impl<T> BlockClassComponent<T> {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    pub fn set(&mut self, class: BlockClass, new: T) {
        let i = class.as_usize();

        if self.classes.len() > i {
            self.classes[i] = Some(new);
        } else {
            self.classes.resize_with(i, || None);
            self.classes.push(Some(new));
        }
    }

    pub fn get(&self, class: BlockClass) -> Option<&T> {
        self.classes.get(class.as_usize())?.as_ref()
    }
}
