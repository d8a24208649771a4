pub mod component;
pub mod entity;
pub mod math;

use anyhow::{
    Context,
    Error,
};
use serde::de::DeserializeOwned;
use std::{
    collections::BTreeMap,
    fmt::Debug,
    fs,
    path::Path,
};
use tokio::task;

/// Blocking IO, must not be used directly in async
pub fn read_data_file<T>(path: impl AsRef<Path> + Debug) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let string =
        fs::read_to_string(path.as_ref()).with_context(|| format!("reading {:?}", &path))?;
    let data =
        serde_json::from_str::<T>(&string).with_context(|| format!("parsing {:?}", &path))?;

    Ok(data)
}

/// Reads and parses a data file on the blocking thread pool.
pub async fn load_data_file<T>(path: impl 'static + AsRef<Path> + Debug + Send) -> Result<T, Error>
where
    T: 'static + DeserializeOwned + Send,
{
    task::spawn_blocking(move || read_data_file::<T>(path))
        .await
        .context("data loading task panicked")?
}

pub trait AsFromUsize {
    fn as_usize(&self) -> usize;
    fn from_usize(i: usize) -> Self;
}

/// Maps human-readable labels from the data files to entities.
#[derive(Clone, Debug)]
pub struct LabelMap<T>(BTreeMap<String, T>);

impl<T> LabelMap<T>
where
    T: Copy,
{
    pub fn get(&self, label: &str) -> Option<T> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.0.iter().map(|(l, e)| (*e, l.as_str()))
    }
}

impl<T> LabelMap<T>
where
    T: AsFromUsize + Copy,
{
    /// Entities are numbered in the order of the list.
    pub fn from_list(list: &[String]) -> Self {
        Self(
            list.iter()
                .enumerate()
                .map(|(i, l)| (l.clone(), T::from_usize(i)))
                .collect(),
        )
    }

    pub fn get_label(&self, entity: &T) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, e)| e.as_usize() == entity.as_usize())
            .map(|(l, _)| l.as_str())
    }
}

impl<T> From<BTreeMap<String, T>> for LabelMap<T> {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::block_class::BlockClass;

    #[test]
    fn label_map_numbers_in_list_order() {
        let list = vec!["air".to_owned(), "stone".to_owned(), "water".to_owned()];
        let map = LabelMap::<BlockClass>::from_list(&list);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("stone"), Some(BlockClass(1)));
        assert_eq!(map.get("lava"), None);
        assert_eq!(map.get_label(&BlockClass(2)), Some("water"));
    }

    #[tokio::test]
    async fn missing_data_file_is_an_error() {
        let res = load_data_file::<Vec<String>>("does/not/exist.json").await;

        assert!(res.is_err());
    }
}
