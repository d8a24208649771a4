use barrage_common::entity::actor::Actor;
use nohash_hasher::IntMap;

pub mod body;
pub mod health;

pub struct ActorComponent<T> {
    actors: IntMap<Actor, T>,
}

impl<T> ActorComponent<T> {
    pub fn new() -> Self {
        Self {
            actors: IntMap::default(),
        }
    }

    pub fn insert(&mut self, actor: Actor, new: T) -> Option<T> {
        self.actors.insert(actor, new)
    }

    pub fn get(&self, actor: &Actor) -> Option<&T> {
        self.actors.get(actor)
    }

    pub fn get_mut(&mut self, actor: &Actor) -> Option<&mut T> {
        self.actors.get_mut(actor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        self.actors.iter().map(|(k, v)| (*k, v))
    }

    pub fn remove(&mut self, actor: &Actor) -> Option<T> {
        self.actors.remove(actor)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
