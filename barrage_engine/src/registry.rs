use crate::{
    barrage::{
        Barrage,
        BarrageId,
    },
    world::WorldQuery,
};
use anyhow::{
    anyhow,
    Error,
};
use barrage_common::math::Aabb;
use flume::{
    Receiver,
    Sender,
};
use log::{
    debug,
    warn,
};
use std::{
    collections::BTreeMap,
    mem,
};

/// Queues barrages for spawning from other threads.
///
/// Queued barrages are spawned at the start of the next
/// [`BarrageRegistry::advance_all`].
#[derive(Clone)]
pub struct SpawnHandle(Sender<Barrage>);

impl SpawnHandle {
    pub fn spawn(&self, barrage: Barrage) -> Result<BarrageId, Error> {
        let id = barrage.id();

        self.0
            .send(barrage)
            .map_err(|_| anyhow!("barrage registry is dropped"))?;

        Ok(id)
    }
}

/// Owns all live barrages of a simulation.
///
/// Barrages are ticked in the order they were created.
/// While a barrage is being ticked it is taken out of the registry,
/// so lookups from within its own tick do not find it.
pub struct BarrageRegistry {
    barrages: BTreeMap<BarrageId, Barrage>,
    tick_order: Vec<BarrageId>,
    spawn_tx: Sender<Barrage>,
    spawn_rx: Receiver<Barrage>,
}

impl BarrageRegistry {
    pub fn new() -> Self {
        let (spawn_tx, spawn_rx) = flume::unbounded();

        Self {
            barrages: BTreeMap::new(),
            tick_order: Vec::new(),
            spawn_tx,
            spawn_rx,
        }
    }

    pub fn spawn_handle(&self) -> SpawnHandle {
        SpawnHandle(self.spawn_tx.clone())
    }

    /// Binds the controller, launches the barrage and registers it.
    ///
    /// Removed barrages are not registered.
    pub fn spawn(&mut self, mut barrage: Barrage) -> BarrageId {
        let id = barrage.id();

        if !barrage.is_valid() {
            warn!("barrage {:?} is removed and cannot be spawned", id);
            return id;
        }

        barrage.launch();

        debug!(
            "barrage {:?} spawned at {:?}",
            id,
            barrage.state().position()
        );

        self.barrages.insert(id, barrage);

        id
    }

    /// Ticks every registered barrage once and drops the removed ones.
    ///
    /// Barrages spawned during the pass are first ticked on the next one.
    /// On a collaborator error the pass stops, removed barrages are still
    /// dropped and the error is returned.
    pub fn advance_all(&mut self, world: &dyn WorldQuery) -> Result<(), Error> {
        while let Ok(barrage) = self.spawn_rx.try_recv() {
            self.spawn(barrage);
        }

        let mut tick_order = mem::take(&mut self.tick_order);
        tick_order.clear();
        tick_order.extend(self.barrages.keys().copied());

        let mut result = Ok(());

        for id in tick_order.iter().copied() {
            if let Some(Err(err)) = self.with_taken(id, |barrage, registry| {
                barrage.tick(registry, world)
            }) {
                result = Err(err);
                break;
            }
        }

        self.tick_order = tick_order;

        self.purge();

        result
    }

    fn purge(&mut self) {
        let before = self.barrages.len();

        self.barrages.retain(|_, barrage| barrage.is_valid());

        let purged = before - self.barrages.len();

        if purged > 0 {
            debug!("purged {} removed barrages", purged);
        }
    }

    /// Takes the barrage out for the duration of `f`.
    pub(crate) fn with_taken<F, R>(&mut self, id: BarrageId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Barrage, &mut Self) -> R,
    {
        let mut barrage = self.barrages.remove(&id)?;

        let res = f(&mut barrage, self);

        self.barrages.insert(id, barrage);

        Some(res)
    }

    /// Valid, hittable barrages of the dimension whose boxes overlap or contain `aabb`.
    ///
    /// Linear scan over all barrages.
    pub fn query_overlapping<'a>(
        &'a self,
        dimension: u32,
        aabb: &'a Aabb,
    ) -> impl Iterator<Item = &'a Barrage> + 'a {
        self.barrages.values().filter(move |barrage| {
            let state = barrage.state();

            if !state.is_valid() || state.position().dimension != dimension || state.noclip() {
                return false;
            }

            let other = state.aabb();

            other.intersects(aabb) || other.contains(aabb)
        })
    }

    pub fn get(&self, id: BarrageId) -> Option<&Barrage> {
        self.barrages.get(&id)
    }

    pub fn get_mut(&mut self, id: BarrageId) -> Option<&mut Barrage> {
        self.barrages.get_mut(&id)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Barrage> {
        self.barrages.values()
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = BarrageId> + '_ {
        self.barrages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.barrages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barrages.is_empty()
    }

    /// Removes the barrage as if it was hit for the last time,
    /// it is dropped from the registry on the next pass.
    pub fn remove(&mut self, id: BarrageId) -> bool {
        match self.barrages.get_mut(&id) {
            Some(barrage) if barrage.is_valid() => {
                barrage.remove();
                true
            },
            _ => false,
        }
    }

    /// Removes and drops every barrage, including the queued ones.
    pub fn clear(&mut self) {
        while let Ok(mut barrage) = self.spawn_rx.try_recv() {
            barrage.remove();
        }

        for barrage in self.barrages.values_mut() {
            barrage.remove();
        }

        self.barrages.clear();
    }
}

impl Default for BarrageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
