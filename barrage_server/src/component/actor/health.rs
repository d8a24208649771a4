use crate::component::actor::ActorComponent;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Health(pub u32);

impl Health {
    /// Returns `true` if the damage was lethal.
    pub fn damage(&mut self, amount: u32) -> bool {
        self.0 = self.0.saturating_sub(amount);
        self.0 == 0
    }
}

pub type HealthActorComponent = ActorComponent<Health>;
