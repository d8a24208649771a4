use barrage_common::component::actor::position::Position;

/// Presentation bound to a barrage (particles, display entity, etc).
///
/// Only receives updates, the engine never reads from it.
pub trait Controller: Send {
    fn bind_and_display(&mut self, position: &Position);

    fn teleport_to(&mut self, position: &Position);

    fn cancel(&mut self);
}

/// For barrages that are not displayed.
pub struct NullController;

impl Controller for NullController {
    fn bind_and_display(&mut self, _position: &Position) {}

    fn teleport_to(&mut self, _position: &Position) {}

    fn cancel(&mut self) {}
}
