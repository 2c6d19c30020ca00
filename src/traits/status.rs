/// A trait which holds the mutable state of an [`Algorithm`](crate::traits::Algorithm) between
/// steps.
pub trait Status: Default {
    /// Resets the status to its default state. This is called at the beginning of every
    /// [`Engine::process`](crate::core::Engine::process) call.
    fn reset(&mut self) {
        *self = Self::default();
    }
    /// Returns `true` if the algorithm has reached an exact solution.
    fn converged(&self) -> bool;
    /// Returns the message describing the current state.
    fn message(&self) -> &str;
    /// Replaces the message describing the current state.
    fn update_message(&mut self, message: &str);
}
