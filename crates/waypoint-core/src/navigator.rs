/// Performs the actual page transition to a destination URL.
///
/// The controller invokes this at most once per lifecycle, from either
/// the natural end of the countdown or a user skip. Navigation is a
/// fire-and-forget side effect: whatever happens after the hand-off is
/// outside the controller's world.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, url: &str);
}
