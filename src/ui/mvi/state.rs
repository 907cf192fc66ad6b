/// Marker trait for UI state objects.
///
/// States hold everything needed to render and are compared to spot changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
