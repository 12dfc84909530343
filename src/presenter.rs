//! The presentation seam: everything the widget asks of the page.

/// Presentation surface for a single widget's result region.
///
/// Implementations own the actual display; the coordinator only pushes
/// markup and visual-state toggles through this trait.
pub trait Presenter {
    /// Replace the result region's content with new markup.
    fn render(&mut self, html: &str);

    /// Toggle the busy indicator. Set before a request is issued and cleared
    /// when it completes, whether or not the result was used.
    fn set_searching(&mut self, active: bool);

    /// Make the result region visible the first time it receives content.
    /// Called after every render; implementations decide whether anything
    /// is still hidden.
    fn reveal_if_hidden(&mut self);
}
