//! Seam to the text-label system, which hit-tests its own labels.

use glam::Vec2;

use super::PickResult;

/// Label/icon hit testing supplied by the text renderer.
pub trait LabelPicker {
    /// Append a [`PickResult`] (category `Text` or `Icon`) for every label
    /// under `position`.
    ///
    /// `position` is in label space: pixels from the viewport center, y up.
    /// Distances are the label system's own depth values.
    fn pick_text_elements<'a>(
        &'a self,
        position: Vec2,
        results: &mut Vec<PickResult<'a>>,
    );
}
