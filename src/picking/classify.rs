//! Geometry category → pick category table.

use super::PickObjectType;
use crate::scene::GeometryKind;

/// Classify a hit by the geometry category of the buffer it landed in.
///
/// Exhaustive on purpose: a new [`GeometryKind`] does not compile until it
/// is given a pick category here.
#[must_use]
pub fn pick_object_type(kind: GeometryKind) -> PickObjectType {
    match kind {
        GeometryKind::Point | GeometryKind::Text => PickObjectType::Point,
        GeometryKind::Line
        | GeometryKind::ExtrudedLine
        | GeometryKind::SolidLine
        | GeometryKind::TextPath => PickObjectType::Line,
        GeometryKind::Polygon | GeometryKind::ExtrudedPolygon => {
            PickObjectType::Area
        }
        GeometryKind::Object3d => PickObjectType::Object3d,
        GeometryKind::Unspecified | GeometryKind::Other => {
            PickObjectType::Unspecified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygons_are_areas() {
        assert_eq!(
            pick_object_type(GeometryKind::Polygon),
            PickObjectType::Area
        );
        assert_eq!(
            pick_object_type(GeometryKind::ExtrudedPolygon),
            PickObjectType::Area
        );
    }

    #[test]
    fn every_line_variant_is_a_line() {
        for kind in [
            GeometryKind::Line,
            GeometryKind::ExtrudedLine,
            GeometryKind::SolidLine,
            GeometryKind::TextPath,
        ] {
            assert_eq!(pick_object_type(kind), PickObjectType::Line);
            assert!(kind.is_line());
        }
    }

    #[test]
    fn glyphs_and_points_are_points() {
        assert_eq!(pick_object_type(GeometryKind::Text), PickObjectType::Point);
        assert_eq!(
            pick_object_type(GeometryKind::Point),
            PickObjectType::Point
        );
    }

    #[test]
    fn remaining_categories() {
        assert_eq!(
            pick_object_type(GeometryKind::Object3d),
            PickObjectType::Object3d
        );
        assert_eq!(
            pick_object_type(GeometryKind::Other),
            PickObjectType::Unspecified
        );
        assert_eq!(
            pick_object_type(GeometryKind::Unspecified),
            PickObjectType::Unspecified
        );
    }
}
