//! Mapping raw mesh hits back to logical features in a batched buffer.

use crate::scene::{RenderObject, TileFeatureData};

/// Index of the feature whose geometry contains buffer offset
/// `buffer_index`: the last entry of `starts` not exceeding it.
///
/// `starts` must be ascending. Offsets before the first start resolve to
/// nothing. An offset equal to a start belongs to the feature that starts
/// there.
#[must_use]
pub fn feature_index_in_starts(
    starts: &[u32],
    buffer_index: u64,
) -> Option<usize> {
    starts
        .partition_point(|&start| u64::from(start) <= buffer_index)
        .checked_sub(1)
}

/// Reference linear scan equivalent to [`feature_index_in_starts`].
#[must_use]
pub fn feature_index_linear(
    starts: &[u32],
    buffer_index: u64,
) -> Option<usize> {
    let mut count = 0_usize;
    for &start in starts {
        if u64::from(start) > buffer_index {
            break;
        }
        count += 1;
    }
    count.checked_sub(1)
}

/// Resolve a raw hit on `object` to a feature index in its metadata.
///
/// `face_index` is set for triangle hits, `index` for line and point hits.
/// Returns `None` when there is no metadata or the hit cannot be placed.
#[must_use]
pub fn resolve_feature_index(
    object: &RenderObject,
    feature: Option<&TileFeatureData>,
    face_index: Option<u32>,
    index: Option<u32>,
) -> Option<usize> {
    let feature = feature?;

    // One point is one feature.
    if object.is_points() {
        return index.map(|i| i as usize);
    }

    let starts = feature.starts();
    if starts.is_empty() || (face_index.is_none() && index.is_none()) {
        return None;
    }
    if starts.len() == 1 {
        return Some(0);
    }

    let buffer_index = face_index
        .map_or_else(|| u64::from(index.unwrap_or(0)), |f| u64::from(f) * 3);
    feature_index_in_starts(starts, buffer_index)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::Rng;

    use super::*;
    use crate::scene::GeometryKind;

    fn data(starts: Vec<u32>) -> TileFeatureData {
        TileFeatureData::new(GeometryKind::Polygon, starts, Vec::new()).unwrap()
    }

    fn mesh() -> RenderObject {
        RenderObject::triangles(vec![Vec3::ZERO; 3], None)
    }

    #[test]
    fn starts_lookup_examples() {
        let starts = [0, 10, 25];
        assert_eq!(feature_index_in_starts(&starts, 12), Some(1));
        assert_eq!(feature_index_in_starts(&starts, 0), Some(0));
        assert_eq!(feature_index_in_starts(&starts, 30), Some(2));
        assert_eq!(feature_index_in_starts(&starts, 10), Some(1));
        assert_eq!(feature_index_in_starts(&starts, 9), Some(0));
    }

    #[test]
    fn offset_before_first_start_is_unresolved() {
        assert_eq!(feature_index_in_starts(&[5, 10], 2), None);
        assert_eq!(feature_index_linear(&[5, 10], 2), None);
    }

    #[test]
    fn binary_search_matches_linear_scan() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(0..40);
            let mut starts = Vec::with_capacity(len);
            let mut next = rng.random_range(0..4_u32);
            for _ in 0..len {
                starts.push(next);
                next += rng.random_range(1..20);
            }
            for probe in 0..=u64::from(next) + 2 {
                assert_eq!(
                    feature_index_in_starts(&starts, probe),
                    feature_index_linear(&starts, probe),
                    "starts {starts:?} probe {probe}"
                );
            }
        }
    }

    #[test]
    fn face_index_scales_to_index_buffer() {
        let feature = data(vec![0, 10, 25]);
        // Face 4 starts at index 12
        let resolved =
            resolve_feature_index(&mesh(), Some(&feature), Some(4), None);
        assert_eq!(resolved, Some(1));
        // Vertex index used as-is when there is no face
        let resolved =
            resolve_feature_index(&mesh(), Some(&feature), None, Some(25));
        assert_eq!(resolved, Some(2));
    }

    #[test]
    fn single_start_is_feature_zero() {
        let feature = data(vec![0]);
        for face in [0, 7, 1_000_000] {
            assert_eq!(
                resolve_feature_index(
                    &mesh(),
                    Some(&feature),
                    Some(face),
                    None
                ),
                Some(0)
            );
        }
    }

    #[test]
    fn missing_inputs_are_unresolved() {
        let empty = data(Vec::new());
        let full = data(vec![0, 10]);
        assert_eq!(resolve_feature_index(&mesh(), None, Some(1), None), None);
        assert_eq!(
            resolve_feature_index(&mesh(), Some(&empty), Some(1), None),
            None
        );
        assert_eq!(
            resolve_feature_index(&mesh(), Some(&full), None, None),
            None
        );
    }

    #[test]
    fn points_bypass_starts() {
        let points = RenderObject::points(vec![Vec3::ZERO; 8], 1.0);
        let feature = data(vec![0, 2, 4]);
        assert_eq!(
            resolve_feature_index(&points, Some(&feature), None, Some(3)),
            Some(3)
        );
        assert_eq!(
            resolve_feature_index(&points, Some(&feature), None, None),
            None
        );
    }
}
