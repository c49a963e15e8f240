//! Cell-space geometry used by the tool: snapping points to cells, camera ray
//! plane casts and box footprints.

use bevy::prelude::*;

use crate::constants::HALF_BLOCK;

/// Rounds a world-space point to the cell whose center is nearest to it.
/// Ties go to the even cell.
pub fn cell_from_point(point: Vec3) -> IVec3 {
    (point - HALF_BLOCK)
        .map(f32::round_ties_even)
        .as_ivec3()
}

pub fn cell_center(cell: IVec3) -> Vec3 {
    cell.as_vec3() + HALF_BLOCK
}

/// Free-place target: the cell nearest to the point `distance` units along the ray.
pub fn free_place_target(ray: Ray3d, distance: f32) -> IVec3 {
    cell_from_point(ray.get_point(distance))
}

/// Intersects `ray` with the plane through `origin` facing `normal`.
///
/// Misses when the ray is parallel to the plane or the plane lies behind the
/// ray origin.
pub fn intersect_plane(ray: Ray3d, origin: Vec3, normal: Dir3) -> Option<Vec3> {
    ray.intersect_plane(origin, InfinitePlane3d { normal })
        .map(|distance| ray.get_point(distance))
}

/// Axis-aligned, normalized box of cells. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl CellBox {
    pub fn from_corners(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// One cell per `(x, z)` column of the footprint, all at the top layer.
    /// Iterates z in the outer loop and x in the inner loop.
    pub fn top_layer(&self) -> impl Iterator<Item = IVec3> {
        let CellBox { min, max } = *self;
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| IVec3::new(x, max.y, z)))
    }

    pub fn column_count(&self) -> usize {
        let span = self.max - self.min + IVec3::ONE;
        span.x as usize * span.z as usize
    }
}

/// World-space box drawn around the targeted cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBox {
    pub center: Vec3,
    pub size: Vec3,
}

impl HighlightBox {
    pub fn cell(cell: IVec3) -> Self {
        Self {
            center: cell_center(cell),
            size: Vec3::ONE,
        }
    }

    /// Box enclosing both corners, whichever order they are in.
    pub fn spanning(from: IVec3, to: IVec3) -> Self {
        Self {
            center: (from + to + IVec3::ONE).as_vec3() * 0.5,
            size: ((to - from).abs() + IVec3::ONE).as_vec3(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_from_point_snaps_to_nearest_center() {
        assert_eq!(cell_from_point(Vec3::new(0.5, 0.5, 0.5)), IVec3::ZERO);
        assert_eq!(cell_from_point(Vec3::new(0.9, 1.2, 0.1)), IVec3::new(0, 1, 0));
        assert_eq!(cell_from_point(Vec3::new(-0.4, 2.6, -1.3)), IVec3::new(-1, 2, -2));
    }

    #[test]
    fn cell_from_point_breaks_ties_towards_even() {
        assert_eq!(cell_from_point(Vec3::new(3.0, 2.0, 1.0)), IVec3::new(2, 2, 0));
        assert_eq!(cell_from_point(Vec3::new(0.0, -1.0, -2.0)), IVec3::new(0, -2, -2));
    }

    #[test]
    fn free_place_target_uses_point_along_ray() {
        let ray = Ray3d::new(Vec3::new(0.5, 10.5, 0.0), Dir3::NEG_Z);
        assert_eq!(free_place_target(ray, 6.5), IVec3::new(0, 10, -7));
    }

    #[test]
    fn intersect_plane_hits_in_front_only() {
        let ray = Ray3d::new(Vec3::new(0.0, 10.0, 0.0), Dir3::NEG_Y);
        let hit = intersect_plane(ray, Vec3::new(4.0, 2.5, 4.0), Dir3::Y);
        assert_eq!(hit, Some(Vec3::new(0.0, 2.5, 0.0)));

        let behind = intersect_plane(ray, Vec3::new(0.0, 12.0, 0.0), Dir3::Y);
        assert_eq!(behind, None);
    }

    #[test]
    fn intersect_plane_misses_parallel_planes() {
        let ray = Ray3d::new(Vec3::ZERO, Dir3::X);
        assert_eq!(intersect_plane(ray, Vec3::new(0.0, 1.0, 0.0), Dir3::Y), None);
    }

    #[test]
    fn cell_box_normalizes_corners() {
        let a = CellBox::from_corners(IVec3::new(3, 7, 3), IVec3::new(1, 5, 1));
        let b = CellBox::from_corners(IVec3::new(1, 5, 1), IVec3::new(3, 7, 3));
        assert_eq!(a, b);
        assert_eq!(a.min, IVec3::new(1, 5, 1));
        assert_eq!(a.max, IVec3::new(3, 7, 3));
    }

    #[test]
    fn top_layer_iterates_z_outer_x_inner() {
        let cells: Vec<IVec3> = CellBox::from_corners(IVec3::new(0, 0, 0), IVec3::new(1, 2, 1))
            .top_layer()
            .collect();
        assert_eq!(
            cells,
            vec![
                IVec3::new(0, 2, 0),
                IVec3::new(1, 2, 0),
                IVec3::new(0, 2, 1),
                IVec3::new(1, 2, 1),
            ]
        );
    }

    #[test]
    fn column_count_matches_footprint() {
        let cell_box = CellBox::from_corners(IVec3::new(-2, 0, 4), IVec3::new(2, 9, 6));
        assert_eq!(cell_box.column_count(), 15);
        assert_eq!(cell_box.top_layer().count(), 15);
    }

    #[test]
    fn highlight_box_spans_reversed_corners() {
        let highlight = HighlightBox::spanning(IVec3::new(2, 0, 2), IVec3::new(0, 0, 0));
        assert_eq!(highlight.center, Vec3::new(1.5, 0.5, 1.5));
        assert_eq!(highlight.size, Vec3::new(3.0, 1.0, 3.0));

        let single = HighlightBox::cell(IVec3::new(4, 1, -1));
        assert_eq!(single.center, Vec3::new(4.5, 1.5, -0.5));
        assert_eq!(single.size, Vec3::ONE);
    }
}
