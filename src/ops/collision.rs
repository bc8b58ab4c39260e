//! Release-point classification and the status transition it implies.

use crate::model::geometry::{ContainerRects, Point};
use crate::model::task::Status;

/// Which container, if any, a release point falls in.
///
/// When the rectangles overlap and the point is in both, the container that
/// is not `origin` wins: a drop back into the origin never changes anything.
pub fn classify(point: Point, rects: &ContainerRects, origin: Status) -> Option<Status> {
    let other = origin.flipped();
    if rects.get(other).contains(point) {
        Some(other)
    } else if rects.get(origin).contains(point) {
        Some(origin)
    } else {
        None
    }
}

/// Status a task should move to, or `None` when nothing changes
pub fn transition(classified: Option<Status>, current: Status) -> Option<Status> {
    classified.filter(|&target| target != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::ContainerRect;

    /// Waiting container stacked above the completed one, like the board layout
    fn stacked() -> ContainerRects {
        ContainerRects {
            todo: ContainerRect::new(2, 0, 79, 6),
            done: ContainerRect::new(9, 0, 79, 13),
        }
    }

    /// Overlapping rows 5..=6
    fn overlapping() -> ContainerRects {
        ContainerRects {
            todo: ContainerRect::new(0, 0, 40, 6),
            done: ContainerRect::new(5, 0, 40, 12),
        }
    }

    #[test]
    fn test_point_in_done_only() {
        let p = Point::new(10, 11);
        assert_eq!(classify(p, &stacked(), Status::Todo), Some(Status::Done));
        assert_eq!(classify(p, &stacked(), Status::Done), Some(Status::Done));
    }

    #[test]
    fn test_point_in_neither() {
        let p = Point::new(10, 8);
        assert_eq!(classify(p, &stacked(), Status::Todo), None);
        assert_eq!(classify(Point::new(-1, 3), &stacked(), Status::Todo), None);
    }

    #[test]
    fn test_edges_count_as_inside() {
        let rects = stacked();
        assert_eq!(
            classify(Point::new(0, 2), &rects, Status::Done),
            Some(Status::Todo)
        );
        assert_eq!(
            classify(Point::new(79, 13), &rects, Status::Todo),
            Some(Status::Done)
        );
    }

    #[test]
    fn test_overlap_prefers_non_origin() {
        let p = Point::new(3, 5);
        assert_eq!(classify(p, &overlapping(), Status::Todo), Some(Status::Done));
        assert_eq!(classify(p, &overlapping(), Status::Done), Some(Status::Todo));
    }

    #[test]
    fn test_classify_is_pure() {
        let rects = stacked();
        let p = Point::new(4, 4);
        let first = classify(p, &rects, Status::Todo);
        assert_eq!(classify(p, &rects, Status::Todo), first);
        assert_eq!(rects, stacked());
    }

    #[test]
    fn test_transition_rule() {
        assert_eq!(transition(Some(Status::Done), Status::Todo), Some(Status::Done));
        assert_eq!(transition(Some(Status::Todo), Status::Done), Some(Status::Todo));
        assert_eq!(transition(Some(Status::Todo), Status::Todo), None);
        assert_eq!(transition(Some(Status::Done), Status::Done), None);
        assert_eq!(transition(None, Status::Todo), None);
    }
}
