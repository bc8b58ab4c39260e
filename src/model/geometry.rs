use crate::model::task::Status;

/// A pointer position in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn manhattan_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Axis-aligned bounding box of a container. All four edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRect {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ContainerRect {
    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        ContainerRect {
            top,
            left,
            right,
            bottom,
        }
    }

    /// A point on the edge counts as inside
    pub fn contains(&self, point: Point) -> bool {
        self.left <= point.x
            && point.x <= self.right
            && self.top <= point.y
            && point.y <= self.bottom
    }

    /// Convert a ratatui cell area. Empty areas yield `None`.
    pub fn from_area(area: ratatui::layout::Rect) -> Option<Self> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let left = i32::from(area.x);
        let top = i32::from(area.y);
        Some(ContainerRect {
            top,
            left,
            right: left + i32::from(area.width) - 1,
            bottom: top + i32::from(area.height) - 1,
        })
    }
}

/// Source of container rectangles, queried at release time
pub trait ContainerLayout {
    /// Current rectangle of the container, or `None` if it is not laid out
    fn container_rect(&self, container: Status) -> Option<ContainerRect>;
}

/// Both container rectangles captured together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRects {
    pub todo: ContainerRect,
    pub done: ContainerRect,
}

impl ContainerRects {
    pub fn get(&self, container: Status) -> ContainerRect {
        match container {
            Status::Todo => self.todo,
            Status::Done => self.done,
        }
    }

    /// Read both rectangles from a layout; `None` if either is missing
    pub fn read(layout: &impl ContainerLayout) -> Option<Self> {
        Some(ContainerRects {
            todo: layout.container_rect(Status::Todo)?,
            done: layout.container_rect(Status::Done)?,
        })
    }
}

impl ContainerLayout for ContainerRects {
    fn container_rect(&self, container: Status) -> Option<ContainerRect> {
        Some(self.get(container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let r = ContainerRect::new(10, 5, 20, 15);
        assert!(r.contains(Point::new(5, 10)));
        assert!(r.contains(Point::new(20, 15)));
        assert!(r.contains(Point::new(12, 12)));
        assert!(!r.contains(Point::new(4, 12)));
        assert!(!r.contains(Point::new(21, 12)));
        assert!(!r.contains(Point::new(12, 9)));
        assert!(!r.contains(Point::new(12, 16)));
    }

    #[test]
    fn test_from_area() {
        let area = ratatui::layout::Rect::new(2, 3, 10, 4);
        assert_eq!(
            ContainerRect::from_area(area),
            Some(ContainerRect::new(3, 2, 11, 6))
        );
        assert_eq!(
            ContainerRect::from_area(ratatui::layout::Rect::new(2, 3, 0, 4)),
            None
        );
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan_distance(Point::new(3, -4)), 7);
        assert_eq!(Point::new(5, 5).manhattan_distance(Point::new(5, 5)), 0);
    }

    #[test]
    fn test_rects_read_requires_both() {
        struct OnlyTodo;
        impl ContainerLayout for OnlyTodo {
            fn container_rect(&self, container: Status) -> Option<ContainerRect> {
                match container {
                    Status::Todo => Some(ContainerRect::new(0, 0, 1, 1)),
                    Status::Done => None,
                }
            }
        }
        assert_eq!(ContainerRects::read(&OnlyTodo), None);
    }
}
