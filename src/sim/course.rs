//! Course catalog: the fixed, ordered list of holes for a round

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// One hole: where the ball starts, where the cup is, and what is in the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleDef {
    pub start: Vec2,
    pub cup: Vec2,
    /// Solid obstacles, tested in this order every tick (may be empty)
    #[serde(default)]
    pub obstacles: Vec<Rect>,
}

impl HoleDef {
    pub fn new(start: Vec2, cup: Vec2, obstacles: Vec<Rect>) -> Self {
        Self {
            start,
            cup,
            obstacles,
        }
    }
}

/// The playing surface plus its holes, in play order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CourseData")]
pub struct Course {
    pub width: f32,
    pub height: f32,
    holes: Vec<HoleDef>,
}

/// Wire form of a course, checked by [`Course::new`] on the way in
#[derive(Deserialize)]
struct CourseData {
    width: f32,
    height: f32,
    holes: Vec<HoleDef>,
}

impl TryFrom<CourseData> for Course {
    type Error = &'static str;

    fn try_from(data: CourseData) -> Result<Self, Self::Error> {
        Course::new(data.width, data.height, data.holes).ok_or("a course needs at least one hole")
    }
}

impl Course {
    /// Build a course; a round needs at least one hole
    pub fn new(width: f32, height: f32, holes: Vec<HoleDef>) -> Option<Self> {
        if holes.is_empty() {
            return None;
        }
        Some(Self {
            width,
            height,
            holes,
        })
    }

    /// Parse a course from JSON; an empty hole list is an error
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let course: Course = serde_json::from_str(json)?;
        log::info!(
            "Loaded course ({} holes, {}x{})",
            course.len(),
            course.width,
            course.height
        );
        Ok(course)
    }

    /// Surface size as a vector (walls sit at 0 and these extents)
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Hole at a 0-based index
    pub fn hole(&self, index: usize) -> Option<&HoleDef> {
        self.holes.get(index)
    }

    pub fn holes(&self) -> &[HoleDef] {
        &self.holes
    }

    /// Number of holes (never zero)
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Check that every obstacle sits on the surface
    pub fn obstacles_in_bounds(&self) -> bool {
        let bounds = self.bounds();
        self.holes
            .iter()
            .flat_map(|h| h.obstacles.iter())
            .all(|r| r.within_bounds(bounds))
    }

    /// The standard nine-hole round
    pub fn classic() -> Self {
        let hole = |start: (f32, f32), cup: (f32, f32), obstacles: &[(f32, f32, f32, f32)]| {
            HoleDef::new(
                Vec2::new(start.0, start.1),
                Vec2::new(cup.0, cup.1),
                obstacles
                    .iter()
                    .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
                    .collect(),
            )
        };

        let holes = vec![
            hole(
                (120.0, 520.0),
                (820.0, 120.0),
                &[
                    (300.0, 400.0, 60.0, 10.0),
                    (400.0, 280.0, 20.0, 120.0),
                    (600.0, 200.0, 10.0, 150.0),
                ],
            ),
            hole(
                (100.0, 80.0),
                (840.0, 520.0),
                &[(200.0, 200.0, 10.0, 300.0), (500.0, 400.0, 120.0, 15.0)],
            ),
            hole(
                (80.0, 320.0),
                (880.0, 320.0),
                &[
                    (300.0, 150.0, 20.0, 200.0),
                    (600.0, 450.0, 100.0, 15.0),
                    (720.0, 320.0, 15.0, 120.0),
                ],
            ),
            hole(
                (160.0, 160.0),
                (760.0, 540.0),
                &[
                    (250.0, 300.0, 10.0, 250.0),
                    (550.0, 250.0, 10.0, 150.0),
                    (650.0, 400.0, 150.0, 10.0),
                ],
            ),
            hole(
                (200.0, 540.0),
                (760.0, 120.0),
                &[
                    (350.0, 200.0, 10.0, 300.0),
                    (500.0, 120.0, 120.0, 10.0),
                    (650.0, 350.0, 10.0, 250.0),
                ],
            ),
            hole(
                (140.0, 300.0),
                (500.0, 80.0),
                &[(300.0, 200.0, 200.0, 10.0), (420.0, 100.0, 10.0, 150.0)],
            ),
            hole(
                (820.0, 520.0),
                (120.0, 120.0),
                &[
                    (500.0, 300.0, 10.0, 200.0),
                    (600.0, 500.0, 150.0, 10.0),
                    (700.0, 250.0, 10.0, 250.0),
                ],
            ),
            hole(
                (480.0, 560.0),
                (480.0, 80.0),
                &[(400.0, 300.0, 150.0, 10.0), (600.0, 100.0, 10.0, 250.0)],
            ),
            hole(
                (120.0, 140.0),
                (840.0, 400.0),
                &[
                    (300.0, 220.0, 10.0, 300.0),
                    (500.0, 100.0, 150.0, 10.0),
                    (700.0, 300.0, 10.0, 300.0),
                ],
            ),
        ];

        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            holes,
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_RADIUS;

    #[test]
    fn test_classic_has_nine_holes() {
        let course = Course::classic();
        assert_eq!(course.len(), 9);
        assert!(!course.is_empty());
        assert!(course.hole(8).is_some());
        assert!(course.hole(9).is_none());
    }

    #[test]
    fn test_classic_obstacles_in_bounds() {
        assert!(Course::classic().obstacles_in_bounds());
    }

    #[test]
    fn test_classic_starts_and_cups_are_clear() {
        // Neither the tee nor the cup may sit inside an obstacle
        let course = Course::classic();
        for hole in course.holes() {
            for rect in &hole.obstacles {
                assert!(crate::distance(rect.closest_point(hole.start), hole.start) >= BALL_RADIUS);
                assert!(!rect.contains_point(hole.cup));
            }
        }
    }

    #[test]
    fn test_empty_course_rejected() {
        assert!(Course::new(100.0, 100.0, Vec::new()).is_none());
    }

    #[test]
    fn test_json_without_holes_rejected() {
        let err = Course::from_json(r#"{"width":960.0,"height":640.0,"holes":[]}"#).unwrap_err();
        assert!(err.to_string().contains("at least one hole"));
    }

    #[test]
    fn test_json_course_loads() {
        let json = r#"{
            "width": 400.0,
            "height": 300.0,
            "holes": [
                { "start": [40.0, 150.0], "cup": [360.0, 150.0],
                  "obstacles": [{ "x": 190.0, "y": 100.0, "width": 20.0, "height": 100.0 }] },
                { "start": [40.0, 40.0], "cup": [360.0, 260.0] }
            ]
        }"#;
        let course = Course::from_json(json).unwrap();
        assert_eq!(course.len(), 2);
        assert_eq!(course.bounds(), Vec2::new(400.0, 300.0));
        assert!(course.hole(1).unwrap().obstacles.is_empty());
        assert!(course.obstacles_in_bounds());

        // Serializes back through the same checked path
        let again = Course::from_json(&serde_json::to_string(&course).unwrap()).unwrap();
        assert_eq!(again.holes(), course.holes());
    }

    #[test]
    fn test_obstacle_free_hole_allowed() {
        let course = Course::new(
            200.0,
            200.0,
            vec![HoleDef::new(Vec2::new(20.0, 20.0), Vec2::new(180.0, 180.0), Vec::new())],
        )
        .unwrap();
        assert_eq!(course.len(), 1);
        assert!(course.obstacles_in_bounds());
    }
}
