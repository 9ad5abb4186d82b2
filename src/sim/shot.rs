//! Shot planning from a drag gesture
//!
//! The player pulls back from the ball like a slingshot: the shot flies from
//! the current pointer position back through the drag start.

use glam::Vec2;

use crate::tuning::Tuning;

/// Fraction of full power (0..=1) for a drag between two points
#[inline]
pub fn power_ratio(drag_start: Vec2, drag_current: Vec2, drag_max: f32) -> f32 {
    ((drag_start - drag_current).length() / drag_max).min(1.0)
}

/// Turn a drag into a launch velocity
///
/// Returns `None` for a zero-length drag or when the resulting power is at or
/// below `tuning.min_shot_power` (an accidental tap rather than a shot).
pub fn plan_shot(drag_start: Vec2, drag_current: Vec2, tuning: &Tuning) -> Option<Vec2> {
    let pull = drag_start - drag_current;
    let dist = pull.length();
    if dist == 0.0 {
        return None;
    }

    let power = (dist / tuning.drag_max).min(1.0) * tuning.max_power;
    if power <= tuning.min_shot_power {
        return None;
    }

    Some(pull / dist * power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_drag_plans_nothing() {
        let p = Vec2::new(120.0, 520.0);
        assert!(plan_shot(p, p, &Tuning::default()).is_none());
        assert_eq!(power_ratio(p, p, 160.0), 0.0);
    }

    #[test]
    fn test_weak_drag_plans_nothing() {
        // 3px of 160 -> 0.4125 power, under the 0.5 threshold
        let start = Vec2::new(100.0, 100.0);
        assert!(plan_shot(start, start + Vec2::new(3.0, 0.0), &Tuning::default()).is_none());
    }

    #[test]
    fn test_pull_left_shoots_right() {
        let start = Vec2::new(100.0, 100.0);
        let v = plan_shot(start, start - Vec2::new(80.0, 0.0), &Tuning::default()).unwrap();
        assert!(v.x > 0.0);
        assert!(v.y.abs() < 1e-6);
        // Half the drag range -> half power
        assert!((v.length() - 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_power_caps_at_drag_max() {
        let start = Vec2::new(500.0, 300.0);
        let v = plan_shot(start, start + Vec2::new(0.0, 1000.0), &Tuning::default()).unwrap();
        assert!((v.length() - 22.0).abs() < 1e-4);
        assert!(v.y < 0.0);
        assert_eq!(power_ratio(start, start + Vec2::new(0.0, 1000.0), 160.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_planned_shot_magnitude_and_direction(
            sx in 0.0f32..960.0, sy in 0.0f32..640.0,
            dx in -400.0f32..400.0, dy in -400.0f32..400.0,
        ) {
            let tuning = Tuning::default();
            let start = Vec2::new(sx, sy);
            let current = start + Vec2::new(dx, dy);
            let dist = (start - current).length();
            let power = (dist / tuning.drag_max).min(1.0) * tuning.max_power;

            match plan_shot(start, current, &tuning) {
                None => prop_assert!(dist == 0.0 || power <= tuning.min_shot_power),
                Some(v) => {
                    prop_assert!(power > tuning.min_shot_power);
                    prop_assert!((v.length() - power).abs() < 1e-3);
                    let expected_dir = (start - current) / dist;
                    prop_assert!((v.normalize() - expected_dir).length() < 1e-3);
                }
            }
        }

        #[test]
        fn prop_power_ratio_in_unit_range(
            dx in -1000.0f32..1000.0, dy in -1000.0f32..1000.0,
        ) {
            let r = power_ratio(Vec2::ZERO, Vec2::new(dx, dy), 160.0);
            prop_assert!((0.0..=1.0).contains(&r));
        }
    }
}
