use super::*;

#[test]
fn test_match_exact_zero_tolerance() {
    let a = Color::new(10, 20, 30, 255);
    assert!(ColorMatcher::matches_within(a, a, 0));
    assert!(!ColorMatcher::matches_within(a, Color::new(11, 20, 30, 255), 0));
}

#[test]
fn test_match_tolerance_each_channel() {
    let a = Color::new(100, 100, 100, 100);
    assert!(ColorMatcher::matches_within(a, Color::new(105, 95, 100, 100), 5));
    assert!(!ColorMatcher::matches_within(a, Color::new(106, 100, 100, 100), 5));
    // alpha 同样参与容差比较
    assert!(!ColorMatcher::matches_within(a, Color::new(100, 100, 100, 106), 5));
}

#[test]
fn test_boundary_black_line() {
    let m = ColorMatcher::default();
    assert!(m.is_boundary(Color::new(0, 0, 0, 255)));
    assert!(m.is_boundary(Color::new(59, 59, 59, 201)));
}

#[test]
fn test_boundary_white_never() {
    let m = ColorMatcher::default();
    assert!(!m.is_boundary(Color::white()));
    // alpha 未超过阈值不算轮廓
    assert!(!m.is_boundary(Color::new(0, 0, 0, 200)));
    // 任一通道过亮即不算轮廓
    assert!(!m.is_boundary(Color::new(0, 0, 60, 255)));
}

#[test]
fn test_boundary_monotonic_darker_more_opaque() {
    let m = ColorMatcher::default();
    assert!(m.is_boundary(Color::new(10, 10, 10, 255)));
    assert!(m.is_boundary(Color::new(0, 0, 0, 201)));
}
