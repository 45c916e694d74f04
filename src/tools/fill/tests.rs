use super::*;

const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

fn matcher_exact() -> ColorMatcher {
    ColorMatcher::new(0)
}

#[test]
fn test_fill_whole_white_canvas() {
    let mut b = PixelBuffer::new(10, 10).unwrap();
    let outcome = FloodFillEngine::fill(&mut b, 5, 5, RED, &matcher_exact());
    assert_eq!(outcome, FillOutcome::Filled { pixels: 100 });
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(b.get_pixel(x, y).unwrap(), RED);
        }
    }
}

#[test]
fn test_fill_second_time_noop() {
    let mut b = PixelBuffer::new(10, 10).unwrap();
    let _ = FloodFillEngine::fill(&mut b, 5, 5, RED, &matcher_exact());
    let before = b.bytes().to_vec();
    let outcome = FloodFillEngine::fill(&mut b, 5, 5, RED, &matcher_exact());
    assert_eq!(outcome, FillOutcome::NoOp);
    assert_eq!(b.bytes(), &before[..], "NoOp 不得改动画布");
}

#[test]
fn test_fill_out_of_bounds_seed() {
    let mut b = PixelBuffer::new(10, 10).unwrap();
    assert_eq!(FloodFillEngine::fill(&mut b, -1, 5, RED, &matcher_exact()), FillOutcome::OutOfBounds);
    assert_eq!(FloodFillEngine::fill(&mut b, 5, 10, RED, &matcher_exact()), FillOutcome::OutOfBounds);
}

#[test]
fn test_fill_boundary_click() {
    let mut b = PixelBuffer::new(10, 10).unwrap();
    b.set_pixel(3, 3, BLACK).unwrap();
    let before = b.bytes().to_vec();
    let outcome = FloodFillEngine::fill(&mut b, 3, 3, RED, &ColorMatcher::default());
    assert_eq!(outcome, FillOutcome::BoundaryClick);
    assert_eq!(b.bytes(), &before[..]);
}

#[test]
fn test_fill_ring_containment() {
    // 5x5 内部区域外围一圈黑线，填充中心不得渗出
    let mut b = PixelBuffer::new(9, 9).unwrap();
    for i in 1..=7 {
        b.set_pixel(i, 1, BLACK).unwrap();
        b.set_pixel(i, 7, BLACK).unwrap();
        b.set_pixel(1, i, BLACK).unwrap();
        b.set_pixel(7, i, BLACK).unwrap();
    }
    let outcome = FloodFillEngine::fill(&mut b, 4, 4, RED, &ColorMatcher::default());
    assert_eq!(outcome, FillOutcome::Filled { pixels: 25 });
    for i in 1..=7 {
        assert_eq!(b.get_pixel(i, 1).unwrap(), BLACK, "环上像素不得被改写");
        assert_eq!(b.get_pixel(i, 7).unwrap(), BLACK);
        assert_eq!(b.get_pixel(1, i).unwrap(), BLACK);
        assert_eq!(b.get_pixel(7, i).unwrap(), BLACK);
    }
    assert_eq!(b.get_pixel(0, 0).unwrap(), Color::white(), "环外必须保持原样");
    assert_eq!(b.get_pixel(8, 8).unwrap(), Color::white());
    assert_eq!(b.get_pixel(4, 4).unwrap(), RED);
}

#[test]
fn test_fill_tolerance_includes_near_colors() {
    let mut b = PixelBuffer::new(3, 1).unwrap();
    b.set_pixel(1, 0, Color::new(250, 250, 250, 255)).unwrap();
    b.set_pixel(2, 0, Color::new(200, 200, 200, 255)).unwrap();
    let outcome = FloodFillEngine::fill(&mut b, 0, 0, RED, &ColorMatcher::new(10));
    // 白 -> 250 在容差内，200 不在
    assert_eq!(outcome, FillOutcome::Filled { pixels: 2 });
    assert_eq!(b.get_pixel(2, 0).unwrap(), Color::new(200, 200, 200, 255));
}

#[test]
fn test_fill_four_connected_only() {
    // 对角线隔断：斜向不连通
    let mut b = PixelBuffer::new(3, 3).unwrap();
    for i in 0..3 {
        b.set_pixel(i, i, BLACK).unwrap();
        if i + 1 < 3 {
            b.set_pixel(i + 1, i, BLACK).unwrap();
        }
    }
    let outcome = FloodFillEngine::fill(&mut b, 0, 2, RED, &ColorMatcher::default());
    assert_eq!(outcome, FillOutcome::Filled { pixels: 3 });
    assert_eq!(b.get_pixel(2, 0).unwrap(), Color::white(), "对角另一侧不得被填充");
}
