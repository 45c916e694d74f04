use super::*;
#[test]
fn test_color_new() {
    let c = Color::new(1, 2, 3, 4);
    assert_eq!(c.r, 1);
    assert_eq!(c.a, 4);
}
#[test]
fn test_color_trans() {
    let c = Color::transparent();
    assert_eq!(c.a, 0);
}
#[test]
fn test_color_bytes_roundtrip() {
    let c = Color::new(10, 20, 30, 40);
    assert_eq!(Color::from_bytes(c.to_bytes()), c);
}
