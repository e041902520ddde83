//! Integration tests for rectangle construction and area computation.

use quickcheck_macros::quickcheck;
use selkie_geometry::Rectangle;

#[test]
fn test_area_multiplies_sides() {
    assert_eq!(Rectangle::new(3.0, 4.0).area(), 12.0);
    assert_eq!(Rectangle::new(0.0, 9.5).area(), 0.0);
}

#[test]
fn test_area_reflects_later_mutation() {
    let mut rectangle = Rectangle::new(2.0, 3.0);
    assert_eq!(rectangle.area(), 6.0);

    rectangle.width = 5.0;
    assert_eq!(rectangle.area(), 15.0);

    rectangle.height = 0.5;
    assert_eq!(rectangle.area(), 2.5);
}

#[test]
fn test_rectangles_copy_by_value() {
    let original = Rectangle::new(1.5, 2.0);
    let mut copy = original;
    copy.width = 4.0;
    assert_eq!(original.area(), 3.0);
    assert_eq!(copy.area(), 8.0);
}

#[quickcheck]
fn area_is_width_times_height(width: f64, height: f64) -> bool {
    Rectangle::new(width, height).area().to_bits() == (width * height).to_bits()
}
