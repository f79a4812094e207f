use super::*;
use nalgebra::vector;

#[test]
fn circle_membership_and_bounds() {
    let c = Region::circle(50.0, 50.0, 50.0);
    assert!(c.contains(vector![50.0, 50.0]));
    assert!(c.contains(vector![50.0, 100.0]));
    assert!(!c.contains(vector![1.0, 1.0]));
    assert!(!c.contains(vector![99.0, 99.0]));
    let b = c.bounds();
    assert_eq!(b, Bounds2::square(0.0, 100.0));
}

#[test]
fn triangle_membership_and_bounds() {
    let t = Region::polygon(&[(1.0, 1.0), (50.0, 100.0), (100.0, 1.0)]).unwrap();
    assert!(t.contains(vector![50.0, 50.0]));
    assert!(t.contains(vector![50.0, 2.0]));
    assert!(!t.contains(vector![5.0, 90.0]));
    assert!(!t.contains(vector![95.0, 90.0]));
    assert_eq!(t.bounds(), Bounds2::square(1.0, 100.0));
    assert!((t.area() - 0.5 * 99.0 * 99.0).abs() < 1e-9);
}

#[test]
fn closed_ring_is_accepted() {
    // Upper-left half of the box; the closing vertex repeats the first one.
    let d = Region::polygon(&[(1.0, 1.0), (1.0, 100.0), (100.0, 100.0), (1.0, 1.0)]).unwrap();
    assert!(d.contains(vector![10.0, 90.0]));
    assert!(!d.contains(vector![90.0, 10.0]));
    match &d {
        Region::Polygon(p) => assert_eq!(p.vertices.len(), 3),
        _ => panic!("expected polygon"),
    }
}

#[test]
fn degenerate_polygon_rejected() {
    assert!(Region::polygon(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).is_none());
    assert!(Region::polygon(&[(0.0, 0.0), (1.0, 1.0)]).is_none());
}

#[test]
fn enclosing_bounds_and_samples_stay_inside() {
    use rand::{rngs::StdRng, SeedableRng};
    let b = Bounds2::enclosing(&[vector![3.0, -1.0], vector![-2.0, 4.0], vector![0.0, 0.0]])
        .unwrap();
    assert_eq!(b, Bounds2::new(vector![-2.0, -1.0], vector![3.0, 4.0]));
    assert!((b.width() - 5.0).abs() < 1e-12 && (b.height() - 5.0).abs() < 1e-12);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        assert!(b.contains(b.sample(&mut rng)));
    }
    assert!(Bounds2::enclosing(&[]).is_none());
}

#[test]
fn circle_area() {
    let c = Region::circle(0.0, 0.0, 2.0);
    assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn triangle_matches_hull_in_either_orientation() {
    let corners = [(1.0, 1.0), (50.0, 100.0), (100.0, 1.0)];
    let cw = Region::triangle(corners[0], corners[1], corners[2]);
    let ccw = Region::triangle(corners[0], corners[2], corners[1]);
    let hull = Region::polygon(&corners).unwrap();
    for p in [vector![50.0, 50.0], vector![50.0, 2.0], vector![5.0, 90.0], vector![95.0, 90.0]] {
        assert_eq!(cw.contains(p), hull.contains(p));
        assert_eq!(ccw.contains(p), hull.contains(p));
    }
    assert_eq!(cw.bounds(), hull.bounds());
    assert!((cw.area() - hull.area()).abs() < 1e-9);
    assert!(cw.area() > 0.0);
}
