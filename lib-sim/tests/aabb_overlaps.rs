use glam::vec2;
use lib_sim::Aabb;

#[test]
fn separated_boxes_do_not_overlap() {
    let a = Aabb::from_pos_size(vec2(0.0, 0.0), vec2(100.0, 100.0));
    let b = Aabb::from_pos_size(vec2(101.0, 101.0), vec2(100.0, 100.0));
    assert!(!a.overlaps(b));
    assert!(!b.overlaps(a));
}

#[test]
fn separated_on_one_axis_only_does_not_overlap() {
    let a = Aabb::from_pos_size(vec2(0.0, 0.0), vec2(50.0, 50.0));
    let b = Aabb::from_pos_size(vec2(200.0, 0.0), vec2(50.0, 50.0));
    assert!(!a.overlaps(b));

    let c = Aabb::from_pos_size(vec2(0.0, 200.0), vec2(50.0, 50.0));
    assert!(!a.overlaps(c));
}

#[test]
fn overlapping_boxes_overlap() {
    let a = Aabb::from_pos_size(vec2(0.0, 0.0), vec2(103.0, 103.0));
    let b = Aabb::from_pos_size(vec2(101.0, 101.0), vec2(100.0, 100.0));
    assert!(a.overlaps(b));
    assert!(b.overlaps(a));
}

#[test]
fn contained_box_overlaps() {
    let outer = Aabb::from_pos_size(vec2(0.0, 0.0), vec2(100.0, 100.0));
    let inner = Aabb::from_pos_size(vec2(25.0, 25.0), vec2(10.0, 10.0));
    assert!(outer.overlaps(inner));
    assert!(inner.overlaps(outer));
}

#[test]
fn touching_edges_count_as_overlap() {
    let a = Aabb::from_pos_size(vec2(0.0, 0.0), vec2(50.0, 50.0));
    let b = Aabb::from_pos_size(vec2(50.0, 0.0), vec2(50.0, 50.0));
    assert!(a.overlaps(b));
}

#[test]
fn contains_points() {
    let a = Aabb::from_pos_size(vec2(10.0, 10.0), vec2(20.0, 20.0));
    assert!(a.contains(vec2(15.0, 15.0)));
    assert!(a.contains(vec2(10.0, 10.0)));
    assert!(a.contains(vec2(30.0, 30.0)));
    assert!(!a.contains(vec2(9.0, 15.0)));
    assert!(!a.contains(vec2(15.0, 31.0)));
    assert_eq!(a.size(), vec2(20.0, 20.0));
}
