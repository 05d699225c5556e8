use super::common::Vec2D;
use super::{Airport, FleetRegistry, Plane, SimStats};
use crate::config::SimConfig;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn two_airport_registry(planes_at_first: usize) -> FleetRegistry {
    let a1 = Airport::new(1, Vec2D::new(0, 0));
    let a2 = Airport::new(2, Vec2D::new(3, 4));
    let planes = (0..planes_at_first)
        .map(|i| Arc::new(Plane::new(i as u32 + 1, 1, Vec2D::new(0.0, 0.0))))
        .collect();
    FleetRegistry::new(vec![a1, a2], planes)
}

#[test]
fn test_populate_id_scheme() {
    let cfg = SimConfig {
        num_airports: 3,
        planes_per_airport: 2,
        ..SimConfig::default()
    };
    let registry = FleetRegistry::populate(&cfg);

    let airport_ids: Vec<u32> = registry.airports().iter().map(Airport::id).collect();
    assert_eq!(airport_ids, vec![1, 2, 3]);

    let planes = registry.planes();
    assert_eq!(planes.len(), 6);
    let plane_ids: Vec<u32> = planes.iter().map(|p| p.id()).collect();
    assert_eq!(plane_ids, vec![1, 2, 3, 4, 5, 6]);
    // Planes start parked at their home airport.
    for plane in &planes {
        let home = registry.find_airport(plane.home()).unwrap();
        assert_eq!(plane.position(), home.pos().cast());
        assert!(plane.is_available());
    }
}

#[test]
fn test_allocation_marks_plane_in_flight() {
    let registry = two_airport_registry(2);

    let first = registry.find_available_plane(1).unwrap();
    assert!(!first.is_available());

    let second = registry.find_available_plane(1).unwrap();
    assert_ne!(first.id(), second.id());

    // Both planes busy now.
    assert!(registry.find_available_plane(1).is_none());
    // No planes are homed at airport 2 at all.
    assert!(registry.find_available_plane(2).is_none());
}

#[test]
fn test_release_makes_plane_allocatable_again() {
    let registry = two_airport_registry(1);
    let plane = registry.find_available_plane(1).unwrap();
    assert!(registry.find_available_plane(1).is_none());

    registry.release(&plane);
    assert!(plane.is_available());
    let again = registry.find_available_plane(1).unwrap();
    assert_eq!(again.id(), plane.id());
}

#[test]
fn test_concurrent_allocation_is_mutually_exclusive() {
    let registry = Arc::new(two_airport_registry(4));
    let mut handles = Vec::new();

    for _ in 0..16 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            registry.find_available_plane(1).map(|p| p.id())
        }));
    }

    let allocated: Vec<u32> =
        handles.into_iter().filter_map(|h| h.join().unwrap()).collect();
    // Exactly the four planes got allocated, each at most once.
    assert_eq!(allocated.len(), 4);
    assert_eq!(allocated.iter().copied().collect::<HashSet<_>>().len(), 4);
}

#[test]
fn test_find_airport() {
    let registry = two_airport_registry(0);
    assert_eq!(registry.find_airport(2).unwrap().pos(), Vec2D::new(3, 4));
    assert!(registry.find_airport(99).is_none());
}

#[test]
fn test_stats_counters_and_snapshot() {
    let stats = SimStats::new();
    stats.inc_in_flight();
    stats.inc_in_flight();
    stats.dec_in_flight();
    stats.inc_in_service();
    stats.inc_completed_trips();

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.in_flight, 1);
    assert_eq!(snapshot.in_service, 1);
    assert_eq!(snapshot.completed_trips, 1);
    assert_eq!(
        snapshot.to_string(),
        "In-Flight: 1 | Service: 1 | Completed Trips: 1"
    );
}
