//! Unit tests for rr-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, MapPoint};

    #[test]
    fn map_zero_distance() {
        let p = MapPoint::new(0.25, 0.75);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn map_pythagorean() {
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(0.3, 0.4);
        assert!((a.distance(b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn map_distance_symmetric() {
        let a = MapPoint::new(0.1, 0.9);
        let b = MapPoint::new(0.8, 0.2);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn geo_zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn geo_one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}
