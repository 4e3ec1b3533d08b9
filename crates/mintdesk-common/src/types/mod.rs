mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(100.0, 50.0, 300.0, 200.0);
        assert!((r.right() - 400.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 250.0).abs() < f64::EPSILON);
        assert_eq!(r.origin(), Point::new(100.0, 50.0));
        assert_eq!(r.size(), Size::new(300.0, 200.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(50.0, 40.0)));
        assert!(!r.contains(Point::new(110.0, 40.0)));
        assert!(!r.contains(Point::new(50.0, 70.0)));
        assert!(!r.contains(Point::new(5.0, 40.0)));
    }

    #[test]
    fn rect_from_origin_size() {
        let r = Rect::from_origin_size(Point::new(5.0, 6.0), Size::new(7.0, 8.0));
        assert_eq!(r, Rect::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
    }

    #[test]
    fn app_id_display_and_conversions() {
        let id = AppId::from("about");
        assert_eq!(id.to_string(), "about");
        assert_eq!(id.as_str(), "about");
        assert_eq!(AppId::from(String::from("about")), id);
    }

    #[test]
    fn app_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AppId::from("about"));
        set.insert(AppId::from("skills"));
        set.insert(AppId::from("about"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn app_id_serializes_as_plain_string() {
        let id = AppId::from("projects");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"projects\"");
        let back: AppId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
