/// Property tests for the dual-mode contract across precisions
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bluegeom_core::prelude::*;
use proptest::prelude::*;

fn hash_of<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

fn vector_i_strategy() -> impl Strategy<Value = Vector3i> {
    (-1000i32..1000, -1000i32..1000, -1000i32..1000, any::<bool>()).prop_map(
        |(x, y, z, mutable)| {
            if mutable {
                Vector3i::mutable(x, y, z)
            } else {
                Vector3i::frozen(x, y, z)
            }
        },
    )
}

fn vector_d_strategy() -> impl Strategy<Value = Vector3d> {
    (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6, -1.0e6f64..1.0e6)
        .prop_map(|(x, y, z)| Vector3d::mutable(x, y, z).unwrap())
}

fn point_i_strategy() -> impl Strategy<Value = Point3i> {
    (-1000i32..1000, -1000i32..1000, -1000i32..1000).prop_map(|(x, y, z)| Point3i::frozen(x, y, z))
}

fn point_f_strategy() -> impl Strategy<Value = Point3f> {
    (-1.0e4f32..1.0e4, -1.0e4f32..1.0e4, -1.0e4f32..1.0e4)
        .prop_map(|(x, y, z)| Point3f::frozen(x, y, z).unwrap())
}

fn offset_strategy() -> impl Strategy<Value = Offset4i> {
    (-500i32..500, -500i32..500, -500i32..500, -500i32..500)
        .prop_map(|(l, r, t, b)| Offset4i::mutable(l, r, t, b))
}

proptest! {
    #[test]
    fn test_freeze_thaw_round_trip(v in vector_i_strategy()) {
        let frozen = v.to_frozen();
        let thawed = v.to_mutable();
        assert!(!frozen.is_mutable());
        assert!(thawed.is_mutable());
        assert!(frozen.at(&v));
        assert!(thawed.at(&v));
        assert_eq!(frozen.to_frozen(), frozen);
        assert_eq!(frozen.to_mutable(), thawed);
    }

    #[test]
    fn test_masked_set_matches_single_axes(
        a in vector_d_strategy(),
        b in vector_d_strategy(),
        axis in axis_strategy()
    ) {
        let masked = a.with_masked(axis, &b).unwrap();
        let mut stepwise = a.to_mutable();
        for &part in axis.parts() {
            stepwise.set_masked(part, &b).unwrap();
        }
        assert_eq!(masked, stepwise);
    }

    #[test]
    fn test_masked_add_touches_only_selected(
        a in vector_i_strategy(),
        value in -100i32..100,
        axis in axis_strategy()
    ) {
        let added = a.added_value(axis, value).unwrap();
        let before = a.components();
        let after = added.components();
        for i in 0..3 {
            if axis.indices().contains(&i) {
                assert_eq!(after[i], before[i] + value);
            } else {
                assert_eq!(after[i], before[i]);
            }
        }
    }

    #[test]
    fn test_interpolation_saturates(
        src in point_f_strategy(),
        dest in point_f_strategy(),
        low in -10.0f32..=0.0,
        high in 1.0f32..10.0
    ) {
        assert!(src.interpolated(&dest, low).unwrap().at(&src));
        assert!(src.interpolated(&dest, high).unwrap().at(&dest));
        assert!(Point3f::lerp(&src, &dest, high).unwrap().at(&dest));
    }

    #[test]
    fn test_lerp_agrees_with_interpolated(
        src in point_f_strategy(),
        dest in point_f_strategy(),
        offset in 0.0f32..1.0
    ) {
        let stepped = src.interpolated(&dest, offset).unwrap();
        let direct = Point3f::lerp(&src, &dest, offset).unwrap();
        assert_eq!(stepped, direct);
        assert!(stepped.is_mutable());
    }

    #[test]
    fn test_int_lerp_agrees_with_interpolated(
        src in point_i_strategy(),
        dest in point_i_strategy(),
        v in vector_i_strategy(),
        offset in 0.0f32..1.0
    ) {
        let stepped = src.interpolated(&dest, offset).unwrap();
        assert_eq!(stepped, Point3i::lerp(&src, &dest, offset).unwrap());
        let target = v.to_frozen();
        let moved = target.interpolated(&v, offset).unwrap();
        assert_eq!(moved, Vector3i::lerp(&target, &v, offset).unwrap());
    }

    #[test]
    fn test_frozen_clear_is_rejected(
        v in vector_i_strategy(),
        p in point_i_strategy(),
        axis in axis_strategy()
    ) {
        let mut vector = v.to_frozen();
        assert_eq!(vector.clear(), Err(GeomError::UnsupportedMutation("vector")));
        assert_eq!(
            vector.clear_masked(axis),
            Err(GeomError::UnsupportedMutation("vector"))
        );
        assert!(vector.at(&v));

        let mut point = p;
        assert_eq!(point.clear(), Err(GeomError::UnsupportedMutation("point")));
        assert_eq!(
            point.clear_masked(axis),
            Err(GeomError::UnsupportedMutation("point"))
        );
        assert_eq!(point, p);
        let cleared = point.cleared_masked(axis).unwrap().components();
        for &i in axis.indices() {
            assert_eq!(cleared[i], 0);
        }
    }

    #[test]
    fn test_frozen_values_never_change(
        v in vector_i_strategy(),
        other in vector_i_strategy(),
        axis in axis_strategy()
    ) {
        let mut frozen = v.to_frozen();
        let snapshot = frozen;
        assert!(frozen.set(&other).is_err());
        assert!(frozen.set_masked(axis, &other).is_err());
        assert!(frozen.add_value(axis, 1).is_err());
        assert!(frozen.subtract(&other).is_err());
        assert!(frozen.multiply_value(axis, 2.0).is_err());
        assert!(frozen.interpolate(&other, 0.5).is_err());
        assert!(frozen.cross(&other).is_err());
        assert!(frozen.set_y(7).is_err());
        assert_eq!(frozen, snapshot);
        // Copy-producing forms still work.
        assert!(frozen.added(&other).is_ok());
    }

    #[test]
    fn test_nan_never_stored(v in vector_d_strategy(), axis in axis_strategy()) {
        let mut target = v;
        let err = target.set_value(axis, f64::NAN).unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument(_)));
        assert_eq!(target, v);
        assert!(target.interpolate(&v, f32::NAN).is_err());
    }

    #[test]
    fn test_equal_values_hash_alike(v in vector_i_strategy()) {
        let copy = if v.is_mutable() {
            Vector3i::mutable(v.x(), v.y(), v.z())
        } else {
            Vector3i::frozen(v.x(), v.y(), v.z())
        };
        assert_eq!(v, copy);
        assert_eq!(hash_of(&v), hash_of(&copy));
        assert_eq!(v.hash_code(), copy.hash_code());
    }

    #[test]
    fn test_flag_flip_breaks_equality_not_location(v in vector_i_strategy()) {
        let flipped = if v.is_mutable() { v.to_frozen() } else { v.to_mutable() };
        assert_ne!(v, flipped);
        assert!(v.at(&flipped));
        assert_ne!(v.hash_code(), flipped.hash_code());
    }

    #[test]
    fn test_offset_pairs(o in offset_strategy(), side in side_strategy(), value in -50i32..50) {
        assert_eq!(o.vertical(), o.top() + o.bottom());
        assert_eq!(o.horizontal(), o.left() + o.right());
        let set = o.with_value(side, value).unwrap();
        for part in side.parts() {
            assert_eq!(set.get(*part), value);
        }
    }
}

#[test]
fn test_mutable_precision_scenarios() {
    // int: frozen vector, copy-producing masked add.
    let v = Vector3i::frozen(1, 2, 3);
    let added = v.added_value(Axis::XY, 10).unwrap();
    assert_eq!(added.components(), [11, 12, 3]);
    assert!(added.is_mutable());
    assert_eq!(v.components(), [1, 2, 3]);

    // float: interpolation halfway.
    let src = Point3f::mutable(0.0, 0.0, 0.0).unwrap();
    let dest = Point3f::frozen(2.0, 4.0, 6.0).unwrap();
    assert_eq!(src.interpolated(&dest, 0.5).unwrap().components(), [1.0, 2.0, 3.0]);

    // every other precision lands on the same midpoint.
    let mid = Vector3i::frozen(0, 0, 0)
        .interpolated(&Vector3i::frozen(2, 4, 6), 0.5)
        .unwrap();
    assert_eq!(mid.components(), [1, 2, 3]);
    let mid = Vector3d::frozen(0.0, 0.0, 0.0)
        .unwrap()
        .interpolated(&Vector3d::frozen(2.0, 4.0, 6.0).unwrap(), 0.5)
        .unwrap();
    assert_eq!(mid.components(), [1.0, 2.0, 3.0]);
    let mid = Point3i::frozen(0, 0, 0)
        .interpolated(&Point3i::frozen(2, 4, 6), 0.5)
        .unwrap();
    assert_eq!(mid.components(), [1, 2, 3]);
    let mid = Point3d::frozen(0.0, 0.0, 0.0)
        .unwrap()
        .interpolated(&Point3d::frozen(2.0, 4.0, 6.0).unwrap(), 0.5)
        .unwrap();
    assert_eq!(mid.components(), [1.0, 2.0, 3.0]);

    // offset: frozen rejects, mutable returns previous value.
    let mut frozen = Offset4i::frozen(1, 2, 3, 4);
    assert_eq!(frozen.set_left(9), Err(GeomError::UnsupportedMutation("offset")));
    let mut offset = Offset4i::mutable(1, 2, 3, 4);
    assert_eq!(offset.set_left(9), Ok(1));
    assert_eq!(offset.sides(), [9, 2, 3, 4]);
}
