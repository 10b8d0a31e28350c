#![no_main]

use edit_region::math::{Axis, GridPoint, GridVector};
use edit_region::region::{Cuboid, Region};

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

#[derive(Arbitrary, Debug)]
struct FuzzCuboid {
    initial: Cuboid,
    operations: Vec<Operation>,
}

#[derive(Arbitrary, Clone, Copy, Debug)]
enum Operation {
    Expand([i32; 3]),
    Contract([i32; 3]),
    Shift([i32; 3]),
    SetA([i32; 3]),
    SetB([i32; 3]),
}

/// Enumerate at most this many points per check, so that huge cuboids stay fast.
const ENUMERATION_LIMIT: usize = 4096;

fuzz_target!(|input: FuzzCuboid| {
    let mut cuboid = input.initial;
    check(&cuboid);

    for operation in input.operations {
        let before = cuboid;
        let result = match operation {
            Operation::Expand(delta) => cuboid.expand(delta),
            Operation::Contract(delta) => cuboid.contract(delta),
            Operation::Shift(delta) => cuboid.shift(delta),
            Operation::SetA(point) => {
                assert_eq!(cuboid.set_corner_a(point), before.corner_a());
                Ok(())
            }
            Operation::SetB(point) => {
                assert_eq!(cuboid.set_corner_b(point), before.corner_b());
                Ok(())
            }
        };

        match (operation, result) {
            (_, Err(_)) => assert_eq!(cuboid, before, "failed {operation:?} must not modify"),
            (Operation::Expand(delta), Ok(())) => {
                // Contracting by the opposite delta moves the same faces back.
                if let Some(opposite) = negate(delta) {
                    let mut restored = cuboid;
                    restored.contract(opposite).unwrap();
                    assert_eq!(
                        (restored.minimum_point(), restored.maximum_point()),
                        (before.minimum_point(), before.maximum_point())
                    );
                }
            }
            (Operation::Shift(_), Ok(())) => {
                for axis in Axis::ALL {
                    assert_eq!(cuboid.extent(axis), before.extent(axis));
                }
            }
            _ => {}
        }

        check(&cuboid);
    }
});

fn negate(delta: [i32; 3]) -> Option<GridVector> {
    Some(GridVector::new(
        delta[0].checked_neg()?,
        delta[1].checked_neg()?,
        delta[2].checked_neg()?,
    ))
}

fn check(cuboid: &Cuboid) {
    let min = cuboid.minimum_point();
    let max = cuboid.maximum_point();
    for axis in Axis::ALL {
        assert!(min[axis] <= max[axis]);
        assert!(cuboid.extent(axis) >= 1);
    }
    assert!(cuboid.contains(min));
    assert!(cuboid.contains(max));

    let mut points = cuboid.points();
    let mut previous: Option<GridPoint> = None;
    for point in points.by_ref().take(ENUMERATION_LIMIT) {
        assert!(cuboid.contains(point), "{point:?} not in {cuboid:?}");
        if let Some(previous) = previous {
            assert!((previous.x, previous.y, previous.z) < (point.x, point.y, point.z));
        }
        previous = Some(point);
    }
    if let Ok(size) = cuboid.size() {
        if size <= ENUMERATION_LIMIT {
            assert_eq!(points.next(), None);
            assert_eq!(previous, Some(max));
        }
        assert_eq!(Region::size(cuboid).ok(), Some(size));
    }
}
