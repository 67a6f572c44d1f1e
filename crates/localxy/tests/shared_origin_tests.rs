use std::sync::{Arc, Barrier};
use std::thread;

use localxy::{LocalPoint, LocalXyWgs84Util, OriginFix, OriginMessage};

const REF_LAT: f64 = 29.45196669;
const REF_LON: f64 = -98.61370577;

#[test]
fn test_exactly_one_concurrent_fix_wins() {
    let util = LocalXyWgs84Util::pending().shared();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let util = Arc::clone(&util);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let fix = OriginFix::new(REF_LAT + i as f64, REF_LON, i as f64, format!("frame_{i}"));
                util.set_origin(fix).is_ok()
            })
        })
        .collect();

    let accepted: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(accepted.iter().filter(|ok| **ok).count(), 1);

    let winner = accepted.iter().position(|ok| *ok).unwrap();
    assert!(util.initialized());
    assert_eq!(util.reference_latitude(), REF_LAT + winner as f64);
    assert_eq!(util.reference_altitude(), winner as f64);
    assert_eq!(util.frame(), format!("frame_{winner}"));
}

#[test]
fn test_readers_see_complete_origin() {
    let util = LocalXyWgs84Util::pending_with_heading(30.0).shared();

    let reader = {
        let util = Arc::clone(&util);
        thread::spawn(move || {
            let mut seen = 0;
            while seen < 1000 {
                match util.to_local_xy(REF_LAT, REF_LON) {
                    // A published origin is always whole: its own point maps to zero.
                    Some(p) => {
                        assert_eq!(p, LocalPoint::new(0.0, 0.0));
                        assert_eq!(util.reference_longitude(), REF_LON);
                        assert_eq!(util.frame(), "map");
                        seen += 1;
                    }
                    None => thread::yield_now(),
                }
            }
        })
    };

    let msg = OriginMessage::GpsFix {
        frame_id: "map".into(),
        latitude: REF_LAT,
        longitude: REF_LON,
        altitude: 200.0,
    };
    util.handle_origin(&msg).unwrap();
    reader.join().unwrap();

    assert_eq!(util.reference_heading(), 30.0);
}

#[test]
fn test_shared_handles_convert_identically() {
    let util = LocalXyWgs84Util::new(REF_LAT, REF_LON, 75.0, 0.0).shared();
    let other = Arc::clone(&util);

    let p = util.to_local_xy(REF_LAT + 0.01, REF_LON + 0.01).unwrap();
    assert_eq!(other.to_local_xy(REF_LAT + 0.01, REF_LON + 0.01), Some(p));

    let g = other.to_wgs84(p.x, p.y).unwrap();
    assert!((g.latitude - (REF_LAT + 0.01)).abs() < 1e-9);
    assert!((g.longitude - (REF_LON + 0.01)).abs() < 1e-9);
}
