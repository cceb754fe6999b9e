use hvac_load_toolbox::psychro;

#[test]
fn dew_point_never_exceeds_dry_bulb() {
    for db in [40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0] {
        for rh in [5.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
            let dp = psychro::dew_point_f(db, rh).expect("valid rh");
            assert!(
                dp <= db + 1e-9,
                "dew point {dp} exceeds dry bulb {db} at rh={rh}"
            );
        }
    }
}

#[test]
fn dew_point_saturated_air_equals_dry_bulb() {
    let dp = psychro::dew_point_f(75.0, 100.0).expect("valid rh");
    assert!((dp - 75.0).abs() < 1e-6, "dp={dp}");
}

#[test]
fn grains_per_lb_calibration_point() {
    // 보정 기준점: 104°F, 40%, 표준대기압에서 약 144.3 grains/lb
    let w = psychro::grains_per_lb(104.0, 40.0, 101.325).expect("valid rh");
    assert!((w - 144.3).abs() < 0.5, "w={w}");
}

#[test]
fn out_of_domain_rh_is_not_computable() {
    assert!(psychro::dew_point_f(80.0, 0.0).is_none());
    assert!(psychro::dew_point_f(80.0, -5.0).is_none());
    assert!(psychro::dew_point_f(80.0, 120.0).is_none());
    assert!(psychro::grains_per_lb(80.0, 0.0, 101.325).is_none());
    assert!(psychro::wet_bulb_f(80.0, 101.0).is_none());
}

#[test]
fn wet_bulb_between_dew_point_and_dry_bulb() {
    let db = 68.0;
    let rh = 50.0;
    let wb = psychro::wet_bulb_f(db, rh).expect("valid rh");
    let dp = psychro::dew_point_f(db, rh).expect("valid rh");
    // Stull 근사: 20°C, 50%에서 습구 약 13.7°C (= 56.7°F)
    assert!((wb - 56.7).abs() < 0.5, "wb={wb}");
    assert!(dp < wb && wb < db, "dp={dp} wb={wb} db={db}");
}

#[test]
fn resolve_state_is_reproducible() {
    let a = psychro::resolve_state(95.0, 55.0, 101.325);
    let b = psychro::resolve_state(95.0, 55.0, 101.325);
    assert_eq!(a.dew_point_f, b.dew_point_f);
    assert_eq!(a.wet_bulb_f, b.wet_bulb_f);
    assert_eq!(a.grains_per_lb, b.grains_per_lb);
}
