use hvac_load_toolbox::load::input::{
    parse_or_zero, DesignConditions, Infiltration, InternalLoads, PartitionSection,
    ProcessFactors, RoomLoadInput, SpaceGeometry, VentilationDesign,
};
use hvac_load_toolbox::load::pipeline::compute_room_load;
use hvac_load_toolbox::tables::{
    self, Orientation, PartitionType, RoofExposure, WeightClass,
};

fn base_input() -> RoomLoadInput {
    RoomLoadInput {
        name: String::new(),
        design: DesignConditions {
            outside_db_f: 95.0,
            outside_rh_pct: 50.0,
            inside_db_f: 75.0,
            inside_rh_pct: 50.0,
            pressure_kpa: 101.325,
        },
        geometry: SpaceGeometry::Dimensions {
            length_ft: 30.0,
            width_ft: 20.0,
            height_ft: 10.0,
        },
        glass: Vec::new(),
        walls: Vec::new(),
        roofs: Vec::new(),
        partitions: Vec::new(),
        internal: InternalLoads {
            occupants: 4.0,
            lighting_w_per_ft2: 1.5,
            ..InternalLoads::default()
        },
        ventilation: VentilationDesign {
            cfm_per_person: 10.0,
            ..VentilationDesign::default()
        },
        process: ProcessFactors::default(),
    }
}

#[test]
fn adp_equal_to_inside_db_zeroes_airflow_metrics_without_nan() {
    let mut input = base_input();
    input.process.selected_adp_f = input.design.inside_db_f;
    let result = compute_room_load(&input);

    assert_eq!(result.coil.dehumidified_rise_f, 0.0);
    assert_eq!(result.coil.dehumidified_cfm, 0.0);
    assert_eq!(result.derived.supply_air_temp_f, 0.0);
    assert_eq!(result.derived.cfm_per_ton, 0.0);
    assert_eq!(result.derived.btu_per_cfm, 0.0);
    assert_eq!(result.derived.outside_air_fraction, 0.0);

    // 어떤 지표도 NaN/무한대가 되어서는 안 된다
    for v in [
        result.derived.eshf,
        result.derived.room_shr,
        result.derived.grand_shr,
        result.derived.mixed_air_temp_f,
        result.derived.return_air_cfm,
        result.coil.tons_required,
    ] {
        assert!(v.is_finite(), "non-finite metric: {v}");
    }
}

#[test]
fn all_zero_loads_produce_zero_totals_and_no_warnings() {
    let input = RoomLoadInput {
        name: String::new(),
        design: DesignConditions {
            outside_db_f: 75.0,
            outside_rh_pct: 50.0,
            inside_db_f: 75.0,
            inside_rh_pct: 50.0,
            pressure_kpa: 101.325,
        },
        geometry: SpaceGeometry::Dimensions {
            length_ft: 0.0,
            width_ft: 0.0,
            height_ft: 0.0,
        },
        glass: Vec::new(),
        walls: Vec::new(),
        roofs: Vec::new(),
        partitions: Vec::new(),
        internal: InternalLoads {
            occupants: 0.0,
            ..InternalLoads::default()
        },
        ventilation: VentilationDesign::default(),
        process: ProcessFactors::default(),
    };
    let result = compute_room_load(&input);

    assert_eq!(result.envelope.total_btuh, 0.0);
    assert_eq!(result.internal.total_sensible_btuh, 0.0);
    assert_eq!(result.airflow.ventilation_cfm, 0.0);
    assert_eq!(result.effective.esht_btuh, 0.0);
    assert_eq!(result.effective.elht_btuh, 0.0);
    assert_eq!(result.coil.grand_total_heat_btuh, 0.0);
    assert_eq!(result.coil.tons_required, 0.0);
    assert_eq!(result.coil.dehumidified_cfm, 0.0);
    assert_eq!(result.derived.eshf, 0.0);
    assert_eq!(result.derived.room_shr, 0.0);
    // 분모가 0인 비율 경고는 억제되어야 한다
    assert!(result.warnings.is_empty(), "warnings={:?}", result.warnings);
}

#[test]
fn out_of_domain_rh_collapses_latent_terms_to_zero() {
    let mut input = base_input();
    input.design.outside_rh_pct = 0.0;
    input.design.inside_rh_pct = 0.0;
    input.ventilation.infiltration = Infiltration::Manual { cfm: 50.0 };
    let result = compute_room_load(&input);

    assert!(result.outside_air.grains_per_lb.is_none());
    assert_eq!(result.airflow.infiltration_latent_btuh, 0.0);
    assert_eq!(result.airflow.ventilation_latent_btuh, 0.0);
    // 현열 항은 정상 계산된다: 1.08 × 50 × 20
    assert!((result.airflow.infiltration_sensible_btuh - 1080.0).abs() < 1e-9);
}

#[test]
fn partition_delta_below_five_degrees_is_clamped_to_zero() {
    let mut input = base_input();
    input.design.outside_db_f = 78.0; // ΔDB 3°F < 5°F
    input.partitions = vec![PartitionSection {
        area_ft2: 100.0,
        construction: PartitionType::Brick4In,
    }];
    let result = compute_room_load(&input);
    assert_eq!(result.envelope.partition_btuh, 0.0);

    // ΔDB 20°F이면 (20−5)°F 기준으로 계산된다: 100 × 0.42 × 15
    input.design.outside_db_f = 95.0;
    let result = compute_room_load(&input);
    assert!((result.envelope.partition_btuh - 630.0).abs() < 1e-9);
}

#[test]
fn every_orientation_weight_combination_resolves() {
    for orientation in Orientation::ALL {
        assert!(tables::base_solar_factor(orientation) > 0.0);
        for weight in WeightClass::ALL {
            let etd = tables::wall_etd(orientation, weight);
            assert!(etd.is_finite() && etd > 0.0);
        }
    }
    for exposure in [RoofExposure::Sunlit, RoofExposure::Shaded] {
        for weight in WeightClass::ALL {
            let etd = tables::roof_etd(exposure, weight);
            assert!(etd.is_finite() && etd > 0.0);
        }
    }
}

#[test]
fn geometry_modes_derive_missing_quantities() {
    let by_dimensions = SpaceGeometry::Dimensions {
        length_ft: 30.0,
        width_ft: 20.0,
        height_ft: 10.0,
    }
    .resolve();
    assert!((by_dimensions.floor_area_ft2 - 600.0).abs() < 1e-9);
    assert!((by_dimensions.volume_ft3 - 6000.0).abs() < 1e-9);

    let by_area = SpaceGeometry::Area {
        area_ft2: 600.0,
        height_ft: 10.0,
    }
    .resolve();
    assert!((by_area.volume_ft3 - 6000.0).abs() < 1e-9);

    let by_volume = SpaceGeometry::Volume {
        volume_ft3: 6000.0,
        height_ft: 10.0,
    }
    .resolve();
    assert!((by_volume.floor_area_ft2 - 600.0).abs() < 1e-9);

    // 천장고 0이면 면적 유도는 0으로 가드된다
    let degenerate = SpaceGeometry::Volume {
        volume_ft3: 6000.0,
        height_ft: 0.0,
    }
    .resolve();
    assert_eq!(degenerate.floor_area_ft2, 0.0);
}

#[test]
fn blank_or_invalid_form_input_coerces_to_zero() {
    assert_eq!(parse_or_zero(""), 0.0);
    assert_eq!(parse_or_zero("   "), 0.0);
    assert_eq!(parse_or_zero("abc"), 0.0);
    assert_eq!(parse_or_zero("12,5"), 0.0);
    assert_eq!(parse_or_zero(" 42.5 "), 42.5);
}

#[test]
fn mixed_air_temperature_is_cfm_weighted_average() {
    let result = compute_room_load(&base_input());
    let dehum = result.coil.dehumidified_cfm;
    assert!(dehum > 0.0);
    let expected = (result.derived.return_air_cfm * 75.0
        + result.airflow.ventilation_cfm * 95.0)
        / (result.derived.return_air_cfm + result.airflow.ventilation_cfm);
    assert!((result.derived.mixed_air_temp_f - expected).abs() < 1e-9);
    assert!(result.derived.mixed_air_temp_f > 75.0);
    assert!(result.derived.mixed_air_temp_f < 95.0);
}
