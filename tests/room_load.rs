use hvac_load_toolbox::load::input::{
    DesignConditions, GlassPanel, Infiltration, InternalLoads, ProcessFactors, RoofSection,
    RoomLoadInput, SpaceGeometry, VentilationDesign, WallSection,
};
use hvac_load_toolbox::load::pipeline::compute_room_load;
use hvac_load_toolbox::load::summary::{summarize, EquipmentSelectionBasis};
use hvac_load_toolbox::load::{coil, summation, ventilation};
use hvac_load_toolbox::tables::{
    GlassType, Orientation, RoofExposure, RoofType, ShadeType, WallType, WeightClass,
};

/// 검증용 사무실 예제. 서측 유리/벽 + 일사 노출 지붕 + 내부발열 + 환기.
fn office_input() -> RoomLoadInput {
    RoomLoadInput {
        name: "사무실 예제".to_string(),
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
        glass: vec![GlassPanel {
            orientation: Orientation::West,
            area_ft2: 40.0,
            glass: GlassType::SingleClear,
            shading: ShadeType::None,
        }],
        walls: vec![WallSection {
            orientation: Orientation::West,
            area_ft2: 160.0,
            construction: WallType::Brick9In,
            weight: WeightClass::Lb60,
        }],
        roofs: vec![RoofSection {
            exposure: RoofExposure::Sunlit,
            area_ft2: 600.0,
            construction: RoofType::ConcreteSlab4In,
            weight: WeightClass::Lb100,
        }],
        partitions: Vec::new(),
        internal: InternalLoads {
            occupants: 4.0,
            sensible_btuh_per_person: 245.0,
            latent_btuh_per_person: 205.0,
            lighting_w_per_ft2: 1.5,
            equipment_w_per_ft2: 1.0,
            motor_bhp: 0.0,
            motor_hp: 0.0,
        },
        ventilation: VentilationDesign {
            cfm_per_person: 10.0,
            cfm_per_ft2: 0.05,
            air_changes_per_hour: 1.0,
            infiltration: Infiltration::Manual { cfm: 25.0 },
        },
        process: ProcessFactors {
            bypass_factor: 0.12,
            safety_factor_sensible_pct: 5.0,
            safety_factor_latent_pct: 5.0,
            selected_adp_f: 52.0,
        },
    }
}

#[test]
fn envelope_gains_match_hand_calculation() {
    let result = compute_room_load(&office_input());
    // 유리: 40 × 164(W) × 1.0 × 1.0
    assert!((result.envelope.glass_solar_btuh - 6560.0).abs() < 1e-6);
    // 벽: 160 × 0.30 × (ETD 30 + ΔDB 20)
    assert!((result.envelope.wall_btuh - 2400.0).abs() < 1e-6);
    // 지붕: 600 × 0.45 × (ETD 30 + ΔDB 20)
    assert!((result.envelope.roof_btuh - 13500.0).abs() < 1e-6);
    assert!((result.envelope.total_btuh - 22460.0).abs() < 1e-6);
}

#[test]
fn internal_gains_match_hand_calculation() {
    let result = compute_room_load(&office_input());
    assert!((result.internal.people_sensible_btuh - 980.0).abs() < 1e-6);
    // 1.5 W/ft² × 600 ft² × 3.41
    assert!((result.internal.lighting_btuh - 3069.0).abs() < 1e-6);
    assert!((result.internal.equipment_btuh - 2046.0).abs() < 1e-6);
    assert!((result.internal.total_sensible_btuh - 6095.0).abs() < 1e-6);
    assert!((result.people_latent_btuh - 820.0).abs() < 1e-6);
}

#[test]
fn governing_ventilation_is_max_of_three_methods() {
    let design = VentilationDesign {
        cfm_per_person: 10.0,
        cfm_per_ft2: 0.5,
        air_changes_per_hour: 3.0,
        infiltration: Infiltration::Manual { cfm: 0.0 },
    };
    // 인원 기준 100, 면적 기준 50, 체적 기준 75 → 합이 아니라 최댓값 100
    let cfm = ventilation::governing_ventilation_cfm(&design, 10.0, 100.0, 1500.0);
    assert!((cfm - 100.0).abs() < 1e-9, "cfm={cfm}");
}

#[test]
fn ventilation_sensible_excluded_from_room_subtotal() {
    let result = compute_room_load(&office_input());
    // 실 현열 소계 = 외피 + 내부 현열 + 틈새바람 현열(1.08×25×20)만 포함
    let expected = 22460.0 + 6095.0 + 540.0;
    assert!(
        (result.effective.sensible_subtotal_btuh - expected).abs() < 1e-6,
        "subtotal={}",
        result.effective.sensible_subtotal_btuh
    );
    // 환기 현열은 코일 단계에서 외기부하로만 합산된다
    assert!((result.airflow.ventilation_sensible_btuh - 2160.0).abs() < 1e-6);
}

#[test]
fn safety_factor_applies_as_percentage() {
    let loads = summation::compute_effective_loads(1000.0, 0.0, 0.0, 0.0, 0.0, 10.0, 0.0);
    assert!((loads.sensible_subtotal_btuh - 1000.0).abs() < 1e-9);
    assert!((loads.esht_btuh - 1100.0).abs() < 1e-9);
}

#[test]
fn grand_total_heat_and_tonnage() {
    let coil = coil::compute_coil_process(0.0, 0.0, 120_000.0, 90_000.0, 75.0, 0.1, 55.0);
    assert!((coil.grand_total_heat_btuh - 120_000.0).abs() < 1e-9);
    assert!((coil.tons_required - 10.0).abs() < 1e-9);
    // rise = 0.9 × 20 = 18 → dehum = 90000 / (1.08 × 18)
    assert!((coil.dehumidified_rise_f - 18.0).abs() < 1e-9);
    assert!((coil.dehumidified_cfm - 90_000.0 / 19.44).abs() < 1e-6);
}

#[test]
fn office_example_full_pipeline() {
    let result = compute_room_load(&office_input());

    assert!((result.airflow.ventilation_cfm - 100.0).abs() < 1e-9);
    assert!((result.airflow.infiltration_cfm - 25.0).abs() < 1e-9);

    // ESHT = 29095 × 1.05
    assert!((result.effective.esht_btuh - 30549.75).abs() < 1e-6);

    // 총열량: 유효 실부하 + 바이패스 보정 외기부하 (습도비 유도 오차 허용)
    assert!(
        (result.coil.grand_total_heat_btuh - 38438.0).abs() < 100.0,
        "gth={}",
        result.coil.grand_total_heat_btuh
    );
    assert!(
        (result.coil.tons_required - result.coil.grand_total_heat_btuh / 12_000.0).abs() < 1e-9
    );

    // 급기온도 = 실내DB − 제습 온도차 (항등식)
    let rise = 0.88 * (75.0 - 52.0);
    assert!((result.derived.supply_air_temp_f - (75.0 - rise)).abs() < 1e-6);

    // 코일 출구온도 = ADP + BF×(실내DB−ADP)
    assert!((result.derived.coil_leaving_temp_f - (52.0 + 0.12 * 23.0)).abs() < 1e-9);

    // 이 예제는 외기비 부족 경고 하나만 발생해야 한다
    assert_eq!(result.warnings.len(), 1, "warnings={:?}", result.warnings);
    assert!(result.warnings[0].contains("외기비"));
}

#[test]
fn identical_snapshots_yield_identical_results() {
    let input = office_input();
    let a = compute_room_load(&input);
    let b = compute_room_load(&input);
    assert_eq!(a.effective.esht_btuh, b.effective.esht_btuh);
    assert_eq!(a.coil.grand_total_heat_btuh, b.coil.grand_total_heat_btuh);
    assert_eq!(a.coil.dehumidified_cfm, b.coil.dehumidified_cfm);
    assert_eq!(a.derived.eshf, b.derived.eshf);
    assert_eq!(a.warnings, b.warnings);
}

#[test]
fn room_file_toml_round_trip() {
    let toml_src = r#"
        name = "TOML 방"

        [design]
        outside_db_f = 95.0
        outside_rh_pct = 50.0
        inside_db_f = 75.0
        inside_rh_pct = 50.0

        [geometry]
        mode = "Dimensions"
        length_ft = 30.0
        width_ft = 20.0
        height_ft = 10.0

        [[glass]]
        orientation = "West"
        area_ft2 = 40.0
        glass = "SingleClear"

        [internal]
        occupants = 4.0
        lighting_w_per_ft2 = 1.5

        [ventilation]
        cfm_per_person = 10.0

        [ventilation.infiltration]
        method = "CrackLength"
        wind = "Mph15"

        [[ventilation.infiltration.items]]
        fixture = "WoodDoubleHungAverage"
        crack_length_ft = 20.0
        quantity = 2.0
    "#;
    let input: RoomLoadInput = toml::from_str(toml_src).expect("room file parses");
    let result = compute_room_load(&input);

    // 크랙 길이법: 0.42 CFM/ft × 20 ft × 2개소
    assert!((result.airflow.infiltration_cfm - 16.8).abs() < 1e-9);
    // 생략한 필드는 기본값: 대기압 101.325, 차양 없음, 1인당 현열 245
    assert!((input.design.pressure_kpa - 101.325).abs() < 1e-9);
    assert!((result.internal.people_sensible_btuh - 4.0 * 245.0).abs() < 1e-9);
    // 결과 레코드는 TOML로 내보낼 수 있어야 한다
    let exported = toml::to_string_pretty(&result).expect("result serializes");
    assert!(exported.contains("warnings"));
}

#[test]
fn summary_aggregates_rooms() {
    let a = compute_room_load(&office_input());
    let mut second = office_input();
    second.name = "회의실".to_string();
    let b = compute_room_load(&second);

    let summary = summarize(&[a.clone(), b.clone()]);
    assert_eq!(summary.room_count, 2);
    assert!((summary.total_area_ft2 - 1200.0).abs() < 1e-6);
    assert!(
        (summary.total_gth_btuh
            - (a.coil.grand_total_heat_btuh + b.coil.grand_total_heat_btuh))
            .abs()
            < 1e-6
    );
    assert!((summary.total_tons - (a.coil.tons_required + b.coil.tons_required)).abs() < 1e-9);
    assert_eq!(summary.rooms_with_warnings.len(), 2);

    let basis = EquipmentSelectionBasis::from_result(&a);
    assert!((basis.tons - a.coil.tons_required).abs() < 1e-12);
    assert!((basis.total_cfm - a.coil.dehumidified_cfm).abs() < 1e-12);
}
