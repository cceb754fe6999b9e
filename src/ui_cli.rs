use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::load::input::{
    parse_or_zero, DesignConditions, GlassPanel, Infiltration, InternalLoads, ProcessFactors,
    RoofSection, RoomLoadInput, SpaceGeometry, VentilationDesign, WallSection,
};
use crate::load::pipeline::{compute_room_load, CoolingLoadResult};
use crate::load::summary::EquipmentSelectionBasis;
use crate::psychro;
use crate::tables::{
    GlassType, Orientation, RoofExposure, RoofType, ShadeType, WallType, WeightClass,
};
use crate::units::{self, AirflowUnit, AreaUnit, LengthUnit, TemperatureUnit, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickForm,
    RoomFile,
    Psychro,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    use crate::i18n::keys::*;
    println!("{}", tr.t(MAIN_MENU_TITLE));
    println!("{}", tr.t(MAIN_MENU_QUICK_FORM));
    println!("{}", tr.t(MAIN_MENU_ROOM_FILE));
    println!("{}", tr.t(MAIN_MENU_PSYCHRO));
    println!("{}", tr.t(MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(MAIN_MENU_SETTINGS));
    println!("{}", tr.t(MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::QuickForm),
            "2" => return Ok(MenuChoice::RoomFile),
            "3" => return Ok(MenuChoice::Psychro),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(INVALID_SELECTION_RETRY)),
        }
    }
}

/// 빠른 냉방부하 계산 폼을 처리한다.
///
/// 값 입력란은 공백/비정상 입력을 0으로 강제 변환한다. 여유율/BF/ADP 등은
/// 설정의 기본값을 사용한다.
pub fn handle_quick_form(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 빠른 냉방부하 계산 --");
    println!("값 입력란에서 공백이나 숫자가 아닌 입력은 0으로 처리됩니다.");

    println!("\n[설계조건]");
    let outside_db_f = read_f64_or_zero("외기 건구온도 [°F]: ")?;
    let outside_rh_pct = read_f64_or_zero("외기 상대습도 [%]: ")?;
    let inside_db_f = read_f64_or_zero("실내 건구온도 [°F]: ")?;
    let inside_rh_pct = read_f64_or_zero("실내 상대습도 [%]: ")?;

    println!("\n[실 형상]");
    let length_ft = read_f64_or_zero("길이 [ft]: ")?;
    let width_ft = read_f64_or_zero("폭 [ft]: ")?;
    let height_ft = read_f64_or_zero("천장고 [ft]: ")?;

    println!("\n[유리] (면적 0 입력 시 생략)");
    let mut glass = Vec::new();
    let glass_area = read_f64_or_zero("유리 면적 [ft²]: ")?;
    if glass_area > 0.0 {
        let orientation = read_orientation()?;
        let glass_type = read_glass_type()?;
        let shading = read_shade_type()?;
        glass.push(GlassPanel {
            orientation,
            area_ft2: glass_area,
            glass: glass_type,
            shading,
        });
    }

    println!("\n[외벽] (면적 0 입력 시 종료)");
    let mut walls = Vec::new();
    loop {
        let area = read_f64_or_zero("벽 면적 [ft²]: ")?;
        if area <= 0.0 {
            break;
        }
        let orientation = read_orientation()?;
        let construction = read_wall_type()?;
        let weight = read_weight_class()?;
        walls.push(WallSection {
            orientation,
            area_ft2: area,
            construction,
            weight,
        });
    }

    println!("\n[지붕] (면적 0 입력 시 생략)");
    let mut roofs = Vec::new();
    let roof_area = read_f64_or_zero("지붕 면적 [ft²]: ")?;
    if roof_area > 0.0 {
        let exposure = read_roof_exposure()?;
        let construction = read_roof_type()?;
        let weight = read_weight_class()?;
        roofs.push(RoofSection {
            exposure,
            area_ft2: roof_area,
            construction,
            weight,
        });
    }

    println!("\n[내부 발열]");
    let occupants = read_f64_or_zero("재실 인원 [명]: ")?;
    let lighting = read_f64_or_zero("조명 부하밀도 [W/ft²]: ")?;
    let equipment = read_f64_or_zero("기기 부하밀도 [W/ft²]: ")?;

    println!("\n[환기/틈새바람]");
    let cfm_per_person = read_f64_or_zero("1인당 외기량 [CFM/인]: ")?;
    let ach = read_f64_or_zero("환기횟수 [회/h]: ")?;
    let infiltration_cfm = read_f64_or_zero("틈새바람 [CFM] (직접 입력): ")?;

    let d = &cfg.defaults;
    let input = RoomLoadInput {
        name: "빠른 계산".to_string(),
        design: DesignConditions {
            outside_db_f,
            outside_rh_pct,
            inside_db_f,
            inside_rh_pct,
            pressure_kpa: d.pressure_kpa,
        },
        geometry: SpaceGeometry::Dimensions {
            length_ft,
            width_ft,
            height_ft,
        },
        glass,
        walls,
        roofs,
        partitions: Vec::new(),
        internal: InternalLoads {
            occupants,
            sensible_btuh_per_person: d.sensible_btuh_per_person,
            latent_btuh_per_person: d.latent_btuh_per_person,
            lighting_w_per_ft2: lighting,
            equipment_w_per_ft2: equipment,
            motor_bhp: 0.0,
            motor_hp: 0.0,
        },
        ventilation: VentilationDesign {
            cfm_per_person,
            cfm_per_ft2: 0.0,
            air_changes_per_hour: ach,
            infiltration: Infiltration::Manual {
                cfm: infiltration_cfm,
            },
        },
        process: ProcessFactors {
            bypass_factor: d.bypass_factor,
            safety_factor_sensible_pct: d.safety_factor_sensible_pct,
            safety_factor_latent_pct: d.safety_factor_latent_pct,
            selected_adp_f: d.selected_adp_f,
        },
    };

    let result = compute_room_load(&input);
    print_result(tr, &result);
    Ok(())
}

/// TOML 방 정의 파일을 읽어 계산하고, 원하면 결과를 TOML로 저장한다.
pub fn handle_room_file(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 방 정의 파일 계산 --");
    let path = read_line("방 정의 TOML 경로: ")?;
    let content = std::fs::read_to_string(path.trim())?;
    let input: RoomLoadInput = toml::from_str(&content)?;
    let result = compute_room_load(&input);
    print_result(tr, &result);

    let out = read_line("결과 저장 경로 (엔터 = 저장 안 함): ")?;
    if !out.trim().is_empty() {
        let serialized = toml::to_string_pretty(&result)?;
        std::fs::write(out.trim(), serialized)?;
        println!("결과를 저장했습니다.");
    }
    Ok(())
}

/// 습공기 계산기 메뉴를 처리한다.
pub fn handle_psychro(_tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 습공기 계산기 --");
    let db_f = read_f64_or_zero("건구온도 [°F]: ")?;
    let rh_pct = read_f64_or_zero("상대습도 [%]: ")?;
    let p = read_f64_or_zero("대기압 [kPa] (0 입력 시 설정 기본값): ")?;
    let pressure = if p > 0.0 { p } else { cfg.defaults.pressure_kpa };

    let state = psychro::resolve_state(db_f, rh_pct, pressure);
    match state.dew_point_f {
        Some(dp) => println!("노점온도: {:.1} °F", dp),
        None => println!("노점온도: 계산 불가 (상대습도 범위 밖)"),
    }
    match state.wet_bulb_f {
        Some(wb) => println!("습구온도: {:.1} °F", wb),
        None => println!("습구온도: 계산 불가 (상대습도 범위 밖)"),
    }
    match state.grains_per_lb {
        Some(w) => println!("습도비: {:.1} grains/lb", w),
        None => println!("습도비: 계산 불가 (상대습도 범위 밖)"),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 온도  2) 길이  3) 면적  4) 체적  5) 풍량  6) 열량(kW↔BTU/hr)");
    let sel = read_line("항목 번호를 입력: ")?;
    match sel.trim() {
        "1" => {
            let value = read_f64_or_zero("값 입력: ")?;
            let from = read_temperature_unit("입력 단위")?;
            let to = read_temperature_unit("변환 단위")?;
            let result = units::from_fahrenheit(units::to_fahrenheit(value, from), to);
            println!("변환 결과: {result:.3}");
        }
        "2" => {
            let value = read_f64_or_zero("값 입력: ")?;
            println!("방향: 1=m→ft 2=ft→m");
            let dir = read_line("선택: ")?;
            let result = if dir.trim() == "2" {
                value * 0.3048
            } else {
                units::to_feet(value, LengthUnit::Meter)
            };
            println!("변환 결과: {result:.3}");
        }
        "3" => {
            let value = read_f64_or_zero("값 입력: ")?;
            println!("방향: 1=m²→ft² 2=ft²→m²");
            let dir = read_line("선택: ")?;
            let result = if dir.trim() == "2" {
                value * 0.3048 * 0.3048
            } else {
                units::to_square_feet(value, AreaUnit::SquareMeter)
            };
            println!("변환 결과: {result:.3}");
        }
        "4" => {
            let value = read_f64_or_zero("값 입력: ")?;
            println!("방향: 1=m³→ft³ 2=ft³→m³");
            let dir = read_line("선택: ")?;
            let result = if dir.trim() == "2" {
                value * 0.3048 * 0.3048 * 0.3048
            } else {
                units::to_cubic_feet(value, VolumeUnit::CubicMeter)
            };
            println!("변환 결과: {result:.3}");
        }
        "5" => {
            let value = read_f64_or_zero("값 입력: ")?;
            println!("입력 단위: 1=CFM 2=m³/h 3=L/s");
            let from = match read_line("선택: ")?.trim() {
                "2" => AirflowUnit::CubicMeterPerHour,
                "3" => AirflowUnit::LiterPerSecond,
                _ => AirflowUnit::Cfm,
            };
            let cfm = units::to_cfm(value, from);
            println!(
                "변환 결과: {:.2} CFM = {:.2} m³/h = {:.2} L/s",
                cfm,
                units::from_cfm(cfm, AirflowUnit::CubicMeterPerHour),
                units::from_cfm(cfm, AirflowUnit::LiterPerSecond)
            );
        }
        "6" => {
            let value = read_f64_or_zero("값 입력: ")?;
            println!("방향: 1=kW→BTU/hr 2=BTU/hr→kW");
            let dir = read_line("선택: ")?;
            let result = if dir.trim() == "2" {
                units::btuh_to_kw(value)
            } else {
                units::kw_to_btuh(value)
            };
            println!("변환 결과: {result:.2}");
        }
        _ => println!("{}", tr.t(i18n::keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::SETTINGS_HEADING));
    println!("현재 언어: {}", cfg.language);
    let d = &cfg.defaults;
    println!(
        "기본값: BF={:.2}, 현열 여유율={:.0}%, 잠열 여유율={:.0}%, ADP={:.0}°F",
        d.bypass_factor, d.safety_factor_sensible_pct, d.safety_factor_latent_pct, d.selected_adp_f
    );
    println!("1) 언어  2) 바이패스 팩터  3) 현열 여유율  4) 잠열 여유율  5) ADP");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line("언어 코드 (auto/ko/en): ")?;
            cfg.language = lang.trim().to_string();
        }
        "2" => cfg.defaults.bypass_factor = read_f64_or_zero("바이패스 팩터 (0~1): ")?,
        "3" => {
            cfg.defaults.safety_factor_sensible_pct = read_f64_or_zero("현열 여유율 [%]: ")?
        }
        "4" => cfg.defaults.safety_factor_latent_pct = read_f64_or_zero("잠열 여유율 [%]: ")?,
        "5" => cfg.defaults.selected_adp_f = read_f64_or_zero("선정 ADP [°F]: ")?,
        _ => {
            println!("{}", tr.t(i18n::keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    }
    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    Ok(())
}

/// 계산 결과 리포트를 출력한다.
pub fn print_result(tr: &Translator, result: &CoolingLoadResult) {
    println!("{}", tr.t(i18n::keys::RESULT_HEADING));
    if !result.name.is_empty() {
        println!("방 이름: {}", result.name);
    }
    println!(
        "바닥면적: {:.0} ft², 체적: {:.0} ft³",
        result.geometry.floor_area_ft2, result.geometry.volume_ft3
    );

    println!("\n[외피 취득열량]");
    println!("  유리 일사: {:>10.0} BTU/hr", result.envelope.glass_solar_btuh);
    println!("  벽체 전도: {:>10.0} BTU/hr", result.envelope.wall_btuh);
    println!("  지붕 전도: {:>10.0} BTU/hr", result.envelope.roof_btuh);
    println!("  칸막이:    {:>10.0} BTU/hr", result.envelope.partition_btuh);

    println!("[내부 발열]");
    println!(
        "  재실자 현열: {:.0}, 조명: {:.0}, 기기: {:.0}, 모터: {:.0} BTU/hr",
        result.internal.people_sensible_btuh,
        result.internal.lighting_btuh,
        result.internal.equipment_btuh,
        result.internal.motors_btuh
    );

    println!("[환기/틈새바람]");
    println!(
        "  환기풍량: {:.0} CFM, 틈새바람: {:.0} CFM",
        result.airflow.ventilation_cfm, result.airflow.infiltration_cfm
    );

    println!("[부하 합계]");
    println!(
        "  유효 현열 ESHT: {:.0}, 유효 잠열 ELHT: {:.0} BTU/hr",
        result.effective.esht_btuh, result.effective.elht_btuh
    );
    println!(
        "  총열량 GTH: {:.0} BTU/hr = {:.2} TR",
        result.coil.grand_total_heat_btuh, result.coil.tons_required
    );
    println!(
        "  제습풍량: {:.0} CFM, 급기온도: {:.1} °F, 코일 출구온도: {:.1} °F",
        result.coil.dehumidified_cfm,
        result.derived.supply_air_temp_f,
        result.derived.coil_leaving_temp_f
    );
    println!(
        "  ESHF: {:.2}, 실 SHR: {:.2}, 총 SHR: {:.2}, CFM/TR: {:.0}, 외기비: {:.0}%",
        result.derived.eshf,
        result.derived.room_shr,
        result.derived.grand_shr,
        result.derived.cfm_per_ton,
        result.derived.outside_air_fraction * 100.0
    );

    let basis = EquipmentSelectionBasis::from_result(result);
    println!(
        "[장비 선정 기준] 면적 {:.0} ft², {:.2} TR, {:.0} CFM, 현열 {:.0} / 잠열 {:.0} BTU/hr",
        basis.area_ft2, basis.tons, basis.total_cfm, basis.sensible_btuh, basis.latent_btuh
    );

    if result.warnings.is_empty() {
        println!("{}", tr.t(i18n::keys::NO_WARNINGS));
    } else {
        println!("{}", tr.t(i18n::keys::WARNINGS_HEADING));
        for w in &result.warnings {
            println!("  - {w}");
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 값 입력란 공통 처리. 공백/비정상 입력은 0으로 강제 변환한다.
fn read_f64_or_zero(prompt: &str) -> Result<f64, AppError> {
    let s = read_line(prompt)?;
    Ok(parse_or_zero(&s))
}

fn read_orientation() -> Result<Orientation, AppError> {
    println!("방위: 1=N 2=NE 3=E 4=SE 5=S 6=SW 7=W 8=NW 9=수평");
    let sel = read_line("선택: ")?;
    let orientation = match sel.trim() {
        "2" => Orientation::NorthEast,
        "3" => Orientation::East,
        "4" => Orientation::SouthEast,
        "5" => Orientation::South,
        "6" => Orientation::SouthWest,
        "7" => Orientation::West,
        "8" => Orientation::NorthWest,
        "9" => Orientation::Horizontal,
        _ => Orientation::North,
    };
    Ok(orientation)
}

fn read_glass_type() -> Result<GlassType, AppError> {
    println!("유리: 1=단판 2=복층 3=삼중 4=열선흡수 5=반사");
    let sel = read_line("선택: ")?;
    let glass = match sel.trim() {
        "2" => GlassType::DoubleClear,
        "3" => GlassType::TripleClear,
        "4" => GlassType::HeatAbsorbing,
        "5" => GlassType::Reflective,
        _ => GlassType::SingleClear,
    };
    Ok(glass)
}

fn read_shade_type() -> Result<ShadeType, AppError> {
    println!("차양: 1=없음 2=내부 블라인드 3=두꺼운 커튼 4=외부 차양");
    let sel = read_line("선택: ")?;
    let shade = match sel.trim() {
        "2" => ShadeType::InsideBlind,
        "3" => ShadeType::HeavyDrape,
        "4" => ShadeType::OutsideAwning,
        _ => ShadeType::None,
    };
    Ok(shade)
}

fn read_wall_type() -> Result<WallType, AppError> {
    println!("벽체: 1=벽돌9in 2=벽돌4in 3=블록8in 4=콘크리트6in 5=단열 경량벽 6=커튼월");
    let sel = read_line("선택: ")?;
    let wall = match sel.trim() {
        "2" => WallType::Brick4In,
        "3" => WallType::ConcreteBlock8In,
        "4" => WallType::ConcreteDense6In,
        "5" => WallType::FrameInsulated,
        "6" => WallType::CurtainWall,
        _ => WallType::Brick9In,
    };
    Ok(wall)
}

fn read_roof_type() -> Result<RoofType, AppError> {
    println!("지붕: 1=슬래브4in 2=슬래브6in 3=단열 금속데크 4=다락/반자 5=경량 단열지붕");
    let sel = read_line("선택: ")?;
    let roof = match sel.trim() {
        "2" => RoofType::ConcreteSlab6In,
        "3" => RoofType::MetalDeckInsulated,
        "4" => RoofType::AtticFalseCeiling,
        "5" => RoofType::LightweightInsulated,
        _ => RoofType::ConcreteSlab4In,
    };
    Ok(roof)
}

fn read_roof_exposure() -> Result<RoofExposure, AppError> {
    println!("일사 노출: 1=일사 노출 2=차양/그늘");
    let sel = read_line("선택: ")?;
    let exposure = match sel.trim() {
        "2" => RoofExposure::Shaded,
        _ => RoofExposure::Sunlit,
    };
    Ok(exposure)
}

fn read_weight_class() -> Result<WeightClass, AppError> {
    println!("중량 등급: 1=30 2=60 3=100 lb/ft²");
    let sel = read_line("선택: ")?;
    let weight = match sel.trim() {
        "2" => WeightClass::Lb60,
        "3" => WeightClass::Lb100,
        _ => WeightClass::Lb30,
    };
    Ok(weight)
}

fn read_temperature_unit(label: &str) -> Result<TemperatureUnit, AppError> {
    println!("{label}: 1=°F 2=°C 3=K");
    let sel = read_line("선택: ")?;
    let unit = match sel.trim() {
        "2" => TemperatureUnit::Celsius,
        "3" => TemperatureUnit::Kelvin,
        _ => TemperatureUnit::Fahrenheit,
    };
    Ok(unit)
}
