//! 냉방부하 계산 입력 스냅샷 정의.
//!
//! 방 하나의 계산에 필요한 모든 입력을 하나의 불변 레코드로 모은다.
//! TOML 방 정의 파일과 1:1로 직렬화/역직렬화된다.

use serde::{Deserialize, Serialize};

use crate::tables::{
    CrackFixture, GlassType, Orientation, PartitionType, RoofExposure, RoofType, ShadeType,
    WallType, WeightClass, WindBucket,
};

/// 폼 입력 문자열을 숫자로 강제 변환한다. 공백/비정상 입력은 0으로 처리한다.
///
/// 경계에서의 강제 변환 정책이며, 엔진 내부는 항상 정상 숫자를 가정한다.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

fn default_pressure_kpa() -> f64 {
    101.325
}

/// 실내외 설계조건. 노점/습도비/습구는 입력이 아니라 psychro 단계에서 유도한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConditions {
    /// 외기 건구온도 [°F]
    pub outside_db_f: f64,
    /// 외기 상대습도 [%]. 유효범위 (0, 100]
    pub outside_rh_pct: f64,
    /// 실내 건구온도 [°F]
    pub inside_db_f: f64,
    /// 실내 상대습도 [%]
    pub inside_rh_pct: f64,
    /// 대기압 [kPa]. 생략 시 표준대기압 101.325
    #[serde(default = "default_pressure_kpa")]
    pub pressure_kpa: f64,
}

/// 실 형상. 치수/면적/체적 중 정확히 한 가지 방식으로만 입력하며
/// 나머지 값은 유도된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum SpaceGeometry {
    /// 길이×폭×높이 입력 [ft]
    Dimensions {
        length_ft: f64,
        width_ft: f64,
        height_ft: f64,
    },
    /// 바닥면적 + 천장고 입력
    Area { area_ft2: f64, height_ft: f64 },
    /// 체적 + 천장고 입력. 바닥면적은 체적/높이로 유도한다.
    Volume { volume_ft3: f64, height_ft: f64 },
}

/// 형상 입력에서 유도된 바닥면적/체적.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedGeometry {
    pub floor_area_ft2: f64,
    pub volume_ft3: f64,
}

impl SpaceGeometry {
    /// 면적과 체적을 유도한다. Volume 모드에서 천장고가 0 이하이면
    /// 면적은 0으로 처리한다.
    pub fn resolve(&self) -> ResolvedGeometry {
        match *self {
            SpaceGeometry::Dimensions {
                length_ft,
                width_ft,
                height_ft,
            } => {
                let area = length_ft * width_ft;
                ResolvedGeometry {
                    floor_area_ft2: area,
                    volume_ft3: area * height_ft,
                }
            }
            SpaceGeometry::Area { area_ft2, height_ft } => ResolvedGeometry {
                floor_area_ft2: area_ft2,
                volume_ft3: area_ft2 * height_ft,
            },
            SpaceGeometry::Volume {
                volume_ft3,
                height_ft,
            } => ResolvedGeometry {
                floor_area_ft2: if height_ft > 0.0 {
                    volume_ft3 / height_ft
                } else {
                    0.0
                },
                volume_ft3,
            },
        }
    }
}

fn default_shade() -> ShadeType {
    ShadeType::None
}

/// 유리면 한 장.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlassPanel {
    pub orientation: Orientation,
    /// 유리 면적 [ft²]
    pub area_ft2: f64,
    pub glass: GlassType,
    #[serde(default = "default_shade")]
    pub shading: ShadeType,
}

/// 외벽 한 면.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSection {
    pub orientation: Orientation,
    /// 벽 면적 [ft²]
    pub area_ft2: f64,
    pub construction: WallType,
    pub weight: WeightClass,
}

/// 지붕 한 면.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofSection {
    pub exposure: RoofExposure,
    /// 지붕 면적 [ft²]
    pub area_ft2: f64,
    pub construction: RoofType,
    pub weight: WeightClass,
}

/// 비공조 인접공간과 면한 칸막이 한 면.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionSection {
    /// 칸막이 면적 [ft²]
    pub area_ft2: f64,
    pub construction: PartitionType,
}

fn default_sensible_per_person() -> f64 {
    245.0
}

fn default_latent_per_person() -> f64 {
    205.0
}

/// 내부 발열 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalLoads {
    /// 재실 인원 [명]
    #[serde(default)]
    pub occupants: f64,
    /// 1인당 현열 [BTU/hr]
    #[serde(default = "default_sensible_per_person")]
    pub sensible_btuh_per_person: f64,
    /// 1인당 잠열 [BTU/hr]
    #[serde(default = "default_latent_per_person")]
    pub latent_btuh_per_person: f64,
    /// 조명 부하밀도 [W/ft²]
    #[serde(default)]
    pub lighting_w_per_ft2: f64,
    /// 기기 부하밀도 [W/ft²]
    #[serde(default)]
    pub equipment_w_per_ft2: f64,
    /// 모터 축동력 합계 [BHP]
    #[serde(default)]
    pub motor_bhp: f64,
    /// 모터 정격 합계 [HP]
    #[serde(default)]
    pub motor_hp: f64,
}

impl Default for InternalLoads {
    fn default() -> Self {
        Self {
            occupants: 0.0,
            sensible_btuh_per_person: default_sensible_per_person(),
            latent_btuh_per_person: default_latent_per_person(),
            lighting_w_per_ft2: 0.0,
            equipment_w_per_ft2: 0.0,
            motor_bhp: 0.0,
            motor_hp: 0.0,
        }
    }
}

/// 틈새바람 산정 방식.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Infiltration {
    /// 직접 입력 [CFM]
    Manual { cfm: f64 },
    /// 크랙 길이법: 창호별 단위길이 CFM × 크랙 길이 × 수량의 합
    CrackLength {
        wind: WindBucket,
        items: Vec<CrackItem>,
    },
}

impl Default for Infiltration {
    fn default() -> Self {
        Infiltration::Manual { cfm: 0.0 }
    }
}

/// 크랙 길이법 항목 하나.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackItem {
    pub fixture: CrackFixture,
    /// 개소당 크랙 길이 [ft]
    pub crack_length_ft: f64,
    /// 수량 [개소]
    pub quantity: f64,
}

/// 환기/틈새바람 설계 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentilationDesign {
    /// 1인당 외기량 [CFM/인]
    #[serde(default)]
    pub cfm_per_person: f64,
    /// 단위면적당 외기량 [CFM/ft²]
    #[serde(default)]
    pub cfm_per_ft2: f64,
    /// 시간당 환기횟수 [회/h]
    #[serde(default)]
    pub air_changes_per_hour: f64,
    #[serde(default)]
    pub infiltration: Infiltration,
}

impl Default for VentilationDesign {
    fn default() -> Self {
        Self {
            cfm_per_person: 0.0,
            cfm_per_ft2: 0.0,
            air_changes_per_hour: 0.0,
            infiltration: Infiltration::default(),
        }
    }
}

fn default_bypass_factor() -> f64 {
    0.12
}

fn default_safety_pct() -> f64 {
    5.0
}

fn default_adp_f() -> f64 {
    52.0
}

/// 코일 프로세스/여유율 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessFactors {
    /// 바이패스 팩터 (0~1)
    #[serde(default = "default_bypass_factor")]
    pub bypass_factor: f64,
    /// 현열 여유율 [%]
    #[serde(default = "default_safety_pct")]
    pub safety_factor_sensible_pct: f64,
    /// 잠열 여유율 [%]
    #[serde(default = "default_safety_pct")]
    pub safety_factor_latent_pct: f64,
    /// 선정 장치노점온도 ADP [°F]
    #[serde(default = "default_adp_f")]
    pub selected_adp_f: f64,
}

impl Default for ProcessFactors {
    fn default() -> Self {
        Self {
            bypass_factor: default_bypass_factor(),
            safety_factor_sensible_pct: default_safety_pct(),
            safety_factor_latent_pct: default_safety_pct(),
            selected_adp_f: default_adp_f(),
        }
    }
}

/// 방 하나의 냉방부하 계산 입력 스냅샷. 엔진은 이 값을 절대 변경하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomLoadInput {
    /// 방 이름 (보고서 표시용)
    #[serde(default)]
    pub name: String,
    pub design: DesignConditions,
    pub geometry: SpaceGeometry,
    #[serde(default)]
    pub glass: Vec<GlassPanel>,
    #[serde(default)]
    pub walls: Vec<WallSection>,
    #[serde(default)]
    pub roofs: Vec<RoofSection>,
    #[serde(default)]
    pub partitions: Vec<PartitionSection>,
    #[serde(default)]
    pub internal: InternalLoads,
    #[serde(default)]
    pub ventilation: VentilationDesign,
    #[serde(default)]
    pub process: ProcessFactors,
}
