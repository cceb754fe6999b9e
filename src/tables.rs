//! 냉방부하 계산용 설계 테이블 모음.
//!
//! 방위별 일사 계수, 유리/차양 계수, 벽체·지붕의 상당온도차(ETD),
//! 열관류율(U), 틈새바람 크랙 테이블을 enum 키 기반 상수 테이블로 제공한다.
//! 키가 enum이므로 정의되지 않은 조합은 표현 자체가 불가능하다.

use serde::{Deserialize, Serialize};

/// 외피 구성요소의 방위. Horizontal은 천창(skylight) 등 수평면에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Horizontal,
}

impl Orientation {
    /// 8방위 + 수평. 테이블 완전성 검사를 위한 목록.
    pub const ALL: [Orientation; 9] = [
        Orientation::North,
        Orientation::NorthEast,
        Orientation::East,
        Orientation::SouthEast,
        Orientation::South,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
        Orientation::Horizontal,
    ];
}

/// 벽체/지붕 단위면적당 중량 등급 [lb/ft²]. ETD 테이블의 열 인덱스.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightClass {
    Lb30,
    Lb60,
    Lb100,
}

impl WeightClass {
    pub const ALL: [WeightClass; 3] = [WeightClass::Lb30, WeightClass::Lb60, WeightClass::Lb100];

    fn pick(self, row: (f64, f64, f64)) -> f64 {
        match self {
            WeightClass::Lb30 => row.0,
            WeightClass::Lb60 => row.1,
            WeightClass::Lb100 => row.2,
        }
    }
}

/// 유리 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlassType {
    SingleClear,
    DoubleClear,
    TripleClear,
    HeatAbsorbing,
    Reflective,
}

/// 차양 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadeType {
    None,
    InsideBlind,
    HeavyDrape,
    OutsideAwning,
}

/// 벽체 구조.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallType {
    Brick9In,
    Brick4In,
    ConcreteBlock8In,
    ConcreteDense6In,
    FrameInsulated,
    CurtainWall,
}

/// 지붕 구조.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofType {
    ConcreteSlab4In,
    ConcreteSlab6In,
    MetalDeckInsulated,
    AtticFalseCeiling,
    LightweightInsulated,
}

/// 지붕 일사 노출 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofExposure {
    Sunlit,
    Shaded,
}

/// 칸막이(비공조 인접공간 경계) 구조.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionType {
    Brick4In,
    ConcreteBlock4In,
    GypsumStud,
    Glass,
}

/// 틈새바람 크랙 테이블의 풍속 구간 [mph].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindBucket {
    Mph5,
    Mph10,
    Mph15,
    Mph20,
    Mph25,
}

/// 크랙 길이법 대상 창호/문 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrackFixture {
    WoodDoubleHungAverage,
    WoodDoubleHungLoose,
    MetalSash,
    CasementWindow,
    DoorAverage,
    DoorPoorFit,
}

/// 방위별 기준 일사 취득 [BTU/hr·ft²]. 위도 30~40°N 하절기 설계치 기준.
pub fn base_solar_factor(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::North => 34.0,
        Orientation::NorthEast => 88.0,
        Orientation::East => 164.0,
        Orientation::SouthEast => 130.0,
        Orientation::South => 96.0,
        Orientation::SouthWest => 130.0,
        Orientation::West => 164.0,
        Orientation::NorthWest => 88.0,
        Orientation::Horizontal => 226.0,
    }
}

/// 유리 종류별 투과 보정 계수. 단판 투명유리 = 1.0 기준.
pub fn glass_factor(glass: GlassType) -> f64 {
    match glass {
        GlassType::SingleClear => 1.00,
        GlassType::DoubleClear => 0.81,
        GlassType::TripleClear => 0.72,
        GlassType::HeatAbsorbing => 0.69,
        GlassType::Reflective => 0.49,
    }
}

/// 차양 계수. 차양 없음 = 1.0 기준.
pub fn shade_factor(shade: ShadeType) -> f64 {
    match shade {
        ShadeType::None => 1.00,
        ShadeType::InsideBlind => 0.63,
        ShadeType::HeavyDrape => 0.55,
        ShadeType::OutsideAwning => 0.25,
    }
}

/// 벽체 열관류율 U [BTU/hr·ft²·°F].
pub fn wall_u(wall: WallType) -> f64 {
    match wall {
        WallType::Brick9In => 0.30,
        WallType::Brick4In => 0.48,
        WallType::ConcreteBlock8In => 0.51,
        WallType::ConcreteDense6In => 0.58,
        WallType::FrameInsulated => 0.12,
        WallType::CurtainWall => 0.36,
    }
}

/// 지붕 열관류율 U [BTU/hr·ft²·°F].
pub fn roof_u(roof: RoofType) -> f64 {
    match roof {
        RoofType::ConcreteSlab4In => 0.45,
        RoofType::ConcreteSlab6In => 0.37,
        RoofType::MetalDeckInsulated => 0.19,
        RoofType::AtticFalseCeiling => 0.26,
        RoofType::LightweightInsulated => 0.13,
    }
}

/// 칸막이 열관류율 U [BTU/hr·ft²·°F].
pub fn partition_u(partition: PartitionType) -> f64 {
    match partition {
        PartitionType::Brick4In => 0.42,
        PartitionType::ConcreteBlock4In => 0.40,
        PartitionType::GypsumStud => 0.32,
        PartitionType::Glass => 1.04,
    }
}

/// 벽체 상당온도차 ETD [°F]. 행 = 방위, 열 = 중량 등급(30/60/100 lb/ft²).
///
/// 서측·수평면이 가장 크고 중량이 클수록 작아지는 형태의 설계용 근사표.
pub fn wall_etd(orientation: Orientation, weight: WeightClass) -> f64 {
    let row = match orientation {
        Orientation::North => (14.0, 12.0, 10.0),
        Orientation::NorthEast => (22.0, 18.0, 14.0),
        Orientation::East => (30.0, 26.0, 20.0),
        Orientation::SouthEast => (28.0, 24.0, 18.0),
        Orientation::South => (24.0, 20.0, 16.0),
        Orientation::SouthWest => (33.0, 29.0, 23.0),
        Orientation::West => (35.0, 30.0, 24.0),
        Orientation::NorthWest => (26.0, 22.0, 17.0),
        Orientation::Horizontal => (44.0, 38.0, 30.0),
    };
    weight.pick(row)
}

/// 지붕 상당온도차 ETD [°F]. 행 = 일사 노출, 열 = 중량 등급.
pub fn roof_etd(exposure: RoofExposure, weight: WeightClass) -> f64 {
    let row = match exposure {
        RoofExposure::Sunlit => (44.0, 38.0, 30.0),
        RoofExposure::Shaded => (20.0, 17.0, 13.0),
    };
    weight.pick(row)
}

/// 크랙 길이법 단위 틈새바람 [CFM/ft]. 행 = 창호 종류, 열 = 풍속 구간.
pub fn crack_cfm_per_ft(fixture: CrackFixture, wind: WindBucket) -> f64 {
    let row: [f64; 5] = match fixture {
        CrackFixture::WoodDoubleHungAverage => [0.12, 0.25, 0.42, 0.62, 0.85],
        CrackFixture::WoodDoubleHungLoose => [0.45, 0.92, 1.45, 2.10, 2.80],
        CrackFixture::MetalSash => [0.33, 0.67, 1.08, 1.53, 2.05],
        CrackFixture::CasementWindow => [0.10, 0.22, 0.37, 0.55, 0.75],
        CrackFixture::DoorAverage => [0.45, 0.90, 1.38, 1.92, 2.50],
        CrackFixture::DoorPoorFit => [0.90, 1.80, 2.76, 3.84, 5.00],
    };
    let col = match wind {
        WindBucket::Mph5 => 0,
        WindBucket::Mph10 => 1,
        WindBucket::Mph15 => 2,
        WindBucket::Mph20 => 3,
        WindBucket::Mph25 => 4,
    };
    row[col]
}

// NOTE:
// - 일사/ETD/U값은 전형적인 설계 핸드북(Carrier E20, ASHRAE Fundamentals 계열)
//   수준의 참고 근사치이며 실제 설계 시 해당 지역·최신 기준으로 검증해야 한다.
// - 크랙 테이블은 풍속 구간별 대표값이다. 구간 사이 보간은 하지 않는다.
