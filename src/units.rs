//! 단위 정의와 변환.
//!
//! 엔진 내부 계산은 IP 단위(°F, ft, ft², ft³, CFM, BTU/hr)로 고정되어 있고,
//! 이 모듈은 SI 입력을 폼 경계에서 IP로 환산할 때 쓴다.

use serde::{Deserialize, Serialize};

/// 온도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
}

/// 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Meter,
}

/// 면적 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareFoot,
    SquareMeter,
}

/// 체적 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicFoot,
    CubicMeter,
}

/// 풍량 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    Cfm,
    CubicMeterPerHour,
    LiterPerSecond,
}

const M_PER_FT: f64 = 0.3048;

/// 온도를 화씨 기준으로 환산한다.
pub fn to_fahrenheit(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}

/// 화씨 값을 원하는 단위로 환산한다.
pub fn from_fahrenheit(value_f: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value_f,
        TemperatureUnit::Celsius => (value_f - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => (value_f - 32.0) * 5.0 / 9.0 + 273.15,
    }
}

/// 길이를 피트 기준으로 환산한다.
pub fn to_feet(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Meter => value / M_PER_FT,
    }
}

/// 면적을 ft² 기준으로 환산한다.
pub fn to_square_feet(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareFoot => value,
        AreaUnit::SquareMeter => value / (M_PER_FT * M_PER_FT),
    }
}

/// 체적을 ft³ 기준으로 환산한다.
pub fn to_cubic_feet(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicFoot => value,
        VolumeUnit::CubicMeter => value / (M_PER_FT * M_PER_FT * M_PER_FT),
    }
}

/// 풍량을 CFM 기준으로 환산한다.
pub fn to_cfm(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => value,
        AirflowUnit::CubicMeterPerHour => value / (M_PER_FT * M_PER_FT * M_PER_FT) / 60.0,
        AirflowUnit::LiterPerSecond => value * 0.001 / (M_PER_FT * M_PER_FT * M_PER_FT) * 60.0,
    }
}

/// CFM 값을 원하는 단위로 환산한다.
pub fn from_cfm(value_cfm: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => value_cfm,
        AirflowUnit::CubicMeterPerHour => value_cfm * (M_PER_FT * M_PER_FT * M_PER_FT) * 60.0,
        AirflowUnit::LiterPerSecond => value_cfm * (M_PER_FT * M_PER_FT * M_PER_FT) / 60.0 * 1000.0,
    }
}

/// 열량을 BTU/hr 기준으로 환산한다. kW 입력을 지원한다.
pub fn kw_to_btuh(value_kw: f64) -> f64 {
    value_kw * 3412.142
}

/// BTU/hr 값을 kW로 환산한다.
pub fn btuh_to_kw(value_btuh: f64) -> f64 {
    value_btuh / 3412.142
}
