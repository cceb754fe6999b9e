//! 내부 발열(재실자/조명/기기/모터) 집계.

use serde::Serialize;

use crate::load::input::InternalLoads;

/// W → BTU/hr 환산 계수.
const WATT_TO_BTUH: f64 = 3.41;

/// 마력(BHP/HP) → BTU/hr 환산 계수.
const HP_TO_BTUH: f64 = 2545.0;

/// 내부 발열 현열 분류 합계 [BTU/hr]. 재실자 잠열은 잠열 단계에서 따로 집계한다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InternalGains {
    pub people_sensible_btuh: f64,
    pub lighting_btuh: f64,
    pub equipment_btuh: f64,
    pub motors_btuh: f64,
    /// 내부 현열 합계
    pub total_sensible_btuh: f64,
}

/// 내부 발열 현열을 집계한다. 조명/기기는 부하밀도(W/ft²) × 바닥면적 기준.
pub fn compute_internal(loads: &InternalLoads, floor_area_ft2: f64) -> InternalGains {
    let people_sensible_btuh = loads.occupants * loads.sensible_btuh_per_person;
    let lighting_btuh = loads.lighting_w_per_ft2 * floor_area_ft2 * WATT_TO_BTUH;
    let equipment_btuh = loads.equipment_w_per_ft2 * floor_area_ft2 * WATT_TO_BTUH;
    let motors_btuh = loads.motor_bhp * HP_TO_BTUH + loads.motor_hp * HP_TO_BTUH;
    InternalGains {
        people_sensible_btuh,
        lighting_btuh,
        equipment_btuh,
        motors_btuh,
        total_sensible_btuh: people_sensible_btuh + lighting_btuh + equipment_btuh + motors_btuh,
    }
}

/// 재실자 잠열 [BTU/hr].
pub fn people_latent(loads: &InternalLoads) -> f64 {
    loads.occupants * loads.latent_btuh_per_person
}
