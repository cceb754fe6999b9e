//! 환기/틈새바람 풍량 산정과 그에 따른 현열·잠열 부하.

use serde::Serialize;

use crate::load::input::{Infiltration, VentilationDesign};
use crate::tables;

/// 현열 풍량 계수: q_s = 1.08 × CFM × ΔT.
const SENSIBLE_AIR_FACTOR: f64 = 1.08;

/// 잠열 풍량 계수: q_l = 0.68 × CFM × Δgrains.
const LATENT_AIR_FACTOR: f64 = 0.68;

/// 환기/틈새바람 계산 결과.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VentilationLoads {
    /// 지배 환기풍량 [CFM]. 인원/면적/환기횟수 기준 중 최댓값.
    pub ventilation_cfm: f64,
    /// 틈새바람 [CFM]
    pub infiltration_cfm: f64,
    /// 환기 현열 [BTU/hr]
    pub ventilation_sensible_btuh: f64,
    /// 환기 잠열 [BTU/hr]
    pub ventilation_latent_btuh: f64,
    /// 틈새바람 현열 [BTU/hr]
    pub infiltration_sensible_btuh: f64,
    /// 틈새바람 잠열 [BTU/hr]
    pub infiltration_latent_btuh: f64,
}

/// 지배 환기풍량을 구한다. 세 가지 산정법의 합이 아니라 **최댓값**을 쓴다.
pub fn governing_ventilation_cfm(
    design: &VentilationDesign,
    occupants: f64,
    floor_area_ft2: f64,
    volume_ft3: f64,
) -> f64 {
    let by_people = occupants * design.cfm_per_person;
    let by_area = floor_area_ft2 * design.cfm_per_ft2;
    let by_volume = volume_ft3 * design.air_changes_per_hour / 60.0;
    by_people.max(by_area).max(by_volume)
}

/// 틈새바람 풍량을 구한다. 직접 입력 또는 크랙 길이법.
pub fn infiltration_cfm(infiltration: &Infiltration) -> f64 {
    match infiltration {
        Infiltration::Manual { cfm } => *cfm,
        Infiltration::CrackLength { wind, items } => items
            .iter()
            .map(|item| {
                tables::crack_cfm_per_ft(item.fixture, *wind) * item.crack_length_ft * item.quantity
            })
            .sum(),
    }
}

/// 환기/틈새바람 풍량과 현열·잠열 부하를 계산한다.
///
/// Δgrains가 계산 불가(RH 범위 밖)이면 0으로 보고 잠열 항은 0이 된다.
pub fn compute_ventilation(
    design: &VentilationDesign,
    occupants: f64,
    floor_area_ft2: f64,
    volume_ft3: f64,
    delta_db_f: f64,
    delta_grains: f64,
) -> VentilationLoads {
    let ventilation_cfm = governing_ventilation_cfm(design, occupants, floor_area_ft2, volume_ft3);
    let infiltration_cfm = infiltration_cfm(&design.infiltration);
    VentilationLoads {
        ventilation_cfm,
        infiltration_cfm,
        ventilation_sensible_btuh: SENSIBLE_AIR_FACTOR * ventilation_cfm * delta_db_f,
        ventilation_latent_btuh: LATENT_AIR_FACTOR * ventilation_cfm * delta_grains,
        infiltration_sensible_btuh: SENSIBLE_AIR_FACTOR * infiltration_cfm * delta_db_f,
        infiltration_latent_btuh: LATENT_AIR_FACTOR * infiltration_cfm * delta_grains,
    }
}
