//! 외기부하 반영과 코일 프로세스(총열량/냉동톤/제습풍량) 계산.

use serde::Serialize;

/// 1 냉동톤(TR) = 12,000 BTU/hr.
const BTUH_PER_TON: f64 = 12_000.0;

/// 코일 프로세스 계산 결과.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoilProcess {
    /// 바이패스 보정 후 외기 현열 [BTU/hr]
    pub outside_air_sensible_btuh: f64,
    /// 바이패스 보정 후 외기 잠열 [BTU/hr]
    pub outside_air_latent_btuh: f64,
    /// 총열량 GTH [BTU/hr]
    pub grand_total_heat_btuh: f64,
    /// 필요 냉동능력 [TR]
    pub tons_required: f64,
    /// 제습 온도차 (1−BF)×(실내DB−ADP) [°F]
    pub dehumidified_rise_f: f64,
    /// 제습풍량 [CFM]. 온도차가 0 이하이면 0.
    pub dehumidified_cfm: f64,
}

/// 환기부하에 바이패스 팩터를 적용해 외기부하를 구하고, 총열량과
/// ADP 기준 제습풍량을 계산한다. 제습 온도차 0 이하에서는 풍량을 0으로 둔다.
pub fn compute_coil_process(
    ventilation_sensible_btuh: f64,
    ventilation_latent_btuh: f64,
    effective_room_total_btuh: f64,
    esht_btuh: f64,
    inside_db_f: f64,
    bypass_factor: f64,
    selected_adp_f: f64,
) -> CoilProcess {
    let contact = 1.0 - bypass_factor;
    let outside_air_sensible_btuh = ventilation_sensible_btuh * contact;
    let outside_air_latent_btuh = ventilation_latent_btuh * contact;
    let grand_total_heat_btuh =
        effective_room_total_btuh + outside_air_sensible_btuh + outside_air_latent_btuh;
    let tons_required = grand_total_heat_btuh / BTUH_PER_TON;

    let dehumidified_rise_f = contact * (inside_db_f - selected_adp_f).max(0.0);
    let dehumidified_cfm = if dehumidified_rise_f > 0.0 {
        esht_btuh / (1.08 * dehumidified_rise_f)
    } else {
        0.0
    };

    CoilProcess {
        outside_air_sensible_btuh,
        outside_air_latent_btuh,
        grand_total_heat_btuh,
        tons_required,
        dehumidified_rise_f,
        dehumidified_cfm,
    }
}
