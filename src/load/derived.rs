//! 파생 지표(열비/급기조건/풍량 분배)와 설계 진단 경고.

use serde::Serialize;

use crate::load::coil::CoilProcess;
use crate::load::summation::EffectiveRoomLoads;

/// 파생 지표 모음. 분모가 0인 지표는 0으로 둔다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedMetrics {
    /// 유효 현열비 ESHF = ESHT / 유효 실 전열
    pub eshf: f64,
    /// 여유율 적용 전 실 현열비
    pub room_shr: f64,
    /// 외기 포함 총 현열 [BTU/hr]
    pub grand_sensible_btuh: f64,
    /// 외기 포함 총 잠열 [BTU/hr]
    pub grand_latent_btuh: f64,
    /// 총 현열비 = 총 현열 / GTH
    pub grand_shr: f64,
    /// 급기온도 [°F]
    pub supply_air_temp_f: f64,
    /// 코일 출구온도 = ADP + BF×(실내DB−ADP) [°F]
    pub coil_leaving_temp_f: f64,
    /// 혼합공기 온도 [°F]. 환기/리턴 풍량 가중평균.
    pub mixed_air_temp_f: f64,
    /// 리턴 풍량 = max(0, 제습풍량 − 환기풍량) [CFM]
    pub return_air_cfm: f64,
    /// 외기비 = 환기풍량 / 제습풍량 (0~1)
    pub outside_air_fraction: f64,
    /// 냉동톤당 풍량 [CFM/TR]
    pub cfm_per_ton: f64,
    /// 단위풍량당 열량 [BTU/hr per CFM]
    pub btu_per_cfm: f64,
}

/// 파생 지표를 계산한다. 모든 나눗셈은 분모 0 가드를 거쳐 0을 반환한다.
pub fn compute_derived(
    loads: &EffectiveRoomLoads,
    coil: &CoilProcess,
    ventilation_cfm: f64,
    inside_db_f: f64,
    outside_db_f: f64,
    bypass_factor: f64,
    selected_adp_f: f64,
) -> DerivedMetrics {
    let eshf = if loads.effective_room_total_btuh > 0.0 {
        loads.esht_btuh / loads.effective_room_total_btuh
    } else {
        0.0
    };

    let room_subtotal = loads.sensible_subtotal_btuh + loads.latent_subtotal_btuh;
    let room_shr = if room_subtotal > 0.0 {
        loads.sensible_subtotal_btuh / room_subtotal
    } else {
        0.0
    };

    let grand_sensible_btuh = loads.esht_btuh + coil.outside_air_sensible_btuh;
    let grand_latent_btuh = loads.elht_btuh + coil.outside_air_latent_btuh;
    let grand_shr = if coil.grand_total_heat_btuh > 0.0 {
        grand_sensible_btuh / coil.grand_total_heat_btuh
    } else {
        0.0
    };

    let supply_air_temp_f = if coil.dehumidified_cfm > 0.0 {
        inside_db_f - loads.esht_btuh / (1.08 * coil.dehumidified_cfm)
    } else {
        0.0
    };

    let coil_leaving_temp_f = selected_adp_f + bypass_factor * (inside_db_f - selected_adp_f);

    let return_air_cfm = (coil.dehumidified_cfm - ventilation_cfm).max(0.0);
    let outside_air_fraction = if coil.dehumidified_cfm > 0.0 {
        ventilation_cfm / coil.dehumidified_cfm
    } else {
        0.0
    };

    let mixed_cfm = return_air_cfm + ventilation_cfm;
    let mixed_air_temp_f = if mixed_cfm > 0.0 {
        (return_air_cfm * inside_db_f + ventilation_cfm * outside_db_f) / mixed_cfm
    } else {
        0.0
    };

    let cfm_per_ton = if coil.tons_required > 0.0 {
        coil.dehumidified_cfm / coil.tons_required
    } else {
        0.0
    };
    let btu_per_cfm = if coil.dehumidified_cfm > 0.0 {
        coil.grand_total_heat_btuh / coil.dehumidified_cfm
    } else {
        0.0
    };

    DerivedMetrics {
        eshf,
        room_shr,
        grand_sensible_btuh,
        grand_latent_btuh,
        grand_shr,
        supply_air_temp_f,
        coil_leaving_temp_f,
        mixed_air_temp_f,
        return_air_cfm,
        outside_air_fraction,
        cfm_per_ton,
        btu_per_cfm,
    }
}

/// 설계 진단 경고를 평가한다. 각 규칙은 독립적으로 검사하며 계산을 막지 않는다.
///
/// 분모가 0이라 지표 자체가 무의미한 경우에는 해당 경고를 내지 않는다.
pub fn evaluate_warnings(
    loads: &EffectiveRoomLoads,
    coil: &CoilProcess,
    derived: &DerivedMetrics,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if coil.dehumidified_cfm > 0.0 {
        if derived.supply_air_temp_f < 50.0 {
            warnings.push(format!(
                "급기온도 {:.1}°F가 50°F 미만입니다. 과냉/결로 위험이 있습니다.",
                derived.supply_air_temp_f
            ));
        } else if derived.supply_air_temp_f > 60.0 {
            warnings.push(format!(
                "급기온도 {:.1}°F가 60°F를 초과합니다. 풍량 대비 용량 부족 가능성이 있습니다.",
                derived.supply_air_temp_f
            ));
        }
    }

    if coil.tons_required > 0.0 && coil.dehumidified_cfm > 0.0 {
        if derived.cfm_per_ton < 350.0 {
            warnings.push(format!(
                "톤당 풍량 {:.0} CFM/TR이 350 미만입니다. 잠열 비중이 큰 조건인지 확인하세요.",
                derived.cfm_per_ton
            ));
        } else if derived.cfm_per_ton > 450.0 {
            warnings.push(format!(
                "톤당 풍량 {:.0} CFM/TR이 450을 초과합니다. 코일 선정을 재검토하세요.",
                derived.cfm_per_ton
            ));
        }
    }

    if loads.effective_room_total_btuh > 0.0 {
        if derived.eshf < 0.65 {
            warnings.push(format!(
                "ESHF {:.2}가 0.65 미만입니다. 잠열 부하가 과다합니다.",
                derived.eshf
            ));
        } else if derived.eshf > 0.95 {
            warnings.push(format!(
                "ESHF {:.2}가 0.95를 초과합니다. 현열 위주 부하이므로 ADP 선정을 확인하세요.",
                derived.eshf
            ));
        }
    }

    if coil.dehumidified_cfm > 0.0 && derived.outside_air_fraction < 0.15 {
        warnings.push(format!(
            "외기비 {:.0}%가 15% 미만입니다. 환기기준 미달 가능성이 있습니다.",
            derived.outside_air_fraction * 100.0
        ));
    }

    warnings
}
