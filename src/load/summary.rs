//! 여러 방의 결과를 층/건물 합계로 묶는 집계와 장비 선정용 교환 레코드.

use serde::Serialize;

use crate::load::pipeline::CoolingLoadResult;

/// 외부 장비 선정 모듈에 넘겨줄 기준 값. 카탈로그 탐색 자체는 이 크레이트
/// 밖의 일이고, 여기서는 레코드 모양만 정의한다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquipmentSelectionBasis {
    /// 바닥면적 [ft²]
    pub area_ft2: f64,
    /// 필요 냉동능력 [TR]
    pub tons: f64,
    /// 총 풍량(제습풍량) [CFM]
    pub total_cfm: f64,
    /// 총 현열 [BTU/hr]
    pub sensible_btuh: f64,
    /// 총 잠열 [BTU/hr]
    pub latent_btuh: f64,
}

impl EquipmentSelectionBasis {
    /// 계산 결과에서 장비 선정 기준을 추출한다.
    pub fn from_result(result: &CoolingLoadResult) -> Self {
        Self {
            area_ft2: result.geometry.floor_area_ft2,
            tons: result.coil.tons_required,
            total_cfm: result.coil.dehumidified_cfm,
            sensible_btuh: result.derived.grand_sensible_btuh,
            latent_btuh: result.derived.grand_latent_btuh,
        }
    }
}

/// 층/건물 단위 합계.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    /// 포함된 방 수
    pub room_count: usize,
    /// 바닥면적 합계 [ft²]
    pub total_area_ft2: f64,
    /// 총열량 합계 [BTU/hr]
    pub total_gth_btuh: f64,
    /// 필요 냉동능력 합계 [TR]
    pub total_tons: f64,
    /// 제습풍량 합계 [CFM]
    pub total_dehumidified_cfm: f64,
    /// 환기풍량 합계 [CFM]
    pub total_ventilation_cfm: f64,
    /// 합산 기준 총 현열비
    pub combined_shr: f64,
    /// 경고가 하나 이상 있는 방 이름 목록
    pub rooms_with_warnings: Vec<String>,
}

/// 방별 결과를 합산한다. 합계 기준 현열비는 총 현열/총열량으로 다시 구한다.
pub fn summarize(results: &[CoolingLoadResult]) -> LoadSummary {
    let mut total_area_ft2 = 0.0;
    let mut total_gth_btuh = 0.0;
    let mut total_tons = 0.0;
    let mut total_dehumidified_cfm = 0.0;
    let mut total_ventilation_cfm = 0.0;
    let mut total_sensible_btuh = 0.0;
    let mut rooms_with_warnings = Vec::new();

    for r in results {
        total_area_ft2 += r.geometry.floor_area_ft2;
        total_gth_btuh += r.coil.grand_total_heat_btuh;
        total_tons += r.coil.tons_required;
        total_dehumidified_cfm += r.coil.dehumidified_cfm;
        total_ventilation_cfm += r.airflow.ventilation_cfm;
        total_sensible_btuh += r.derived.grand_sensible_btuh;
        if !r.warnings.is_empty() {
            rooms_with_warnings.push(r.name.clone());
        }
    }

    let combined_shr = if total_gth_btuh > 0.0 {
        total_sensible_btuh / total_gth_btuh
    } else {
        0.0
    };

    LoadSummary {
        room_count: results.len(),
        total_area_ft2,
        total_gth_btuh,
        total_tons,
        total_dehumidified_cfm,
        total_ventilation_cfm,
        combined_shr,
        rooms_with_warnings,
    }
}
