//! 외피(유리/벽/지붕/칸막이) 취득열량 계산.

use serde::Serialize;

use crate::load::input::{GlassPanel, PartitionSection, RoofSection, WallSection};
use crate::tables;

/// 외피 취득열량 분류 합계 [BTU/hr].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnvelopeGains {
    /// 유리 일사 취득
    pub glass_solar_btuh: f64,
    /// 벽체 전도(ETD법)
    pub wall_btuh: f64,
    /// 지붕 전도(ETD법)
    pub roof_btuh: f64,
    /// 칸막이 관류
    pub partition_btuh: f64,
    /// 외피 합계
    pub total_btuh: f64,
}

/// 유리 일사 취득 = 면적 × 방위별 기준 일사 × 유리 계수 × 차양 계수.
fn glass_solar(panels: &[GlassPanel]) -> f64 {
    panels
        .iter()
        .map(|p| {
            p.area_ft2
                * tables::base_solar_factor(p.orientation)
                * tables::glass_factor(p.glass)
                * tables::shade_factor(p.shading)
        })
        .sum()
}

/// 벽체 전도 = 면적 × U × (ETD + 실내외 건구온도차).
fn wall_conduction(walls: &[WallSection], delta_db_f: f64) -> f64 {
    walls
        .iter()
        .map(|w| {
            w.area_ft2
                * tables::wall_u(w.construction)
                * (tables::wall_etd(w.orientation, w.weight) + delta_db_f)
        })
        .sum()
}

/// 지붕 전도 = 면적 × U × (노출조건 ETD + 실내외 건구온도차).
fn roof_conduction(roofs: &[RoofSection], delta_db_f: f64) -> f64 {
    roofs
        .iter()
        .map(|r| {
            r.area_ft2
                * tables::roof_u(r.construction)
                * (tables::roof_etd(r.exposure, r.weight) + delta_db_f)
        })
        .sum()
}

/// 칸막이 관류 = 면적 × U × max(0, ΔDB − 5).
///
/// 인접 비공조 공간은 외기보다 5°F 낮다고 본다.
fn partition_transmission(partitions: &[PartitionSection], delta_db_f: f64) -> f64 {
    let effective_dt = (delta_db_f - 5.0).max(0.0);
    partitions
        .iter()
        .map(|p| p.area_ft2 * tables::partition_u(p.construction) * effective_dt)
        .sum()
}

/// 구성된 모든 외피 요소의 취득열량을 분류별로 합산한다.
pub fn compute_envelope(
    glass: &[GlassPanel],
    walls: &[WallSection],
    roofs: &[RoofSection],
    partitions: &[PartitionSection],
    outside_db_f: f64,
    inside_db_f: f64,
) -> EnvelopeGains {
    let delta_db_f = outside_db_f - inside_db_f;
    let glass_solar_btuh = glass_solar(glass);
    let wall_btuh = wall_conduction(walls, delta_db_f);
    let roof_btuh = roof_conduction(roofs, delta_db_f);
    let partition_btuh = partition_transmission(partitions, delta_db_f);
    EnvelopeGains {
        glass_solar_btuh,
        wall_btuh,
        roof_btuh,
        partition_btuh,
        total_btuh: glass_solar_btuh + wall_btuh + roof_btuh + partition_btuh,
    }
}
