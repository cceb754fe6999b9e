//! 냉방부하 계산 파이프라인.
//!
//! 입력 스냅샷 하나를 받아 전 단계를 처음부터 다시 계산한다.
//! 중간 캐시나 공유 상태가 없으므로 동일 입력은 항상 동일 결과를 낸다.

use serde::Serialize;

use crate::load::coil::{self, CoilProcess};
use crate::load::derived::{self, DerivedMetrics};
use crate::load::envelope::{self, EnvelopeGains};
use crate::load::input::{ResolvedGeometry, RoomLoadInput};
use crate::load::internal::{self, InternalGains};
use crate::load::summation::{self, EffectiveRoomLoads};
use crate::load::ventilation::{self, VentilationLoads};
use crate::psychro::{self, AirStatePoint};

/// 방 하나의 냉방부하 계산 결과 레코드.
///
/// 최신 계산 한 건만을 표현하며 별도 수명이나 상태를 갖지 않는다.
#[derive(Debug, Clone, Serialize)]
pub struct CoolingLoadResult {
    /// 방 이름 (입력 그대로)
    pub name: String,
    /// 외기 상태점
    pub outside_air: AirStatePoint,
    /// 실내 상태점
    pub inside_air: AirStatePoint,
    /// 유도된 바닥면적/체적
    pub geometry: ResolvedGeometry,
    /// 외피 취득열량 내역
    pub envelope: EnvelopeGains,
    /// 내부 발열 내역
    pub internal: InternalGains,
    /// 환기/틈새바람 풍량과 부하
    pub airflow: VentilationLoads,
    /// 재실자 잠열 [BTU/hr]
    pub people_latent_btuh: f64,
    /// 여유율 적용 후 유효 실부하
    pub effective: EffectiveRoomLoads,
    /// 외기부하/총열량/냉동톤/제습풍량
    pub coil: CoilProcess,
    /// 파생 지표
    pub derived: DerivedMetrics,
    /// 설계 진단 경고 (계산을 막지 않는다)
    pub warnings: Vec<String>,
}

/// 입력 스냅샷으로 냉방부하 전체를 계산한다.
///
/// 순수 함수이며 입력을 변경하지 않는다. 호출 시점마다 전 단계를
/// 다시 계산하므로 입력이 같으면 결과도 항상 같다.
pub fn compute_room_load(input: &RoomLoadInput) -> CoolingLoadResult {
    let design = &input.design;
    let geometry = input.geometry.resolve();

    // 1단계: 실내외 습공기 상태점. RH 범위 밖이면 습도비는 0으로 내린다.
    let outside_air =
        psychro::resolve_state(design.outside_db_f, design.outside_rh_pct, design.pressure_kpa);
    let inside_air =
        psychro::resolve_state(design.inside_db_f, design.inside_rh_pct, design.pressure_kpa);
    let delta_db_f = design.outside_db_f - design.inside_db_f;
    let delta_grains =
        outside_air.grains_per_lb.unwrap_or(0.0) - inside_air.grains_per_lb.unwrap_or(0.0);

    // 2~4단계: 외피 / 내부 발열 / 환기·틈새바람 (서로 독립)
    let envelope = envelope::compute_envelope(
        &input.glass,
        &input.walls,
        &input.roofs,
        &input.partitions,
        design.outside_db_f,
        design.inside_db_f,
    );
    let internal = internal::compute_internal(&input.internal, geometry.floor_area_ft2);
    let people_latent_btuh = internal::people_latent(&input.internal);
    let airflow = ventilation::compute_ventilation(
        &input.ventilation,
        input.internal.occupants,
        geometry.floor_area_ft2,
        geometry.volume_ft3,
        delta_db_f,
        delta_grains,
    );

    // 5단계: 실부하 합산 + 여유율. 환기 부하는 여기서 제외된다.
    let effective = summation::compute_effective_loads(
        envelope.total_btuh,
        internal.total_sensible_btuh,
        airflow.infiltration_sensible_btuh,
        airflow.infiltration_latent_btuh,
        people_latent_btuh,
        input.process.safety_factor_sensible_pct,
        input.process.safety_factor_latent_pct,
    );

    // 6단계: 외기부하 반영, 총열량/냉동톤/제습풍량
    let coil = coil::compute_coil_process(
        airflow.ventilation_sensible_btuh,
        airflow.ventilation_latent_btuh,
        effective.effective_room_total_btuh,
        effective.esht_btuh,
        design.inside_db_f,
        input.process.bypass_factor,
        input.process.selected_adp_f,
    );

    // 7단계: 파생 지표와 진단 경고
    let derived = derived::compute_derived(
        &effective,
        &coil,
        airflow.ventilation_cfm,
        design.inside_db_f,
        design.outside_db_f,
        input.process.bypass_factor,
        input.process.selected_adp_f,
    );
    let warnings = derived::evaluate_warnings(&effective, &coil, &derived);

    CoolingLoadResult {
        name: input.name.clone(),
        outside_air,
        inside_air,
        geometry,
        envelope,
        internal,
        airflow,
        people_latent_btuh,
        effective,
        coil,
        derived,
        warnings,
    }
}
