//! 실부하 합산과 여유율 적용.
//!
//! 환기 부하는 여기서 제외하고(코일 단계에서 외기부하로 합산)
//! 외피 + 내부 현열 + 틈새바람만 실부하로 묶는다.

use serde::Serialize;

/// 여유율 적용 후 유효 실부하 [BTU/hr].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EffectiveRoomLoads {
    /// 여유율 적용 전 현열 소계
    pub sensible_subtotal_btuh: f64,
    /// 유효 현열 ESHT
    pub esht_btuh: f64,
    /// 여유율 적용 전 잠열 소계
    pub latent_subtotal_btuh: f64,
    /// 유효 잠열 ELHT
    pub elht_btuh: f64,
    /// 유효 실 전열 = ESHT + ELHT
    pub effective_room_total_btuh: f64,
}

/// 실부하를 합산하고 현열/잠열 여유율을 적용한다.
pub fn compute_effective_loads(
    envelope_total_btuh: f64,
    internal_sensible_btuh: f64,
    infiltration_sensible_btuh: f64,
    infiltration_latent_btuh: f64,
    people_latent_btuh: f64,
    safety_factor_sensible_pct: f64,
    safety_factor_latent_pct: f64,
) -> EffectiveRoomLoads {
    let sensible_subtotal_btuh =
        envelope_total_btuh + internal_sensible_btuh + infiltration_sensible_btuh;
    let esht_btuh = sensible_subtotal_btuh * (1.0 + safety_factor_sensible_pct / 100.0);
    let latent_subtotal_btuh = infiltration_latent_btuh + people_latent_btuh;
    let elht_btuh = latent_subtotal_btuh * (1.0 + safety_factor_latent_pct / 100.0);
    EffectiveRoomLoads {
        sensible_subtotal_btuh,
        esht_btuh,
        latent_subtotal_btuh,
        elht_btuh,
        effective_room_total_btuh: esht_btuh + elht_btuh,
    }
}
