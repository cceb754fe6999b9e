use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 빠른 입력 폼의 기본값 모음. config.toml에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    /// 대기압 [kPa]
    pub pressure_kpa: f64,
    /// 바이패스 팩터 (0~1)
    pub bypass_factor: f64,
    /// 현열 여유율 [%]
    pub safety_factor_sensible_pct: f64,
    /// 잠열 여유율 [%]
    pub safety_factor_latent_pct: f64,
    /// 선정 ADP [°F]
    pub selected_adp_f: f64,
    /// 1인당 현열 [BTU/hr]
    pub sensible_btuh_per_person: f64,
    /// 1인당 잠열 [BTU/hr]
    pub latent_btuh_per_person: f64,
    /// 1인당 외기량 [CFM/인]
    pub cfm_per_person: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            pressure_kpa: 101.325,
            bypass_factor: 0.12,
            safety_factor_sensible_pct: 5.0,
            safety_factor_latent_pct: 5.0,
            selected_adp_f: 52.0,
            sensible_btuh_per_person: 245.0,
            latent_btuh_per_person: 205.0,
            cfm_per_person: 10.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
