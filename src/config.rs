use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::economics::{BenefitModel, ModelSettings};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 시나리오 입력은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en-us 등)
    pub language: String,
    /// 계산 모델 상수
    pub model: ModelSettings,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            model: ModelSettings::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 허용되지 않는 모델 상수
    #[error("잘못된 모델 설정: {0}")]
    InvalidModel(&'static str),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        save_config(self, path)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 상각 기간과 가동일수는 0보다 큰 유한한 수여야 한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let model = &self.model;
        if !model.amortization_years.is_finite() || model.amortization_years <= 0.0 {
            return Err(ConfigError::InvalidModel(
                "상각 기간은 0보다 커야 합니다.",
            ));
        }
        if !model.working_days_per_year.is_finite() || model.working_days_per_year <= 0.0 {
            return Err(ConfigError::InvalidModel(
                "연간 가동일수는 0보다 커야 합니다.",
            ));
        }
        Ok(())
    }

    pub fn set_benefit_model(&mut self, model: BenefitModel) {
        self.model.benefit_model = model;
    }
}
