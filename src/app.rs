use crate::config::{Config, ConfigError};
use crate::economics::{self, EconomicsError};
use crate::i18n::{self, Translator};
use crate::scenario::{ScenarioError, ScenarioInputs};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 파일 파싱 오류
    #[error("시나리오 파일 오류: {0}")]
    ScenarioFile(#[from] toml::de::Error),
    /// 시나리오 입력 검증 오류
    #[error("시나리오 입력 오류: {0}")]
    Scenario(#[from] ScenarioError),
    /// 재무 계산 오류
    #[error("재무 계산 오류: {0}")]
    Economics(#[from] EconomicsError),
}

/// 시나리오 파일(TOML)을 읽어 검증한다. 빠진 항목은 기본값으로 채운다.
pub fn load_scenario(path: &std::path::Path) -> Result<ScenarioInputs, AppError> {
    let content = std::fs::read_to_string(path)?;
    let scenario: ScenarioInputs = toml::from_str(&content)?;
    scenario.validate()?;
    Ok(scenario)
}

/// 시나리오를 평가해 결과를 출력한다. 계산 오류는 호출자에게 그대로 전달한다.
pub fn evaluate_and_print(
    tr: &Translator,
    config: &Config,
    scenario: &ScenarioInputs,
) -> Result<(), AppError> {
    let result = economics::evaluate(scenario, &config.model)?;
    ui_cli::print_result(tr, &result);
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    tr: &Translator,
    mut scenario: ScenarioInputs,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Scenario => ui_cli::handle_scenario(tr, &mut scenario)?,
            MenuChoice::Results => {
                // 계산 오류는 메시지만 출력하고 메뉴로 돌아간다.
                match evaluate_and_print(tr, config, &scenario) {
                    Ok(()) => {}
                    Err(AppError::Economics(e)) => {
                        println!("{} {e}", tr.t(i18n::keys::ERROR_CALCULATION))
                    }
                    Err(other) => return Err(other),
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
