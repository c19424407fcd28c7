use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use iiot_roi_calculator::economics::BenefitModel;
use iiot_roi_calculator::{app, config, i18n, scenario::ScenarioInputs};

/// IIoT 도입 효과(ROI/NPV/회수기간) 계산기.
#[derive(Debug, Parser)]
#[command(name = "iiot_roi_calculator", version, about)]
struct Cli {
    /// 언어 코드 (auto/ko/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 시나리오 TOML 파일. 지정하면 한 번 평가해 출력하고 종료한다.
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// 편익 모델. 설정 파일 값을 덮어쓴다.
    #[arg(short, long, value_enum)]
    benefit_model: Option<BenefitModelArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BenefitModelArg {
    /// 증대 후 생산량 × 단위당 절감액
    Volume,
    /// 라인별 증가 생산량 × 단위 이익
    Incremental,
}

impl From<BenefitModelArg> for BenefitModel {
    fn from(value: BenefitModelArg) -> Self {
        match value {
            BenefitModelArg::Volume => BenefitModel::VolumeScaledSavings,
            BenefitModelArg::Incremental => BenefitModel::IncrementalUnitMargin,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut cfg = match config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            // 설정 없이 CLI 플래그와 시스템 로케일로 언어를 정한다.
            let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
            exit_with_error(&tr, &app::AppError::from(err));
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    log::debug!("language resolved: {lang}, config={}", cli.config.display());

    if let Err(err) = try_run(cli, &mut cfg, &tr) {
        exit_with_error(&tr, &err);
    }
}

fn try_run(
    cli: Cli,
    cfg: &mut config::Config,
    tr: &i18n::Translator,
) -> Result<(), app::AppError> {
    if let Some(model) = cli.benefit_model {
        cfg.model.benefit_model = model.into();
    }

    match cli.scenario {
        Some(path) => {
            let scenario = app::load_scenario(&path)?;
            app::evaluate_and_print(tr, cfg, &scenario)
        }
        None => app::run(cfg, tr, ScenarioInputs::default()),
    }
}

fn exit_with_error(tr: &i18n::Translator, err: &app::AppError) -> ! {
    eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
    std::process::exit(1);
}
