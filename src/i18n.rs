use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const YES_NO_HINT: &str = "general.yes_no_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SCENARIO: &str = "main_menu.scenario";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SCENARIO_HEADING: &str = "scenario.heading";
    pub const SCENARIO_DEFAULT_HINT: &str = "scenario.default_hint";
    pub const SCENARIO_SECTION_MARGINS: &str = "scenario.section_margins";
    pub const SCENARIO_SECTION_INVESTMENT: &str = "scenario.section_investment";
    pub const SCENARIO_SECTION_METRICS: &str = "scenario.section_metrics";
    pub const SCENARIO_SECTION_LINES: &str = "scenario.section_lines";
    pub const SCENARIO_SAVED: &str = "scenario.saved";
    pub const PROMPT_TURNOVER: &str = "prompt.turnover";
    pub const PROMPT_PROFIT_MARGIN: &str = "prompt.profit_margin";
    pub const PROMPT_SALES_ADMIN_MARGIN: &str = "prompt.sales_admin_margin";
    pub const PROMPT_MATERIAL_MARGIN: &str = "prompt.material_margin";
    pub const PROMPT_LABOR_MARGIN: &str = "prompt.labor_margin";
    pub const PROMPT_UNITS_PER_YEAR: &str = "prompt.units_per_year";
    pub const PROMPT_CAPITAL_COST: &str = "prompt.capital_cost";
    pub const PROMPT_LICENSE_COST: &str = "prompt.license_cost";
    pub const PROMPT_IMPLEMENTATION_COST: &str = "prompt.implementation_cost";
    pub const PROMPT_INCREASE_PCTS: &str = "prompt.increase_pcts";
    pub const PROMPT_ANNUAL_IIOT_COST: &str = "prompt.annual_iiot_cost";
    pub const PROMPT_HORIZON: &str = "prompt.horizon";
    pub const PROMPT_DISCOUNT_RATE: &str = "prompt.discount_rate";
    pub const PROMPT_MAINTENANCE_BEFORE: &str = "prompt.maintenance_before";
    pub const PROMPT_MAINTENANCE_AFTER: &str = "prompt.maintenance_after";
    pub const PROMPT_LABOR_BEFORE: &str = "prompt.labor_before";
    pub const PROMPT_LABOR_AFTER: &str = "prompt.labor_after";
    pub const PROMPT_DOWNTIME_BEFORE: &str = "prompt.downtime_before";
    pub const PROMPT_DOWNTIME_AFTER: &str = "prompt.downtime_after";
    pub const PROMPT_LINE_COUNT: &str = "prompt.line_count";
    pub const PROMPT_LINE_PRICE: &str = "prompt.line_price";
    pub const PROMPT_LINE_COST: &str = "prompt.line_cost";
    pub const PROMPT_LINE_UNITS: &str = "prompt.line_units";
    pub const LINE_LABEL: &str = "scenario.line_label";

    pub const METRIC_PRODUCTION_VOLUME: &str = "metric.production_volume";
    pub const METRIC_AVERAGE_COST: &str = "metric.average_cost";
    pub const METRIC_AVERAGE_PRICE: &str = "metric.average_price";
    pub const METRIC_DOWNTIME_REDUCTION: &str = "metric.downtime_reduction";
    pub const METRIC_MAINTENANCE_COST: &str = "metric.maintenance_cost";
    pub const METRIC_LABOR_COST: &str = "metric.labor_cost";

    pub const RESULT_MARGINS_HEADING: &str = "result.margins_heading";
    pub const RESULT_PROFIT: &str = "result.profit";
    pub const RESULT_REVENUE: &str = "result.revenue";
    pub const RESULT_SALES_ADMIN: &str = "result.sales_admin";
    pub const RESULT_MFG_EXPENSE: &str = "result.mfg_expense";
    pub const RESULT_MATERIAL_COST: &str = "result.material_cost";
    pub const RESULT_LABOR_COST: &str = "result.labor_cost";

    pub const RESULT_UNITS_HEADING: &str = "result.units_heading";
    pub const RESULT_BEFORE_AFTER: &str = "result.before_after";
    pub const RESULT_UNITS_PER_YEAR: &str = "result.units_per_year";
    pub const RESULT_UNITS_PER_DAY: &str = "result.units_per_day";
    pub const RESULT_COST_PER_UNIT: &str = "result.cost_per_unit";
    pub const RESULT_MATERIAL_PER_UNIT: &str = "result.material_per_unit";
    pub const RESULT_LABOR_PER_UNIT: &str = "result.labor_per_unit";
    pub const RESULT_FIXED_PER_UNIT: &str = "result.fixed_per_unit";
    pub const RESULT_SAVINGS_PER_UNIT: &str = "result.savings_per_unit";

    pub const RESULT_LINES_HEADING: &str = "result.lines_heading";
    pub const RESULT_LINES_COLUMNS: &str = "result.lines_columns";

    pub const RESULT_OPS_HEADING: &str = "result.ops_heading";
    pub const RESULT_OPS_MAINTENANCE: &str = "result.ops_maintenance";
    pub const RESULT_OPS_LABOR: &str = "result.ops_labor";
    pub const RESULT_OPS_TOTAL: &str = "result.ops_total";
    pub const RESULT_OPS_DOWNTIME: &str = "result.ops_downtime";

    pub const RESULT_BRIDGE_HEADING: &str = "result.bridge_heading";
    pub const RESULT_BASELINE_PROFIT: &str = "result.baseline_profit";
    pub const RESULT_VALUE_ADDED: &str = "result.value_added";
    pub const RESULT_OPS_SAVINGS: &str = "result.ops_savings";
    pub const RESULT_RECURRING_COST: &str = "result.recurring_cost";
    pub const RESULT_PROFIT_AFTER: &str = "result.profit_after";
    pub const RESULT_INCREMENTAL_PROFIT: &str = "result.incremental_profit";

    pub const RESULT_SCHEDULE_HEADING: &str = "result.schedule_heading";
    pub const RESULT_SCHEDULE_COLUMNS: &str = "result.schedule_columns";

    pub const RESULT_SUMMARY_HEADING: &str = "result.summary_heading";
    pub const RESULT_TOTAL_INVESTMENT: &str = "result.total_investment";
    pub const RESULT_NET_BENEFIT: &str = "result.net_benefit";
    pub const RESULT_FINAL_ROI: &str = "result.final_roi";
    pub const RESULT_FINAL_NPV: &str = "result.final_npv";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PAYBACK_YEARS: &str = "result.payback_years";
    pub const RESULT_NOT_RECOVERED: &str = "result.not_recovered";
    pub const RESULT_ANNUAL_RETURN: &str = "result.annual_return";
    pub const RESULT_DISCOUNTED_ROI: &str = "result.discounted_roi";
    pub const RESULT_SIMPLE_PAYBACK: &str = "result.simple_payback";
    pub const RESULT_MONTHS: &str = "result.months";
    pub const RESULT_NOT_APPLICABLE: &str = "result.not_applicable";
    pub const RESULT_MODEL: &str = "result.model";

    pub const MODEL_VOLUME_SCALED: &str = "model.volume_scaled";
    pub const MODEL_INCREMENTAL: &str = "model.incremental";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_MODEL: &str = "settings.current_model";
    pub const SETTINGS_MODEL_OPTIONS: &str = "settings.model_options";
    pub const SETTINGS_PROMPT_MODEL: &str = "settings.prompt_model";
    pub const SETTINGS_PROMPT_AMORTIZATION: &str = "settings.prompt_amortization";
    pub const SETTINGS_PROMPT_WORKING_DAYS: &str = "settings.prompt_working_days";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NEGATIVE: &str = "error.negative";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
    pub const ERROR_INVALID_SCENARIO: &str = "error.invalid_scenario";
    pub const ERROR_CALCULATION: &str = "error.calculation";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 영어가 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블은 점(.)으로 이어 붙인 키로 평탄화한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        YES_NO_HINT => "(y/n)",
        MAIN_MENU_TITLE => "\n=== IIoT ROI 계산기 ===",
        MAIN_MENU_SCENARIO => "1) 시나리오 입력",
        MAIN_MENU_RESULTS => "2) 결과 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        SCENARIO_HEADING => "\n-- 시나리오 입력 --",
        SCENARIO_DEFAULT_HINT => "엔터만 누르면 [ ] 안의 현재 값을 유지합니다.",
        SCENARIO_SECTION_MARGINS => "[매출 및 마진]",
        SCENARIO_SECTION_INVESTMENT => "[설비 및 IIoT 투자]",
        SCENARIO_SECTION_METRICS => "[선택 지표]",
        SCENARIO_SECTION_LINES => "[생산 라인]",
        SCENARIO_SAVED => "시나리오가 반영되었습니다.",
        PROMPT_TURNOVER => "연 매출",
        PROMPT_PROFIT_MARGIN => "이익률 (%)",
        PROMPT_SALES_ADMIN_MARGIN => "판매/관리비율 (%)",
        PROMPT_MATERIAL_MARGIN => "재료비율 (%)",
        PROMPT_LABOR_MARGIN => "노무비율 (%)",
        PROMPT_UNITS_PER_YEAR => "연간 생산량 [개]",
        PROMPT_CAPITAL_COST => "설비 투자비",
        PROMPT_LICENSE_COST => "IIoT 라이선스 비용",
        PROMPT_IMPLEMENTATION_COST => "구축 비용",
        PROMPT_INCREASE_PCTS => "생산 증대율 (%) (쉼표로 구분, 최대 5개)",
        PROMPT_ANNUAL_IIOT_COST => "연간 IIoT 구독 비용",
        PROMPT_HORIZON => "분석 기간 (3/5/7/10년)",
        PROMPT_DISCOUNT_RATE => "할인율 (%)",
        PROMPT_MAINTENANCE_BEFORE => "현재 유지보수비율 (매출 대비 %)",
        PROMPT_MAINTENANCE_AFTER => "도입 후 유지보수비율 (매출 대비 %)",
        PROMPT_LABOR_BEFORE => "현재 노무비율 (매출 대비 %)",
        PROMPT_LABOR_AFTER => "도입 후 노무비율 (매출 대비 %)",
        PROMPT_DOWNTIME_BEFORE => "현재 가동중단 기간 [월]",
        PROMPT_DOWNTIME_AFTER => "도입 후 가동중단 기간 [월]",
        PROMPT_LINE_COUNT => "생산 라인 수 (1~10)",
        PROMPT_LINE_PRICE => "평균 판매 단가",
        PROMPT_LINE_COST => "평균 단위 원가",
        PROMPT_LINE_UNITS => "평균 생산량 [개/년]",
        LINE_LABEL => "라인",
        METRIC_PRODUCTION_VOLUME => "생산량",
        METRIC_AVERAGE_COST => "평균 원가",
        METRIC_AVERAGE_PRICE => "평균 단가",
        METRIC_DOWNTIME_REDUCTION => "가동중단 감소",
        METRIC_MAINTENANCE_COST => "유지보수비",
        METRIC_LABOR_COST => "노무비",
        RESULT_MARGINS_HEADING => "\n-- 마진 구성 --",
        RESULT_PROFIT => "이익",
        RESULT_REVENUE => "매출(이익 제외)",
        RESULT_SALES_ADMIN => "판매/관리비",
        RESULT_MFG_EXPENSE => "제조비용",
        RESULT_MATERIAL_COST => "재료비",
        RESULT_LABOR_COST => "노무비",
        RESULT_UNITS_HEADING => "\n-- 단위 원가 (도입 전 / 도입 후) --",
        RESULT_BEFORE_AFTER => "도입 전 / 도입 후",
        RESULT_UNITS_PER_YEAR => "연간 생산량",
        RESULT_UNITS_PER_DAY => "일 생산량",
        RESULT_COST_PER_UNIT => "단위당 제조원가",
        RESULT_MATERIAL_PER_UNIT => "단위당 재료비",
        RESULT_LABOR_PER_UNIT => "단위당 노무비",
        RESULT_FIXED_PER_UNIT => "단위당 고정비",
        RESULT_SAVINGS_PER_UNIT => "단위당 절감액",
        RESULT_LINES_HEADING => "\n-- 라인별 부가가치 --",
        RESULT_LINES_COLUMNS => "라인 | 단위이익 | 기존 생산량 | 신규 생산량 | 증가분 | 부가가치 | 기존 이익",
        RESULT_OPS_HEADING => "\n-- 운영 개선 절감 --",
        RESULT_OPS_MAINTENANCE => "유지보수비 (기존 / 신규 / 절감)",
        RESULT_OPS_LABOR => "노무비 (기존 / 신규 / 절감)",
        RESULT_OPS_TOTAL => "절감 합계",
        RESULT_OPS_DOWNTIME => "가동중단 감소 [월]",
        RESULT_BRIDGE_HEADING => "\n-- 이익 변화 --",
        RESULT_BASELINE_PROFIT => "도입 전 이익",
        RESULT_VALUE_ADDED => "생산 증대 부가가치",
        RESULT_OPS_SAVINGS => "운영 개선 절감",
        RESULT_RECURRING_COST => "연간 구독 비용",
        RESULT_PROFIT_AFTER => "도입 후 이익",
        RESULT_INCREMENTAL_PROFIT => "이익 증가분",
        RESULT_SCHEDULE_HEADING => "\n-- 연도별 현금흐름 --",
        RESULT_SCHEDULE_COLUMNS => "연도 | 현금흐름 | 누적 현금흐름 | NPV | ROI(%)",
        RESULT_SUMMARY_HEADING => "\n-- 투자 요약 --",
        RESULT_TOTAL_INVESTMENT => "총 투자비",
        RESULT_NET_BENEFIT => "연간 순편익",
        RESULT_FINAL_ROI => "ROI (%)",
        RESULT_FINAL_NPV => "NPV",
        RESULT_PAYBACK => "회수 연도",
        RESULT_PAYBACK_YEARS => "년차",
        RESULT_NOT_RECOVERED => "미회수",
        RESULT_ANNUAL_RETURN => "연간 수익률 (%)",
        RESULT_DISCOUNTED_ROI => "할인 ROI (%)",
        RESULT_SIMPLE_PAYBACK => "단순 회수기간",
        RESULT_MONTHS => "개월",
        RESULT_NOT_APPLICABLE => "해당 없음",
        RESULT_MODEL => "편익 모델",
        MODEL_VOLUME_SCALED => "생산량 규모 절감",
        MODEL_INCREMENTAL => "라인별 증가분 × 단위이익",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_MODEL => "현재 편익 모델:",
        SETTINGS_MODEL_OPTIONS => "1) 생산량 규모 절감  2) 라인별 증가분 × 단위이익",
        SETTINGS_PROMPT_MODEL => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_AMORTIZATION => "설비 상각 기간 [년]",
        SETTINGS_PROMPT_WORKING_DAYS => "연간 가동일수 [일]",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NEGATIVE => "0 이상의 값을 입력하세요.",
        ERROR_OUT_OF_RANGE => "허용 범위를 벗어났습니다.",
        ERROR_INVALID_SCENARIO => "시나리오 입력 오류:",
        ERROR_CALCULATION => "계산 오류:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        YES_NO_HINT => "(y/n)",
        MAIN_MENU_TITLE => "\n=== IIoT ROI Calculator ===",
        MAIN_MENU_SCENARIO => "1) Scenario inputs",
        MAIN_MENU_RESULTS => "2) Results",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        SCENARIO_HEADING => "\n-- Scenario Inputs --",
        SCENARIO_DEFAULT_HINT => "Press enter to keep the current value shown in [ ].",
        SCENARIO_SECTION_MARGINS => "[Revenue & Margins]",
        SCENARIO_SECTION_INVESTMENT => "[Capital & IIoT]",
        SCENARIO_SECTION_METRICS => "[Optional Metrics]",
        SCENARIO_SECTION_LINES => "[Production Lines]",
        SCENARIO_SAVED => "Scenario updated.",
        PROMPT_TURNOVER => "Annual turnover",
        PROMPT_PROFIT_MARGIN => "Profit margin (%)",
        PROMPT_SALES_ADMIN_MARGIN => "Sales & admin margin (%)",
        PROMPT_MATERIAL_MARGIN => "Material cost (%)",
        PROMPT_LABOR_MARGIN => "Labor cost (%)",
        PROMPT_UNITS_PER_YEAR => "Production units / year",
        PROMPT_CAPITAL_COST => "Capital cost",
        PROMPT_LICENSE_COST => "IIoT license cost",
        PROMPT_IMPLEMENTATION_COST => "Implementation cost",
        PROMPT_INCREASE_PCTS => "Production increase (%) (comma separated, up to 5)",
        PROMPT_ANNUAL_IIOT_COST => "Annual IIoT subscription cost",
        PROMPT_HORIZON => "Analysis period (3/5/7/10 years)",
        PROMPT_DISCOUNT_RATE => "Discount rate (%)",
        PROMPT_MAINTENANCE_BEFORE => "Current maintenance cost (% of revenue)",
        PROMPT_MAINTENANCE_AFTER => "Maintenance cost after IIoT (% of revenue)",
        PROMPT_LABOR_BEFORE => "Current labor cost (% of revenue)",
        PROMPT_LABOR_AFTER => "Labor cost after IIoT (% of revenue)",
        PROMPT_DOWNTIME_BEFORE => "Current downtime [months]",
        PROMPT_DOWNTIME_AFTER => "Downtime after IIoT [months]",
        PROMPT_LINE_COUNT => "Number of production lines (1-10)",
        PROMPT_LINE_PRICE => "Average unit price",
        PROMPT_LINE_COST => "Average unit cost",
        PROMPT_LINE_UNITS => "Average production units / year",
        LINE_LABEL => "Line",
        METRIC_PRODUCTION_VOLUME => "Production volume",
        METRIC_AVERAGE_COST => "Average cost",
        METRIC_AVERAGE_PRICE => "Average price",
        METRIC_DOWNTIME_REDUCTION => "Downtime reduction",
        METRIC_MAINTENANCE_COST => "Maintenance cost",
        METRIC_LABOR_COST => "Labor cost",
        RESULT_MARGINS_HEADING => "\n-- Margin Breakdown --",
        RESULT_PROFIT => "Profit",
        RESULT_REVENUE => "Revenue (excl. profit)",
        RESULT_SALES_ADMIN => "Sales & admin cost",
        RESULT_MFG_EXPENSE => "Manufacturing expense",
        RESULT_MATERIAL_COST => "Material cost",
        RESULT_LABOR_COST => "Labor cost",
        RESULT_UNITS_HEADING => "\n-- Unit Economics (before / after) --",
        RESULT_BEFORE_AFTER => "Before / After",
        RESULT_UNITS_PER_YEAR => "Units per year",
        RESULT_UNITS_PER_DAY => "Units per day",
        RESULT_COST_PER_UNIT => "Cost per unit",
        RESULT_MATERIAL_PER_UNIT => "Material per unit",
        RESULT_LABOR_PER_UNIT => "Labor per unit",
        RESULT_FIXED_PER_UNIT => "Fixed cost per unit",
        RESULT_SAVINGS_PER_UNIT => "Savings per unit",
        RESULT_LINES_HEADING => "\n-- Value Added per Line --",
        RESULT_LINES_COLUMNS => "Line | Unit profit | Old units | New units | Incremental | Value added | Old profit",
        RESULT_OPS_HEADING => "\n-- Operational Savings --",
        RESULT_OPS_MAINTENANCE => "Maintenance (old / new / saved)",
        RESULT_OPS_LABOR => "Labor (old / new / saved)",
        RESULT_OPS_TOTAL => "Total savings",
        RESULT_OPS_DOWNTIME => "Downtime reduced [months]",
        RESULT_BRIDGE_HEADING => "\n-- Profit Bridge --",
        RESULT_BASELINE_PROFIT => "Profit before IIoT",
        RESULT_VALUE_ADDED => "Production value added",
        RESULT_OPS_SAVINGS => "Operational savings",
        RESULT_RECURRING_COST => "Annual subscription",
        RESULT_PROFIT_AFTER => "Profit after IIoT",
        RESULT_INCREMENTAL_PROFIT => "Incremental profit",
        RESULT_SCHEDULE_HEADING => "\n-- Year-wise Cash Flow --",
        RESULT_SCHEDULE_COLUMNS => "Year | Cash flow | Cumulative | NPV | ROI(%)",
        RESULT_SUMMARY_HEADING => "\n-- Investment Summary --",
        RESULT_TOTAL_INVESTMENT => "Total investment",
        RESULT_NET_BENEFIT => "Net annual benefit",
        RESULT_FINAL_ROI => "ROI (%)",
        RESULT_FINAL_NPV => "NPV",
        RESULT_PAYBACK => "Payback year",
        RESULT_PAYBACK_YEARS => "year(s)",
        RESULT_NOT_RECOVERED => "Not recovered",
        RESULT_ANNUAL_RETURN => "Annual return (%)",
        RESULT_DISCOUNTED_ROI => "Discounted ROI (%)",
        RESULT_SIMPLE_PAYBACK => "Simple payback",
        RESULT_MONTHS => "months",
        RESULT_NOT_APPLICABLE => "n/a",
        RESULT_MODEL => "Benefit model",
        MODEL_VOLUME_SCALED => "Volume-scaled savings",
        MODEL_INCREMENTAL => "Incremental units × unit margin",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_MODEL => "Current benefit model:",
        SETTINGS_MODEL_OPTIONS => "1) Volume-scaled savings  2) Incremental units × unit margin",
        SETTINGS_PROMPT_MODEL => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_AMORTIZATION => "Capital amortization period [years]",
        SETTINGS_PROMPT_WORKING_DAYS => "Working days per year",
        SETTINGS_INVALID => "Invalid input; value unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NEGATIVE => "Please enter a value of 0 or more.",
        ERROR_OUT_OF_RANGE => "Value out of range.",
        ERROR_INVALID_SCENARIO => "Invalid scenario:",
        ERROR_CALCULATION => "Calculation error:",
        _ => return None,
    })
}
