use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::economics::{BenefitModel, Payback, ScenarioResult};
use crate::i18n::{keys, Translator};
use crate::scenario::{
    AnalysisHorizon, Metric, ProductionLine, ScenarioInputs, MAX_LINES, MAX_PRODUCTION_INCREASES,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Scenario,
    Results,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SCENARIO));
    println!("{}", tr.t(keys::MAIN_MENU_RESULTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Scenario),
            "2" => return Ok(MenuChoice::Results),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시나리오 입력 메뉴를 처리한다. 검증을 통과한 경우에만 현재 시나리오를 교체한다.
pub fn handle_scenario(tr: &Translator, scenario: &mut ScenarioInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCENARIO_HEADING));
    println!("{}", tr.t(keys::SCENARIO_DEFAULT_HINT));
    let mut next = scenario.clone();

    println!("{}", tr.t(keys::SCENARIO_SECTION_MARGINS));
    next.turnover = read_non_negative(tr, keys::PROMPT_TURNOVER, next.turnover)?;
    next.profit_margin_pct =
        read_non_negative(tr, keys::PROMPT_PROFIT_MARGIN, next.profit_margin_pct)?;
    next.sales_admin_margin_pct =
        read_non_negative(tr, keys::PROMPT_SALES_ADMIN_MARGIN, next.sales_admin_margin_pct)?;
    next.material_margin_pct =
        read_non_negative(tr, keys::PROMPT_MATERIAL_MARGIN, next.material_margin_pct)?;
    next.labor_margin_pct =
        read_non_negative(tr, keys::PROMPT_LABOR_MARGIN, next.labor_margin_pct)?;
    next.units_per_year = read_f64_in(
        tr,
        keys::PROMPT_UNITS_PER_YEAR,
        next.units_per_year,
        1.0,
        f64::INFINITY,
    )?;

    println!("{}", tr.t(keys::SCENARIO_SECTION_INVESTMENT));
    next.capital_cost = read_non_negative(tr, keys::PROMPT_CAPITAL_COST, next.capital_cost)?;
    next.license_cost = read_non_negative(tr, keys::PROMPT_LICENSE_COST, next.license_cost)?;
    next.implementation_cost =
        read_non_negative(tr, keys::PROMPT_IMPLEMENTATION_COST, next.implementation_cost)?;
    next.production_increase_pcts = read_increase_pcts(tr, &next.production_increase_pcts)?;
    next.annual_iiot_cost =
        read_non_negative(tr, keys::PROMPT_ANNUAL_IIOT_COST, next.annual_iiot_cost)?;
    next.horizon = read_horizon(tr, next.horizon)?;
    next.discount_rate_pct =
        read_non_negative(tr, keys::PROMPT_DISCOUNT_RATE, next.discount_rate_pct)?;

    println!("{}", tr.t(keys::SCENARIO_SECTION_METRICS));
    for metric in Metric::ALL {
        let current = next.enabled_metrics.contains(metric);
        if read_yes_no(tr, metric_key(metric), current)? {
            next.enabled_metrics.enable(metric);
        } else {
            next.enabled_metrics.disable(metric);
        }
    }
    read_operational(tr, &mut next)?;
    read_lines(tr, &mut next)?;

    match next.validate() {
        Ok(()) => {
            *scenario = next;
            println!("{}", tr.t(keys::SCENARIO_SAVED));
        }
        Err(e) => println!("{} {e}", tr.t(keys::ERROR_INVALID_SCENARIO)),
    }
    Ok(())
}

fn read_operational(tr: &Translator, next: &mut ScenarioInputs) -> Result<(), AppError> {
    let ops = &mut next.operational;
    if next.enabled_metrics.contains(Metric::DowntimeReduction) {
        ops.downtime_before_months =
            read_non_negative(tr, keys::PROMPT_DOWNTIME_BEFORE, ops.downtime_before_months)?;
        ops.downtime_after_months =
            read_non_negative(tr, keys::PROMPT_DOWNTIME_AFTER, ops.downtime_after_months)?;
    }
    if next.enabled_metrics.contains(Metric::MaintenanceCost) {
        ops.maintenance_before_pct =
            read_non_negative(tr, keys::PROMPT_MAINTENANCE_BEFORE, ops.maintenance_before_pct)?;
        ops.maintenance_after_pct =
            read_non_negative(tr, keys::PROMPT_MAINTENANCE_AFTER, ops.maintenance_after_pct)?;
    }
    if next.enabled_metrics.contains(Metric::LaborCost) {
        ops.labor_before_pct =
            read_non_negative(tr, keys::PROMPT_LABOR_BEFORE, ops.labor_before_pct)?;
        ops.labor_after_pct =
            read_non_negative(tr, keys::PROMPT_LABOR_AFTER, ops.labor_after_pct)?;
    }
    Ok(())
}

fn read_lines(tr: &Translator, next: &mut ScenarioInputs) -> Result<(), AppError> {
    let metrics = &next.enabled_metrics;
    let per_line = [
        Metric::AveragePrice,
        Metric::AverageCost,
        Metric::ProductionVolume,
    ];
    if !per_line.iter().any(|&m| metrics.contains(m)) {
        return Ok(());
    }
    println!("{}", tr.t(keys::SCENARIO_SECTION_LINES));
    let count = read_f64_in(
        tr,
        keys::PROMPT_LINE_COUNT,
        next.lines.len() as f64,
        1.0,
        MAX_LINES as f64,
    )? as usize;
    next.lines.resize(count, ProductionLine::default());
    for (idx, line) in next.lines.iter_mut().enumerate() {
        println!("{} {}", tr.t(keys::LINE_LABEL), idx + 1);
        if metrics.contains(Metric::AveragePrice) {
            line.avg_unit_price =
                read_non_negative(tr, keys::PROMPT_LINE_PRICE, line.avg_unit_price)?;
        }
        if metrics.contains(Metric::AverageCost) {
            line.avg_unit_cost = read_non_negative(tr, keys::PROMPT_LINE_COST, line.avg_unit_cost)?;
        }
        if metrics.contains(Metric::ProductionVolume) {
            line.units = read_non_negative(tr, keys::PROMPT_LINE_UNITS, line.units)?;
        }
    }
    Ok(())
}

fn metric_key(metric: Metric) -> &'static str {
    match metric {
        Metric::ProductionVolume => keys::METRIC_PRODUCTION_VOLUME,
        Metric::AverageCost => keys::METRIC_AVERAGE_COST,
        Metric::AveragePrice => keys::METRIC_AVERAGE_PRICE,
        Metric::DowntimeReduction => keys::METRIC_DOWNTIME_REDUCTION,
        Metric::MaintenanceCost => keys::METRIC_MAINTENANCE_COST,
        Metric::LaborCost => keys::METRIC_LABOR_COST,
    }
}

fn model_key(model: BenefitModel) -> &'static str {
    match model {
        BenefitModel::VolumeScaledSavings => keys::MODEL_VOLUME_SCALED,
        BenefitModel::IncrementalUnitMargin => keys::MODEL_INCREMENTAL,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MODEL),
        tr.t(model_key(cfg.model.benefit_model))
    );
    println!("{}", tr.t(keys::SETTINGS_MODEL_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_MODEL))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.set_benefit_model(BenefitModel::VolumeScaledSavings),
        "2" => cfg.set_benefit_model(BenefitModel::IncrementalUnitMargin),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    cfg.model.amortization_years = read_f64_in(
        tr,
        keys::SETTINGS_PROMPT_AMORTIZATION,
        cfg.model.amortization_years,
        f64::MIN_POSITIVE,
        f64::INFINITY,
    )?;
    cfg.model.working_days_per_year = read_f64_in(
        tr,
        keys::SETTINGS_PROMPT_WORKING_DAYS,
        cfg.model.working_days_per_year,
        1.0,
        366.0,
    )?;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 평가 결과 전체를 표 형태로 출력한다.
pub fn print_result(tr: &Translator, result: &ScenarioResult) {
    println!(
        "\n{}: {}",
        tr.t(keys::RESULT_MODEL),
        tr.t(model_key(result.benefit_model))
    );

    let m = &result.margins;
    println!("{}", tr.t(keys::RESULT_MARGINS_HEADING));
    print_row(tr, keys::RESULT_PROFIT, m.profit);
    print_row(tr, keys::RESULT_REVENUE, m.revenue);
    print_row(tr, keys::RESULT_SALES_ADMIN, m.sales_admin_cost);
    print_row(tr, keys::RESULT_MFG_EXPENSE, m.mfg_expense);
    print_row(tr, keys::RESULT_MATERIAL_COST, m.material_cost);
    print_row(tr, keys::RESULT_LABOR_COST, m.labor_cost);

    let b = &result.before;
    let a = result.after.as_ref().map(|post| &post.unit);
    println!("{}", tr.t(keys::RESULT_UNITS_HEADING));
    println!("{:<32} {:>31}", "", tr.t(keys::RESULT_BEFORE_AFTER));
    print_pair(tr, keys::RESULT_UNITS_PER_YEAR, b.volume, a.map(|u| u.volume));
    print_pair(
        tr,
        keys::RESULT_UNITS_PER_DAY,
        result.daily_output_before,
        Some(result.daily_output_after),
    );
    print_pair(
        tr,
        keys::RESULT_COST_PER_UNIT,
        b.cost_per_unit,
        a.map(|u| u.cost_per_unit),
    );
    print_pair(
        tr,
        keys::RESULT_MATERIAL_PER_UNIT,
        b.material_per_unit,
        a.map(|u| u.material_per_unit),
    );
    print_pair(
        tr,
        keys::RESULT_LABOR_PER_UNIT,
        b.labor_per_unit,
        a.map(|u| u.labor_per_unit),
    );
    print_pair(
        tr,
        keys::RESULT_FIXED_PER_UNIT,
        b.fixed_per_unit,
        a.map(|u| u.fixed_per_unit),
    );
    if let Some(post) = &result.after {
        print_row(tr, keys::RESULT_SAVINGS_PER_UNIT, post.per_unit_savings);
    }

    if !result.lines.is_empty() {
        println!("{}", tr.t(keys::RESULT_LINES_HEADING));
        println!("{}", tr.t(keys::RESULT_LINES_COLUMNS));
        for l in &result.lines {
            println!(
                "{:>4} | {:>10.2} | {:>10.0} | {:>10.0} | {:>10.0} | {:>12.0} | {:>12.0}",
                l.line,
                l.unit_profit,
                l.old_units,
                l.new_units,
                l.incremental_units,
                l.value_added,
                l.old_profit
            );
        }
    }

    let ops = &result.operational;
    println!("{}", tr.t(keys::RESULT_OPS_HEADING));
    println!(
        "{:<32} {:>14.2} / {:>14.2} / {:>14.2}",
        tr.t(keys::RESULT_OPS_MAINTENANCE),
        ops.old_maintenance,
        ops.new_maintenance,
        ops.maintenance_benefit
    );
    println!(
        "{:<32} {:>14.2} / {:>14.2} / {:>14.2}",
        tr.t(keys::RESULT_OPS_LABOR),
        ops.old_labor,
        ops.new_labor,
        ops.labor_benefit
    );
    print_row(tr, keys::RESULT_OPS_TOTAL, ops.total);
    print_row(tr, keys::RESULT_OPS_DOWNTIME, ops.downtime_months_saved);

    let bridge = &result.bridge;
    println!("{}", tr.t(keys::RESULT_BRIDGE_HEADING));
    print_row(tr, keys::RESULT_BASELINE_PROFIT, bridge.baseline_profit);
    print_row(tr, keys::RESULT_VALUE_ADDED, bridge.value_added);
    print_row(tr, keys::RESULT_OPS_SAVINGS, bridge.operational_savings);
    print_row(tr, keys::RESULT_RECURRING_COST, -bridge.recurring_cost);
    print_row(tr, keys::RESULT_PROFIT_AFTER, bridge.profit_after);
    print_row(tr, keys::RESULT_INCREMENTAL_PROFIT, bridge.incremental_profit());

    println!("{}", tr.t(keys::RESULT_SCHEDULE_HEADING));
    println!("{}", tr.t(keys::RESULT_SCHEDULE_COLUMNS));
    for row in result.schedule.iter() {
        println!(
            "{:>4} | {:>14.2} | {:>14.2} | {:>14.2} | {:>8.1}",
            row.year, row.cash_flow, row.cumulative, row.npv, row.roi_pct
        );
    }

    let s = &result.summary;
    println!("{}", tr.t(keys::RESULT_SUMMARY_HEADING));
    print_row(tr, keys::RESULT_TOTAL_INVESTMENT, s.total_investment);
    print_row(tr, keys::RESULT_NET_BENEFIT, s.net_annual_benefit);
    print_row(tr, keys::RESULT_FINAL_ROI, s.final_roi_pct);
    print_row(tr, keys::RESULT_FINAL_NPV, s.final_npv);
    let payback = match s.payback {
        Payback::RecoveredIn(year) => format!("{year} {}", tr.t(keys::RESULT_PAYBACK_YEARS)),
        Payback::NotRecovered => tr.t(keys::RESULT_NOT_RECOVERED).to_string(),
    };
    println!("{:<32} {:>14}", tr.t(keys::RESULT_PAYBACK), payback);
    print_row(tr, keys::RESULT_ANNUAL_RETURN, s.annual_return_pct);
    print_row(tr, keys::RESULT_DISCOUNTED_ROI, s.discounted_roi_pct);
    let simple = match s.simple_payback_months() {
        Some(months) => format!("{months:.1} {}", tr.t(keys::RESULT_MONTHS)),
        None => tr.t(keys::RESULT_NOT_APPLICABLE).to_string(),
    };
    println!("{:<32} {:>14}", tr.t(keys::RESULT_SIMPLE_PAYBACK), simple);
}

fn print_row(tr: &Translator, key: &str, value: f64) {
    println!("{:<32} {:>14.2}", tr.t(key), value);
}

/// 도입 후 값이 없으면 "-"로 표시한다.
fn print_pair(tr: &Translator, key: &str, before: f64, after: Option<f64>) {
    let after = after.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
    println!("{:<32} {:>14.2} / {:>14}", tr.t(key), before, after);
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 빈 입력이면 현재 값을 유지하고, inf/NaN이거나 범위를 벗어나면 다시 묻는다.
fn read_f64_in(
    tr: &Translator,
    key: &str,
    current: f64,
    min: f64,
    max: f64,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{current}]: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) if !v.is_finite() => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
            Ok(v) if v >= min && v <= max => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_non_negative(tr: &Translator, key: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let v = read_f64_in(tr, key, current, f64::NEG_INFINITY, f64::INFINITY)?;
        if v >= 0.0 {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_NEGATIVE));
    }
}

fn read_yes_no(tr: &Translator, key: &str, current: bool) -> Result<bool, AppError> {
    let shown = if current { "y" } else { "n" };
    loop {
        let s = read_line(&format!(
            "{} {} [{shown}]: ",
            tr.t(key),
            tr.t(keys::YES_NO_HINT)
        ))?;
        match s.trim().to_lowercase().as_str() {
            "" => return Ok(current),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_increase_pcts(tr: &Translator, current: &[f64]) -> Result<Vec<f64>, AppError> {
    let shown = current
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    loop {
        let s = read_line(&format!("{} [{shown}]: ", tr.t(keys::PROMPT_INCREASE_PCTS)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current.to_vec());
        }
        match parse_increase_pcts(s) {
            Some(pcts) => return Ok(pcts),
            None => println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE)),
        }
    }
}

/// "10, 5.5" 형태의 입력을 생산 증대율 목록으로 파싱한다. 각 값은 [-100, 100].
pub fn parse_increase_pcts(src: &str) -> Option<Vec<f64>> {
    let pcts = src
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let count_ok = !pcts.is_empty() && pcts.len() <= MAX_PRODUCTION_INCREASES;
    let range_ok = pcts.iter().all(|p| (-100.0..=100.0).contains(p));
    (count_ok && range_ok).then_some(pcts)
}

fn read_horizon(tr: &Translator, current: AnalysisHorizon) -> Result<AnalysisHorizon, AppError> {
    loop {
        let s = read_line(&format!("{} [{}]: ", tr.t(keys::PROMPT_HORIZON), current.years()))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<u32>().ok().map(AnalysisHorizon::try_from) {
            Some(Ok(horizon)) => return Ok(horizon),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
