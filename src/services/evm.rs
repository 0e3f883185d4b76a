use crate::domain::evm::{EvmData, EvmMetrics, HealthRating, PerformanceStatus, Trend};
use crate::services::rounding::round_half_up;

/// Cost variance below this (in USD) is reported as at risk.
const VARIANCE_WARNING_FLOOR: f64 = -50_000.0;

/// Derives the earned value indices. Any ratio with a zero denominator is 0.
pub fn calculate_evm_metrics(data: &EvmData) -> EvmMetrics {
    let cpi = ratio(data.ev, data.ac);
    let spi = ratio(data.ev, data.pv);
    let eac = ratio(data.bac, cpi);

    EvmMetrics {
        cpi,
        spi,
        cv: data.ev - data.ac,
        sv: data.ev - data.pv,
        eac,
        vac: data.bac - eac,
        percent_complete: ratio(data.ev, data.bac) * 100.0,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// 0..=100 score; each index contributes up to 50 points.
pub fn health_score(cpi: f64, spi: f64) -> f64 {
    let cpi_score = (cpi * 50.0).min(50.0);
    let spi_score = (spi * 50.0).min(50.0);
    round_half_up(cpi_score + spi_score)
}

pub fn health_rating(score: f64) -> HealthRating {
    if score >= 80.0 {
        HealthRating::Excellent
    } else if score >= 60.0 {
        HealthRating::RequiresAttention
    } else {
        HealthRating::Critical
    }
}

/// One-line summaries of budget, schedule and forecast position. Ratios
/// are printed as-is, so an index above 1 reads as a negative overrun.
pub fn key_findings(metrics: &EvmMetrics) -> Vec<String> {
    vec![
        format!(
            "Project is {:.1}% over budget with {} overrun",
            (1.0 - metrics.cpi) * 100.0,
            format_currency(metrics.cv.abs())
        ),
        format!("Schedule delayed by {:.1}%", (1.0 - metrics.spi) * 100.0),
        format!(
            "Forecasts {} budget overrun at completion",
            format_currency(metrics.vac.abs())
        ),
        format!("{:.0}% complete", metrics.percent_complete),
    ]
}

pub fn performance_status(index: f64) -> PerformanceStatus {
    if index >= 1.0 {
        PerformanceStatus::OnTrack
    } else if index >= 0.9 {
        PerformanceStatus::Warning
    } else {
        PerformanceStatus::AtRisk
    }
}

pub fn variance_status(variance: f64) -> PerformanceStatus {
    if variance >= 0.0 {
        PerformanceStatus::OnTrack
    } else if variance >= VARIANCE_WARNING_FLOOR {
        PerformanceStatus::Warning
    } else {
        PerformanceStatus::AtRisk
    }
}

pub fn trend(index: f64) -> Trend {
    if index >= 1.0 { Trend::Up } else { Trend::Down }
}

/// Whole US dollars with thousands separators, e.g. `-$54,545`.
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, "$")
}

/// Like [`format_currency`] with a caller-chosen symbol.
pub fn format_currency_with(value: f64, symbol: &str) -> String {
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && whole > 0 {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_for_default_project() {
        let metrics = calculate_evm_metrics(&EvmData::default());

        assert!((metrics.cpi - 0.9483).abs() < 1e-4);
        assert!((metrics.spi - 0.9167).abs() < 1e-4);
        assert_eq!(metrics.cv, -30_000.0);
        assert_eq!(metrics.sv, -50_000.0);
        assert!((metrics.eac - 1_054_545.45).abs() < 0.01);
        assert!((metrics.vac + 54_545.45).abs() < 0.01);
        assert!((metrics.percent_complete - 55.0).abs() < 1e-9);
    }

    #[test]
    fn zero_denominators_yield_zero() {
        let metrics = calculate_evm_metrics(&EvmData {
            bac: 0.0,
            pv: 0.0,
            ev: 100.0,
            ac: 0.0,
        });
        assert_eq!(metrics.cpi, 0.0);
        assert_eq!(metrics.spi, 0.0);
        assert_eq!(metrics.eac, 0.0);
        assert_eq!(metrics.vac, 0.0);
        assert_eq!(metrics.percent_complete, 0.0);
        assert_eq!(metrics.cv, 100.0);
    }

    #[test]
    fn health_score_caps_each_index() {
        assert_eq!(health_score(1.5, 2.0), 100.0);
        assert_eq!(health_score(0.9483, 0.9167), 93.0);
        assert_eq!(health_score(0.0, 0.0), 0.0);
    }

    #[test]
    fn health_rating_bands() {
        assert_eq!(health_rating(100.0), HealthRating::Excellent);
        assert_eq!(health_rating(80.0), HealthRating::Excellent);
        assert_eq!(health_rating(79.0), HealthRating::RequiresAttention);
        assert_eq!(health_rating(60.0), HealthRating::RequiresAttention);
        assert_eq!(health_rating(59.0), HealthRating::Critical);
        assert_eq!(HealthRating::RequiresAttention.label(), "Requires Attention");
    }

    #[test]
    fn key_findings_for_default_project() {
        let findings = key_findings(&calculate_evm_metrics(&EvmData::default()));
        assert_eq!(
            findings,
            vec![
                "Project is 5.2% over budget with $30,000 overrun".to_string(),
                "Schedule delayed by 8.3%".to_string(),
                "Forecasts $54,545 budget overrun at completion".to_string(),
                "55% complete".to_string(),
            ]
        );
    }

    #[test]
    fn statuses_use_index_thresholds() {
        assert_eq!(performance_status(1.0), PerformanceStatus::OnTrack);
        assert_eq!(performance_status(0.95), PerformanceStatus::Warning);
        assert_eq!(performance_status(0.89), PerformanceStatus::AtRisk);
        assert_eq!(variance_status(0.0), PerformanceStatus::OnTrack);
        assert_eq!(variance_status(-50_000.0), PerformanceStatus::Warning);
        assert_eq!(variance_status(-50_001.0), PerformanceStatus::AtRisk);
        assert_eq!(trend(1.0), Trend::Up);
        assert_eq!(trend(0.99), Trend::Down);
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(1_054_545.45), "$1,054,545");
        assert_eq!(format_currency(-54_545.45), "-$54,545");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(123.0), "$123");
        assert_eq!(format_currency(-0.2), "$0");
        assert_eq!(format_currency_with(-7_200.0, "€"), "-€7,200");
    }

    #[test]
    fn format_decimal_uses_fixed_places() {
        assert_eq!(format_decimal(0.948275862, 3), "0.948");
        assert_eq!(format_decimal(55.0, 1), "55.0");
    }
}
