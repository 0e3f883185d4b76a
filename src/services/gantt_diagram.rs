use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::pert_task::PertSchedule;

#[derive(Error, Debug)]
pub enum GanttDiagramError {
    #[error("task {task} reaches day {days}, beyond the supported calendar")]
    DateOutOfRange { task: String, days: f64 },
}

/// Mermaid gantt chart placing every task at its earliest start. Critical
/// tasks carry the `crit` tag.
pub fn generate_gantt_diagram(
    schedule: &PertSchedule,
    start_date: NaiveDate,
) -> Result<String, GanttDiagramError> {
    let mut lines = Vec::new();
    lines.push("gantt".to_string());
    lines.push("    dateFormat  DD-MM-YYYY".to_string());

    for node in &schedule.nodes {
        let out_of_range = |days: f64| GanttDiagramError::DateOutOfRange {
            task: node.id.clone(),
            days,
        };
        let start = add_days(start_date, node.es).ok_or_else(|| out_of_range(node.es))?;
        let end = add_days(start_date, node.ef).ok_or_else(|| out_of_range(node.ef))?;
        let tags = if node.is_critical {
            format!("crit, {}", node.id)
        } else {
            node.id.clone()
        };
        lines.push(format!(
            "    {} {} :{tags}, {}, {}",
            node.id,
            node.task_name,
            start.format("%d-%m-%Y"),
            end.format("%d-%m-%Y")
        ));
    }

    Ok(lines.join("\n"))
}

fn add_days(start_date: NaiveDate, days: f64) -> Option<NaiveDate> {
    let days = days.ceil().max(0.0) as i64;
    start_date.checked_add_signed(chrono::Duration::try_days(days)?)
}
