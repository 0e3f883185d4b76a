use std::io;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::pert_task::{PertSchedule, PertTask};
use crate::services::gantt_diagram::{GanttDiagramError, generate_gantt_diagram};

#[derive(Error, Debug)]
pub enum NetworkDiagramError {
    #[error("failed to write diagram: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Gantt(#[from] GanttDiagramError),
}

/// Writes the activity-on-node flowchart and the gantt timeline to one
/// Markdown file.
pub fn write_schedule_markdown(
    output_path: &str,
    tasks: &[PertTask],
    schedule: &PertSchedule,
    start_date: NaiveDate,
) -> Result<(), NetworkDiagramError> {
    let markdown = generate_schedule_markdown(tasks, schedule, start_date)?;
    std::fs::write(output_path, markdown)?;
    Ok(())
}

pub fn generate_schedule_markdown(
    tasks: &[PertTask],
    schedule: &PertSchedule,
    start_date: NaiveDate,
) -> Result<String, GanttDiagramError> {
    let diagram = generate_flow_diagram(tasks, schedule);
    let gantt = generate_gantt_diagram(schedule, start_date)?;
    Ok(format!(
        "# PERT Network\n```mermaid\n{diagram}\n```\n\nTotal duration: {:.2} days\n\nCritical path: {}\n\n## Timeline\n```mermaid\n{gantt}\n```\n",
        schedule.total_duration,
        schedule.critical_path.join(" → ")
    ))
}

/// Activity-on-node flowchart. Each node shows ES/EF, LS/LF and slack;
/// critical nodes are highlighted.
pub fn generate_flow_diagram(tasks: &[PertTask], schedule: &PertSchedule) -> String {
    let mut lines = Vec::new();
    lines.push("flowchart LR".to_string());

    for node in &schedule.nodes {
        lines.push(format!(
            "    {id}[\"{id}: {name}<br/>ES {es:.2} | EF {ef:.2}<br/>LS {ls:.2} | LF {lf:.2}<br/>Slack {slack:.2}\"]",
            id = node.id,
            name = escape_label(&node.task_name),
            es = node.es,
            ef = node.ef,
            ls = node.ls,
            lf = node.lf,
            slack = node.slack,
        ));
    }

    for task in tasks {
        for dep in &task.dependencies {
            lines.push(format!("    {dep} --> {}", task.id));
        }
    }

    if !schedule.critical_path.is_empty() {
        lines.push("    classDef critical stroke:#dc2626,stroke-width:3px".to_string());
        lines.push(format!("    class {} critical", schedule.critical_path.join(",")));
    }

    lines.join("\n")
}

fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;")
}
