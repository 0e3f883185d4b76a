use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::pert_task::{PertSchedule, PertTask};

#[derive(Error, Debug)]
pub enum PertYamlError {
    #[error("failed to read task yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse task yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing task id")]
    MissingTaskId,
    #[error("invalid estimate for task {0}: expected optimistic <= most_likely <= pessimistic")]
    InvalidEstimate(String),
}

#[derive(Serialize, Deserialize)]
struct TaskFileRecord {
    tasks: Vec<TaskRecord>,
}

#[derive(Serialize, Deserialize)]
struct TaskRecord {
    id: String,
    name: Option<String>,
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
    dependencies: Option<Vec<String>>,
}

pub fn load_tasks_from_yaml_file(path: &str) -> Result<Vec<PertTask>, PertYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_tasks_from_yaml_str(&contents)
}

pub fn deserialize_tasks_from_yaml_str(input: &str) -> Result<Vec<PertTask>, PertYamlError> {
    let record: TaskFileRecord = serde_yaml::from_str(input)?;
    let mut tasks = Vec::with_capacity(record.tasks.len());

    for task_record in record.tasks {
        if task_record.id.trim().is_empty() {
            return Err(PertYamlError::MissingTaskId);
        }

        let estimate = ThreePointEstimate::new(
            task_record.optimistic,
            task_record.most_likely,
            task_record.pessimistic,
        );
        if !estimate.is_ordered() {
            return Err(PertYamlError::InvalidEstimate(task_record.id));
        }

        let name = task_record.name.unwrap_or_else(|| task_record.id.clone());
        let mut task = PertTask::new(&task_record.id, &name, estimate, &[]);
        task.dependencies = task_record.dependencies.unwrap_or_default();
        tasks.push(task);
    }

    Ok(tasks)
}

pub fn serialize_tasks_to_yaml<W: Write>(writer: &mut W, tasks: &[PertTask]) -> io::Result<()> {
    let record = TaskFileRecord {
        tasks: tasks
            .iter()
            .map(|task| {
                let estimate = task.estimate();
                TaskRecord {
                    id: task.id.clone(),
                    name: Some(task.task_name.clone()),
                    optimistic: estimate.optimistic,
                    most_likely: estimate.most_likely,
                    pessimistic: estimate.pessimistic,
                    dependencies: Some(task.dependencies.clone()),
                }
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn serialize_schedule_to_yaml<W: Write>(
    writer: &mut W,
    schedule: &PertSchedule,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(schedule).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
