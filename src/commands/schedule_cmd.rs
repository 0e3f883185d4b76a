use std::io;

use chrono::NaiveDate;
use tracing::debug;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_schedule_report;
use crate::services::network_diagram::write_schedule_markdown;
use crate::services::pert_network::{order_tasks, sample_tasks, solve_pert_network};
use crate::services::pert_yaml::{
    load_tasks_from_yaml_file, serialize_schedule_to_yaml, serialize_tasks_to_yaml,
};

pub fn schedule_command(cmd: Commands) {
    if let Commands::Schedule {
        input,
        output,
        export_tasks,
        start_date,
        sample,
    } = cmd
    {
        let start_date = match NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                eprintln!("Failed to parse start date: {e:?}");
                return;
            }
        };

        let tasks = match (input, sample) {
            (_, true) => sample_tasks(),
            (Some(input), false) => match load_tasks_from_yaml_file(&input) {
                Ok(tasks) => tasks,
                Err(e) => {
                    eprintln!("Failed to load tasks: {e:?}");
                    return;
                }
            },
            (None, false) => {
                eprintln!("Failed to load tasks: no input file given");
                return;
            }
        };

        let tasks = match order_tasks(&tasks) {
            Ok(ordered) => ordered,
            Err(e) => {
                eprintln!("Failed to order tasks: {e:?}");
                return;
            }
        };
        debug!(tasks = tasks.len(), "solving task network");

        let schedule = solve_pert_network(&tasks);
        println!("{}", format_schedule_report(&schedule));

        if let Some(export_path) = export_tasks {
            let written = write_buffered(&export_path, |buffer| {
                serialize_tasks_to_yaml(buffer, &tasks)
            });
            if let Err(e) = written {
                eprintln!("Failed to export tasks: {e:?}");
            } else {
                println!("Tasks written to {export_path}");
            }
        }

        if is_yaml_path(&output) {
            let written = write_buffered(&output, |buffer| {
                serialize_schedule_to_yaml(buffer, &schedule)
            });
            if let Err(e) = written {
                eprintln!("Failed to write schedule: {e:?}");
            } else {
                println!("Schedule written to {output}");
            }
        } else if let Err(e) = write_schedule_markdown(&output, &tasks, &schedule, start_date) {
            eprintln!("Failed to write schedule diagram: {e:?}");
        } else {
            println!("Schedule diagram written to {output}");
        }
    }
}

fn write_buffered<F>(path: &str, serialize: F) -> io::Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buffer = Vec::new();
    serialize(&mut buffer)?;
    std::fs::write(path, buffer)
}

fn is_yaml_path(path: &str) -> bool {
    path.ends_with(".yaml") || path.ends_with(".yml")
}
