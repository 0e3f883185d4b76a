use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;
use tracing::debug;

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::pert_task::{PertNode, PertSchedule, PertTask};

/// Slack below this is treated as zero.
pub const CRITICAL_SLACK_TOLERANCE: f64 = 0.01;

#[derive(Error, Debug, PartialEq)]
pub enum PertNetworkError {
    #[error("duplicate task id {0}")]
    DuplicateTask(String),
    #[error("dependency {dependency} not found for task {task}")]
    UnknownDependency { task: String, dependency: String },
    #[error("dependency graph has a cycle through task {0}")]
    CyclicDependencies(String),
}

/// Critical path method over tasks given in dependency order.
///
/// Each task must appear after all of its dependencies. The input is not
/// reordered or validated here; dependencies that have not been scheduled
/// yet when a task is reached are ignored. Use [`order_tasks`] first for
/// input of unknown order.
pub fn solve_pert_network(tasks: &[PertTask]) -> PertSchedule {
    let mut earliest_finish: HashMap<&str, f64> = HashMap::new();
    let mut forward = Vec::with_capacity(tasks.len());

    for task in tasks {
        let es = task
            .dependencies
            .iter()
            .filter_map(|dep| earliest_finish.get(dep.as_str()))
            .fold(0.0_f64, |acc, value| acc.max(*value));
        let ef = es + task.expected_time();
        earliest_finish.insert(task.id.as_str(), ef);
        forward.push((es, ef));
    }

    let total_duration = forward.iter().fold(0.0_f64, |acc, (_, ef)| acc.max(*ef));
    debug!(tasks = tasks.len(), total_duration, "forward pass complete");

    let mut latest_start: HashMap<&str, f64> = HashMap::new();
    let mut backward = vec![(0.0_f64, 0.0_f64); tasks.len()];

    for (idx, task) in tasks.iter().enumerate().rev() {
        let lf = tasks
            .iter()
            .filter(|other| other.dependencies.iter().any(|dep| *dep == task.id))
            .filter_map(|dependent| latest_start.get(dependent.id.as_str()))
            .fold(None, |acc: Option<f64>, value| {
                Some(acc.map_or(*value, |current| current.min(*value)))
            })
            .unwrap_or(total_duration);
        let ls = lf - task.expected_time();
        latest_start.insert(task.id.as_str(), ls);
        backward[idx] = (ls, lf);
    }

    let nodes: Vec<PertNode> = tasks
        .iter()
        .zip(forward)
        .zip(backward)
        .map(|((task, (es, ef)), (ls, lf))| {
            let slack = ls - es;
            PertNode {
                id: task.id.clone(),
                task_name: task.task_name.clone(),
                duration: task.expected_time(),
                es,
                ef,
                ls,
                lf,
                slack,
                is_critical: slack.abs() < CRITICAL_SLACK_TOLERANCE,
            }
        })
        .collect();

    let critical_path: Vec<String> = nodes
        .iter()
        .filter(|node| node.is_critical)
        .map(|node| node.id.clone())
        .collect();
    let critical_path_variance = tasks
        .iter()
        .zip(&nodes)
        .filter(|(_, node)| node.is_critical)
        .map(|(task, _)| task.variance())
        .sum();

    PertSchedule {
        nodes,
        total_duration,
        critical_path,
        critical_path_variance,
    }
}

/// Returns the tasks in an order where every task follows its dependencies.
/// Input order is kept wherever dependencies allow it.
pub fn order_tasks(tasks: &[PertTask]) -> Result<Vec<PertTask>, PertNetworkError> {
    let mut graph: DiGraph<usize, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for (position, task) in tasks.iter().enumerate() {
        if indices.contains_key(task.id.as_str()) {
            return Err(PertNetworkError::DuplicateTask(task.id.clone()));
        }
        indices.insert(task.id.as_str(), graph.add_node(position));
    }

    for task in tasks {
        let task_idx = indices[task.id.as_str()];
        for dep in &task.dependencies {
            let dep_idx = match indices.get(dep.as_str()) {
                Some(idx) => *idx,
                None => {
                    return Err(PertNetworkError::UnknownDependency {
                        task: task.id.clone(),
                        dependency: dep.clone(),
                    });
                }
            };
            graph.add_edge(dep_idx, task_idx, ());
        }
    }

    toposort(&graph, None).map_err(|cycle| {
        PertNetworkError::CyclicDependencies(tasks[graph[cycle.node_id()]].id.clone())
    })?;

    // Kahn's algorithm, always releasing the earliest ready task in input order.
    let mut pending: Vec<usize> = graph
        .node_indices()
        .map(|idx| graph.neighbors_directed(idx, Direction::Incoming).count())
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = graph
        .node_indices()
        .filter(|idx| pending[idx.index()] == 0)
        .map(|idx| Reverse(graph[idx]))
        .collect();

    let mut ordered = Vec::with_capacity(tasks.len());
    while let Some(Reverse(position)) = ready.pop() {
        ordered.push(tasks[position].clone());
        for next in graph.neighbors_directed(NodeIndex::new(position), Direction::Outgoing) {
            pending[next.index()] -= 1;
            if pending[next.index()] == 0 {
                ready.push(Reverse(graph[next]));
            }
        }
    }

    Ok(ordered)
}

/// Five-phase linear project: requirements, design, development, testing,
/// deployment.
pub fn sample_tasks() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "Requirements Analysis", ThreePointEstimate::new(3.0, 5.0, 8.0), &[]),
        PertTask::new("B", "System Design", ThreePointEstimate::new(5.0, 7.0, 10.0), &["A"]),
        PertTask::new("C", "Development", ThreePointEstimate::new(10.0, 18.0, 25.0), &["B"]),
        PertTask::new("D", "Testing", ThreePointEstimate::new(5.0, 8.0, 12.0), &["C"]),
        PertTask::new("E", "Deployment", ThreePointEstimate::new(2.0, 4.0, 6.0), &["D"]),
    ]
}
