// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use conduit_core::{Pipeline, PipelineId, PipelineStatus, Step};

fn step(name: &str, image: &str, cmds: Vec<&str>, after: Vec<&str>) -> Step {
    Step::queued(
        name.to_string(),
        image.to_string(),
        cmds.into_iter().map(String::from).collect(),
        after.into_iter().map(String::from).collect(),
    )
}

fn pipeline(name: &str, steps: Vec<Step>) -> Pipeline {
    Pipeline {
        id: PipelineId::new(0),
        name: name.to_string(),
        steps,
        status: PipelineStatus::Queued,
    }
}

#[test]
fn accepts_a_single_valid_step() {
    let p = pipeline("p", vec![step("a", "ubuntu:14.04", vec!["ls -la"], vec![])]);
    assert!(validate(&p).is_ok());
}

#[test]
fn accepts_a_linear_chain() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("b", "ubuntu:14.04", vec!["ls"], vec!["a"]),
            step("c", "ubuntu:14.04", vec!["ls"], vec!["b"]),
        ],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn accepts_a_diamond() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("b", "ubuntu:14.04", vec!["ls"], vec![]),
            step("c", "ubuntu:14.04", vec!["ls"], vec!["a", "b"]),
        ],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn rejects_missing_pipeline_name() {
    let p = pipeline("", vec![step("a", "ubuntu:14.04", vec!["ls"], vec![])]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingPipelineName));
}

#[test]
fn rejects_no_steps() {
    let p = pipeline("p", vec![]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::NoSteps));
}

#[test]
fn rejects_missing_step_name() {
    let p = pipeline("p", vec![step("", "ubuntu:14.04", vec!["ls"], vec![])]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingStepName));
}

#[test]
fn rejects_missing_image_name() {
    let p = pipeline("p", vec![step("a", "", vec!["ls"], vec![])]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingImageName));
}

#[test]
fn rejects_empty_command_list() {
    let p = pipeline("p", vec![step("a", "ubuntu:14.04", vec![], vec![])]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingCommands));
}

#[test]
fn rejects_empty_command_string() {
    let p = pipeline("p", vec![step("a", "ubuntu:14.04", vec![""], vec![])]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingCommands));
}

#[test]
fn rejects_non_unique_step_names() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
        ],
    );
    assert_eq!(validate(&p), Err(ValidationErrorKind::NonUniqueStepNames));
}

#[test]
fn rejects_dependency_on_nonexistent_step() {
    let p = pipeline(
        "p",
        vec![step("a", "ubuntu:14.04", vec!["ls"], vec!["ghost"])],
    );
    assert_eq!(
        validate(&p),
        Err(ValidationErrorKind::NonExistentStepDependency)
    );
}

#[test]
fn rejects_self_loop() {
    let p = pipeline(
        "p",
        vec![step("a", "ubuntu:14.04", vec!["ls"], vec!["a"])],
    );
    assert_eq!(validate(&p), Err(ValidationErrorKind::CircularStepDependency));
}

#[test]
fn rejects_two_step_cycle() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec!["b"]),
            step("b", "ubuntu:14.04", vec!["ls"], vec!["a"]),
        ],
    );
    assert_eq!(validate(&p), Err(ValidationErrorKind::CircularStepDependency));
}

#[test]
fn rejects_cycle_in_a_disjoint_second_component() {
    // a -> b is fine; c <-> d (in a separate component) cycles.
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("b", "ubuntu:14.04", vec!["ls"], vec!["a"]),
            step("c", "ubuntu:14.04", vec!["ls"], vec!["d"]),
            step("d", "ubuntu:14.04", vec!["ls"], vec!["c"]),
        ],
    );
    assert_eq!(validate(&p), Err(ValidationErrorKind::CircularStepDependency));
}

#[test]
fn accepts_disjoint_acyclic_components() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("b", "ubuntu:14.04", vec!["ls"], vec!["a"]),
            step("c", "ubuntu:14.04", vec!["ls"], vec![]),
            step("d", "ubuntu:14.04", vec!["ls"], vec!["c"]),
        ],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn checks_run_in_fixed_order_missing_name_wins_over_no_commands() {
    // A pipeline with no name AND no steps must report the name error first.
    let p = pipeline("", vec![]);
    assert_eq!(validate(&p), Err(ValidationErrorKind::MissingPipelineName));
}

#[test]
fn validation_is_deterministic() {
    let p = pipeline(
        "p",
        vec![
            step("a", "ubuntu:14.04", vec!["ls"], vec![]),
            step("b", "ubuntu:14.04", vec!["ls"], vec!["a"]),
        ],
    );
    assert_eq!(validate(&p), validate(&p));

    let bad = pipeline("p", vec![step("a", "ubuntu:14.04", vec!["ls"], vec!["a"])]);
    assert_eq!(validate(&bad), validate(&bad));
}
