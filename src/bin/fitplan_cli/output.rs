// ABOUTME: Text and JSON rendering helpers for the fitplan CLI
// ABOUTME: Formats assessments, schedules, allocations, and template listings for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::fmt::Write as _;

use fitplan::config::PlannerConfig;
use fitplan::intelligence::Allocation;
use fitplan::models::{
    CapacityAssessment, DayType, ExperienceLevel, Goal, ScheduleWarning, WeeklySchedule,
};
use serde::Serialize;
use serde_json::{json, Value};

/// One row of the `templates` listing
#[derive(Serialize)]
pub struct TemplateRow {
    goal: Goal,
    experience: ExperienceLevel,
    days: Vec<DayType>,
}

fn join_day_types(days: &[DayType]) -> String {
    days.iter()
        .map(DayType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_assessment(assessment: &CapacityAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "BMI {:.2} ({:?}), score {}, tier {}",
        assessment.bmi, assessment.bmi_category, assessment.capacity_score, assessment.capacity_tier
    );
    let _ = writeln!(
        out,
        "Intensity cap {}, HIIT {}",
        assessment.intensity_cap,
        if assessment.hiit_allowed { "allowed" } else { "not allowed" }
    );
    let _ = writeln!(
        out,
        "Up to {} workouts/week, {} rest day(s), sessions {}-{} min",
        assessment.max_workouts_per_week,
        assessment.mandatory_rest_days,
        assessment.session_duration.min_minutes,
        assessment.session_duration.max_minutes
    );
    out
}

fn describe_warning(warning: &ScheduleWarning) -> String {
    match warning {
        ScheduleWarning::EmptyPoolFallback {
            day,
            day_type,
            exercise_count,
        } => format!(
            "{day} {day_type}: no safe exercises, {exercise_count} re-sampled without the safety filter"
        ),
        ScheduleWarning::EmptySafeDay { day, day_type } => {
            format!("{day} {day_type}: no safe exercises, day left empty")
        }
        ScheduleWarning::AllocationConflict {
            day_type,
            placed_on: Some(day),
        } => format!("{day_type} placed on {day} in breach of the HIIT rules"),
        ScheduleWarning::AllocationConflict {
            day_type,
            placed_on: None,
        } => format!("{day_type} dropped, no free day left"),
    }
}

pub fn render_schedule(schedule: &WeeklySchedule) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} / {} (tier {}, cap {}, HIIT {})",
        schedule.goal,
        schedule.experience,
        schedule.assessment.capacity_tier,
        schedule.assessment.intensity_cap,
        if schedule.assessment.hiit_allowed { "on" } else { "off" }
    );
    let guide = schedule.guidelines;
    let _ = writeln!(
        out,
        "Strength guideline: {} x {}, rest {}-{} s",
        guide.sets, guide.reps, guide.rest.min_seconds, guide.rest.max_seconds
    );

    for plan in &schedule.days {
        let _ = writeln!(out, "\n{}  {}", plan.day, plan.day_type);
        for exercise in &plan.exercises {
            let _ = writeln!(out, "     - {:<28} {}", exercise.name, exercise.volume);
        }
    }

    if schedule.has_warnings() {
        let _ = writeln!(out, "\nWarnings:");
        for warning in &schedule.warnings {
            let _ = writeln!(out, "  - {}", describe_warning(warning));
        }
    }
    out
}

pub fn allocation_json(allocation: &Allocation) -> Value {
    json!({
        "days": allocation
            .days
            .iter()
            .map(|(day, day_type)| json!({ "day": day, "day_type": day_type }))
            .collect::<Vec<_>>(),
        "conflicts": allocation.conflicts,
        "hiit_count": allocation.hiit_count,
    })
}

pub fn render_allocation(allocation: &Allocation) -> String {
    let mut out = String::new();
    for (day, day_type) in &allocation.days {
        let _ = writeln!(out, "{day}  {day_type}");
    }
    for conflict in &allocation.conflicts {
        let _ = writeln!(out, "! {}", describe_warning(conflict));
    }
    out
}

pub fn template_listing(
    config: &PlannerConfig,
    goal: Option<Goal>,
    experience: Option<ExperienceLevel>,
) -> Vec<TemplateRow> {
    config
        .templates
        .iter()
        .filter(|(candidate, _)| goal.is_none_or(|wanted| wanted == **candidate))
        .flat_map(|(goal, by_level)| {
            by_level
                .iter()
                .filter(|(level, _)| experience.is_none_or(|wanted| wanted == **level))
                .map(|(level, days)| TemplateRow {
                    goal: *goal,
                    experience: *level,
                    days: days.clone(),
                })
        })
        .collect()
}

pub fn render_templates(rows: &[TemplateRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:<22} {:<13} {}",
            row.goal.as_str(),
            row.experience.as_str(),
            join_day_types(&row.days)
        );
    }
    out
}
