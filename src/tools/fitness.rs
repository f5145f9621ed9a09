//! Fitness tool operations.
//!
//! The `SYSTEM_NOTE:` / `SYSTEM_INSTRUCTION:` blocks in these replies are
//! steering text addressed to the calling language model. They are opaque
//! trailing payload as far as this crate is concerned, never control flow.

use chrono::Local;

use crate::{
    fitness::{calculator, gym, schedule},
    types::UserIdentity,
};

const ROUTINE_TRAILER: &str = "SYSTEM_NOTE: Display the routine above directly. \
Do NOT end by asking for the user's weight, height or age; those are already confirmed.";

const SCHEDULE_TRAILER: &str = "SYSTEM_NOTE: Present the schedule above to the user as-is. \
The user's body metrics are already known; do NOT ask for weight, height or age again.";

/// Calculates BMR, TDEE and daily macro targets from loosely-typed inputs.
///
/// When any of weight/height/age is missing and `force_estimate` is false,
/// the reply is an instruction block telling the model to ask the user
/// instead of a numeric estimate. With `force_estimate` the gaps are
/// filled from the documented defaults and the reply is tagged as
/// estimated.
pub fn calculate_daily_macros(
    weight_kg: Option<&str>,
    height_cm: Option<&str>,
    age: Option<&str>,
    gender: &str,
    activity_level: &str,
    goal: &str,
    force_estimate: bool,
) -> String {
    let weight = calculator::clean_numeric(weight_kg);
    let height = calculator::clean_numeric(height_cm);
    let age = calculator::clean_numeric(age);

    let missing = calculator::missing_fields(weight, height, age);
    if !missing.is_empty() && !force_estimate {
        let fields = missing.join(", ");
        return format!(
            "SYSTEM_INSTRUCTION:\n\
             Missing required data: {fields}.\n\
             Do not assume values on your own.\n\
             Reply to the user: \"To calculate your daily targets, please tell me your {fields}.\""
        );
    }

    let plan = calculator::compute_plan(
        weight.unwrap_or(calculator::DEFAULT_WEIGHT_KG),
        height.unwrap_or(calculator::DEFAULT_HEIGHT_CM),
        age.unwrap_or(calculator::DEFAULT_AGE),
        gender,
        activity_level,
        goal,
        force_estimate && !missing.is_empty(),
    );

    let estimate_tag = if plan.estimated {
        " (estimated from defaults 70kg/173cm/25y)"
    } else {
        ""
    };

    format!(
        "Daily macro targets ({gender}){tag}\n\
         -----------------------------------\n\
         Basal metabolic rate (BMR): {bmr} kcal\n\
         Total daily energy expenditure (TDEE): {tdee} kcal\n\
         Current goal: {goal}\n\
         \n\
         Recommended daily intake:\n\
         - Calories: {calories} kcal\n\
         - Protein: {protein} g\n\
         - Carbs and fats: fill the remaining calories freely; aim for 40-50% carbs",
        gender = plan.gender_label,
        tag = estimate_tag,
        bmr = plan.bmr as i64,
        tdee = plan.tdee,
        goal = plan.goal_label,
        calories = plan.target_calories,
        protein = plan.protein_grams,
    )
}

/// Returns a weekly training structure for the requested frequency.
pub fn weekly_workout_schedule(goal: &str, days_per_week: u32) -> String {
    let split = schedule::weekly_split(days_per_week);

    format!(
        "Suggested weekly structure for your goal ({goal}) and frequency:\n\
         {split}\n\
         Ask me for detailed exercises for a specific body part (chest, back, ...) any time!\n\
         \n\
         {trailer}",
        goal = goal,
        split = split,
        trailer = SCHEDULE_TRAILER,
    )
}

/// Returns detailed routines for the body parts mentioned in the query.
pub fn body_part_routine(target_parts: &str) -> String {
    let matched = schedule::routines_for(target_parts);
    if matched.is_empty() {
        return "Sorry, detailed routines only exist for chest, back, legs, shoulders, arms \
                and core. Which body part would you like to train?"
            .to_string();
    }

    let mut result = String::from("Detailed routines for the requested body parts:\n\n");
    for routine in matched {
        result.push_str(routine);
        result.push_str("\n\n");
    }
    result.push_str(ROUTINE_TRAILER);
    result
}

/// Scrapes the fitness-center announcements page and wraps its text with
/// today's date and an interpretation instruction for the model.
pub async fn gym_schedule() -> String {
    let content = match gym::fetch_schedule_text().await {
        Ok(content) => content,
        Err(e) => return format!("Error fetching gym schedule: {}", e),
    };

    let today = Local::now().format("%A, %B %d, %Y");
    format!(
        "System info:\n\
         Today is: {today}\n\
         \n\
         Gym page content:\n\
         {content}\n\
         \n\
         SYSTEM_INSTRUCTION:\n\
         Use today's weekday together with the semester/vacation/holiday rules in the page \
         content to determine today's actual opening hours. If the page marks today as a \
         maintenance day or public holiday, call that out explicitly."
    )
}

/// Formats the caller-supplied identity fields into a single line.
pub fn user_identity(user: &UserIdentity) -> String {
    let mut result = String::new();
    if let Some(name) = &user.name {
        result.push_str(&format!("User: {}", name));
    }
    if let Some(id) = &user.id {
        result.push_str(&format!(" (ID: {})", id));
    }
    if let Some(email) = &user.email {
        result.push_str(&format!(" (Email: {})", email));
    }

    if result.is_empty() {
        result = "User: Unknown".to_string();
    }
    result
}

/// Reports the current local date and time in a human-readable format.
pub fn current_time() -> String {
    let now = Local::now();
    format!(
        "Current Date and Time = {}, {}",
        now.format("%A, %B %d, %Y"),
        now.format("%I:%M:%S %p")
    )
}
