use agent_toolbox::fitness::calculator::*;
use agent_toolbox::fitness::gym::{SCHEDULE_TEXT_LIMIT, extract_schedule_text};
use agent_toolbox::fitness::schedule::{routines_for, weekly_split};
use agent_toolbox::tools::fitness::*;
use agent_toolbox::types::UserIdentity;

#[test]
fn test_clean_numeric() {
    assert_eq!(clean_numeric(Some("70")), Some(70.0));
    assert_eq!(clean_numeric(Some("70kg")), Some(70.0));
    assert_eq!(clean_numeric(Some(" 173 cm ")), Some(173.0));
    assert_eq!(clean_numeric(Some("1.73")), Some(1.73));

    // Stand-in tokens for "no value" count as missing
    assert_eq!(clean_numeric(Some("none")), None);
    assert_eq!(clean_numeric(Some("NULL")), None);
    assert_eq!(clean_numeric(Some("Unknown")), None);
    assert_eq!(clean_numeric(Some("NaN")), None);
    assert_eq!(clean_numeric(Some("")), None);
    assert_eq!(clean_numeric(Some("abc")), None);
    assert_eq!(clean_numeric(None), None);
}

#[test]
fn test_missing_fields_reporting_order() {
    assert_eq!(missing_fields(None, None, None), vec!["weight", "height", "age"]);
    assert_eq!(missing_fields(Some(70.0), None, Some(25.0)), vec!["height"]);
    assert!(missing_fields(Some(70.0), Some(173.0), Some(25.0)).is_empty());
}

#[test]
fn test_normalize_height_meters_to_cm() {
    // Regression case: 1.73 m is treated as 173 cm
    assert_eq!(normalize_height(1.73), 173.0);
    assert_eq!(normalize_height(173.0), 173.0);
    assert_eq!(normalize_height(2.99), 299.0);
    assert_eq!(normalize_height(3.0), 3.0);
}

#[test]
fn test_bmr_formulas() {
    // Female: 10w + 6.25h - 5a - 161
    let female = basal_metabolic_rate(60.0, 165.0, 30.0, "F");
    assert_eq!(female, 600.0 + 1031.25 - 150.0 - 161.0);

    // Any other gender value gets the male constant: 10w + 6.25h - 5a + 5
    let male = basal_metabolic_rate(60.0, 165.0, 30.0, "M");
    assert_eq!(male, 600.0 + 1031.25 - 150.0 + 5.0);

    let unspecified = basal_metabolic_rate(60.0, 165.0, 30.0, "x");
    assert_eq!(unspecified, male);

    // Substring matching: "female" selects the female formula
    assert_eq!(basal_metabolic_rate(60.0, 165.0, 30.0, "female"), female);
}

#[test]
fn test_activity_multipliers() {
    assert_eq!(activity_multiplier("sedentary"), 1.2);
    assert_eq!(activity_multiplier("light"), 1.375);
    assert_eq!(activity_multiplier("moderate"), 1.55);
    assert_eq!(activity_multiplier("active"), 1.725);

    // Unrecognized levels fall back to light
    assert_eq!(activity_multiplier("couch"), 1.375);
    assert_eq!(activity_multiplier("ACTIVE"), 1.725);
}

#[test]
fn test_compute_plan_goal_adjustments() {
    let cut = compute_plan(70.0, 173.0, 25.0, "M", "light", "cut", false);
    assert_eq!(cut.target_calories, cut.tdee - 500);
    assert_eq!(cut.protein_grams, (70.0f64 * 2.2) as i64);
    assert_eq!(cut.goal_label, "Fat loss (cut)");

    let bulk = compute_plan(70.0, 173.0, 25.0, "M", "light", "bulk", false);
    assert_eq!(bulk.target_calories, bulk.tdee + 300);
    assert_eq!(bulk.protein_grams, (70.0f64 * 1.8) as i64);

    let recomp = compute_plan(70.0, 173.0, 25.0, "M", "light", "whatever", false);
    assert_eq!(recomp.target_calories, recomp.tdee);
    assert_eq!(recomp.protein_grams, 140);
    assert_eq!(recomp.goal_label, "Body recomposition (recomp)");
}

#[test]
fn test_compute_plan_tdee() {
    // BMR(70, 173, 25, M) = 700 + 1081.25 - 125 + 5 = 1661.25
    let plan = compute_plan(70.0, 173.0, 25.0, "M", "light", "recomp", false);
    assert_eq!(plan.bmr, 1661.25);
    assert_eq!(plan.tdee, (1661.25f64 * 1.375) as i64);
}

#[test]
fn test_macros_missing_fields_asks_instead_of_estimating() {
    // With force_estimate off, missing data must produce the ask-the-user
    // instruction and never a numeric estimate.
    let reply = calculate_daily_macros(None, Some("173"), Some("25"), "M", "light", "cut", false);

    assert!(reply.starts_with("SYSTEM_INSTRUCTION:"));
    assert!(reply.contains("weight"));
    assert!(!reply.contains("BMR"));
    assert!(!reply.contains("kcal"));

    // All fields missing lists all three names
    let reply = calculate_daily_macros(None, None, None, "M", "light", "cut", false);
    assert!(reply.contains("weight, height, age"));
}

#[test]
fn test_macros_force_estimate_uses_defaults() {
    let reply = calculate_daily_macros(None, None, None, "M", "light", "recomp", true);

    assert!(reply.contains("estimated from defaults"));
    // BMR from 70/173/25 male
    assert!(reply.contains("Basal metabolic rate (BMR): 1661 kcal"));
}

#[test]
fn test_macros_meter_height_end_to_end() {
    let from_meters =
        calculate_daily_macros(Some("70"), Some("1.73"), Some("25"), "M", "light", "cut", false);
    let from_cm =
        calculate_daily_macros(Some("70"), Some("173"), Some("25"), "M", "light", "cut", false);

    assert_eq!(from_meters, from_cm);
}

#[test]
fn test_macros_complete_inputs_have_no_estimate_tag() {
    let reply =
        calculate_daily_macros(Some("70kg"), Some("173cm"), Some("25"), "F", "active", "bulk", false);

    assert!(!reply.contains("estimated from defaults"));
    assert!(reply.contains("female"));
    assert!(reply.contains("Muscle gain (bulk)"));
}

#[test]
fn test_weekly_split_selection() {
    assert!(weekly_split(2).contains("full body"));
    assert!(weekly_split(3).contains("full body"));
    assert!(weekly_split(4).contains("upper/lower"));
    assert!(weekly_split(5).contains("push/pull/legs"));
    assert!(weekly_split(6).contains("push/pull/legs"));
}

#[test]
fn test_weekly_workout_schedule_trailer() {
    let reply = weekly_workout_schedule("build_muscle", 4);

    assert!(reply.contains("upper/lower"));
    // The steering note is opaque trailing text, always appended
    assert!(reply.contains("SYSTEM_NOTE:"));
    assert!(reply.contains("do NOT ask for weight, height or age"));
}

#[test]
fn test_routines_for_keyword_matching() {
    let matched = routines_for("chest and back please");
    assert_eq!(matched.len(), 2);
    assert!(matched[0].contains("Bench press"));
    assert!(matched[1].contains("Rows"));

    assert!(routines_for("juggling").is_empty());
}

#[test]
fn test_body_part_routine_output() {
    let reply = body_part_routine("legs");
    assert!(reply.contains("Squats"));
    assert!(reply.contains("SYSTEM_NOTE:"));

    // Unknown part: ask which part to train, no trailer
    let reply = body_part_routine("cardio");
    assert!(reply.contains("Which body part"));
    assert!(!reply.contains("SYSTEM_NOTE:"));
}

#[test]
fn test_user_identity_formatting() {
    let full = UserIdentity {
        name: Some("Alex".to_string()),
        id: Some("u-1".to_string()),
        email: Some("alex@example.com".to_string()),
    };
    assert_eq!(
        user_identity(&full),
        "User: Alex (ID: u-1) (Email: alex@example.com)"
    );

    let partial = UserIdentity {
        name: Some("Alex".to_string()),
        id: None,
        email: None,
    };
    assert_eq!(user_identity(&partial), "User: Alex");

    assert_eq!(user_identity(&UserIdentity::default()), "User: Unknown");
}

#[test]
fn test_current_time_shape() {
    let reply = current_time();
    assert!(reply.starts_with("Current Date and Time = "));
    assert!(reply.contains("M")); // AM or PM marker
}

#[test]
fn test_extract_schedule_text_prefers_content_container() {
    let html = r#"<html><body>
        <div class="mcont">
            <script>var tracking = 1;</script>
            <style>.x { color: red; }</style>
            <p>Opening hours</p>
            <p>Mon-Fri 08:00-22:00</p>
        </div>
        <p>site footer</p>
    </body></html>"#;

    let text = extract_schedule_text(html);

    assert!(text.contains("Opening hours"));
    assert!(text.contains("Mon-Fri 08:00-22:00"));
    // Script/style payloads and content outside the container are excluded
    assert!(!text.contains("tracking"));
    assert!(!text.contains("color: red"));
    assert!(!text.contains("site footer"));
}

#[test]
fn test_extract_schedule_text_falls_back_to_body() {
    let html = "<html><body><p>Announcements</p><p>Closed on holidays</p></body></html>";
    let text = extract_schedule_text(html);

    assert!(text.contains("Announcements"));
    assert!(text.contains("Closed on holidays"));
}

#[test]
fn test_extract_schedule_text_truncates() {
    let long_paragraph = "x".repeat(SCHEDULE_TEXT_LIMIT * 2);
    let html = format!("<html><body><p>{}</p></body></html>", long_paragraph);

    let text = extract_schedule_text(&html);
    assert_eq!(text.chars().count(), SCHEDULE_TEXT_LIMIT);
}
