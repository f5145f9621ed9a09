//! Daily macro calculation (Mifflin-St Jeor BMR, activity-scaled TDEE,
//! goal-adjusted calorie and protein targets).

/// Defaults used only when the caller explicitly asks for a forced
/// estimate with incomplete data.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 173.0;
pub const DEFAULT_AGE: f64 = 25.0;

/// A computed daily plan, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroPlan {
    pub bmr: f64,
    pub tdee: i64,
    pub target_calories: i64,
    pub protein_grams: i64,
    pub gender_label: &'static str,
    pub goal_label: &'static str,
    pub estimated: bool,
}

/// Cleans a loosely-typed numeric input.
///
/// The host may hand over anything: a bare number, `"70kg"`, `"173 cm"`,
/// or a stand-in token for "no value". The tokens `none`, `null`,
/// `unknown` and `nan` (any case) count as missing, unit suffixes are
/// stripped, and whatever remains must parse as a number.
pub fn clean_numeric(value: Option<&str>) -> Option<f64> {
    let raw = value?.trim().to_lowercase();
    if matches!(raw.as_str(), "" | "none" | "null" | "unknown" | "nan") {
        return None;
    }

    let stripped = raw.replace("kg", "").replace("cm", "");
    stripped.trim().parse::<f64>().ok()
}

/// Names of the required fields that are absent, in reporting order.
pub fn missing_fields(
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<f64>,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if weight.is_none() {
        missing.push("weight");
    }
    if height.is_none() {
        missing.push("height");
    }
    if age.is_none() {
        missing.push("age");
    }
    missing
}

/// Heights below 3 are meters; bring them to centimeters (1.73 -> 173).
pub fn normalize_height(height: f64) -> f64 {
    if height < 3.0 { height * 100.0 } else { height }
}

/// Mifflin-St Jeor basal metabolic rate.
///
/// Any gender string containing `F`/`f` selects the female constant (-161);
/// everything else gets the male one (+5).
pub fn basal_metabolic_rate(weight: f64, height: f64, age: f64, gender: &str) -> f64 {
    let base = (10.0 * weight) + (6.25 * height) - (5.0 * age);
    if gender.to_uppercase().contains('F') {
        base - 161.0
    } else {
        base + 5.0
    }
}

/// Activity multiplier for TDEE. Unrecognized levels fall back to light.
pub fn activity_multiplier(level: &str) -> f64 {
    match level.trim().to_lowercase().as_str() {
        "sedentary" => 1.2,
        "light" => 1.375,
        "moderate" => 1.55,
        "active" => 1.725,
        _ => 1.375,
    }
}

/// Computes the full plan from cleaned inputs.
///
/// Goal matching is substring-based, like the rest of the loose input
/// handling: a goal mentioning `cut` means fat loss (TDEE - 500, protein
/// 2.2 g/kg), `bulk` means muscle gain (TDEE + 300, protein 1.8 g/kg), and
/// anything else is treated as recomposition (TDEE, protein 2.0 g/kg).
pub fn compute_plan(
    weight: f64,
    height: f64,
    age: f64,
    gender: &str,
    activity_level: &str,
    goal: &str,
    estimated: bool,
) -> MacroPlan {
    let gender_label = if gender.to_uppercase().contains('F') {
        "female"
    } else {
        "male"
    };

    let height = normalize_height(height);
    let bmr = basal_metabolic_rate(weight, height, age, gender);
    let tdee = (bmr * activity_multiplier(activity_level)) as i64;

    let goal_lower = goal.to_lowercase();
    let (target_calories, protein_grams, goal_label) = if goal_lower.contains("cut") {
        (tdee - 500, (weight * 2.2) as i64, "Fat loss (cut)")
    } else if goal_lower.contains("bulk") {
        (tdee + 300, (weight * 1.8) as i64, "Muscle gain (bulk)")
    } else {
        (tdee, (weight * 2.0) as i64, "Body recomposition (recomp)")
    };

    MacroPlan {
        bmr,
        tdee,
        target_calories,
        protein_grams,
        gender_label,
        goal_label,
        estimated,
    }
}
