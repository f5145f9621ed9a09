//! Static workout split and routine tables.

const FULL_BODY_SPLIT: &str = "\
Weekly 3-day full body split:
- Day 1: Full body A (squat + push + pull)
- Day 2: Rest
- Day 3: Full body B (deadlift + push + pull)
- Day 4: Rest
- Day 5: Full body C (legs + core + cardio)
- Day 6, 7: Rest";

const UPPER_LOWER_SPLIT: &str = "\
Weekly 4-day upper/lower split:
- Day 1: Upper body (chest, back, shoulders)
- Day 2: Lower body (legs, glutes)
- Day 3: Rest
- Day 4: Upper body (arm detail work)
- Day 5: Lower body (power/endurance)
- Day 6, 7: Rest";

const PPL_SPLIT: &str = "\
Weekly 5-6 day push/pull/legs split:
- Day 1: Push (chest, shoulders, triceps)
- Day 2: Pull (back, biceps)
- Day 3: Legs
- Day 4: Rest
- Day 5: Upper body mix
- Day 6: Legs + core
- Day 7: Rest";

/// Picks the split table for the requested training frequency:
/// 3 or fewer days full body, exactly 4 upper/lower, 5+ push/pull/legs.
pub fn weekly_split(days_per_week: u32) -> &'static str {
    if days_per_week <= 3 {
        FULL_BODY_SPLIT
    } else if days_per_week == 4 {
        UPPER_LOWER_SPLIT
    } else {
        PPL_SPLIT
    }
}

const CHEST_ROUTINE: &str = "\
Chest routine:
1. Bench press: 4x8-12
2. Incline press: 3x10-12
3. Cable fly: 3x15
4. Push-ups: 3x to failure";

const BACK_ROUTINE: &str = "\
Back routine:
1. Pull-ups / lat pulldown: 4x8-12
2. Rows: 4x8-12
3. Face pulls: 3x15
4. Straight-arm pulldown: 3x15";

const SHOULDER_ROUTINE: &str = "\
Shoulder routine:
1. Overhead press: 4x8-12
2. Lateral raises: 4x15-20
3. Rear delt fly: 3x15
4. Shrugs: 3x12";

const LEG_ROUTINE: &str = "\
Leg routine:
1. Squats: 4x6-10
2. Deadlift / RDL: 3x10-12
3. Leg press: 3x12-15
4. Lunges: 3x12";

const ARM_ROUTINE: &str = "\
Arm routine:
1. Biceps curls: 3x12
2. Hammer curls: 3x12
3. Triceps pushdown: 3x15
4. French press: 3x12";

const CORE_ROUTINE: &str = "\
Core routine:
1. Hanging leg raises: 3x12
2. Plank: 3x60s
3. Russian twists: 3x20";

/// Matches body-part keywords in the query against the routine tables.
/// Multiple parts can match at once; the order is fixed (chest, back,
/// shoulders, legs, arms, core).
pub fn routines_for(query: &str) -> Vec<&'static str> {
    let q = query.to_lowercase();
    let mut matched = Vec::new();

    if q.contains("chest") || q.contains("push") || q.contains("bench") {
        matched.push(CHEST_ROUTINE);
    }
    if q.contains("back") || q.contains("pull") || q.contains("row") {
        matched.push(BACK_ROUTINE);
    }
    if q.contains("shoulder") || q.contains("delt") {
        matched.push(SHOULDER_ROUTINE);
    }
    if q.contains("leg") || q.contains("squat") || q.contains("glute") {
        matched.push(LEG_ROUTINE);
    }
    if q.contains("arm") || q.contains("bicep") || q.contains("tricep") {
        matched.push(ARM_ROUTINE);
    }
    if q.contains("abs") || q.contains("core") || q.contains("ab ") || q == "ab" {
        matched.push(CORE_ROUTINE);
    }

    matched
}
