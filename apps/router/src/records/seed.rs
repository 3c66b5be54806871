use crate::models::hr::{HierarchyRecord, SalaryRecord, ScheduleRecord, ROLE_LEVELS};

/// The three tables served by the records backend. Immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct RecordTables {
    pub salaries: Vec<SalaryRecord>,
    pub hierarchy: Vec<HierarchyRecord>,
    pub schedules: Vec<ScheduleRecord>,
}

impl RecordTables {
    pub fn seeded() -> Self {
        Self {
            salaries: seed_salaries(),
            hierarchy: seed_hierarchy(),
            schedules: seed_schedules(),
        }
    }
}

// (employee_id, base_salary, bonus_eligible)
const SALARIES: &[(u32, f64, bool)] = &[
    (1, 95_000.0, true),
    (2, 105_000.0, true),
    (3, 115_000.0, true),
    (4, 85_000.0, false),
    (5, 98_000.0, true),
    (6, 72_000.0, false),
    (7, 88_000.0, true),
    (8, 82_000.0, false),
    (9, 68_000.0, false),
    (10, 65_000.0, true),
    (11, 48_000.0, false),
    (12, 78_000.0, false),
    (13, 125_000.0, true),
    (14, 118_000.0, true),
    (15, 62_000.0, false),
    (16, 90_000.0, false),
    (17, 58_000.0, false),
    (18, 102_000.0, true),
    (19, 97_000.0, true),
    (20, 70_000.0, false),
    (21, 76_000.0, false),
    (22, 135_000.0, true),
    (23, 92_000.0, false),
    (24, 110_000.0, true),
    (25, 87_000.0, false),
    (26, 128_000.0, true),
    (27, 99_000.0, true),
    (28, 103_000.0, true),
    (29, 71_000.0, false),
    (30, 80_000.0, false),
    (31, 350_000.0, true),
    (32, 280_000.0, true),
    (33, 270_000.0, true),
    (34, 265_000.0, true),
    (35, 255_000.0, true),
    (36, 210_000.0, true),
    (37, 195_000.0, true),
    (38, 190_000.0, true),
    (39, 165_000.0, true),
    (40, 160_000.0, true),
];

const MON_FRI: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const TUE_SAT: &[&str] = &["Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const SUN_THU: &[&str] = &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];
const MON_THU: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday"];

// (employee_id, work_days, start_time, end_time, timezone, shift_type)
type ScheduleRow = (u32, &'static [&'static str], &'static str, &'static str, &'static str, &'static str);

const SCHEDULES: &[ScheduleRow] = &[
    (1, MON_FRI, "09:00", "17:00", "America/New_York", "Day"),
    (2, MON_FRI, "08:30", "16:30", "America/Toronto", "Day"),
    (3, MON_FRI, "09:00", "17:30", "Europe/London", "Day"),
    (4, MON_THU, "08:00", "18:00", "Australia/Sydney", "Compressed"),
    (5, TUE_SAT, "14:00", "22:00", "Europe/Berlin", "Evening"),
    (6, MON_FRI, "09:30", "17:30", "Europe/Paris", "Day"),
    (7, MON_FRI, "09:00", "18:00", "Asia/Tokyo", "Day"),
    (8, MON_FRI, "08:00", "16:00", "America/Sao_Paulo", "Day"),
    (9, MON_FRI, "10:00", "18:00", "Asia/Kolkata", "Flexible"),
    (10, TUE_SAT, "09:00", "17:00", "Asia/Seoul", "Day"),
    (11, TUE_SAT, "16:00", "00:00", "America/Mexico_City", "Evening"),
    (12, MON_FRI, "09:00", "17:00", "Europe/Madrid", "Day"),
    (13, MON_FRI, "09:00", "17:00", "Europe/Rome", "Day"),
    (14, MON_FRI, "10:00", "18:00", "Europe/Amsterdam", "Flexible"),
    (15, MON_FRI, "08:30", "16:30", "Europe/Stockholm", "Day"),
    (16, SUN_THU, "22:00", "06:00", "Europe/Dublin", "Night"),
    (17, MON_THU, "09:00", "19:00", "Pacific/Auckland", "Compressed"),
    (18, MON_FRI, "08:00", "17:00", "Asia/Singapore", "Day"),
    (19, MON_FRI, "09:00", "17:00", "America/Argentina/Buenos_Aires", "Day"),
    (20, MON_FRI, "08:00", "16:00", "Europe/Zurich", "Day"),
    (21, TUE_SAT, "12:00", "20:00", "Europe/Lisbon", "Evening"),
    (22, MON_FRI, "09:00", "17:00", "America/Santiago", "Flexible"),
    (23, MON_FRI, "09:00", "17:00", "Europe/Brussels", "Day"),
    (24, SUN_THU, "23:00", "07:00", "Europe/Oslo", "Night"),
    (25, MON_FRI, "09:00", "17:00", "Europe/Copenhagen", "Day"),
    (26, MON_FRI, "10:00", "18:00", "Europe/Helsinki", "Flexible"),
    (27, MON_FRI, "09:00", "18:00", "Asia/Shanghai", "Day"),
    (28, MON_FRI, "09:00", "18:00", "Europe/Moscow", "Day"),
    (29, SUN_THU, "09:00", "17:00", "Africa/Cairo", "Day"),
    (30, MON_FRI, "08:00", "16:30", "Africa/Johannesburg", "Day"),
    (31, MON_FRI, "07:30", "18:30", "America/New_York", "Executive"),
    (32, MON_FRI, "08:00", "18:00", "America/Toronto", "Executive"),
    (33, MON_FRI, "08:00", "18:00", "Europe/London", "Executive"),
    (34, MON_FRI, "08:00", "18:00", "Europe/Berlin", "Executive"),
    (35, MON_FRI, "08:30", "18:00", "Europe/Paris", "Executive"),
    (36, MON_FRI, "09:00", "18:00", "Asia/Tokyo", "Day"),
    (37, MON_FRI, "08:00", "17:00", "America/Sao_Paulo", "Day"),
    (38, MON_FRI, "09:30", "18:30", "Asia/Kolkata", "Day"),
    (39, MON_FRI, "09:00", "18:00", "Asia/Seoul", "Day"),
    (40, MON_FRI, "09:00", "17:00", "Europe/Madrid", "Day"),
];

fn seed_salaries() -> Vec<SalaryRecord> {
    SALARIES
        .iter()
        .map(|&(employee_id, base_salary, bonus_eligible)| SalaryRecord {
            employee_id,
            base_salary,
            currency: "USD".to_string(),
            bonus_eligible,
        })
        .collect()
}

fn seed_hierarchy() -> Vec<HierarchyRecord> {
    ROLE_LEVELS
        .iter()
        .map(|&(role, level, reports_to)| HierarchyRecord {
            job_role: role.to_string(),
            level,
            reports_to: reports_to.map(str::to_string),
        })
        .collect()
}

fn seed_schedules() -> Vec<ScheduleRecord> {
    SCHEDULES
        .iter()
        .map(|&(employee_id, days, start, end, timezone, shift)| ScheduleRecord {
            employee_id,
            work_days: days.iter().map(|d| d.to_string()).collect(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            timezone: timezone.to_string(),
            shift_type: shift.to_string(),
        })
        .collect()
}
