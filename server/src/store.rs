//! In-memory application store.
//!
//! Plain maps behind a `parking_lot::RwLock`; every handler takes the lock
//! for the duration of its read or write and clones what it returns.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use platform_authz::Role;
use serde::{Deserialize, Serialize};

pub type SharedStore = Arc<RwLock<Directory>>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Scheduled,
    Cancelled,
    Completed,
}

/// A single scheduled meeting of a group for a subject, run by one teacher.
/// The teacher id is the ownership reference the guards compare against.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassSession {
    pub id: String,
    pub subject: String,
    pub group: String,
    pub teacher_id: String,
    pub starts_at: DateTime<Utc>,
    pub status: ClassStatus,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AttendanceRecord {
    pub class_id: String,
    pub student_id: String,
    pub status: AttendanceStatus,
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
}

/// Per-student aggregation over all attendance records. The rate counts
/// present and late marks as attended.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StudentStats {
    pub student_id: String,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    pub attendance_rate: f64,
}

impl StudentStats {
    fn tally(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Excused => self.excused += 1,
        }
    }

    fn finish(&mut self) {
        let total = self.present + self.absent + self.late + self.excused;
        if total > 0 {
            self.attendance_rate = (self.present + self.late) as f64 / total as f64;
        }
    }
}

#[derive(Default)]
pub struct Directory {
    pub users: HashMap<String, User>,
    pub classes: HashMap<String, ClassSession>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Directory {
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::default()))
    }

    /// Replace the attendance sheet for one class wholesale.
    pub fn replace_sheet(&mut self, class_id: &str, records: Vec<AttendanceRecord>) {
        self.attendance.retain(|record| record.class_id != class_id);
        self.attendance.extend(records);
    }

    pub fn records_for_student(&self, student_id: &str) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|record| record.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Marks recorded for a class that was cancelled afterwards are kept in
    /// the record list but excluded from statistics.
    fn counts_toward_stats(&self, record: &AttendanceRecord) -> bool {
        self.classes
            .get(&record.class_id)
            .map_or(true, |class| class.status != ClassStatus::Cancelled)
    }

    pub fn statistics(&self) -> Vec<StudentStats> {
        let mut by_student: BTreeMap<&str, StudentStats> = BTreeMap::new();
        for record in &self.attendance {
            if !self.counts_toward_stats(record) {
                continue;
            }
            by_student
                .entry(record.student_id.as_str())
                .or_insert_with(|| StudentStats {
                    student_id: record.student_id.clone(),
                    ..StudentStats::default()
                })
                .tally(record.status);
        }
        let mut stats: Vec<StudentStats> = by_student.into_values().collect();
        for entry in &mut stats {
            entry.finish();
        }
        stats
    }

    pub fn statistics_for_student(&self, student_id: &str) -> StudentStats {
        let mut stats = StudentStats {
            student_id: student_id.to_string(),
            ..StudentStats::default()
        };
        for record in &self.attendance {
            if record.student_id == student_id && self.counts_toward_stats(record) {
                stats.tally(record.status);
            }
        }
        stats.finish();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class: &str, student: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            class_id: class.into(),
            student_id: student.into(),
            status,
            recorded_by: "t1".into(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn replace_sheet_is_wholesale_per_class() {
        let mut dir = Directory::default();
        dir.attendance.push(record("c1", "s1", AttendanceStatus::Absent));
        dir.attendance.push(record("c2", "s1", AttendanceStatus::Present));
        dir.replace_sheet("c1", vec![record("c1", "s1", AttendanceStatus::Present)]);
        assert_eq!(dir.attendance.len(), 2);
        assert!(
            dir.attendance
                .iter()
                .filter(|r| r.class_id == "c1")
                .all(|r| r.status == AttendanceStatus::Present)
        );
    }

    #[test]
    fn statistics_aggregate_per_student() {
        let mut dir = Directory::default();
        dir.attendance.push(record("c1", "s1", AttendanceStatus::Present));
        dir.attendance.push(record("c2", "s1", AttendanceStatus::Late));
        dir.attendance.push(record("c3", "s1", AttendanceStatus::Absent));
        dir.attendance.push(record("c1", "s2", AttendanceStatus::Excused));

        let stats = dir.statistics_for_student("s1");
        assert_eq!(stats.present, 1);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.absent, 1);
        assert!((stats.attendance_rate - 2.0 / 3.0).abs() < f64::EPSILON);

        let all = dir.statistics();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].student_id, "s2");
        assert_eq!(all[1].excused, 1);
    }

    #[test]
    fn cancelled_class_records_are_excluded_from_statistics() {
        let mut dir = Directory::default();
        let class = |id: &str, status| ClassSession {
            id: id.into(),
            subject: "algebra".into(),
            group: "g1".into(),
            teacher_id: "t1".into(),
            starts_at: Utc::now(),
            status,
        };
        dir.classes.insert("c1".into(), class("c1", ClassStatus::Scheduled));
        dir.classes.insert("c2".into(), class("c2", ClassStatus::Cancelled));
        dir.attendance.push(record("c1", "s1", AttendanceStatus::Present));
        // Marked while the class was still scheduled, then the class was
        // cancelled: the record stays but no longer counts.
        dir.attendance.push(record("c2", "s1", AttendanceStatus::Absent));

        let stats = dir.statistics_for_student("s1");
        assert_eq!(stats.present, 1);
        assert_eq!(stats.absent, 0);
        assert_eq!(stats.attendance_rate, 1.0);

        let all = dir.statistics();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].absent, 0);

        // The record itself is still readable.
        assert_eq!(dir.records_for_student("s1").len(), 2);
    }

    #[test]
    fn empty_record_set_has_zero_rate() {
        let dir = Directory::default();
        let stats = dir.statistics_for_student("ghost");
        assert_eq!(stats.attendance_rate, 0.0);
    }
}
