//! 成绩汇总与排名
//!
//! 纯函数，不访问存储：百分比、搜索过滤、排名以及看板统计。

use std::cmp::Ordering;

use crate::models::leaderboard::responses::{LeaderboardResponse, RankedStudent};
use crate::models::students::entities::{Student, StudentWithMarks};

/// 一位小数四舍五入：`floor(10x + 0.5) / 10`
pub fn round_1_decimal(x: f64) -> f64 {
    ((10.0 * x) + 0.5).floor() / 10.0
}

/// 总得分与总满分
pub fn totals(student: &StudentWithMarks) -> (f64, i64) {
    student
        .marks
        .iter()
        .fold((0.0, 0_i64), |(obtained, max), m| {
            (
                obtained + m.mark.obtained_value(),
                max + i64::from(m.subject.max_marks),
            )
        })
}

/// `100 * 总得分 / 总满分`，总满分为 0 时为 0
pub fn percentage(total_obtained: f64, total_max: i64) -> f64 {
    if total_max > 0 {
        100.0 * total_obtained / total_max as f64
    } else {
        0.0
    }
}

/// 姓名不区分大小写包含，或学号包含
pub fn matches_search(student: &Student, search: &str) -> bool {
    let needle = search.trim();
    if needle.is_empty() {
        return true;
    }
    student
        .name
        .to_lowercase()
        .contains(&needle.to_lowercase())
        || student.roll_no.to_string().contains(needle)
}

/// 过滤并按百分比降序排名，同分保持原有顺序
pub fn rank_students(students: Vec<StudentWithMarks>, search: Option<&str>) -> Vec<RankedStudent> {
    let mut ranked: Vec<RankedStudent> = students
        .into_iter()
        .filter(|s| search.is_none_or(|q| matches_search(&s.student, q)))
        .map(|student| {
            let (total_obtained, total_max) = totals(&student);
            RankedStudent {
                rank: 0,
                percentage: percentage(total_obtained, total_max),
                total_obtained,
                total_max,
                student,
            }
        })
        .collect();

    // sort_by 是稳定排序
    ranked.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });

    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    ranked
}

/// 看板统计：总人数取过滤前的数量，平均值与榜首基于过滤后的排名
pub fn summarize(total_students: usize, entries: Vec<RankedStudent>) -> LeaderboardResponse {
    let average_percentage = if entries.is_empty() {
        0.0
    } else {
        let sum: f64 = entries.iter().map(|e| e.percentage).sum();
        round_1_decimal(sum / entries.len() as f64)
    };

    LeaderboardResponse {
        total_students,
        average_percentage,
        top_performer: entries.first().map(|e| e.student.student.name.clone()),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marks::entities::{Mark, MarkWithSubject};
    use crate::models::subjects::entities::Subject;

    fn student(id: i64, roll_no: i32, name: &str, scores: &[(&str, i32)]) -> StudentWithMarks {
        let marks = scores
            .iter()
            .enumerate()
            .map(|(i, (obtained, max))| MarkWithSubject {
                mark: Mark {
                    id: id * 100 + i as i64,
                    student_id: id,
                    subject_id: i as i64 + 1,
                    obtained: obtained.to_string(),
                },
                subject: Subject {
                    id: i as i64 + 1,
                    name: format!("Subject {i}"),
                    date: "2024-07-15".to_string(),
                    max_marks: *max,
                    class_id: 1,
                },
            })
            .collect();
        StudentWithMarks {
            student: Student {
                id,
                roll_no,
                name: name.to_string(),
                class_id: 1,
            },
            marks,
        }
    }

    #[test]
    fn test_zero_max_marks_gives_zero_percentage() {
        let s = student(1, 1, "Prince Kumar", &[]);
        let (obtained, max) = totals(&s);
        assert_eq!(percentage(obtained, max), 0.0);
    }

    #[test]
    fn test_percentage_over_all_marks() {
        let s = student(1, 1, "Aakash Yadav", &[("54", 80), ("26", 20)]);
        let (obtained, max) = totals(&s);
        assert_eq!(obtained, 80.0);
        assert_eq!(max, 100);
        assert_eq!(percentage(obtained, max), 80.0);
    }

    #[test]
    fn test_unparsable_obtained_counts_as_zero() {
        let s = student(1, 1, "Afroz", &[("absent", 80), ("40", 80)]);
        let (obtained, max) = totals(&s);
        assert_eq!(percentage(obtained, max), 25.0);
    }

    #[test]
    fn test_ranking_descending_with_top_performer() {
        let students = vec![
            student(1, 1, "Eighty", &[("80", 100)]),
            student(2, 2, "Sixty", &[("60", 100)]),
            student(3, 3, "Ninety", &[("90", 100)]),
        ];

        let ranked = rank_students(students, None);
        let percentages: Vec<f64> = ranked.iter().map(|e| e.percentage).collect();
        assert_eq!(percentages, vec![90.0, 80.0, 60.0]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let summary = summarize(3, ranked);
        assert_eq!(summary.top_performer.as_deref(), Some("Ninety"));
        assert_eq!(summary.average_percentage, 76.7);
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let students = vec![
            student(5, 1, "First", &[("40", 80)]),
            student(2, 2, "Second", &[("40", 80)]),
            student(9, 3, "Third", &[("40", 80)]),
        ];
        let ids: Vec<i64> = rank_students(students, None)
            .iter()
            .map(|e| e.student.student.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_search_by_name_or_roll_no() {
        let students = vec![
            student(1, 12, "Aaisha Khatoon", &[("49", 80)]),
            student(2, 23, "Shahina Khatoon", &[("60", 80)]),
            student(3, 3, "Rahul Kumar", &[("70", 80)]),
        ];

        let by_name = rank_students(students.clone(), Some("khatoon"));
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name[0].student.student.name, "Shahina Khatoon");

        let by_roll = rank_students(students.clone(), Some("3"));
        let names: Vec<&str> = by_roll
            .iter()
            .map(|e| e.student.student.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rahul Kumar", "Shahina Khatoon"]);

        assert_eq!(rank_students(students, Some("  ")).len(), 3);
    }

    #[test]
    fn test_summary_counts_before_filter_and_handles_empty() {
        let summary = summarize(39, Vec::new());
        assert_eq!(summary.total_students, 39);
        assert_eq!(summary.average_percentage, 0.0);
        assert!(summary.top_performer.is_none());
    }
}
