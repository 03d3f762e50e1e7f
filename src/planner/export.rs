//! Plain-text rendering of a plan for pasting elsewhere.

use std::fmt::Write;

use super::types::StudyPlan;

const TITLE: &str = "单词背诵计划";
const RULE: &str = "-------------------------";
const HEADER: &str = "第几天\t新单词量\t复习单词量\t当日总任务量";

/// Tab-separated table: day, new words, review words, daily total.
pub fn to_clipboard_text(plan: &StudyPlan) -> String {
    let mut out = String::with_capacity(64 + plan.len() * 24);
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    for day in &plan.days {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "第{}天\t{}\t{}\t{}",
            day.day, day.new_words, day.review_words, day.total_daily
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{build, PlanRequest};

    #[test]
    fn test_text_block_layout() {
        let plan = build(&PlanRequest::new(30, 3, true).unwrap());
        let text = to_clipboard_text(&plan);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "单词背诵计划");
        assert_eq!(lines[2], "第几天\t新单词量\t复习单词量\t当日总任务量");
        assert_eq!(lines[4], "第1天\t10\t0\t10");
        assert_eq!(lines[5], "第2天\t10\t10\t20");
        assert_eq!(lines[6], "第3天\t10\t20\t30");
        assert!(text.ends_with('\n'));
    }
}
