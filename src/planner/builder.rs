//! Study plan construction
//!
//! Days are built in increasing order: a day's review sources read the
//! `new_words` of days that have already been built.

use super::allocator::allocate;
use super::scheduler::review_days_for;
use super::types::{PlanDay, PlanRequest, ReviewSource, StudyPlan};

pub fn build(request: &PlanRequest) -> StudyPlan {
    let plan_days = request.plan_days();
    let new_words_by_day = allocate(request.total_words(), plan_days);
    let mut days: Vec<PlanDay> = Vec::with_capacity(new_words_by_day.len());

    for (day, new_words) in (1..=plan_days).zip(new_words_by_day) {
        let review_sources = if request.include_review() && day > 1 {
            resolve_review_sources(&days, day, plan_days)
        } else {
            Vec::new()
        };

        let review_words: u64 = review_sources.iter().map(|s| s.words_reviewed).sum();
        let note = day_note(new_words, &review_sources);

        days.push(PlanDay {
            day,
            new_words,
            review_words,
            total_daily: new_words + review_words,
            review_sources,
            note,
        });
    }

    tracing::debug!(
        total_words = request.total_words(),
        plan_days,
        include_review = request.include_review(),
        "study plan built"
    );

    StudyPlan {
        total_words: request.total_words(),
        plan_days,
        include_review: request.include_review(),
        days,
    }
}

fn resolve_review_sources(built: &[PlanDay], day: u32, plan_days: u32) -> Vec<ReviewSource> {
    review_days_for(day, plan_days)
        .into_iter()
        .filter_map(|source_day| {
            let source = (source_day >= 1 && source_day < day)
                .then(|| built.get(source_day as usize - 1))
                .flatten();
            if source.is_none() {
                tracing::warn!(day, source_day, "review source out of range, skipped");
            }
            source.map(|s| ReviewSource {
                source_day,
                words_reviewed: s.new_words,
            })
        })
        .collect()
}

fn day_note(new_words: u64, review_sources: &[ReviewSource]) -> String {
    if review_sources.is_empty() {
        return format!("学习后当天复习本次新单词{new_words}个");
    }

    let sources: Vec<String> = review_sources
        .iter()
        .map(|s| format!("第{}天: {}个", s.source_day, s.words_reviewed))
        .collect();
    format!("复习来源: {}", sources.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(total_words: u64, plan_days: u32, include_review: bool) -> StudyPlan {
        build(&PlanRequest::new(total_words, plan_days, include_review).unwrap())
    }

    #[test]
    fn test_ten_day_plan_day_five() {
        let plan = plan(100, 10, true);
        assert_eq!(plan.len(), 10);

        let first = plan.day(1).unwrap();
        assert_eq!(first.new_words, 10);
        assert_eq!(first.review_words, 0);
        assert_eq!(first.note, "学习后当天复习本次新单词10个");

        let fifth = plan.day(5).unwrap();
        assert_eq!(fifth.new_words, 10);
        assert_eq!(
            fifth.review_sources,
            vec![
                ReviewSource { source_day: 1, words_reviewed: 10 },
                ReviewSource { source_day: 3, words_reviewed: 10 },
                ReviewSource { source_day: 4, words_reviewed: 10 },
            ]
        );
        assert_eq!(fifth.review_words, 30);
        assert_eq!(fifth.total_daily, 40);
        assert_eq!(fifth.note, "复习来源: 第1天: 10个, 第3天: 10个, 第4天: 10个");
    }

    #[test]
    fn test_review_uses_source_day_allocation() {
        let plan = plan(23, 5, true);
        let new_words: Vec<u64> = plan.days.iter().map(|d| d.new_words).collect();
        assert_eq!(new_words, vec![5, 5, 5, 4, 4]);

        // day 4 reviews days 2 and 3, day 5 reviews 1, 3, 4
        assert_eq!(plan.day(4).unwrap().review_words, 10);
        assert_eq!(plan.day(5).unwrap().review_words, 14);
        assert_eq!(plan.day(5).unwrap().total_daily, 18);
    }

    #[test]
    fn test_without_review() {
        let plan = plan(30, 3, false);
        for day in &plan.days {
            assert!(day.review_sources.is_empty());
            assert_eq!(day.review_words, 0);
            assert_eq!(day.total_daily, day.new_words);
            assert_eq!(day.note, "学习后当天复习本次新单词10个");
        }
        assert_eq!(plan.total_review_words(), 0);
    }

    #[test]
    fn test_long_plan_golden_intervals() {
        let plan = plan(400, 20, true);
        let day20 = plan.day(20).unwrap();
        let sources: Vec<u32> = day20.review_sources.iter().map(|s| s.source_day).collect();
        assert_eq!(sources, vec![19, 18, 16, 13]);
        assert_eq!(day20.review_words, 80);
        assert_eq!(day20.total_daily, 100);
    }

    #[test]
    fn test_single_day_plan() {
        let plan = plan(50, 1, true);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.day(1).unwrap().total_daily, 50);
    }

    #[test]
    fn test_out_of_range_sources_are_skipped() {
        let built = vec![PlanDay {
            day: 1,
            new_words: 7,
            review_words: 0,
            total_daily: 7,
            review_sources: Vec::new(),
            note: String::new(),
        }];
        // day 3 of a short plan wants days 1 and 2; only day 1 has been built
        let sources = resolve_review_sources(&built, 3, 3);
        assert_eq!(sources, vec![ReviewSource { source_day: 1, words_reviewed: 7 }]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let request = PlanRequest::new(1234, 45, true).unwrap();
        assert_eq!(build(&request), build(&request));
    }
}
