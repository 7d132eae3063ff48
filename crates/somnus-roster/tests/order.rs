use somnus_core::models::report::{ComponentScores, ScoreReport};
use somnus_core::models::sort_spec::SortSpec;
use somnus_roster::{NameOrder, reorder_by_names};

fn report(id: &str, name: &str) -> ScoreReport {
    ScoreReport::new(id, name, "30", ComponentScores::default(), vec![])
}

fn names(reports: &[ScoreReport]) -> Vec<&str> {
    reports.iter().map(|r| r.name.as_str()).collect()
}

fn ids(reports: &[ScoreReport]) -> Vec<&str> {
    reports.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn listed_names_come_first_in_list_order() {
    let reports = vec![report("1", "李四"), report("2", "张三"), report("3", "王五")];
    let spec = SortSpec::from(["张三", "李四"]);

    let ordered = reorder_by_names(reports, &spec);
    assert_eq!(names(&ordered), ["张三", "李四", "王五"]);
}

#[test]
fn empty_spec_is_identity() {
    let reports = vec![report("1", "王五"), report("2", "张三"), report("3", "李四")];
    let ordered = reorder_by_names(reports.clone(), &SortSpec::default());
    assert_eq!(ordered, reports);

    let blanks = SortSpec::from(["", "   "]);
    let ordered = reorder_by_names(reports.clone(), &blanks);
    assert_eq!(ordered, reports);
}

#[test]
fn empty_input_stays_empty() {
    let spec = SortSpec::from(["张三"]);
    assert!(reorder_by_names(Vec::new(), &spec).is_empty());
}

#[test]
fn unmatched_reports_keep_relative_order_at_the_end() {
    let reports = vec![
        report("a", "王五"),
        report("b", "赵六"),
        report("c", "张三"),
        report("d", "Anna"),
    ];
    let spec = SortSpec::from(["张三"]);

    let ordered = reorder_by_names(reports, &spec);
    assert_eq!(ids(&ordered), ["c", "a", "b", "d"]);
}

#[test]
fn duplicate_spec_entries_keep_first_rank() {
    let order = NameOrder::from_spec(&SortSpec::from(["李四", "张三", "李四"]));
    assert_eq!(order.rank("李四"), Some(0));
    assert_eq!(order.rank("张三"), Some(1));
    assert_eq!(order.rank("王五"), None);
}

#[test]
fn blank_entries_are_skipped_but_ranks_follow_list_position() {
    let order = NameOrder::from_spec(&SortSpec::from(["", "张三", " ", "李四"]));
    assert_eq!(order.rank("张三"), Some(1));
    assert_eq!(order.rank("李四"), Some(3));
    assert_eq!(order.rank(""), None);
}

#[test]
fn differently_spelled_names_share_a_rank_and_stay_stable() {
    let reports = vec![
        report("1", "王五"),
        report("2", "张 三"),
        report("3", "李四"),
        report("4", "章三"),
    ];
    let spec = SortSpec::from(["张三", "李四"]);

    let ordered = reorder_by_names(reports, &spec);
    assert_eq!(ids(&ordered), ["2", "4", "3", "1"]);
}

#[test]
fn reordering_never_changes_report_contents() {
    let scores = ComponentScores {
        sleep_quality: 2,
        sleep_efficiency: 3,
        ..Default::default()
    };
    let original = ScoreReport::new("x", "李四", "41", scores, vec!["pain".to_string()]);
    let reports = vec![report("y", "张三"), original.clone()];

    let ordered = reorder_by_names(reports, &SortSpec::from(["李四"]));
    assert_eq!(ordered[0], original);
}

#[test]
fn unmatched_lists_names_missing_from_spec() {
    let reports = vec![report("1", "李四"), report("2", "王五"), report("3", "Anna")];
    let order = NameOrder::from_spec(&SortSpec::from(["李四"]));
    assert_eq!(order.unmatched(&reports), ["王五", "Anna"]);
}

#[test]
fn apply_by_orders_arbitrary_items() {
    let order = NameOrder::from_spec(&SortSpec::from(["b", "a"]));
    let items = vec![("a", 1), ("c", 2), ("b", 3)];
    let ordered = order.apply_by(items, |item| item.0);
    assert_eq!(ordered, [("b", 3), ("a", 1), ("c", 2)]);
}

#[test]
fn punctuated_name_does_not_match_plain_entry() {
    let reports = vec![report("1", "李四"), report("2", "张三·")];
    let spec = SortSpec::from(["张三", "李四"]);

    let order = NameOrder::from_spec(&spec);
    assert_eq!(order.unmatched(&reports), ["张三·"]);
    assert_eq!(ids(&order.apply(reports)), ["1", "2"]);
}
