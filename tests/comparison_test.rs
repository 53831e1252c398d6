use std::sync::Arc;

use approx::assert_relative_eq;
use uuid::Uuid;

use rolequest::comparison::comparisonset::ComparisonSet;
use rolequest::model::questmodel::QuestModel;
use rolequest::model::questresult::QuestResult;
use rolequest::objectwithuuid::ObjectWithUUID;
use rolequest::quest::lane::{
    ChampionType,
    Lane
};
use rolequest::quest::questconfig::QuestConfig;
use rolequest::quest::questerror::QuestError;
use rolequest::quest::scenario::ScenarioInput;
use rolequest::report::chart::{
    Chart,
    SeriesRole
};

fn mid_model() -> QuestModel {
    QuestModel::new(Arc::new(QuestConfig::builtin(Lane::Mid)))
}

fn result(model: &QuestModel, cs: f64) -> QuestResult {
    model.compute(&ScenarioInput::default().with_cs(cs, 0.0)).unwrap()
}

#[test]
fn entries_keep_insertion_order_and_identity() {
    let model = mid_model();
    let mut set = ComparisonSet::new();
    assert!(set.is_empty());

    let first = set.add(Some("farming"), &result(&model, 8.0)).uuid().to_owned();
    let second = set.add(None, &result(&model, 6.0)).uuid().to_owned();
    let third = set.add(Some("   "), &result(&model, 4.0)).uuid().to_owned();

    assert_eq!(set.len(), 3);
    assert_ne!(first, second);
    let labels: Vec<&str> = set.iter().map(|entry| entry.label()).collect();
    assert_eq!(labels[0], "farming");
    assert!(labels[1].ends_with("6.0 CS/Min"));
    assert!(labels[2].ends_with("4.0 CS/Min"));
    assert_eq!(set.get(&third).unwrap().scenario().cs_per_minute_in_lane(), 4.0);
    assert!(set.get(&Uuid::new_v4()).is_none());
}

#[test]
fn remove_relabel_and_clear() {
    let model = mid_model();
    let mut set = ComparisonSet::new();
    let kept = set.add(Some("kept"), &result(&model, 7.0)).uuid().to_owned();
    let dropped = set.add(Some("dropped"), &result(&model, 5.0)).uuid().to_owned();

    let removed = set.remove(&dropped).unwrap();
    assert_eq!(removed.label(), "dropped");
    assert!(set.remove(&dropped).is_none());
    assert_eq!(set.len(), 1);

    set.relabel(&kept, "  seven cs  ").unwrap();
    assert_eq!(set.get(&kept).unwrap().label(), "seven cs");
    assert!(matches!(set.relabel(&kept, " "), Err(QuestError::InvalidInput(_))));
    assert!(matches!(set.relabel(&dropped, "gone"), Err(QuestError::InvalidInput(_))));

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn sets_do_not_share_entries() {
    let model = mid_model();
    let mut first = ComparisonSet::new();
    let mut second = ComparisonSet::new();
    let uuid = first.add(Some("only here"), &result(&model, 7.0)).uuid().to_owned();

    assert!(second.get(&uuid).is_none());
    let mut copy = first.clone();
    copy.clear();
    assert_eq!(first.len(), 1);

    second.add(None, &result(&model, 3.0));
    first.clear();
    assert_eq!(second.len(), 1);
}

#[test]
fn entries_snapshot_the_result() {
    let model = mid_model();
    let scenario = ScenarioInput::default().with_cs(7.0, 0.0).with_damage(450.0, ChampionType::Ranged);
    let computed = model.compute(&scenario).unwrap();
    let mut set = ComparisonSet::new();
    let entry = set.add(None, &computed);

    assert_eq!(entry.lane(), Lane::Mid);
    assert_eq!(entry.completion(), computed.completion());
    assert_eq!(entry.scenario(), &scenario);
    assert!(entry.label().starts_with(&computed.completion().label()));
    assert!(entry.label().ends_with("450 DPM R"));
    assert!(entry.curve().is_non_decreasing());
    assert_relative_eq!(entry.curve().max_x(), computed.horizon());
}

#[test]
fn chart_draws_baseline_then_comparisons_then_current() {
    let model = mid_model();
    let mut set = ComparisonSet::new();
    set.add(Some("slow"), &result(&model, 4.0));
    set.add(Some("fast"), &result(&model, 9.0));
    let current = result(&model, 7.0);

    let chart = Chart::build(&model, Some(&current), &set).unwrap();
    let roles: Vec<SeriesRole> = chart.series().iter().map(|series| series.role()).collect();
    assert_eq!(roles, vec![SeriesRole::Baseline, SeriesRole::Comparison, SeriesRole::Comparison, SeriesRole::Current]);

    assert_eq!(chart.title(), "MID LANE Quest - Completion Progress");
    assert_eq!(chart.threshold_label(), "Quest Completion (1350 pts)");
    assert_eq!(chart.series()[0].label(), "15m9s Passive Only");
    assert_eq!(chart.series()[1].label(), "slow");
    assert!(chart.series()[3].label().ends_with(" Current"));
    assert_relative_eq!(chart.x_max(), current.horizon());

    for series in chart.series() {
        let points = series.points().points();
        assert!(points.iter().all(|point| point.y() <= 100.0));
        assert!(series.points().is_non_decreasing());
    }
    let current_points = chart.series()[3].points().points();
    assert_relative_eq!(current_points.last().unwrap().y(), 100.0);
}

#[test]
fn baseline_series_spans_the_whole_axis() {
    let model = mid_model();
    let current = result(&model, 7.0);
    let chart = Chart::build(&model, Some(&current), &ComparisonSet::new()).unwrap();
    let baseline = &chart.series()[0];
    assert_relative_eq!(baseline.points().min_x(), 0.0);
    assert_relative_eq!(baseline.points().max_x(), chart.x_max());
    assert_relative_eq!(baseline.points().points().last().unwrap().y(), 100.0);
    assert_eq!(baseline.points().points().len(), 200);
}

#[test]
fn chart_without_current_spans_the_baseline() {
    let model = mid_model();
    let chart = Chart::build(&model, None, &ComparisonSet::new()).unwrap();
    assert_eq!(chart.series().len(), 1);
    let baseline = model.baseline().unwrap().minutes().unwrap();
    assert_relative_eq!(chart.x_max(), baseline + 1.0);

    let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    assert_eq!(json["series"][0]["role"], "baseline");
    assert_eq!(json["series"][0]["completion"]["status"], "at");
    assert_eq!(json["x_label"], "Game Time (minutes)");
}

#[test]
fn chart_of_a_never_completing_quest_uses_the_fallback_span() {
    let model = QuestModel::new(Arc::new(QuestConfig::builtin(Lane::Top).with_passive_rate(0.0)));
    let chart = Chart::build(&model, None, &ComparisonSet::new()).unwrap();
    assert_eq!(chart.series()[0].label(), "never Passive Only");
    assert_relative_eq!(chart.x_max(), 31.0);
    assert_relative_eq!(chart.series()[0].points().max_x(), 31.0);
}
