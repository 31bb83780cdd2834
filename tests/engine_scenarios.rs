use bulk_sssp::graph::generators::{line_graph, random_graph};
use bulk_sssp::{
    sequential_shortest_paths, AdjacencyRecord, BulkSssp, EngineConfig, Error, PathRecord,
    Termination,
};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

type Weight = OrderedFloat<f64>;

fn edge(origin: &str, destination: &str, weight: f64) -> AdjacencyRecord<String, Weight> {
    AdjacencyRecord::new(
        origin.to_string(),
        destination.to_string(),
        OrderedFloat(weight),
    )
}

#[test]
fn test_indirect_path_beats_direct_edge() {
    let records = vec![edge("A", "B", 1.0), edge("B", "C", 2.0), edge("A", "C", 5.0)];

    let result = BulkSssp::new().run(records, "A".to_string()).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert!(result.unsettled.is_empty(), "everything reachable should settle");

    let source = &result.settled["A"];
    assert_eq!(source.weight, OrderedFloat(0.0));
    assert!(source.path.is_empty(), "source path is source-exclusive");

    let via_b = &result.settled["C"];
    assert_eq!(via_b.weight, OrderedFloat(3.0), "two hops should beat the direct edge");
    assert_eq!(via_b.path, vec!["A".to_string(), "B".to_string()]);

    assert_eq!(result.settled["B"].weight, OrderedFloat(1.0));
    assert_eq!(result.settled["B"].path, vec!["A".to_string()]);
}

#[test]
fn test_disconnected_vertex_never_settles() {
    let records = vec![edge("A", "B", 1.0), edge("C", "D", 1.0)];

    let result = BulkSssp::new().run(records, "A".to_string()).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert!(result.settled.contains_key("A"));
    assert!(result.settled.contains_key("B"));
    assert!(!result.settled.contains_key("C"), "unreachable vertex must stay out");
    assert!(!result.settled.contains_key("D"), "unreachable vertex must stay out");
    assert!(result.unsettled.is_empty());
}

#[test]
fn test_iteration_limit_reports_partial_result() {
    let records = vec![edge("A", "B", 1.0), edge("B", "C", 1.0)];

    let engine = BulkSssp::with_config(EngineConfig::new().with_iteration_limit(1));
    let result = engine.run(records, "A".to_string()).unwrap();

    assert_eq!(result.termination, Termination::IterationLimitReached);
    assert_eq!(result.rounds, 1);
    assert!(result.settled.contains_key("A"));
    assert!(!result.settled.contains_key("C"));
    assert!(
        result.unsettled.contains_key("B"),
        "the caller can inspect what the round budget missed"
    );
}

#[test]
fn test_target_settlement_stops_early() {
    let records = vec![edge("A", "B", 1.0), edge("B", "C", 2.0), edge("C", "D", 3.0)];

    let engine = BulkSssp::with_config(EngineConfig::new().with_target("B".to_string()));
    let result = engine.run(records, "A".to_string()).unwrap();

    assert_eq!(result.termination, Termination::TargetSettled);
    assert_eq!(result.settled["B"].weight, OrderedFloat(1.0));
    assert!(!result.settled.contains_key("D"), "work past the target is skipped");
}

#[test]
fn test_source_equal_to_target_settles_in_first_round() {
    let records = vec![edge("A", "B", 1.0)];

    let engine = BulkSssp::with_config(EngineConfig::new().with_target("A".to_string()));
    let result = engine.run(records, "A".to_string()).unwrap();

    assert_eq!(result.termination, Termination::TargetSettled);
    assert_eq!(result.rounds, 1);
    assert_eq!(result.settled["A"].weight, OrderedFloat(0.0));
}

#[test]
fn test_source_with_no_outgoing_edges() {
    let records = vec![edge("A", "B", 1.0)];

    let result = BulkSssp::new().run(records, "B".to_string()).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert_eq!(result.settled.len(), 1);
    assert_eq!(result.settled["B"].weight, OrderedFloat(0.0));
}

#[test]
fn test_unknown_source_is_rejected() {
    let records = vec![edge("A", "B", 1.0)];

    let err = BulkSssp::new().run(records, "Z".to_string()).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound));
}

#[test]
fn test_negative_weight_is_rejected() {
    let records = vec![edge("A", "B", 1.0), edge("B", "C", -2.0)];

    let err = BulkSssp::new().run(records, "A".to_string()).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight(_)));
}

#[test]
fn test_settled_weights_match_sequential_dijkstra() {
    for seed in [1u64, 7, 42, 99] {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = random_graph(40, 3.0, 10.0, &mut rng);
        let source = records[0].origin;

        let reference = sequential_shortest_paths(&records, &source);
        let engine = BulkSssp::with_config(EngineConfig::new().with_iteration_limit(100));
        let result = engine.run(records, source).unwrap();

        assert_eq!(
            result.termination,
            Termination::Converged,
            "positive weights settle at least one vertex per round (seed {})",
            seed
        );

        let settled_keys: HashSet<_> = result.settled.keys().copied().collect();
        let reachable_keys: HashSet<_> = reference.keys().copied().collect();
        assert_eq!(settled_keys, reachable_keys, "seed {}", seed);

        for (vertex, record) in &result.settled {
            assert_eq!(
                record.weight, reference[vertex],
                "settled weight for {} must be the true shortest (seed {})",
                vertex, seed
            );
        }
    }
}

#[test]
fn test_converges_within_diameter_round_budget() {
    // Diameter 9 in edges; the default 30-round budget is ample
    let records = line_graph(10);

    let result = BulkSssp::new().run(records, 0).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert!(result.rounds <= 30);
    assert_eq!(result.settled.len(), 10);
    for vertex in 0..10 {
        assert_eq!(result.settled[&vertex].weight, OrderedFloat(vertex as f64));
    }
}

#[test]
fn test_result_is_deterministic_and_partition_independent() {
    let mut rng = StdRng::seed_from_u64(5);
    let records = random_graph(30, 2.5, 8.0, &mut rng);
    let source = records[0].origin;

    let baseline = BulkSssp::with_config(EngineConfig::new().with_partitions(16))
        .run(records.clone(), source)
        .unwrap();

    for partitions in [1, 4, 64] {
        let engine =
            BulkSssp::with_config(EngineConfig::<usize>::new().with_partitions(partitions));
        let result = engine.run(records.clone(), source).unwrap();

        assert_eq!(result.termination, baseline.termination);
        assert_eq!(result.settled.len(), baseline.settled.len());
        for (vertex, record) in &baseline.settled {
            assert_eq!(
                result.settled[vertex].weight, record.weight,
                "settled weights must not depend on the partition count"
            );
        }
    }

    // Same configuration twice: byte-for-byte identical records
    let repeat = BulkSssp::with_config(EngineConfig::new().with_partitions(16))
        .run(records, source)
        .unwrap();
    assert_eq!(repeat.settled, baseline.settled);
    assert_eq!(repeat.rounds, baseline.rounds);
}

#[test]
fn test_settled_and_unsettled_are_disjoint() {
    let mut rng = StdRng::seed_from_u64(11);
    let records = random_graph(25, 2.0, 5.0, &mut rng);
    let source = records[0].origin;

    let engine = BulkSssp::with_config(EngineConfig::new().with_iteration_limit(3));
    let result = engine.run(records, source).unwrap();

    for vertex in result.unsettled.keys() {
        assert!(
            !result.settled.contains_key(vertex),
            "a vertex is either settled or active, never both"
        );
    }
}

#[test]
fn test_merge_is_idempotent() {
    let record = PathRecord::<String, Weight> {
        weight: OrderedFloat(4.0),
        path: vec!["A".to_string(), "B".to_string()],
        explored: HashSet::from(["B".to_string()]),
    };

    assert_eq!(record.clone().merge(record.clone()), record);
}

#[test]
fn test_merge_keeps_lighter_record_and_unions_explored() {
    let light = PathRecord::<String, Weight> {
        weight: OrderedFloat(2.0),
        path: vec!["A".to_string()],
        explored: HashSet::from(["A".to_string()]),
    };
    let heavy = PathRecord {
        weight: OrderedFloat(6.0),
        path: vec!["X".to_string()],
        explored: HashSet::from(["X".to_string()]),
    };

    let forward = light.clone().merge(heavy.clone());
    let backward = heavy.merge(light);

    for merged in [&forward, &backward] {
        assert_eq!(merged.weight, OrderedFloat(2.0));
        assert_eq!(merged.path, vec!["A".to_string()]);
        assert_eq!(
            merged.explored,
            HashSet::from(["A".to_string(), "X".to_string()]),
            "history accumulates even when the winning path is unchanged"
        );
    }
}

#[test]
fn test_merge_tie_prefers_first_operand_but_unions_explored() {
    let first = PathRecord::<String, Weight> {
        weight: OrderedFloat(3.0),
        path: vec!["A".to_string()],
        explored: HashSet::from(["A".to_string()]),
    };
    let second = PathRecord {
        weight: OrderedFloat(3.0),
        path: vec!["B".to_string()],
        explored: HashSet::from(["B".to_string()]),
    };

    let merged = first.merge(second);
    assert_eq!(merged.path, vec!["A".to_string()]);
    assert_eq!(
        merged.explored,
        HashSet::from(["A".to_string(), "B".to_string()])
    );
}

#[test]
fn test_merge_order_insensitive_for_distinct_weights() {
    let records: Vec<PathRecord<String, Weight>> = [4.0, 1.0, 9.0, 2.5]
        .iter()
        .enumerate()
        .map(|(index, weight)| PathRecord {
            weight: OrderedFloat(*weight),
            path: vec![format!("P{}", index)],
            explored: HashSet::from([format!("P{}", index)]),
        })
        .collect();

    let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
    let mut outcomes = Vec::new();
    for order in orders {
        let mut iter = order.iter().map(|&index| records[index].clone());
        let first = iter.next().unwrap();
        outcomes.push(iter.fold(first, PathRecord::merge));
    }

    for outcome in &outcomes {
        assert_eq!(outcome.weight, OrderedFloat(1.0));
        assert_eq!(outcome.path, vec!["P1".to_string()]);
        assert_eq!(outcome.explored.len(), 4, "explored is the union of all operands");
    }
}
