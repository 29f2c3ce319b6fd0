use gridlut::{
    SearchStrategy, lower_bound_adaptive, lower_bound_binary, lower_bound_from,
    lower_bound_linear,
};

/// Deterministic sorted sequences of assorted lengths, some with repeats.
fn sorted_sequences() -> Vec<Vec<f64>> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let mut seqs = Vec::new();
    for n in 0..70 {
        let mut acc = -5.0;
        let seq: Vec<f64> = (0..n)
            .map(|i| {
                // Every fifth step repeats the previous value.
                if i % 5 != 4 {
                    acc += next() * 3.0;
                }
                acc
            })
            .collect();
        seqs.push(seq);
    }
    seqs.push(vec![1.0; 20]);
    seqs.push((0..300).map(|i| i as f64 * 0.1).collect());
    seqs
}

fn queries_for(list: &[f64]) -> Vec<f64> {
    let mut queries = vec![-1e9, 1e9, 0.0];
    for (i, &v) in list.iter().enumerate() {
        queries.push(v);
        queries.push(v - 1e-9);
        queries.push(v + 1e-9);
        if let Some(&next) = list.get(i + 1) {
            queries.push(0.5 * (v + next));
        }
    }
    queries
}

#[test]
fn test_strategies_agree() {
    for list in sorted_sequences() {
        for val in queries_for(&list) {
            let linear = lower_bound_linear(&list, val);
            let binary = lower_bound_binary(&list, val);
            let adaptive = lower_bound_adaptive(&list, val);
            assert_eq!(linear, binary, "n={} val={val}", list.len());
            assert_eq!(binary, adaptive, "n={} val={val}", list.len());
        }
    }
}

#[test]
fn test_result_is_lower_bound() {
    for list in sorted_sequences() {
        for val in queries_for(&list) {
            match lower_bound_adaptive(&list, val) {
                Some(i) => {
                    assert!(list[i] >= val);
                    assert!(i == 0 || list[i - 1] < val);
                }
                None => assert!(list.iter().all(|&v| v < val)),
            }
        }
    }
}

#[test]
fn test_above_all_not_found() {
    for list in sorted_sequences() {
        let above = list.last().map_or(0.0, |&v| v + 1.0);
        for strategy in SearchStrategy::ALL {
            assert_eq!(strategy.search(&list, above), None, "{strategy:?}");
        }
    }
}

#[test]
fn test_at_or_below_first_returns_zero() {
    for list in sorted_sequences().into_iter().filter(|l| !l.is_empty()) {
        for val in [list[0], list[0] - 1.0, -1e12] {
            for strategy in SearchStrategy::ALL {
                assert_eq!(strategy.search(&list, val), Some(0), "{strategy:?}");
            }
        }
    }
}

#[test]
fn test_resumed_search_matches_full_search() {
    for list in sorted_sequences() {
        let mut start = 0;
        let mut queries = queries_for(&list);
        queries.sort_by(f64::total_cmp);
        for val in queries {
            let full = lower_bound_binary(&list, val);
            let resumed = lower_bound_from(&list, val, start);
            assert_eq!(full, resumed, "n={} val={val}", list.len());
            if let Some(i) = resumed {
                start = i;
            }
        }
    }
}

#[test]
fn test_default_strategy_is_adaptive() {
    assert_eq!(SearchStrategy::default(), SearchStrategy::Adaptive);
}
