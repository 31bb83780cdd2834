use bulk_sssp::graph::read_adjacency_list;
use bulk_sssp::{AdjacencyRecord, BulkSssp, EngineConfig};
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("usage: shortest_paths <graph-file> [source-vertex] [iteration-limit]");
        process::exit(2);
    }

    let records = match load_graph(&args[1]) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("error reading {}: {}", args[1], err);
            process::exit(1);
        }
    };
    if records.is_empty() {
        eprintln!("error: {} holds no edges", args[1]);
        process::exit(1);
    }

    // An explicit source keeps runs reproducible; without one, sample an
    // origin at random the way the original demo driver did
    let source = match args.get(2) {
        Some(vertex) => vertex.clone(),
        None => {
            let origins: Vec<&String> = records.iter().map(|record| &record.origin).collect();
            let mut rng = rand::thread_rng();
            match origins.choose(&mut rng) {
                Some(origin) => {
                    eprintln!("no source given, sampled {}", origin);
                    (*origin).clone()
                }
                None => unreachable!("records checked non-empty above"),
            }
        }
    };

    let mut config = EngineConfig::new();
    if let Some(limit) = args.get(3) {
        match limit.parse() {
            Ok(limit) => config = config.with_iteration_limit(limit),
            Err(_) => {
                eprintln!("error: iteration limit `{}` is not a number", limit);
                process::exit(2);
            }
        }
    }

    let engine = BulkSssp::with_config(config);
    let result = match engine.run(records, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    // One JSON line per settled vertex, lightest first
    let mut settled: Vec<_> = result.settled.iter().collect();
    settled.sort_by_key(|(_, record)| record.weight);
    for (vertex, record) in settled {
        println!(
            "{}",
            serde_json::json!({
                "vertex": vertex,
                "weight": record.weight.into_inner(),
                "path": &record.path,
            })
        );
    }

    eprintln!(
        "{:?} after {} rounds from {}: {} settled, {} unsettled",
        result.termination,
        result.rounds,
        result.source,
        result.settled.len(),
        result.unsettled.len()
    );
}

fn load_graph(path: &str) -> bulk_sssp::Result<Vec<AdjacencyRecord<String, OrderedFloat<f64>>>> {
    let file = File::open(path)?;
    read_adjacency_list(BufReader::new(file))
}
