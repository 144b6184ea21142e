use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use stopwatch::Stopwatch;

use dense_paths::{
    create_reconstructor, prepare, DistanceMatrix, InputGraph, PathResult, WEIGHT_INF,
};

fn main() {
    // e.g. run like this:
    // cargo run --release input/test1.txt output/test1.txt --paths
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        panic!("You need to pass input and output file names");
    }
    let input_file = &args[1];
    let output_file = &args[2];
    let with_paths = args.iter().any(|a| a == "--paths");

    let input_graph = InputGraph::from_file(input_file);
    println!(
        "number of nodes (input graph) ..... {}",
        input_graph.get_num_nodes()
    );
    println!(
        "number of edges (input graph) ..... {}",
        input_graph.get_num_edges()
    );

    let mut prep_time = Stopwatch::new();
    prep_time.start();
    let matrix = prepare(&input_graph);
    prep_time.stop();
    println!(
        "preparation time .................. {} ms",
        prep_time.elapsed_ms()
    );

    let mut report_time = Stopwatch::new();
    report_time.start();
    write_report(&matrix, output_file, with_paths).expect("writing the report failed");
    report_time.stop();
    println!(
        "report time ....................... {} ms",
        report_time.elapsed_ms()
    );
}

fn write_report(
    matrix: &DistanceMatrix,
    filename: &str,
    with_paths: bool,
) -> Result<(), std::io::Error> {
    let mut f = BufWriter::new(File::create(filename)?);
    let mut reconstructor = create_reconstructor(matrix);
    for &from in matrix.get_vertices() {
        for &to in matrix.get_vertices() {
            if from == to {
                continue;
            }
            let weight = matrix.calc_weight(from, to);
            if weight == WEIGHT_INF {
                writeln!(f, "from: {} to: {} - INF", from, to)?;
                continue;
            }
            if !with_paths {
                writeln!(f, "from: {} to: {} - {}", from, to, weight)?;
                continue;
            }
            match reconstructor.calc_path(matrix, from, to) {
                PathResult::Found(path) => writeln!(
                    f,
                    "from: {} to: {} - {} via {:?}",
                    from,
                    to,
                    weight,
                    path.get_nodes()
                )?,
                PathResult::CycleDetected => {
                    writeln!(f, "from: {} to: {} - negative cycle", from, to)?
                }
                // a finite distance always has a walkable hop chain
                PathResult::NoPath => unreachable!(),
            }
        }
    }
    Ok(())
}
