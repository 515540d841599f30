use std::env;
use std::process;
use std::time::{Duration, Instant};

use clap::{value_t, App, Arg, ArgGroup, ArgMatches};
use log::{debug, warn};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use pushbox_solver::config::{Format, Method};
use pushbox_solver::solver::{self, Control, Deadline, IterationLimit, Outcome, SearchResult, Stats};
use pushbox_solver::LoadLevel;

/// Naive enumeration never stops on unsolvable levels so it gets a limit
/// unless the user sets one.
const NAIVE_MAX_ITERATIONS: u64 = 1_000_000;

fn main() {
    env_logger::init();

    let app = App::new("pushbox-solver")
        .author("martin-t")
        .version("0.1")
        .about("Solves box-pushing puzzles by state space search")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&["naive", "bfs", "dfs", "best-first", "weighted", "all"])
                .default_value("bfs")
                .help("search method, all compares them"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format"),
        )
        .arg(
            Arg::with_name("digits")
                .short("d")
                .long("digits")
                .help("parse as digits format (0-5 per cell)"),
        )
        .group(ArgGroup::with_name("format").arg("xsb").arg("digits"))
        .arg(
            Arg::with_name("deadlocks")
                .long("deadlocks")
                .help("compute dead squares before searching and prune pushes onto them"),
        )
        .arg(
            Arg::with_name("show-deadlocks")
                .long("show-deadlocks")
                .help("print the level with dead squares marked as x (implies --deadlocks)"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .help("cancel each search after this many seconds"),
        )
        .arg(
            Arg::with_name("max-iterations")
                .short("i")
                .long("max-iterations")
                .takes_value(true)
                .value_name("N")
                .help("cancel each search after expanding this many nodes"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("level file"),
        );

    #[cfg(feature = "graph")]
    let app = app.arg(
        Arg::with_name("dot")
            .long("dot")
            .takes_value(true)
            .value_name("FILE")
            .help("write the explored nodes as a graphviz file (only with a single method)"),
    );

    let matches = app.get_matches();

    // clap validates possible values and requires file
    let path = matches.value_of("file").unwrap();
    let methods = match matches.value_of("method").unwrap() {
        "all" => Method::ALL.to_vec(),
        name => vec![name.parse().unwrap_or_else(|err: String| exit_with(&err))],
    };

    let format = if matches.is_present("xsb") {
        Some(Format::Xsb)
    } else if matches.is_present("digits") {
        Some(Format::Digits)
    } else {
        None
    };
    let loaded = match format {
        Some(format) => path.load_level_as(format),
        None => path.load_level(),
    };
    let level = loaded.unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        println!("Can't load level {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });

    let mut board = level.board();
    if matches.is_present("deadlocks") || matches.is_present("show-deadlocks") {
        board.analyze_deadlocks();
    }
    if matches.is_present("show-deadlocks") {
        println!("Dead squares: {}", board.dead_squares().len());
        println!("{}", board.xsb_with_deadlocks());
    }

    let mut results = Vec::new();
    for &method in &methods {
        println!("Solving {} using {}...", path, method);
        let mut control = Limits::new(&matches, method);

        let started = Instant::now();
        let result = solver::search(&mut board, method, &mut control);
        let elapsed = started.elapsed();

        print_result(&result);
        debug!("{} took {:?}", method, elapsed);
        write_graph(&matches, &result, methods.len());
        results.push((result, elapsed));
    }

    if results.len() > 1 {
        print!("{}", comparison(&results));
    }
}

fn exit_with(msg: &str) -> ! {
    println!("{}", msg);
    process::exit(1);
}

/// Cancels on whichever limit runs out first and reports progress.
struct Limits {
    deadline: Option<Deadline>,
    iterations: Option<IterationLimit>,
}

impl Limits {
    fn new(matches: &ArgMatches<'_>, method: Method) -> Self {
        let deadline = if matches.is_present("timeout") {
            let secs = value_t!(matches, "timeout", u64).unwrap_or_else(|e| e.exit());
            Some(Deadline(Instant::now() + Duration::from_secs(secs)))
        } else {
            None
        };

        let iterations = if matches.is_present("max-iterations") {
            let max = value_t!(matches, "max-iterations", u64).unwrap_or_else(|e| e.exit());
            Some(IterationLimit::new(max))
        } else if method == Method::Naive && deadline.is_none() {
            warn!(
                "No limit given, naive search will stop after {} sequences",
                NAIVE_MAX_ITERATIONS.separated_string()
            );
            Some(IterationLimit::new(NAIVE_MAX_ITERATIONS))
        } else {
            None
        };

        Limits {
            deadline,
            iterations,
        }
    }
}

impl Control for Limits {
    fn cancelled(&mut self) -> bool {
        // poll both so the iteration count stays exact
        let out_of_iterations = self
            .iterations
            .as_mut()
            .map_or(false, |limit| limit.cancelled());
        let out_of_time = self
            .deadline
            .as_mut()
            .map_or(false, |deadline| deadline.cancelled());
        out_of_iterations || out_of_time
    }

    fn on_new_depth(&mut self, depth: usize, stats: &Stats) {
        println!("Visited new depth: {}", depth);
        println!("{}", stats.summary());
    }
}

fn print_result(result: &SearchResult) {
    match result.outcome {
        Outcome::Solved(ref moves) => {
            println!("Found solution:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        Outcome::Cancelled => println!("Cancelled"),
        Outcome::Exhausted => println!("No solution"),
    }
    println!();
    println!("{}", result.stats);
}

#[cfg(feature = "graph")]
fn write_graph(matches: &ArgMatches<'_>, result: &SearchResult, method_cnt: usize) {
    use std::fs::File;

    use pushbox_solver::solver::graph::Graph;

    let path = match matches.value_of("dot") {
        Some(path) => path,
        None => return,
    };
    if method_cnt > 1 {
        warn!("Writing only the graph of {}", result.method);
    }
    let written = File::create(path).and_then(|mut file| Graph::new(result).render(&mut file));
    match written {
        Ok(()) => println!("Graph written to {}", path),
        Err(err) => println!("Can't write graph to {}: {}", path, err),
    }
}

#[cfg(not(feature = "graph"))]
fn write_graph(_matches: &ArgMatches<'_>, _result: &SearchResult, _method_cnt: usize) {}

fn comparison(results: &[(SearchResult, Duration)]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Method", "Outcome", "Moves", "Pushes", "Explored", "Time (ms)"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for (result, elapsed) in results {
        let (outcome, moves, pushes) = match result.outcome {
            Outcome::Solved(ref moves) => (
                "solved",
                moves.move_cnt().to_string(),
                moves.push_cnt().to_string(),
            ),
            Outcome::Cancelled => ("cancelled", "-".to_owned(), "-".to_owned()),
            Outcome::Exhausted => ("no solution", "-".to_owned(), "-".to_owned()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&result.method.to_string()),
            Cell::new(outcome),
            Cell::new(&moves),
            Cell::new(&pushes),
            Cell::new(&result.explored.len().separated_string()),
            Cell::new(&(elapsed.as_millis() as u64).separated_string()),
        ]));
    }
    table
}
