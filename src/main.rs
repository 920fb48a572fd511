use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use searchtree::cli::Cli;
use searchtree::unbalanced::Tree;
use searchtree::workload::{PhaseReport, Workload};
use searchtree::WorkloadError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), WorkloadError> {
    let config = cli.workload_config()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut workload = Workload::new(config, rng);
    tracing::debug!(config = ?workload.config(), seed = ?cli.seed, "starting workload");
    let mut tree = Tree::new();

    println!("Create the tree...");
    let insert = workload.insert_phase(&mut tree)?;
    print_report(&insert);

    if cli.print {
        println!("Tree after insertions:");
        print!("{}", tree);
    }

    let search = workload.search_phase(&tree)?;
    print_report(&search);
    println!("Total items found: {}", search.hits);

    let delete = workload.delete_phase(&mut tree)?;
    print_report(&delete);

    tracing::info!(height = ?tree.height(), "remaining tree");
    Ok(())
}

fn print_report(report: &PhaseReport) {
    println!(
        "Total time used for {} in nanos: {}",
        report.phase,
        report.elapsed.as_nanos()
    );
    println!(
        "Average time used for each {} in nanos: {}",
        report.phase,
        report.average_nanos()
    );
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
