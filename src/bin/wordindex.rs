use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{error, trace};
use wordindex::{IndexError, Order, WordTree, index_file, printer};

/// Index the words of a text file by the lines they appear on
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text file to index
    file: PathBuf,

    /// Order to print the index in: in, pre, post or reverse (repeatable)
    #[arg(short, long = "order", value_name = "ORDER")]
    orders: Vec<Order>,

    /// Leave out stop words and one letter words
    #[arg(long)]
    skip_noise: bool,
}

fn main() {
    env_logger::builder().init();
    let cli = Cli::parse();
    trace!(target: "main", "{cli:?}");

    if let Err(e) = run(&cli) {
        error!(target: "main", "{e:?}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), IndexError> {
    let orders = if cli.orders.is_empty() {
        vec![Order::In, Order::Reverse]
    } else {
        cli.orders.clone()
    };

    let mut tree = WordTree::new();
    let stats = index_file(&mut tree, &cli.file, cli.skip_noise)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{} words added...", stats.added)?;
    if cli.skip_noise {
        writeln!(out, "{} noise words skipped...", stats.noise)?;
    }
    writeln!(out)?;

    printer::write_report(&mut out, &tree, &orders)?;
    writeln!(out, "tree size is: {}", tree.size())?;

    writeln!(out, "clearing tree...")?;
    tree.clear();
    writeln!(out, "after clearing tree, size is: {}", tree.size())?;
    out.flush()?;

    Ok(())
}
