use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use clap::Parser;
use collections::{HashTable, TableError, hashmap::HASHSIZE};
use log::{debug, error};
use thiserror::Error;
use wordindex::Tokens;

/// Install every word of a file into a definition table and print the table
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text file whose words become names in the table
    file: PathBuf,

    /// Definition installed for every word
    #[arg(long, default_value = "some defn")]
    defn: String,

    /// Number of buckets in the table
    #[arg(long, default_value_t = HASHSIZE)]
    buckets: usize,
}

#[derive(Debug, Error)]
enum DeftabError {
    #[error("Could not open file: '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    env_logger::builder().init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!(target: "main", "{e:?}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DeftabError> {
    let mut table = HashTable::with_buckets(cli.buckets)?;
    let file = File::open(&cli.file).map_err(|source| DeftabError::Open {
        path: cli.file.clone(),
        source,
    })?;

    let mut added = 0;
    for token in Tokens::new(BufReader::new(file)) {
        let token = token?;
        if table.install(&token.raw, &cli.defn).is_none() {
            added += 1;
        } else {
            debug!(target: "install", "redefined {:?} on line {}", token.raw, token.line);
        }
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{added} words added...")?;
    print_table(&mut out, &table)?;

    writeln!(out, "\nclearing hash table...")?;
    table.clear();
    writeln!(out, "cleared")?;
    print_table(&mut out, &table)?;
    out.flush()?;

    Ok(())
}

fn print_table<W: Write>(out: &mut W, table: &HashTable) -> io::Result<()> {
    for (i, chain) in table.chains() {
        writeln!(out, "{i}...")?;
        for node in chain {
            writeln!(out, "\t'{}': {}", node.name(), node.defn())?;
        }
    }
    Ok(())
}
