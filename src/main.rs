//! # moviedialogs
//!
//! Parsing of the Movie Dialog dataset (question answering, recommendation and discussion dialogs about movies).
//!
//! Dialog files are bAbI-like: numbered lines, the numbering restarting when a new conversation begins.
//! This tool downloads the archives, and converts the train/validation/test splits of a configuration into JSON lines.
//!
//! ## Getting started
//!
//! ```sh
//! moviedialogs 0.1.0
//! Movie Dialog dataset tool.
//!
//! USAGE:
//!     moviedialogs <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     convert     Convert the splits of a configuration to JSON lines
//!     download    Download and extract the archive of a configuration
//!     help        Prints this message or the help of the given subcommand(s)
//!     info        Print dataset information
//!     parse       Parse a single dialog file and print records on stdout
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.
use std::io::Write;

use moviedialogs::dataset::{ConfigTable, DatasetInfo, DirResolver, Downloader};
use moviedialogs::dialog::{DialogReader, OnMalformed};
use moviedialogs::error::Error;
use moviedialogs::pipelines::{Convert, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn policy(skip_malformed: bool) -> OnMalformed {
    if skip_malformed {
        OnMalformed::Skip
    } else {
        OnMalformed::Abort
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::MovieDialogs::from_args();
    debug!("cli args\n{:#?}", opt);

    let table = ConfigTable::default();

    match opt {
        cli::MovieDialogs::Download(d) => {
            let config = table.get(&d.config)?;
            Downloader::new().fetch(config.archive, &d.dst)?;
        }

        cli::MovieDialogs::Convert(c) => {
            let config = table.get(&c.config)?.clone();
            let p = Convert::new(DirResolver::new(c.src), config, c.dst)
                .on_malformed(policy(c.skip_malformed))
                .checksum(c.checksum);
            let stats = p.run()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        cli::MovieDialogs::Parse(p) => {
            let reader = DialogReader::from_path(&p.src)?.with_policy(policy(p.skip_malformed));
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for record in reader {
                serde_json::to_writer(&mut out, &record?)?;
                out.write_all(b"\n")?;
            }
        }

        cli::MovieDialogs::Info(i) => match i.config {
            Some(name) => {
                let info = DatasetInfo::new(table.get(&name)?);
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
            None => {
                for config in table.iter() {
                    println!("{}\t{}", config.name, config.description);
                }
            }
        },
    };
    Ok(())
}
