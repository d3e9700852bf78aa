//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "moviedialogs", about = "Movie Dialog dataset tool.")]
/// Holds every command that is callable by the `moviedialogs` command.
pub enum MovieDialogs {
    #[structopt(about = "Download and extract the archive of a configuration")]
    Download(Download),
    #[structopt(about = "Convert the splits of a configuration to JSON lines")]
    Convert(Convert),
    #[structopt(about = "Parse a single dialog file and print records on stdout")]
    Parse(Parse),
    #[structopt(about = "Print dataset information")]
    Info(Info),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
/// ```sh
/// moviedialogs-download 0.1.0
/// Download and extract the archive of a configuration
///
/// USAGE:
///     moviedialogs download <config> <dst>
///
/// ARGS:
///     <config>    configuration name (qa, recommendations, qa_recommendations, reddit, knowledge_base)
///     <dst>       download and extraction destination
/// ```
pub struct Download {
    #[structopt(
        help = "configuration name (qa, recommendations, qa_recommendations, reddit, knowledge_base)"
    )]
    pub config: String,
    #[structopt(parse(from_os_str), help = "download and extraction destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// ```sh
/// moviedialogs-convert 0.1.0
/// Convert the splits of a configuration to JSON lines
///
/// USAGE:
///     moviedialogs convert [FLAGS] <src> <dst> <config>
///
/// FLAGS:
///     -c, --checksum          write a sha384 checksum file
///     -s, --skip-malformed    skip lines that do not follow the dialog format instead of failing
///
/// ARGS:
///     <src>       extracted data folder
///     <dst>       destination folder
///     <config>    configuration name
/// ```
pub struct Convert {
    #[structopt(parse(from_os_str), help = "extracted data folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(help = "configuration name")]
    pub config: String,
    #[structopt(
        short = "s",
        long = "skip-malformed",
        help = "skip lines that do not follow the dialog format instead of failing"
    )]
    pub skip_malformed: bool,
    #[structopt(short = "c", long = "checksum", help = "write a sha384 checksum file")]
    pub checksum: bool,
}

#[derive(Debug, StructOpt)]
pub struct Parse {
    #[structopt(parse(from_os_str), help = "dialog file")]
    pub src: PathBuf,
    #[structopt(
        short = "s",
        long = "skip-malformed",
        help = "skip lines that do not follow the dialog format instead of failing"
    )]
    pub skip_malformed: bool,
}

#[derive(Debug, StructOpt)]
pub struct Info {
    #[structopt(help = "configuration name. Lists configurations if omitted.")]
    pub config: Option<String>,
}
