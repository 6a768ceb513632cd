use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const DICER_AUTHOR: &str = crate_authors!();
const DICER_VERSION: &str = crate_version!();
const DICER_ABOUT: &str = crate_description!();
const DICER_FLAG_D_SHORT: char = 'd';
const DICER_FLAG_D_HELP: &str = "Enable Debug logging";
const DICER_FLAG_C_SHORT: char = 'c';
const DICER_FLAG_C_HELP: &str = "RON settings file";
const DICER_FLAG_DUMP_HELP: &str = "Print the effective settings and exit";
const DICER_TERMS_HELP: &str = "Dice notations to roll once, e.g. `2d6+1 1d20`";

#[derive(Parser, Debug)]
#[command(author = DICER_AUTHOR, version = DICER_VERSION, about = DICER_ABOUT)]
pub struct Args {
    #[arg(short = DICER_FLAG_D_SHORT, long, help = DICER_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = DICER_FLAG_C_SHORT, long, help = DICER_FLAG_C_HELP, default_value = "dicer.ron")]
    pub config: PathBuf,
    #[arg(long, help = DICER_FLAG_DUMP_HELP, action)]
    pub dump_config: bool,
    #[arg(help = DICER_TERMS_HELP)]
    pub terms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_terms() {
        let args = Args::parse_from(["dicer", "-d", "2d6+1", "1d20"]);
        assert!(args.debug);
        assert_eq!(vec!["2d6+1", "1d20"], args.terms);
        assert_eq!(PathBuf::from("dicer.ron"), args.config);
    }

    #[test]
    fn interactive_by_default() {
        let args = Args::parse_from(["dicer", "--config", "other.ron"]);
        assert!(!args.debug && !args.dump_config);
        assert!(args.terms.is_empty());
        assert_eq!(PathBuf::from("other.ron"), args.config);
    }
}
