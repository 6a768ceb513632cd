mod cli;
mod helper;
mod session;
mod settings;
mod terminal;

use cli::Parser;
use colored::Colorize;
use dicer_lib::meta;
use helper::ReplHelper;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use session::Session;
use settings::Settings;
use terminal::Terminal;
use tracing::info;
use tracing::Level;
use tracing_unwrap::OptionExt;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let settings = Settings::load(&args.config);
    if args.dump_config {
        println!("{}", settings.dump());
        return Ok(());
    }

    let mut terminal = Terminal::new();
    if !args.terms.is_empty() {
        let mut session = Session::new(true);
        session.handle(&args.terms.join(" "), &mut terminal);
        return Ok(());
    }
    repl(&settings, &mut terminal)
}

fn repl(settings: &Settings, terminal: &mut Terminal) -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&settings.history_file).is_err() {
        eprintln!("{}", "dicer: warn: no previous history".bold().yellow());
    }
    info!("{} ({})", meta::NAME, meta::PLUGIN_ID);
    let mut session = Session::new(settings.auto_trigger);
    let mut count = 1u64;
    loop {
        let prompt = format!("{}: {}> ", settings.prompt, count);
        rline.helper_mut().expect_or_log("dicer: no helper").colored =
            prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                session.handle(&line, terminal);
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "dicer: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "dicer: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("dicer: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&settings.history_file)
}
