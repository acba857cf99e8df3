use argh::FromArgs;
use log::error;
use std::fs::File;
use std::io::{self, BufReader, Write};

use crate::subset;

#[derive(FromArgs, PartialEq)]
#[argh(description = "CLI for firoq")]
struct Global {
    #[argh(subcommand)]
    nested: SubCommands,
}

#[derive(FromArgs, PartialEq)]
#[argh(subcommand)]
enum SubCommands {
    Subset(Subset),
}

#[derive(FromArgs, PartialEq)]
#[argh(
    subcommand,
    name = "subset",
    description = "Copy the first K lines of the input to stdout"
)]
struct Subset {
    #[argh(
        option,
        short = 'k',
        long = "lines",
        description = "number of lines to copy"
    )]
    lines: u64,

    #[argh(
        option,
        short = 'i',
        long = "input",
        description = "read from this file instead of stdin"
    )]
    input: Option<String>,
}

pub fn run() {
    env_logger::init();

    let args: Global = argh::from_env();
    match args.nested {
        SubCommands::Subset(command) => {
            let stdout = io::stdout();
            let mut output = stdout.lock();

            let result = match command.input {
                Some(path) => match File::open(&path) {
                    Ok(file) => {
                        subset::copy_lines(command.lines, BufReader::new(file), &mut output)
                    }
                    Err(e) => {
                        error!("Cannot open {}: {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => {
                    let stdin = io::stdin();
                    subset::copy_lines(command.lines, stdin.lock(), &mut output)
                }
            };

            if let Err(e) = result.and_then(|_| output.flush()) {
                error!("Error copying lines: {}", e);
                std::process::exit(1);
            }
        }
    }
}
