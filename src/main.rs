use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use bf_tape::cli_util::print_program_error;
use bf_tape::{ByteReader, Interpreter, Keyboard};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bft",
    version,
    about = "Run Brainfuck programs against an unbounded bidirectional tape",
    after_help = "The program text is the concatenation of the FILE arguments, in order. \
                  With no FILE, the program is read from stdin; note that this interferes \
                  with ',' input taken from the same stream.\n\n\
                  When stdin is a terminal, ',' reads a single raw keystroke without echo \
                  (Ctrl+D for end of input). Otherwise ',' consumes stdin one byte at a time."
)]
struct Cli {
    /// Run CODE directly instead of reading program files
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "files")]
    eval: Option<String>,

    /// Program files, concatenated in order; stdin when absent
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

fn load_program(program: &str, cli: &Cli) -> Result<String, ExitCode> {
    if let Some(code) = &cli.eval {
        return Ok(code.clone());
    }

    if cli.files.is_empty() {
        let mut code = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut code) {
            eprintln!("{program}: failed to read program from stdin as UTF-8: {e}");
            return Err(ExitCode::FAILURE);
        }
        return Ok(code);
    }

    let mut code = String::new();
    for path in &cli.files {
        match fs::read_to_string(path) {
            Ok(s) => code.push_str(&s),
            Err(e) => {
                eprintln!("{program}: failed to read program file '{path}': {e}");
                return Err(ExitCode::FAILURE);
            }
        }
    }
    Ok(code)
}

fn main() -> ExitCode {
    let program = env::args().next().unwrap_or_else(|| String::from("bft"));
    let cli = Cli::parse();

    let code = match load_program(&program, &cli) {
        Ok(code) => code,
        Err(exit) => return exit,
    };

    let interpreter = match Interpreter::new(&code) {
        Ok(interpreter) => interpreter,
        Err(err) => {
            print_program_error(Some(&program), &code, &err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    // Interactive stdin gets single-keystroke, no-echo input; anything
    // piped or redirected is consumed as a plain byte stream.
    let result = if io::stdin().is_terminal() {
        interpreter.run(&mut Keyboard, &mut output)
    } else {
        interpreter.run(&mut ByteReader::new(io::stdin().lock()), &mut output)
    };

    if let Err(err) = result {
        print_program_error(Some(&program), &code, &err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
