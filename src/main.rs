use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    time::Instant,
};

use monkey::{display_error, lexer::lexer::tokenize, parser::parser::parse};

const PROMPT: &str = "> ";

fn main() {
    let args: Vec<String> = env::args().collect();

    let dump_tokens = args.iter().any(|arg| arg == "--tokens");
    let file_path = args.iter().skip(1).find(|arg| !arg.starts_with("--"));

    match file_path {
        Some(file_path) => run_file(file_path, dump_tokens),
        None => run_shell(),
    }
}

fn run_file(file_path: &str, dump_tokens: bool) {
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    if dump_tokens {
        let tokens = tokenize(file_contents.clone(), Some(String::from(file_name)));

        for token in &tokens {
            token.debug();
        }
    }

    let start = Instant::now();
    let (program, errors) = parse(file_contents.clone(), Some(String::from(file_name)));

    println!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            display_error(error, &file_contents);
        }
        std::process::exit(1);
    }

    println!("{}", program);
}

fn run_shell() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        stdout.flush().expect("Failed to flush stdout!");

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .expect("Failed to read from stdin!");

        // EOF on stdin
        if bytes_read == 0 {
            break;
        }

        let (program, errors) = parse(line, None);

        if !errors.is_empty() {
            for error in &errors {
                println!("\t{}", error);
            }
            continue;
        }

        println!("{}", program);
    }
}
