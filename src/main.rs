use clap::Parser;
use formulite::{compare, evaluate, evaluate_int};

/// formulite evaluates flat arithmetic expressions and numeric comparisons.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a conditional expression and print the boolean
    /// outcome of its comparison.
    #[arg(short, long)]
    compare: bool,

    /// Truncate the result toward zero and print it as an integer.
    #[arg(short, long)]
    int: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let output = if args.compare {
        compare(&args.expression).map(|outcome| outcome.to_string())
    } else if args.int {
        evaluate_int(&args.expression).map(|result| result.to_string())
    } else {
        evaluate(&args.expression).map(|result| result.to_string())
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
