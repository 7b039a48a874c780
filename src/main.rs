use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::debug;
use mathcheck::{
    generator::generate_easy_problem,
    interpreter::evaluator::core::{Evaluator, Limits},
    quiz::Quiz,
};
use rand::{SeedableRng, rngs::StdRng};

/// mathcheck evaluates arithmetic expressions safely and checks answers
/// against them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    limits: LimitArgs,

    #[command(subcommand)]
    command: Command,
}

/// Overrides for the evaluation bounds.
#[derive(ClapArgs, Debug)]
struct LimitArgs {
    /// Largest magnitude allowed for any result.
    #[arg(long, global = true, default_value_t = Limits::default().max_abs_result)]
    max_result: f64,

    /// Largest magnitude allowed for the base of `**`.
    #[arg(long, global = true, default_value_t = Limits::default().max_abs_base)]
    max_base: f64,

    /// Largest magnitude allowed for the exponent of `**`.
    #[arg(long, global = true, default_value_t = Limits::default().max_abs_exponent)]
    max_exponent: f64,

    /// Longest accepted expression, in characters.
    #[arg(long, global = true, default_value_t = Limits::default().max_input_len)]
    max_length: usize,

    /// Deepest accepted nesting of parentheses, signs and exponents.
    #[arg(long, global = true, default_value_t = Limits::default().max_nesting)]
    max_nesting: usize,
}

impl From<&LimitArgs> for Limits {
    fn from(args: &LimitArgs) -> Self {
        Self { max_abs_result:   args.max_result,
               max_abs_base:     args.max_base,
               max_abs_exponent: args.max_exponent,
               max_input_len:    args.max_length,
               max_nesting:      args.max_nesting, }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression and prints the result.
    Eval {
        expression: String,
    },
    /// Locks in an equation and checks an answer against it.
    Check {
        /// The equation whose result is the expected answer.
        #[arg(short, long)]
        equation: String,

        /// The submitted answer; may itself be an expression such as `3/4`.
        #[arg(short, long)]
        answer: String,
    },
    /// Prints a random easy problem.
    Random {
        /// Seed for reproducible problems.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Starts an interactive session on standard input.
    ///
    /// `:set <expr>` locks an equation, `:random` locks a random one, `:show`
    /// reveals the answer and `:quit` exits. Any other line is an answer.
    Quiz {
        /// Seed for reproducible random problems.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let evaluator = Evaluator::new(Limits::from(&args.limits));
    debug!("limits: {:?}", evaluator.limits);

    match args.command {
        Command::Eval { expression } => match evaluator.safe_eval(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
        Command::Check { equation, answer } => {
            let mut quiz = Quiz::new(evaluator);
            if let Err(e) = quiz.set_equation(&equation) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            match quiz.check_answer(&answer) {
                Ok(verdict) => {
                    println!("{verdict}");
                    if verdict.is_correct() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(2)
                    }
                },
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            }
        },
        Command::Random { seed } => {
            println!("{}", generate_easy_problem(&mut rng_from(seed)));
            ExitCode::SUCCESS
        },
        Command::Quiz { seed } => match run_quiz(evaluator, &mut rng_from(seed)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                ExitCode::FAILURE
            },
        },
    }
}

fn run_quiz(evaluator: Evaluator, rng: &mut StdRng) -> io::Result<()> {
    let mut quiz = Quiz::new(evaluator);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Enter `:set <expr>` or `:random` to lock an equation, then type answers.");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line == ":quit" {
            break;
        } else if let Some(expr) = line.strip_prefix(":set") {
            match quiz.set_equation(expr) {
                Ok(locked) => println!("Equation accepted: `{}`. Now enter your answer.",
                                       locked.text),
                Err(e) => println!("{e}"),
            }
        } else if line == ":random" {
            let problem = generate_easy_problem(rng);
            match quiz.set_equation(&problem) {
                Ok(locked) => println!("Random problem set: `{}`. Enter your answer.",
                                       locked.text),
                Err(e) => println!("Generated invalid equation (unexpected): {e}"),
            }
        } else if line == ":show" {
            match quiz.reveal() {
                Some(answer) => println!("The correct answer is {answer}."),
                None => println!("No correct answer to show."),
            }
        } else {
            match quiz.check_answer(line) {
                Ok(verdict) => println!("{verdict}"),
                Err(e) => println!("{e}"),
            }
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
