//! HeiSanban - CLI Entry Point
//!
//! Commands:
//! - `heisanban` - Interactive terminal abacus
//! - `heisanban eval <digits>` - Evaluate a digit string such as `+-0`
//! - `heisanban table` - Print the addition/subtraction combination table
//! - `heisanban demo` - Walk through a few bead configurations
//! - `heisanban self-test` - Run the built-in checks

use clap::{Parser, Subcommand};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;
use heisanban::{Abacus, AbacusConfig, BeadSide, NotationStyle, Trit};
use heisanban::config::DEFAULT_RODS;

#[derive(Parser)]
#[command(name = "heisanban")]
#[command(version = "0.1.0")]
#[command(about = "An interactive balanced ternary abacus")]
struct Cli {
    /// Number of rods (each one a power of three)
    #[arg(short, long, default_value_t = DEFAULT_RODS, global = true)]
    rods: usize,
    /// Notation used for the power-of-three terms
    #[arg(short, long, value_enum, default_value_t = NotationStyle::Plain, global = true)]
    notation: NotationStyle,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate digits written most significant first (+/0/- or P/O/N)
    Eval {
        /// Digit string, e.g. "+-0" or "PNO"
        #[arg(allow_hyphen_values = true)]
        digits: String,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print how small targets are built from powers of three
    Table {
        /// Largest target magnitude (at most 9841, and no more than the rods can show)
        #[arg(short, long, default_value = "13")]
        max: u32,
        /// Show negative targets (subtraction table)
        #[arg(short, long)]
        subtract: bool,
    },
    /// Walk through a few bead configurations
    Demo,
    /// Run the built-in self-test
    SelfTest,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = AbacusConfig { rods: cli.rods, notation: cli.notation };
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    match cli.command {
        Some(Commands::Eval { digits, json }) => {
            eval_digits(&config, &digits, json);
        }
        Some(Commands::Table { max, subtract }) => {
            print_table(&config, max, subtract);
        }
        Some(Commands::Demo) => {
            demo(&config);
        }
        Some(Commands::SelfTest) => {
            run_self_test();
        }
        None => {
            interactive(&config);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(err: impl Display) -> ! {
    eprintln!("❌ {}", err);
    std::process::exit(1);
}

#[cfg(feature = "tui")]
fn interactive(config: &AbacusConfig) {
    if let Err(e) = heisanban::run_abacus(config) {
        exit_with(format!("Terminal error: {}", e));
    }
}

#[cfg(not(feature = "tui"))]
fn interactive(config: &AbacusConfig) {
    println!("HeiSanban v0.1.0");
    println!("Built without the terminal front end; use --help for available commands");
    println!();
    demo(config);
}

/// Set an abacus to the given LSB-first digits by clicking beads.
fn enter_digits(abacus: &mut Abacus, digits: &[Trit]) -> Result<(), heisanban::AbacusError> {
    for (rod, digit) in digits.iter().enumerate() {
        match digit {
            Trit::P => { abacus.toggle_bead(rod, BeadSide::Top)?; }
            Trit::N => { abacus.toggle_bead(rod, BeadSide::Bottom)?; }
            Trit::O => {}
        }
    }
    Ok(())
}

fn eval_digits(config: &AbacusConfig, input: &str, json: bool) {
    use heisanban::ternary::{format_digits, parse_digits};

    let digits = match parse_digits(input) {
        Ok(d) => d,
        Err(e) => exit_with(e),
    };
    if digits.len() > config.rods {
        exit_with(format!("{} digits do not fit on {} rods (use --rods)", digits.len(), config.rods));
    }

    let mut abacus = match Abacus::with_config(config) {
        Ok(a) => a,
        Err(e) => exit_with(e),
    };
    if let Err(e) = enter_digits(&mut abacus, &digits) {
        exit_with(e);
    }
    let evaluation = abacus.evaluate();

    if json {
        match serde_json::to_string_pretty(&evaluation) {
            Ok(s) => println!("{}", s),
            Err(e) => exit_with(e),
        }
        return;
    }

    let renderer = config.notation.renderer();
    println!("Digits:   {}", format_digits(abacus.digits().as_slice()));
    println!("Total:    {}", evaluation.total);
    println!("Notation: {}", renderer.render(&evaluation.terms));
}

fn print_table(config: &AbacusConfig, max: u32, subtract: bool) {
    use heisanban::{combination_table, TableKind};

    let kind = if subtract { TableKind::Subtraction } else { TableKind::Addition };
    let rows = match combination_table(kind, max, config.rods) {
        Ok(rows) => rows,
        Err(e) => exit_with(e),
    };

    let renderer = config.notation.renderer();
    let heading = if subtract { "Target (-n)" } else { "Target (+n)" };
    println!("{:<12} Combination in powers of 3", heading);
    println!("{}", "─".repeat(40));
    for row in rows {
        println!("{:<12} {}", format!("{:+}", row.target), renderer.render(&row.terms));
    }
}

fn demo(config: &AbacusConfig) {
    let renderer = config.notation.renderer();
    let mut abacus = match Abacus::new(3) {
        Ok(a) => a,
        Err(e) => exit_with(e),
    };

    println!("━━━ Balanced Ternary Abacus ━━━");
    println!();
    println!("Three rods: 3^2 = 9, 3^1 = 3, 3^0 = 1");
    println!();

    let steps = [
        (0, BeadSide::Top, "top bead on 3^0"),
        (1, BeadSide::Bottom, "bottom bead on 3^1"),
        (2, BeadSide::Top, "top bead on 3^2"),
        (2, BeadSide::Bottom, "bottom bead on 3^2 (balanced zero)"),
    ];
    for (rod, side, label) in steps {
        if let Err(e) = abacus.toggle_bead(rod, side) {
            exit_with(e);
        }
        let evaluation = abacus.evaluate();
        println!("  {:<36} {} = {:>3}   {}", label, abacus.digits(), evaluation.total, renderer.render(&evaluation.terms));
    }

    abacus.clear();
    println!("  {:<36} {} = {:>3}", "clear", abacus.digits(), abacus.evaluate().total);
}

fn run_self_test() {
    use heisanban::{combination_table, Evaluation, RodForm, TableKind};
    use heisanban::ternary::{decompose, max_magnitude};

    println!("━━━ HeiSanban Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;
    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    // Test 1: mixed digits, most significant term first
    let mut abacus = Abacus::new(3).ok();
    let ok = abacus.as_mut().is_some_and(|a| {
        enter_digits(a, &[Trit::P, Trit::N, Trit::O]).is_ok()
            && a.evaluate().total == -2
            && a.evaluate().term_pairs() == vec![(-1, 1), (1, 0)]
    });
    check("Mixed digits evaluate to -2", ok);

    // Test 2: highest rod on the default abacus
    let mut abacus = Abacus::default();
    let ok = abacus.toggle_bead(6, BeadSide::Top).is_ok() && abacus.evaluate().total == 729;
    check("Rod 3^6 is worth 729", ok);

    // Test 3: balanced zero
    let ok = abacus.toggle_bead(6, BeadSide::Bottom).is_ok()
        && abacus.evaluate() == Evaluation::default()
        && abacus.rod(6).map(|r| r.form()) == Ok(RodForm::Balanced);
    check("Balanced zero contributes nothing", ok);

    // Test 4: clear
    abacus.clear();
    let ok = abacus.rods().all(|r| r.form() == RodForm::Empty) && abacus.evaluate() == Evaluation::default();
    check("Clear returns every rod to empty", ok);

    // Test 5: bounds
    let ok = abacus.toggle_bead(7, BeadSide::Top).is_err()
        && abacus.toggle_bead_signed(-1, BeadSide::Top).is_err();
    check("Out-of-range rods are rejected", ok);

    // Test 6: decomposition covers the whole range
    let max = max_magnitude(DEFAULT_RODS).unwrap_or(0);
    let ok = (-max..=max).all(|v| {
        decompose(v, DEFAULT_RODS)
            .and_then(|d| Evaluation::of(&d))
            .is_some_and(|e| e.total == v)
    });
    check("Every value in range has a decomposition", ok);

    // Test 7: combination table
    let ok = combination_table(TableKind::Addition, 13, 3).is_ok_and(|rows| rows.len() == 13);
    check("Addition table up to 13 on 3 rods", ok);

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
