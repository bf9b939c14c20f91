use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fp23_fft::format::{complex_to_samples, samples_to_complex, SampleWidth, SAMPLE_BIAS};
use fp23_fft::io::{load_samples, write_samples, TwiddleDir};
use fp23_fft::{CustomFft, GeneratedTwiddles, OutputOrder};

#[derive(Parser, Debug)]
#[command(name = "fpfft")]
#[command(about = "Run the FP23 FFT model over fixed-point sample files", long_about = None)]
struct Cli {
    /// Transform length (power of two, 8..=262144)
    #[arg(long, short = 'n', value_name = "POINTS")]
    size: usize,
    /// Real parts, one integer per line
    re: PathBuf,
    /// Imaginary parts, one integer per line
    im: PathBuf,
    /// Output file, `re    im` per line
    output: PathBuf,
    #[arg(long, value_enum, default_value = "roundtrip")]
    mode: Mode,
    /// Output order of the forward and inverse modes
    #[arg(long, value_enum, default_value = "raw")]
    order: Order,
    /// Fixed-point output scale, defaults to 16 + log2(size)
    #[arg(long)]
    scale: Option<u32>,
    #[arg(long, value_enum, default_value = "bits16")]
    width: Width,
    /// Directory holding fp23ww_<k>.dat tables; generated in process when absent
    #[arg(long, value_name = "DIR")]
    twiddles: Option<PathBuf>,
    /// Use Taylor-refined twiddles
    #[arg(long)]
    taylor: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Roundtrip,
    Forward,
    Inverse,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Natural,
    Raw,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Width {
    Bits16,
    Bits24,
}

impl From<Order> for OutputOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Natural => OutputOrder::Natural,
            Order::Raw => OutputOrder::Raw,
        }
    }
}

impl From<Width> for SampleWidth {
    fn from(width: Width) -> Self {
        match width {
            Width::Bits16 => SampleWidth::Bits16,
            Width::Bits24 => SampleWidth::Bits24,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let fft = match &cli.twiddles {
        Some(dir) => CustomFft::with_provider(cli.size, &TwiddleDir::new(dir), cli.taylor)?,
        None => CustomFft::with_provider(cli.size, &GeneratedTwiddles, cli.taylor)?,
    };
    let scale = cli.scale.unwrap_or(SAMPLE_BIAS as u32 + fft.stages());
    let order = OutputOrder::from(cli.order);

    let samples = load_samples(&cli.re, &cli.im, cli.size)?;
    let mut buffer = samples_to_complex(&samples, cli.width.into());

    match cli.mode {
        Mode::Forward => fft.forward(&mut buffer, order)?,
        Mode::Inverse => fft.inverse(&mut buffer, order)?,
        Mode::Roundtrip => {
            // Raw spectrum into the inverse network restores natural time order
            fft.forward(&mut buffer, OutputOrder::Raw)?;
            fft.inverse(&mut buffer, OutputOrder::Raw)?;
        }
    }

    let result = complex_to_samples(&buffer, scale);
    write_samples(BufWriter::new(File::create(&cli.output)?), &result)?;

    log::info!("Wrote {} samples to {} (scale {})", result.len(), cli.output.display(), scale);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
