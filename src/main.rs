use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use delivery_glm::cleaner::CleanerConfig;
use delivery_glm::estimators::hyperparams::ModelKind;
use delivery_glm::pipeline::{run, PipelineConfig};
use delivery_glm::report::comparison_table;

#[derive(Parser)]
#[command(name = "delivery-glm")]
#[command(about = "Food delivery time prediction with linear, ridge and lasso regression")]
#[command(version)]
struct Cli {
    /// CSV file with one delivery per row
    #[arg(long, default_value = "data/Food_Delivery_Times.csv")]
    data: PathBuf,

    /// Column to predict
    #[arg(long, default_value = "Delivery_Time_min")]
    target: String,

    /// Fraction of the rows held out for evaluation
    #[arg(long, default_value = "0.2")]
    test_size: f64,

    /// Seed of the train/test shuffle
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Models to train, among linear, ridge and lasso
    #[arg(long, value_delimiter = ',', default_value = "linear,ridge,lasso")]
    models: Vec<ModelKind>,

    /// Write a plain-text summary of the results to this file
    #[arg(long)]
    results: Option<PathBuf>,

    /// Truncate numeric features to integers when creating dummy variables
    #[arg(long)]
    integer_dummies: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let level = record.level();
            let style = buf.default_level_style(level);
            writeln!(buf, "[{style}{level}{style:#}] {}", record.args())
        })
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();

    let config = PipelineConfig {
        data_path: cli.data,
        target: cli.target,
        test_size: cli.test_size,
        seed: cli.seed,
        models: cli.models,
        results_path: cli.results,
        cleaner: CleanerConfig {
            integer_dummies: cli.integer_dummies,
            ..CleanerConfig::default()
        },
    };

    info!("Food Delivery Time Prediction Pipeline");
    match run(&config) {
        Ok(Some(report)) => {
            println!("{}", comparison_table(&report));
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
