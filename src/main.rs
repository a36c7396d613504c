//! Command-line entry point: ADIF log on stdin, narrated MP3 out.

use std::io;

use tokio::task;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qsovoice::{
    adif::scan::scan_records,
    runtime::narrator::{Narrator, NarratorConfig},
    speech::google::GoogleSynthesizer,
};

const OUTPUT_FILE: &str = "output.mp3";

const SUCCESS: i32 = 0;
const FAILURE: i32 = -1;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    std::process::exit(run().await);
}

async fn run() -> i32 {
    let scanned = task::spawn_blocking(|| {
        let stdin = io::stdin();
        scan_records(stdin.lock())
    })
    .await;

    let records = match scanned {
        Ok(Ok(records)) => records,
        Ok(Err(err)) => {
            eprintln!("Failed to read input: {err:?}");
            return FAILURE;
        }
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return FAILURE;
        }
    };
    info!(target = "qsovoice", records = records.len(), "selected records");

    let synth = match GoogleSynthesizer::from_env() {
        Ok(synth) => synth,
        Err(err) => {
            eprintln!("Failed to synthesize speech: {err:?}");
            return FAILURE;
        }
    };

    let narrator = Narrator::new(Box::new(synth), NarratorConfig::default());
    let audio = match narrator.narrate(&records).await {
        Ok(audio) => audio,
        Err(err) => {
            eprintln!("Failed to synthesize speech: {err:?}");
            return FAILURE;
        }
    };

    if let Err(err) = tokio::fs::write(OUTPUT_FILE, &audio).await {
        eprintln!("Failed to write output: {err}");
        return FAILURE;
    }

    println!("Audio content written to file: {OUTPUT_FILE}");
    SUCCESS
}
