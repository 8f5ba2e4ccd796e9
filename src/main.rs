use clap::Parser;
use squarefit::{config, imaging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squarefit")]
#[command(about = "Resize an image into a fixed 1024x1024 frame")]
#[command(long_about = "\
Resize an image into a fixed 1024x1024 frame

The source is decoded, stretched (or squashed) to exactly 1024x1024 with no
aspect-ratio preservation, and written to the output path. The output format
follows the output file's extension.

With no flags, reads 'abstract-black-futuristic-background.jpg' and writes
'output.jpg' in the current directory.")]
#[command(version)]
struct Cli {
    /// Source image file
    #[arg(long, default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Destination file (overwritten if it exists; format from extension)
    #[arg(long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let job = config::JobConfig {
        input_path: cli.input,
        output_path: cli.output,
    };

    let backend = imaging::RustBackend::new();
    let outcome = imaging::resize_and_save(&backend, &job)?;
    output::print_success(&outcome);

    Ok(())
}
