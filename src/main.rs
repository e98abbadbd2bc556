use std::path::PathBuf;

use clap::Parser;
use mnist_reader::{MnistFiles, MnistReader};
use rand::Rng;

/// Write one MNIST test image to a PNG file named after its label.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the canonical MNIST files
    #[arg(long, default_value = "data/")]
    data_dir: PathBuf,
    /// Testing images file (overrides --data-dir)
    #[arg(long)]
    images: Option<PathBuf>,
    /// Testing labels file (overrides --data-dir)
    #[arg(long)]
    labels: Option<PathBuf>,
    /// Image index; picked at random when omitted
    #[arg(long)]
    index: Option<usize>,
    /// Directory the PNG is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Only the testing split is needed; the training files are never opened.
    let files = MnistFiles::default()
        .with_testing_images(
            cli.images
                .clone()
                .unwrap_or_else(|| cli.data_dir.join(MnistFiles::TESTING_IMAGES)),
        )
        .with_testing_labels(
            cli.labels
                .clone()
                .unwrap_or_else(|| cli.data_dir.join(MnistFiles::TESTING_LABELS)),
        );
    let mnist = MnistReader::new(&files)?;

    let images = mnist.testing_images.as_ref().ok_or("testing images not loaded")?;
    let labels = mnist.testing_labels.as_ref().ok_or("testing labels not loaded")?;
    let count = images.count().min(labels.count());
    if count == 0 {
        return Err("testing set is empty".into());
    }

    let index = match cli.index {
        Some(i) if i < count => i,
        Some(i) => return Err(format!("index {} out of range (0..{})", i, count).into()),
        None => rand::thread_rng().gen_range(0..count),
    };

    let img = images
        .to_gray_image(index)
        .ok_or("image has no pixels")?;
    let path = cli
        .out_dir
        .join(format!("mnist-image-{}.png", labels.get_label(index)));
    img.save(&path)?;

    println!("Wrote image {} to {}", index, path.display());
    Ok(())
}
