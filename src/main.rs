use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use strata_cube::build_mesh;
use strata_io::read_cubes;
use strata_mesh::ply::write_ply;

/// Extracts a triangulated surface mesh from a binary occupancy cube
/// stream and writes it as ASCII PLY.
#[derive(Parser)]
#[command(name = "strata", version, about)]
struct Args {
    /// Binary cube stream produced by the voxelizer.
    input: PathBuf,
    /// PLY file to write.
    #[arg(short, long, default_value = "out.ply")]
    output: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    let mut input = BufReader::new(File::open(&args.input)?);
    let cubes = read_cubes(&mut input)?;
    info!("read {} cubes from {}", cubes.len(), args.input.display());

    let mesh = build_mesh(cubes)?;
    info!(
        "extracted {} vertices, {} faces in {:.1?}",
        mesh.vertices.len(),
        mesh.faces.len(),
        started.elapsed()
    );

    let mut output = BufWriter::new(File::create(&args.output)?);
    write_ply(&mut output, &mesh)?;
    info!("wrote {}", args.output.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
