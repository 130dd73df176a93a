use clap::Parser;
use std::path::PathBuf;

use diffusim_viz::plot;
use diffusim_viz::Trajectories;

#[derive(Parser)]
#[command(name = "trajview")]
#[command(about = "Plot walker trajectories from a trajectories text file")]
struct Cli {
    /// Path to the trajectories file (one time step per line, an x y z
    /// triplet per walker)
    traj_file: PathBuf,

    /// Write an SVG plot to this path instead of drawing in the terminal
    #[arg(long)]
    out: Option<PathBuf>,

    /// Chart title
    #[arg(long, default_value = "Walker trajectories")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let traj = Trajectories::from_file(&cli.traj_file)?;

    match cli.out {
        Some(path) => {
            plot::svg::trajectories_svg(&traj, &path, &cli.title)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("Wrote {}", path.display());
        }
        None => {
            println!("{}", plot::terminal::trajectories_terminal(&traj, &cli.title));
        }
    }
    Ok(())
}
